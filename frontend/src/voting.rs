use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{Category, Goal};
use crate::{
    Route,
    notice::{flash, Notice, NoticeBanner},
    store_context::{follow_vote_counts, log_error, use_store},
    styles::*,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category: Category,
}

#[function_component(VotingPage)]
pub fn voting_page(props: &Props) -> Html {
    let category = props.category;
    let handle = use_store();
    let selected = use_state(|| handle.state.current_vote(category).map(str::to_owned));
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    use_effect_with_deps({
        let handle = handle.clone();
        move |category: &Category| {
            let category = *category;
            if handle.store.seed_goals(category) {
                handle.refresh();
            }
            follow_vote_counts(&handle, category);
            move || {
                handle.store.unsubscribe_from_vote_counts(category);
            }
        }
    }, category);

    // Keeps the highlighted card in step with the recorded vote.
    use_effect_with_deps({
        let selected = selected.clone();
        move |current: &Option<String>| {
            if let Some(next) = reconcile_selection(selected.as_deref(), current.as_deref()) {
                selected.set(next);
            }
            || ()
        }
    }, handle.state.current_vote(category).map(str::to_owned));

    let has_voted = handle.state.has_voted(category);

    let on_submit = {
        let handle = handle.clone();
        let selected = selected.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(goal_id) = (*selected).clone() else { return };
            if *submitting {
                return;
            }
            submitting.set(true);

            let handle = handle.clone();
            let submitting = submitting.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match handle.store.submit_vote(category, &goal_id).await {
                    Ok(()) => {
                        handle.persist();
                        let text = if has_voted { "Vote updated successfully!" } else { "Vote submitted successfully!" };
                        flash(&notice, Notice::Success(text.into()));
                    }
                    Err(e) => {
                        log_error("Error submitting vote", &e);
                        flash(&notice, Notice::failure("submitting vote", &e));
                    }
                }
                submitting.set(false);
                handle.refresh();
            });
        })
    };

    let goals = handle.state.goals(category);

    html! {
        <div class={CONTAINER}>
            <Link<Route> to={Route::Landing} classes={BUTTON_BACK}>{"← Back"}</Link<Route>>
            <h1 class={HEADING_LG}>{format!("{} Goal of the Year", category.label())}</h1>

            <NoticeBanner notice={(*notice).clone()} />

            <div class={GRID_GOALS}>
                {for goals.iter().map(|goal| render_goal(goal, selected.as_deref() == Some(goal.id.as_str()), &selected))}
            </div>

            if selected.is_some() {
                <button
                    type="button"
                    onclick={on_submit}
                    disabled={*submitting}
                    class={combine_classes(&button(category_accent(category), true), "text-lg")}
                >
                    {if *submitting { "Submitting..." } else if has_voted { "Update Vote" } else { "Submit Vote" }}
                </button>
            }
        </div>
    }
}

/// The selection to apply after the recorded vote changed to `current`, if
/// any. A recorded vote preselects an empty selection; a vote that
/// disappeared (a reset) clears it.
fn reconcile_selection(selected: Option<&str>, current: Option<&str>) -> Option<Option<String>> {
    match (selected, current) {
        (None, Some(current)) => Some(Some(current.to_owned())),
        (Some(_), None) => Some(None),
        _ => None,
    }
}

fn render_goal(goal: &Goal, is_selected: bool, selected: &UseStateHandle<Option<String>>) -> Html {
    let onclick = {
        let selected = selected.clone();
        let goal_id = goal.id.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(goal_id.clone())))
    };

    let border = if is_selected {
        "border-yellow-400 ring-4 ring-yellow-400/50"
    } else {
        "border-gray-700"
    };

    html! {
        <div key={goal.id.clone()} {onclick} class={combine_classes(CARD_SELECTABLE, border)}>
            <video
                src={goal.media_url.clone()}
                class="w-full aspect-video object-cover bg-black"
                autoplay={true}
                loop={true}
                muted={true}
                playsinline={true}
            />
            <div class="p-4">
                <div class="text-lg font-semibold text-gray-100">{goal.title.clone()}</div>
                <div class={TEXT_MUTED}>{goal.subtitle.clone()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::reconcile_selection;

    #[test]
    fn test_recorded_vote_preselects_card() {
        assert_eq!(reconcile_selection(None, Some("w3")), Some(Some("w3".to_string())));
        assert_eq!(reconcile_selection(Some("w1"), Some("w3")), None);
    }

    #[test]
    fn test_reset_clears_selection() {
        assert_eq!(reconcile_selection(Some("w3"), None), Some(None));
        assert_eq!(reconcile_selection(None, None), None);
    }
}
