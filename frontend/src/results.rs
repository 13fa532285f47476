use yew::prelude::*;
use yew_router::prelude::*;
use time::OffsetDateTime;
use shared::{catalog, standings, Category, Standing};
use crate::{
    Route,
    store_context::{follow_vote_counts, use_store},
    styles::*,
};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub category: Category,
}

fn clock(at: OffsetDateTime) -> String {
    format!("{:02}:{:02}:{:02} UTC", at.hour(), at.minute(), at.second())
}

#[function_component(ResultsPage)]
pub fn results_page(props: &Props) -> Html {
    let category = props.category;
    let handle = use_store();
    let updated_at = use_state(|| None::<OffsetDateTime>);

    use_effect_with_deps({
        let handle = handle.clone();
        move |category: &Category| {
            let category = *category;
            follow_vote_counts(&handle, category);
            move || {
                handle.store.unsubscribe_from_vote_counts(category);
            }
        }
    }, category);

    let counts = handle.state.vote_counts(category).to_vec();
    use_effect_with_deps({
        let updated_at = updated_at.clone();
        move |_| {
            updated_at.set(Some(OffsetDateTime::now_utc()));
            || ()
        }
    }, counts.clone());

    let results = standings(&catalog::goals(category), &counts);
    let max_votes = results.max_votes();

    html! {
        <div class={CONTAINER}>
            <Link<Route> to={Route::Management} classes={BUTTON_BACK}>{"← Back"}</Link<Route>>
            <h1 class={HEADING_LG}>{format!("{} Results", category.label())}</h1>

            <div class="text-center mb-8">
                <h2 class="text-2xl font-bold text-gray-100">{format!("Total Votes: {}", results.total_votes)}</h2>
                <p class={TEXT_MUTED}>
                    {match *updated_at {
                        Some(at) => format!("Updates in real-time · last update {}", clock(at)),
                        None => "Updates in real-time".to_string(),
                    }}
                </p>
            </div>

            if results.total_votes == 0 {
                <div class="text-center py-16 text-gray-400 text-lg">
                    {"No votes yet. Start voting to see results!"}
                </div>
            } else {
                <>
                if let Some(leader) = results.leader() {
                    <div class={combine_classes(CARD, "mb-8 text-center")}>
                        <p class={TEXT_MUTED}>{"Leading"}</p>
                        <p class="text-2xl font-bold text-yellow-400">{leader.title.clone()}</p>
                        <p class="text-gray-300">{format!("{} · {} vote(s)", leader.subtitle, leader.votes)}</p>
                    </div>
                }
                <div class={SPACE_Y_BASE}>
                    {for results.rows.iter().enumerate().map(|(index, row)| render_bar(index, row, max_votes))}
                </div>

                <h3 class={combine_classes(HEADING_SM, "mt-10")}>{"Vote Breakdown:"}</h3>
                <div class="grid gap-2 text-sm">
                    {for results.rows.iter().enumerate().map(|(index, row)| html! {
                        <div key={row.goal_id.clone()} class="flex justify-between items-center p-2 bg-gray-800 rounded">
                            <span class={TEXT_COLORS[index % TEXT_COLORS.len()]}>
                                {format!("{}. {}", row.rank, row.title)}
                            </span>
                            <span class="text-gray-300">
                                {format!("{} vote{} ({}%)", row.votes, if row.votes == 1 { "" } else { "s" }, row.percent)}
                            </span>
                        </div>
                    })}
                </div>
                </>
            }
        </div>
    }
}

fn render_bar(index: usize, row: &Standing, max_votes: u32) -> Html {
    let width = if max_votes == 0 { 0 } else { row.votes * 100 / max_votes };

    html! {
        <div key={row.goal_id.clone()}>
            <div class="flex justify-between text-sm text-gray-300 mb-1">
                <span>{row.title.clone()}</span>
                <span>{row.votes}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-6 overflow-hidden">
                <div
                    class={combine_classes(BAR_COLORS[index % BAR_COLORS.len()], "h-6 rounded-full transition-all duration-500")}
                    style={format!("width: {}%", width)}
                />
            </div>
        </div>
    }
}
