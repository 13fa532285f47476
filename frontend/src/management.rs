use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use shared::Category;
use crate::{
    Route,
    config::CONFIG,
    notice::{Notice, NoticeBanner},
    store_context::{log_error, StoreHandle},
    styles::*,
};

pub enum Msg {
    Unlock,
    Reset(Category),
    ResetComplete(Category, Result<(), shared::Error>),
    StoreChanged(StoreHandle),
}

pub struct ManagementPage {
    store: StoreHandle,
    _store_listener: ContextHandle<StoreHandle>,
    passcode_ref: NodeRef,
    unlocked: bool,
    resetting: bool,
    notice: Option<Notice>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

impl Component for ManagementPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (store, listener) = ctx.link()
            .context::<StoreHandle>(ctx.link().callback(Msg::StoreChanged))
            .expect("StoreProvider missing");

        Self {
            store,
            _store_listener: listener,
            passcode_ref: NodeRef::default(),
            unlocked: false,
            resetting: false,
            notice: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Unlock => {
                let Some(input) = self.passcode_ref.cast::<HtmlInputElement>() else {
                    return false;
                };
                if input.value() == CONFIG.management_passcode {
                    self.unlocked = true;
                    self.notice = None;
                } else {
                    input.set_value("");
                    self.notice = Some(Notice::Error("Incorrect passcode. Please try again.".into()));
                }
                true
            }
            Msg::Reset(category) => {
                if self.resetting {
                    return false;
                }
                let prompt = format!(
                    "Are you sure you want to reset all {} votes? This action cannot be undone.",
                    category.label()
                );
                if !confirm(&prompt) {
                    return false;
                }

                self.resetting = true;
                let store = self.store.store.clone();
                ctx.link().send_future(async move {
                    Msg::ResetComplete(category, store.reset_votes(category).await)
                });
                true
            }
            Msg::ResetComplete(category, result) => {
                self.resetting = false;
                self.notice = Some(match result {
                    Ok(()) => {
                        self.store.persist();
                        self.store.refresh();
                        Notice::Success(format!("All {} votes have been reset successfully.", category.label()))
                    }
                    Err(e) => {
                        log_error("Error resetting votes", &e);
                        Notice::failure("resetting votes", &e)
                    }
                });
                true
            }
            Msg::StoreChanged(store) => {
                self.store = store;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER_SM}>
                <Link<Route> to={Route::Landing} classes={BUTTON_BACK}>{"← Back"}</Link<Route>>
                <div class={CARD}>
                    <NoticeBanner notice={self.notice.clone()} />
                    if self.unlocked {
                        {self.render_actions(ctx)}
                    } else {
                        {self.render_gate(ctx)}
                    }
                </div>
            </div>
        }
    }
}

impl ManagementPage {
    fn render_gate(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Unlock
        });

        html! {
            <form {onsubmit} class={SPACE_Y_BASE}>
                <h1 class={HEADING_LG}>{"Management Access"}</h1>
                <input
                    ref={self.passcode_ref.clone()}
                    type="password"
                    placeholder="Enter passcode"
                    maxlength="4"
                    autofocus={true}
                    class={INPUT_BASE}
                />
                <button type="submit" class={button(BUTTON_SUCCESS, true)}>
                    {"Access Management"}
                </button>
            </form>
        }
    }

    fn render_actions(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={SPACE_Y_BASE}>
                <h1 class={HEADING_LG}>{"Vote Management"}</h1>
                {for Category::ALL.iter().map(|category| {
                    let category = *category;
                    html! {
                        <button
                            type="button"
                            disabled={self.resetting}
                            onclick={ctx.link().callback(move |_| Msg::Reset(category))}
                            class={button(BUTTON_DANGER, true)}
                        >
                            {if self.resetting {
                                "Resetting...".to_string()
                            } else {
                                format!("Reset {} Votes", category.label())
                            }}
                        </button>
                    }
                })}
                <div class="flex justify-center gap-4 mt-8">
                    {for Category::ALL.iter().map(|category| html! {
                        <Link<Route> to={Route::results(*category)}
                            classes={classes!(button(category_accent(*category), false))}>
                            {format!("View {} Results", category.label())}
                        </Link<Route>>
                    })}
                </div>
            </div>
        }
    }
}
