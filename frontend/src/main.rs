use yew::prelude::*;
use yew_router::prelude::*;
use shared::Category;

mod config;
mod styles;
mod notice;
mod remote;
mod storage;
mod store_context;
mod landing;
mod voting;
mod results;
mod management;

use crate::{
    landing::Landing,
    voting::VotingPage,
    results::ResultsPage,
    management::ManagementPage,
    store_context::StoreProvider,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Landing,
    #[at("/women")] VoteWomen,
    #[at("/men")] VoteMen,
    #[at("/management")] Management,
    #[at("/results/women")] ResultsWomen,
    #[at("/results/men")] ResultsMen,
    #[not_found]
    #[at("/404")] NotFound,
}

impl Route {
    pub fn vote(category: Category) -> Self {
        match category {
            Category::Women => Route::VoteWomen,
            Category::Men => Route::VoteMen,
        }
    }

    pub fn results(category: Category) -> Self {
        match category {
            Category::Women => Route::ResultsWomen,
            Category::Men => Route::ResultsMen,
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <StoreProvider>
                <div class="min-h-screen bg-gray-900 text-gray-100">
                    <Switch<Route> render={switch} />
                </div>
            </StoreProvider>
        </BrowserRouter>
    }
}

// Keyed by category so switching categories remounts the page.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => html! { <Landing /> },
        Route::VoteWomen => html! { <VotingPage key="women" category={Category::Women} /> },
        Route::VoteMen => html! { <VotingPage key="men" category={Category::Men} /> },
        Route::Management => html! { <ManagementPage /> },
        Route::ResultsWomen => html! { <ResultsPage key="women" category={Category::Women} /> },
        Route::ResultsMen => html! { <ResultsPage key="men" category={Category::Men} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Landing} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
