use yew::prelude::*;
use yew_router::prelude::*;
use shared::Category;
use crate::{Route, styles::*};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="min-h-screen flex flex-col md:flex-row">
            {for Category::ALL.iter().map(|category| {
                let accent = match category {
                    Category::Women => "from-pink-700 to-pink-900",
                    Category::Men => "from-blue-700 to-blue-900",
                };
                html! {
                    <Link<Route> to={Route::vote(*category)}
                        classes={classes!(
                            "flex-1", "flex", "items-center", "justify-center", "min-h-[50vh]",
                            "bg-gradient-to-br", accent,
                            "text-5xl", "md:text-7xl", "font-extrabold", "text-white",
                            "transition-all", "duration-300", "hover:brightness-125"
                        )}>
                        <span class="drop-shadow-lg">{category.label()}</span>
                    </Link<Route>>
                }
            })}
            <div class="fixed bottom-4 right-4">
                <Link<Route> to={Route::Management} classes={TEXT_MUTED}>
                    {"Management"}
                </Link<Route>>
            </div>
        </div>
    }
}
