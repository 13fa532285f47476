pub const CONTAINER: &str = "bg-gray-900 container mx-auto px-6 py-10 max-w-5xl rounded-xl shadow-lg mt-8";
pub const CONTAINER_SM: &str = "container mx-auto px-6 py-10 max-w-2xl rounded-xl shadow-lg mt-8";

pub const CARD: &str = "bg-gray-800 border border-gray-700 rounded-lg shadow-md p-6 max-w-xl mx-auto";
pub const CARD_SELECTABLE: &str = "bg-gray-800 border-2 rounded-lg shadow-md overflow-hidden cursor-pointer transform transition-all duration-200 hover:scale-105";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_BASE: &str = "appearance-none border border-gray-600 bg-gray-800 text-white text-lg rounded-md w-full py-2 px-4 focus:outline-none focus:border-blue-500";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-lg font-medium text-white transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SUCCESS: &str = "bg-green-600 hover:bg-green-700 focus:ring-2 focus:ring-green-400 focus:outline-none";
pub const BUTTON_DANGER: &str = "bg-red-600 hover:bg-red-700 focus:ring-2 focus:ring-red-400 focus:outline-none";
pub const BUTTON_FULL: &str = "w-full py-3 px-5 font-semibold rounded-lg transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed mt-8";
pub const BUTTON_BACK: &str = "inline-block mb-6 text-gray-300 hover:text-white transition-colors";

pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const HEADING_LG: &str = "text-3xl font-extrabold mb-6 text-center text-gray-100";
pub const HEADING_SM: &str = "text-xl font-semibold mb-3 text-gray-100";

pub const GRID_GOALS: &str = "grid gap-6 sm:grid-cols-2 lg:grid-cols-3";
pub const SPACE_Y_BASE: &str = "space-y-3";

pub const BAR_COLORS: [&str; 5] = ["bg-pink-500", "bg-blue-500", "bg-green-500", "bg-yellow-500", "bg-red-500"];
pub const TEXT_COLORS: [&str; 5] = ["text-pink-400", "text-blue-400", "text-green-400", "text-yellow-400", "text-red-400"];

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button(variant: &str, full_width: bool) -> String {
    let styled = combine_classes(BUTTON_BASE, variant);
    if full_width {
        combine_classes(&styled, BUTTON_FULL)
    } else {
        styled
    }
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        "warning" => combine_classes(ALERT_CARD, "bg-yellow-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}

pub fn category_accent(category: shared::Category) -> &'static str {
    match category {
        shared::Category::Women => "bg-pink-600 hover:bg-pink-700",
        shared::Category::Men => "bg-blue-600 hover:bg-blue-700",
    }
}
