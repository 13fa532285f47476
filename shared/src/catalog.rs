use crate::models::{Category, Goal};

struct GoalEntry {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    media_url: &'static str,
}

const WOMEN: [GoalEntry; 5] = [
    GoalEntry { id: "w1", title: "Karina Sapio", subtitle: "vs BOSA", media_url: "/gifs/women/2025_kor_v_bosa.webm" },
    GoalEntry { id: "w2", title: "Hannah Roffe", subtitle: "vs Adelaide City", media_url: "/gifs/women/2025_hannah_v_adelaide_city.webm" },
    GoalEntry { id: "w3", title: "Hannah Roffe", subtitle: "vs Flinders", media_url: "/gifs/women/2025_hannah_v_flinders.webm" },
    GoalEntry { id: "w4", title: "Karina Sapio", subtitle: "vs Comets (Away)", media_url: "/gifs/women/2025_karina_v_comets_away.webm" },
    GoalEntry { id: "w5", title: "Karina Sapio", subtitle: "vs Comets (Home)", media_url: "/gifs/women/2025_karina_v_comets.webm" },
];

const MEN: [GoalEntry; 5] = [
    GoalEntry { id: "m1", title: "Jake Dahms", subtitle: "vs Mount Barker", media_url: "/gifs/men/2025_jake_v_barker.webm" },
    GoalEntry { id: "m2", title: "Jonno Eske", subtitle: "vs Mclaren", media_url: "/gifs/men/2025_jonno_v_mclaren.webm" },
    GoalEntry { id: "m3", title: "Karl Carrington", subtitle: "vs Mclaren", media_url: "/gifs/men/2025_karl_v_mclaren.webm" },
    GoalEntry { id: "m4", title: "Ethan Tinnion", subtitle: "vs St Pauls", media_url: "/gifs/men/2025_ethan_v_st_pauls.webm" },
    GoalEntry { id: "m5", title: "Ash Dann", subtitle: "vs Flinders", media_url: "/gifs/men/2025_ash_v_flinders.webm" },
];

fn entries(category: Category) -> &'static [GoalEntry] {
    match category {
        Category::Women => &WOMEN,
        Category::Men => &MEN,
    }
}

impl GoalEntry {
    fn to_goal(&self) -> Goal {
        Goal {
            id: self.id.into(),
            title: self.title.into(),
            subtitle: self.subtitle.into(),
            media_url: self.media_url.into(),
        }
    }
}

/// The nominated goals of a category, in display order.
pub fn goals(category: Category) -> Vec<Goal> {
    entries(category).iter().map(GoalEntry::to_goal).collect()
}

pub fn contains(category: Category, goal_id: &str) -> bool {
    entries(category).iter().any(|e| e.id == goal_id)
}
