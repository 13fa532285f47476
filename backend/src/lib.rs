pub mod routes;
pub mod repository;
pub mod hub;
pub mod cors;
pub mod error;
pub mod utils;
pub mod catchers;
pub use shared::{models::*, error::*};

use rocket::{Build, Rocket, catchers, routes};

use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, delete_vote, get_votes, list_goals, put_vote, reset_votes, vote_events, AppState},
};

/// The `/api` surface, without the SPA fallback.
pub fn api(state: AppState, cors: CORS) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(state)
        .mount(
            "/api",
            routes![
                list_goals,
                get_votes,
                put_vote,
                delete_vote,
                reset_votes,
                vote_events,
                all_options
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable,
                internal_error
            ],
        )
}

#[cfg(test)]
mod tests;
