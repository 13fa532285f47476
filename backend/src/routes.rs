use rocket::{State, Shutdown, get, put, delete, http::Status, serde::json::Json};
use rocket::response::stream::{Event, EventStream};
use tokio::select;
use tracing::{error, info, instrument};
use shared::{catalog, validate_vote, Goal, ResetResponse, Vote, VoteSnapshot};
use crate::{
    error::ApiError,
    hub::VoteHub,
    repository::VoteRepository,
    utils::parse_category,
};

pub struct AppState {
    pub votes: VoteRepository,
    pub hub: VoteHub,
}

impl AppState {
    pub fn new(votes: VoteRepository) -> Self {
        Self {
            votes,
            hub: VoteHub::default(),
        }
    }
}

#[get("/goals/<category>")]
pub async fn list_goals(category: &str) -> Result<Json<Vec<Goal>>, ApiError> {
    let category = parse_category(category)?;
    Ok(Json(catalog::goals(category)))
}

#[get("/votes/<category>")]
pub async fn get_votes(state: &State<AppState>, category: &str) -> Result<Json<VoteSnapshot>, ApiError> {
    let category = parse_category(category)?;
    Ok(Json(state.votes.snapshot(category).await?))
}

#[instrument(skip(state, vote), fields(category = %category, user_id = %user_id))]
#[put("/votes/<category>/<user_id>", format = "json", data = "<vote>")]
pub async fn put_vote(
    state: &State<AppState>,
    category: &str,
    user_id: &str,
    vote: Json<Vote>,
) -> Result<Json<Vote>, ApiError> {
    let category = parse_category(category)?;
    let vote = vote.into_inner();
    validate_vote(&vote, category, user_id)?;

    state.votes.set_vote(&vote).await?;
    state.hub.publish(category);
    info!("Recorded vote for {}", vote.goal_id);

    Ok(Json(vote))
}

#[instrument(skip(state), fields(category = %category, user_id = %user_id))]
#[delete("/votes/<category>/<user_id>")]
pub async fn delete_vote(state: &State<AppState>, category: &str, user_id: &str) -> Result<Status, ApiError> {
    let category = parse_category(category)?;

    if state.votes.remove_vote(category, user_id).await? {
        state.hub.publish(category);
        info!("Removed vote");
    }
    Ok(Status::NoContent)
}

#[instrument(skip(state), fields(category = %category))]
#[delete("/votes/<category>")]
pub async fn reset_votes(state: &State<AppState>, category: &str) -> Result<Json<ResetResponse>, ApiError> {
    let category = parse_category(category)?;

    let removed = state.votes.remove_category(category).await?;
    state.hub.publish(category);
    info!("Reset {} vote(s)", removed);

    Ok(Json(ResetResponse { removed }))
}

/// Sends the category's snapshot on connect and again after every change.
/// A failed read ends the stream so the client reconnects and resyncs.
#[get("/votes/<category>/events")]
pub fn vote_events<'a>(
    state: &'a State<AppState>,
    category: &str,
    mut shutdown: Shutdown,
) -> Result<EventStream![Event + 'a], ApiError> {
    let category = parse_category(category)?;
    let mut feed = state.hub.feed(category);
    let votes = &state.votes;

    Ok(EventStream! {
        loop {
            match votes.snapshot(category).await {
                Ok(snapshot) => yield Event::json(&snapshot).event("snapshot"),
                Err(e) => {
                    error!("Failed to load {} snapshot for feed: {}", category, e);
                    break;
                }
            }

            select! {
                changed = feed.changed() => if !changed { break },
                _ = &mut shutdown => break,
            }
        }
    })
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}
