use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid vote: {0}")]
    InvalidVote(#[from] ValidationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::UnknownCategory(_) => Status::NotFound,
            ApiError::InvalidVote(_) => Status::BadRequest,
            ApiError::Database(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        match &self {
            ApiError::Database(e) => error!("{} {} failed: {}", req.method(), req.uri(), e),
            other => debug!("{} {} rejected: {}", req.method(), req.uri(), other),
        }

        let body = match self {
            // Driver messages stay in the logs.
            ApiError::Database(_) => "Vote store unavailable, please try again.".to_string(),
            other => other.to_string(),
        };

        rocket::Response::build_from(Json(ErrorResponse { error: body }).respond_to(req)?)
            .status(status)
            .ok()
    }
}
