use crate::catalog;
use crate::models::{Category, Vote};

pub const MAX_USER_ID_LENGTH: usize = 64;
pub const MAX_GOAL_ID_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("User id must not be empty")]
    EmptyUserId,
    #[error("User id exceeds maximum length of {MAX_USER_ID_LENGTH}")]
    UserIdTooLong,
    #[error("Goal id exceeds maximum length of {MAX_GOAL_ID_LENGTH}")]
    GoalIdTooLong,
    #[error("Unknown goal {goal_id} for category {category}")]
    UnknownGoal { category: Category, goal_id: String },
    #[error("Vote category {found} does not match path category {expected}")]
    CategoryMismatch { expected: Category, found: Category },
    #[error("Vote user id does not match path user id")]
    UserMismatch,
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}

pub fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().is_empty() { return Err(ValidationError::EmptyUserId); }
    if user_id.len() > MAX_USER_ID_LENGTH { return Err(ValidationError::UserIdTooLong); }
    Ok(())
}

pub fn validate_goal(category: Category, goal_id: &str) -> Result<(), ValidationError> {
    if goal_id.len() > MAX_GOAL_ID_LENGTH { return Err(ValidationError::GoalIdTooLong); }
    if !catalog::contains(category, goal_id) {
        return Err(ValidationError::UnknownGoal { category, goal_id: goal_id.to_string() });
    }
    Ok(())
}

/// Checks a vote written to `votes/{category}/{user_id}`.
pub fn validate_vote(vote: &Vote, category: Category, user_id: &str) -> Result<(), ValidationError> {
    validate_user_id(user_id)?;
    if vote.category != category {
        return Err(ValidationError::CategoryMismatch { expected: category, found: vote.category });
    }
    if vote.user_id != user_id { return Err(ValidationError::UserMismatch); }
    if vote.timestamp < 0 { return Err(ValidationError::InvalidTimestamp(vote.timestamp)); }
    validate_goal(category, &vote.goal_id)
}
