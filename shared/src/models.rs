use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

use crate::error::{Error, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(sqlx::Type))]
#[cfg_attr(feature = "backend", sqlx(type_name = "vote_category", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Women,
    Men,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Women, Category::Men];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Women => "women",
            Category::Men => "men",
        }
    }

    /// Possessive label used in headings, e.g. "Women's".
    pub const fn label(self) -> &'static str {
        match self {
            Category::Women => "Women's",
            Category::Men => "Men's",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "women" => Ok(Category::Women),
            "men" => Ok(Category::Men),
            other => Err(Error::new(ErrorCode::NotFound, format!("Unknown category: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub media_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub user_id: String,
    pub goal_id: String,
    pub category: Category,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

impl Vote {
    pub fn new(category: Category, user_id: impl Into<String>, goal_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            goal_id: goal_id.into(),
            category,
            timestamp: now_millis(),
        }
    }
}

/// Every current vote of one category, keyed by user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteSnapshot {
    pub category: Category,
    #[serde(default)]
    pub votes: BTreeMap<String, Vote>,
}

impl VoteSnapshot {
    pub fn empty(category: Category) -> Self {
        Self { category, votes: BTreeMap::new() }
    }

    pub fn from_votes(category: Category, votes: impl IntoIterator<Item = Vote>) -> Self {
        Self {
            category,
            votes: votes.into_iter().map(|v| (v.user_id.clone(), v)).collect(),
        }
    }

    pub fn vote_of(&self, user_id: &str) -> Option<&Vote> {
        self.votes.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteCount {
    pub goal_id: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub removed: u64,
}

pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
