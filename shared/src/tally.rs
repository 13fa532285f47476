use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

use crate::models::{Goal, VoteCount, VoteSnapshot};

/// Counts the votes of a snapshot per goal, ordered by goal id.
pub fn tally(snapshot: &VoteSnapshot) -> Vec<VoteCount> {
    snapshot.votes.values()
        .fold(BTreeMap::<&str, u32>::new(), |mut counts, vote| {
            *counts.entry(vote.goal_id.as_str()).or_insert(0) += 1;
            counts
        })
        .into_iter()
        .map(|(goal_id, count)| VoteCount { goal_id: goal_id.to_string(), count })
        .collect()
}

pub fn count_for(counts: &[VoteCount], goal_id: &str) -> u32 {
    counts.iter().find(|c| c.goal_id == goal_id).map_or(0, |c| c.count)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: usize,
    pub goal_id: String,
    pub title: String,
    pub subtitle: String,
    pub votes: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub total_votes: u32,
    pub rows: Vec<Standing>,
}

impl Standings {
    pub fn leader(&self) -> Option<&Standing> {
        self.rows.first().filter(|s| s.votes > 0)
    }

    pub fn max_votes(&self) -> u32 {
        self.rows.iter().map(|s| s.votes).max().unwrap_or(0)
    }
}

/// One row per configured goal, most votes first. Ties keep catalog order;
/// counts for goals outside `goals` are ignored.
pub fn standings(goals: &[Goal], counts: &[VoteCount]) -> Standings {
    let mut rows: Vec<_> = goals.iter()
        .map(|goal| (goal, count_for(counts, &goal.id)))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let total_votes: u32 = rows.iter().map(|(_, votes)| votes).sum();

    Standings {
        total_votes,
        rows: rows.into_iter()
            .enumerate()
            .map(|(i, (goal, votes))| Standing {
                rank: i + 1,
                goal_id: goal.id.clone(),
                title: goal.title.clone(),
                subtitle: goal.subtitle.clone(),
                votes,
                percent: percent(votes, total_votes),
            })
            .collect(),
    }
}

fn percent(votes: u32, total: u32) -> u32 {
    if total == 0 {
        0
    } else {
        ((f64::from(votes) / f64::from(total)) * 100.0).round() as u32
    }
}
