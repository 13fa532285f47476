use shared::{Category, Vote, VoteSnapshot};
use sqlx::PgPool;

#[derive(Debug, sqlx::FromRow)]
struct VoteRow {
    category: Category,
    user_id: String,
    goal_id: String,
    cast_at: i64,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Vote {
            user_id: row.user_id,
            goal_id: row.goal_id,
            category: row.category,
            timestamp: row.cast_at,
        }
    }
}

/// Postgres-backed `votes/{category}/{user_id}` collection.
#[derive(Debug, Clone)]
pub struct VoteRepository {
    pool: PgPool,
}

impl VoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn snapshot(&self, category: Category) -> Result<VoteSnapshot, sqlx::Error> {
        let rows = sqlx::query_as::<_, VoteRow>(
            "SELECT category, user_id, goal_id, cast_at FROM votes
             WHERE category = $1 ORDER BY user_id"
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(VoteSnapshot::from_votes(category, rows.into_iter().map(Vote::from)))
    }

    /// Writes the vote at `(category, user_id)`, replacing whatever is there.
    pub async fn set_vote(&self, vote: &Vote) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO votes (category, user_id, goal_id, cast_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (category, user_id)
             DO UPDATE SET goal_id = EXCLUDED.goal_id, cast_at = EXCLUDED.cast_at"
        )
        .bind(vote.category)
        .bind(&vote.user_id)
        .bind(&vote.goal_id)
        .bind(vote.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn remove_vote(&self, category: Category, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE category = $1 AND user_id = $2")
            .bind(category)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn remove_category(&self, category: Category) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE category = $1")
            .bind(category)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
