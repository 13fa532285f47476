use futures::stream::{self, StreamExt};
use gloo_net::eventsource::futures::EventSource;
use gloo_net::http::{Request, Response};
use shared::{
    Category, Error, ErrorCode, ErrorResponse, Result, ResetResponse, SnapshotStream, Vote,
    VoteRemote, VoteSnapshot,
};

use crate::config::CONFIG;
use crate::store_context::{log_info, log_warning};

/// The backend's `/api/votes` collection over HTTP, with live snapshots
/// via Server-Sent Events.
pub struct HttpRemote {
    base_url: String,
}

impl Default for HttpRemote {
    fn default() -> Self {
        Self::new(CONFIG.api_base_url)
    }
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn category_url(&self, category: Category) -> String {
        format!("{}/votes/{}", self.base_url, category)
    }

    fn vote_url(&self, category: Category, user_id: &str) -> String {
        format!("{}/{}", self.category_url(category), user_id)
    }
}

async fn checked(response: Response, action: &str) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let reason = response.json::<ErrorResponse>().await
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("HTTP {}", status));

    Err(match status {
        400 => Error::with_details(ErrorCode::ValidationFailed, action, reason),
        404 => Error::with_details(ErrorCode::NotFound, action, reason),
        _ => Error::remote(action, reason),
    })
}

impl VoteRemote for HttpRemote {
    async fn remove_vote(&self, category: Category, user_id: &str) -> Result<()> {
        let response = Request::delete(&self.vote_url(category, user_id))
            .send()
            .await
            .map_err(|e| Error::remote("Failed to remove vote", e))?;
        checked(response, "Failed to remove vote").await?;
        Ok(())
    }

    async fn set_vote(&self, vote: &Vote) -> Result<()> {
        let response = Request::put(&self.vote_url(vote.category, &vote.user_id))
            .json(vote)
            .map_err(|e| Error::remote("Failed to encode vote", e))?
            .send()
            .await
            .map_err(|e| Error::remote("Failed to submit vote", e))?;
        checked(response, "Failed to submit vote").await?;
        Ok(())
    }

    async fn remove_category(&self, category: Category) -> Result<()> {
        let response = Request::delete(&self.category_url(category))
            .send()
            .await
            .map_err(|e| Error::remote("Failed to reset votes", e))?;
        let removed = checked(response, "Failed to reset votes").await?
            .json::<ResetResponse>()
            .await
            .map_err(|e| Error::remote("Failed to read reset response", e))?;
        log_info(&format!("Reset {} {} vote(s)", removed.removed, category));
        Ok(())
    }

    async fn fetch_snapshot(&self, category: Category) -> Result<VoteSnapshot> {
        let response = Request::get(&self.category_url(category))
            .send()
            .await
            .map_err(|e| Error::remote("Failed to load votes", e))?;
        checked(response, "Failed to load votes").await?
            .json::<VoteSnapshot>()
            .await
            .map_err(|e| Error::remote("Failed to decode votes", e))
    }

    fn watch(&self, category: Category) -> Result<SnapshotStream> {
        let url = format!("{}/events", self.category_url(category));
        let mut source = EventSource::new(&url)
            .map_err(|e| Error::remote("Failed to open vote feed", format!("{:?}", e)))?;
        let events = source.subscribe("snapshot")
            .map_err(|e| Error::remote("Failed to subscribe to vote feed", format!("{:?}", e)))?;

        // The source lives in the stream state; dropping the stream closes it.
        let feed = stream::unfold((source, events), |(source, mut events)| async move {
            loop {
                match events.next().await? {
                    Ok((_, message)) => {
                        let snapshot = message.data()
                            .as_string()
                            .ok_or_else(|| Error::remote("Vote feed sent a non-text event", "binary payload"))
                            .and_then(|raw| serde_json::from_str::<VoteSnapshot>(&raw)
                                .map_err(|e| Error::remote("Failed to decode vote snapshot", e)));
                        return Some((snapshot, (source, events)));
                    }
                    // EventSource reconnects by itself.
                    Err(e) => log_warning(&format!("Vote feed interrupted: {:?}", e)),
                }
            }
        });

        Ok(feed.boxed_local())
    }
}
