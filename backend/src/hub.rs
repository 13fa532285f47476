use tokio::sync::broadcast::{self, error::RecvError};
use shared::Category;
use tracing::{debug, warn};

pub const CHANGE_CAPACITY: usize = 1024;

/// Fans out "category changed" notifications to every open feed.
#[derive(Debug, Clone)]
pub struct VoteHub {
    sender: broadcast::Sender<Category>,
}

impl Default for VoteHub {
    fn default() -> Self {
        Self::new(CHANGE_CAPACITY)
    }
}

impl VoteHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns how many feeds were notified.
    pub fn publish(&self, category: Category) -> usize {
        match self.sender.send(category) {
            Ok(receivers) => {
                debug!("Notified {} feed(s) of {} change", receivers, category);
                receivers
            }
            Err(_) => 0,
        }
    }

    pub fn feed(&self, category: Category) -> CategoryFeed {
        CategoryFeed {
            category,
            receiver: self.sender.subscribe(),
        }
    }

    pub fn listeners(&self) -> usize {
        self.sender.receiver_count()
    }
}

pub struct CategoryFeed {
    category: Category,
    receiver: broadcast::Receiver<Category>,
}

impl CategoryFeed {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Waits for the next change to this feed's category. A lagging feed
    /// reports a change so the caller resends a full snapshot. Returns
    /// false once the hub is gone.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.receiver.recv().await {
                Ok(category) if category == self.category => return true,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("{} feed lagged by {} notification(s), resyncing", self.category, skipped);
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }
}
