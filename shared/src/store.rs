//! Client-side vote store.
//!
//! `VoteState` is the plain state container and `VoteStore` drives it
//! against a remote datastore and a local persistence seam. The remote is
//! the source of truth: optimistic updates made after a write are replaced
//! by whatever the next snapshot says.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use std::task::Poll;

use futures::future::{AbortHandle, Abortable};
use futures::stream::{self, LocalBoxStream, StreamExt};
use serde::{Serialize, Deserialize};

use crate::catalog;
use crate::error::{Error, ErrorCode, Result};
use crate::identity::generate_user_id;
use crate::models::{Category, Goal, Vote, VoteCount, VoteSnapshot};
use crate::tally::tally;

pub type SnapshotStream = LocalBoxStream<'static, Result<VoteSnapshot>>;

/// The shared datastore holding `votes/{category}/{user_id}`.
#[allow(async_fn_in_trait)]
pub trait VoteRemote {
    async fn remove_vote(&self, category: Category, user_id: &str) -> Result<()>;
    async fn set_vote(&self, vote: &Vote) -> Result<()>;
    async fn remove_category(&self, category: Category) -> Result<()>;
    async fn fetch_snapshot(&self, category: Category) -> Result<VoteSnapshot>;

    /// Live feed of full snapshots for a category. The current snapshot is
    /// delivered first, then one per change.
    fn watch(&self, category: Category) -> Result<SnapshotStream>;
}

pub trait StateStorage {
    fn load(&self) -> Result<Option<PersistedState>>;
    fn save(&self, state: &PersistedState) -> Result<()>;
}

impl<T: VoteRemote> VoteRemote for Rc<T> {
    async fn remove_vote(&self, category: Category, user_id: &str) -> Result<()> {
        (**self).remove_vote(category, user_id).await
    }

    async fn set_vote(&self, vote: &Vote) -> Result<()> {
        (**self).set_vote(vote).await
    }

    async fn remove_category(&self, category: Category) -> Result<()> {
        (**self).remove_category(category).await
    }

    async fn fetch_snapshot(&self, category: Category) -> Result<VoteSnapshot> {
        (**self).fetch_snapshot(category).await
    }

    fn watch(&self, category: Category) -> Result<SnapshotStream> {
        (**self).watch(category)
    }
}

impl<T: StateStorage> StateStorage for Rc<T> {
    fn load(&self) -> Result<Option<PersistedState>> {
        (**self).load()
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        (**self).save(state)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedVote {
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub current_vote: Option<String>,
}

/// The subset of `VoteState` that survives reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub women: PersistedVote,
    #[serde(default)]
    pub men: PersistedVote,
}

impl PersistedState {
    pub fn vote(&self, category: Category) -> &PersistedVote {
        match category {
            Category::Women => &self.women,
            Category::Men => &self.men,
        }
    }

    fn vote_mut(&mut self, category: Category) -> &mut PersistedVote {
        match category {
            Category::Women => &mut self.women,
            Category::Men => &mut self.men,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::storage("Failed to encode store", e))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::storage("Failed to decode store", e))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryState {
    pub goals: Vec<Goal>,
    pub has_voted: bool,
    pub current_vote: Option<String>,
    pub vote_counts: Vec<VoteCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteState {
    user_id: Option<String>,
    women: CategoryState,
    men: CategoryState,
}

impl VoteState {
    pub fn restore(persisted: PersistedState) -> Self {
        let mut state = Self { user_id: persisted.user_id.clone(), ..Self::default() };
        for category in Category::ALL {
            let saved = persisted.vote(category);
            let entry = state.category_mut(category);
            entry.has_voted = saved.has_voted;
            entry.current_vote = saved.current_vote.clone();
        }
        state
    }

    pub fn persisted(&self) -> PersistedState {
        let mut persisted = PersistedState { user_id: self.user_id.clone(), ..PersistedState::default() };
        for category in Category::ALL {
            let entry = self.category(category);
            *persisted.vote_mut(category) = PersistedVote {
                has_voted: entry.has_voted,
                current_vote: entry.current_vote.clone(),
            };
        }
        persisted
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn category(&self, category: Category) -> &CategoryState {
        match category {
            Category::Women => &self.women,
            Category::Men => &self.men,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut CategoryState {
        match category {
            Category::Women => &mut self.women,
            Category::Men => &mut self.men,
        }
    }

    pub fn goals(&self, category: Category) -> &[Goal] {
        &self.category(category).goals
    }

    pub fn has_voted(&self, category: Category) -> bool {
        self.category(category).has_voted
    }

    pub fn current_vote(&self, category: Category) -> Option<&str> {
        self.category(category).current_vote.as_deref()
    }

    pub fn vote_counts(&self, category: Category) -> &[VoteCount] {
        &self.category(category).vote_counts
    }

    /// Sets the identity unless one exists. Returns whether a new one was made.
    pub fn initialize_user_with(&mut self, generate: impl FnOnce() -> String) -> bool {
        if self.user_id.as_deref().is_some_and(|id| !id.is_empty()) {
            return false;
        }
        self.user_id = Some(generate());
        true
    }

    pub fn set_goals(&mut self, category: Category, goals: Vec<Goal>) {
        self.category_mut(category).goals = goals;
    }

    pub fn record_vote(&mut self, category: Category, goal_id: &str) {
        let entry = self.category_mut(category);
        entry.has_voted = true;
        entry.current_vote = Some(goal_id.to_string());
    }

    pub fn clear_category(&mut self, category: Category) {
        let entry = self.category_mut(category);
        entry.has_voted = false;
        entry.current_vote = None;
        entry.vote_counts.clear();
    }

    /// Folds an authoritative snapshot into the tally and the user's own vote.
    pub fn apply_snapshot(&mut self, snapshot: &VoteSnapshot) {
        let own_vote = self.user_id.as_deref()
            .and_then(|id| snapshot.vote_of(id))
            .map(|vote| vote.goal_id.clone());

        let entry = self.category_mut(snapshot.category);
        entry.vote_counts = tally(snapshot);
        entry.has_voted = own_vote.is_some();
        entry.current_vote = own_vote;
    }
}

pub struct VoteStore<R, S> {
    remote: R,
    storage: S,
    state: RefCell<VoteState>,
    listeners: RefCell<HashMap<Category, Vec<AbortHandle>>>,
}

impl<R: VoteRemote, S: StateStorage> VoteStore<R, S> {
    pub fn new(remote: R, storage: S) -> Self {
        Self::with_state(remote, storage, VoteState::default())
    }

    /// Restores the persisted subset from `storage`.
    pub fn open(remote: R, storage: S) -> Result<Self> {
        let state = storage.load()?.map(VoteState::restore).unwrap_or_default();
        Ok(Self::with_state(remote, storage, state))
    }

    fn with_state(remote: R, storage: S, state: VoteState) -> Self {
        Self {
            remote,
            storage,
            state: RefCell::new(state),
            listeners: RefCell::new(HashMap::new()),
        }
    }

    pub fn state(&self) -> VoteState {
        self.state.borrow().clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.borrow().user_id().map(str::to_owned)
    }

    /// Generates and persists an identity on first use. Never replaces one.
    pub fn initialize_user(&self) -> Result<String> {
        let created = self.state.borrow_mut().initialize_user_with(generate_user_id);
        if created {
            self.persist()?;
        }
        self.user_id()
            .ok_or_else(|| Error::new(ErrorCode::UserNotInitialized, "User not initialized"))
    }

    pub fn set_goals(&self, category: Category, goals: Vec<Goal>) {
        self.state.borrow_mut().set_goals(category, goals);
    }

    /// Seeds the catalog goals unless the category already has some.
    pub fn seed_goals(&self, category: Category) -> bool {
        if !self.state.borrow().goals(category).is_empty() {
            return false;
        }
        self.set_goals(category, catalog::goals(category));
        true
    }

    /// Replaces the user's vote in `category`. Delete-then-set is not atomic:
    /// two interleaved submits for the same identity can leave a transient
    /// gap or duplicate until the next snapshot arrives.
    pub async fn submit_vote(&self, category: Category, goal_id: &str) -> Result<()> {
        let (user_id, replaces_existing) = {
            let state = self.state.borrow();
            let user_id = state.user_id()
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .ok_or_else(|| Error::new(ErrorCode::UserNotInitialized, "User not initialized"))?;
            (user_id, state.has_voted(category) && state.current_vote(category).is_some())
        };

        if replaces_existing {
            self.remote.remove_vote(category, &user_id).await?;
        }

        let vote = Vote::new(category, user_id, goal_id);
        self.remote.set_vote(&vote).await?;

        self.state.borrow_mut().record_vote(category, goal_id);
        Ok(())
    }

    pub async fn reset_votes(&self, category: Category) -> Result<()> {
        self.remote.remove_category(category).await?;
        self.state.borrow_mut().clear_category(category);
        Ok(())
    }

    /// One-off read of the category, folded in like a feed snapshot.
    pub async fn load_vote_counts(&self, category: Category) -> Result<()> {
        let snapshot = self.remote.fetch_snapshot(category).await?;
        self.apply_snapshot(&snapshot);
        Ok(())
    }

    /// Opens an independent listener on the category. Repeated calls are not
    /// deduplicated; `unsubscribe_from_vote_counts` ends all of them.
    pub fn subscribe_to_vote_counts(&self, category: Category) -> Result<SnapshotStream> {
        let feed = self.remote.watch(category)?;
        let (handle, registration) = AbortHandle::new_pair();

        // A feed that ends by itself marks its handle so it can be pruned.
        let finished = handle.clone();
        let feed = Abortable::new(feed, registration).chain(stream::poll_fn(move |_| {
            finished.abort();
            Poll::Ready(None)
        }));

        let mut listeners = self.listeners.borrow_mut();
        let handles = listeners.entry(category).or_default();
        handles.retain(|h| !h.is_aborted());
        handles.push(handle);
        Ok(feed.boxed_local())
    }

    /// Returns how many live listeners were torn down.
    pub fn unsubscribe_from_vote_counts(&self, category: Category) -> usize {
        let handles = self.listeners.borrow_mut().remove(&category).unwrap_or_default();
        let live = handles.iter().filter(|h| !h.is_aborted()).count();
        for handle in &handles {
            handle.abort();
        }
        live
    }

    /// Registered handles, including finished ones not yet pruned.
    #[cfg(test)]
    pub(crate) fn registered_listeners(&self, category: Category) -> usize {
        self.listeners.borrow().get(&category).map_or(0, Vec::len)
    }

    pub fn listener_count(&self, category: Category) -> usize {
        self.listeners.borrow()
            .get(&category)
            .map_or(0, |handles| handles.iter().filter(|h| !h.is_aborted()).count())
    }

    pub fn apply_snapshot(&self, snapshot: &VoteSnapshot) {
        self.state.borrow_mut().apply_snapshot(snapshot);
    }

    /// Folds every snapshot of `feed` into the store until the feed ends,
    /// handing the new state to `on_update` after each one.
    pub async fn follow_vote_counts(
        &self,
        mut feed: SnapshotStream,
        mut on_update: impl FnMut(VoteState),
    ) -> Result<()> {
        while let Some(snapshot) = feed.next().await {
            self.apply_snapshot(&snapshot?);
            on_update(self.state());
        }
        Ok(())
    }

    pub fn persist(&self) -> Result<()> {
        let persisted = self.state.borrow().persisted();
        self.storage.save(&persisted)
    }
}
