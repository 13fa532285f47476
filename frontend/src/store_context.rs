use std::fmt::Display;
use std::rc::Rc;

use shared::{Category, VoteState, VoteStore};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::remote::HttpRemote;
use crate::storage::BrowserStorage;

pub type AppStore = VoteStore<HttpRemote, BrowserStorage>;

pub fn log_error(context: &str, err: &dyn Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{}: {}", context, err)));
}

pub fn log_info(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

pub fn log_warning(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// The store plus the state snapshot the current render was built from.
#[derive(Clone)]
pub struct StoreHandle {
    pub store: Rc<AppStore>,
    pub state: Rc<VoteState>,
    refresh: Callback<()>,
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.state == other.state
    }
}

impl StoreHandle {
    /// Re-renders consumers from the store's current state.
    pub fn refresh(&self) {
        self.refresh.emit(());
    }

    pub fn persist(&self) {
        if let Err(e) = self.store.persist() {
            log_error("Failed to persist vote store", &e);
        }
    }
}

fn open_store() -> AppStore {
    let store = AppStore::open(HttpRemote::default(), BrowserStorage::default())
        .unwrap_or_else(|e| {
            log_warning(&format!("Starting with an empty vote store: {}", e));
            AppStore::new(HttpRemote::default(), BrowserStorage::default())
        });

    if let Err(e) = store.initialize_user() {
        log_error("Failed to initialize user", &e);
    }
    store
}

/// Subscribes to `category` and folds its snapshots into the store until
/// `unsubscribe_from_vote_counts` ends the feed. If the feed cannot be
/// opened or breaks, the counts are read once instead.
pub fn follow_vote_counts(handle: &StoreHandle, category: Category) {
    let feed = handle.store.subscribe_to_vote_counts(category);
    let store = handle.store.clone();
    let refresh = handle.refresh.clone();

    spawn_local(async move {
        let on_update = |_: VoteState| {
            if let Err(e) = store.persist() {
                log_error("Failed to persist vote store", &e);
            }
            refresh.emit(());
        };

        let result = match feed {
            Ok(feed) => store.follow_vote_counts(feed, on_update).await,
            Err(e) => Err(e),
        };
        let Err(e) = result else { return };
        log_error("Vote count feed unavailable", &e);

        match store.load_vote_counts(category).await {
            Ok(()) => {
                if let Err(e) = store.persist() {
                    log_error("Failed to persist vote store", &e);
                }
                refresh.emit(());
            }
            Err(e) => log_error("Failed to load vote counts", &e),
        }
    });
}

#[hook]
pub fn use_store() -> StoreHandle {
    use_context::<StoreHandle>().expect("StoreProvider missing")
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

#[function_component(StoreProvider)]
pub fn store_provider(props: &ProviderProps) -> Html {
    let store = use_memo(|_| open_store(), ());
    let state = use_state({
        let store = store.clone();
        move || Rc::new(store.state())
    });

    let refresh = {
        let store = store.clone();
        let state = state.clone();
        Callback::from(move |_| state.set(Rc::new(store.state())))
    };

    let handle = StoreHandle {
        store,
        state: (*state).clone(),
        refresh,
    };

    html! {
        <ContextProvider<StoreHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<StoreHandle>>
    }
}
