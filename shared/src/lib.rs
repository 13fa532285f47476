pub mod error;
pub mod models;
pub mod catalog;
pub mod identity;
pub mod validation;
pub mod tally;
pub mod store;

pub use error::{Error, ErrorCode, Result, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use identity::*;
pub use tally::{tally, standings, Standing, Standings};
pub use store::{VoteStore, VoteState, VoteRemote, StateStorage, PersistedState, SnapshotStream};
