//! # Loader
//!
//! The async action creator. One call = one load cycle:
//!
//! ```text
//! dispatch(Requested) → source.fetch_characters().await → dispatch(Succeeded | Failed)
//! ```
//!
//! Exactly one of `Succeeded`/`Failed` follows every `Requested`. There is
//! no retry, timeout or cancellation. Two overlapping loads are not
//! coordinated: whichever resolves last wins.

use log::{info, warn};

use crate::api::{CharacterSource, FetchError};
use crate::core::action::Action;
use crate::core::state::{Character, ErrorInfo};
use crate::core::store::Store;

/// Maps a fetch result to the action that ends the load cycle.
pub fn outcome(result: Result<Vec<Character>, FetchError>) -> Action {
    match result {
        Ok(characters) => Action::Succeeded(characters),
        Err(e) => {
            warn!("Load failed: {}", e);
            Action::Failed(ErrorInfo::from(&e))
        }
    }
}

/// Runs one full load cycle against `source`, dispatching into `store`.
pub async fn load(store: &mut Store, source: &dyn CharacterSource) {
    info!("Loading characters from {}", source.name());
    store.dispatch(Action::Requested);
    let action = outcome(source.fetch_characters().await);
    store.dispatch(action);
}
