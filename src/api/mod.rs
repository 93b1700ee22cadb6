pub mod client;
pub mod types;

pub use client::{CharacterSource, DEFAULT_ENDPOINT, FetchError, HttpCharacterSource};
pub use types::{CharacterPage, CharacterRecord};
