//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{CharacterSource, FetchError};
use crate::core::state::Character;

/// A source that always returns the same list without touching the network.
pub struct StaticSource {
    characters: Vec<Character>,
}

impl StaticSource {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}

#[async_trait]
impl CharacterSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        Ok(self.characters.clone())
    }
}

/// A source whose every fetch fails with a network error.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn network(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CharacterSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        Err(FetchError::Network(self.message.clone()))
    }
}

pub fn sample_characters() -> Vec<Character> {
    vec![
        Character::new(1, "Rick Sanchez", "https://rickandmortyapi.com/api/character/avatar/1.jpeg"),
        Character::new(2, "Morty Smith", "https://rickandmortyapi.com/api/character/avatar/2.jpeg"),
        Character::new(3, "Summer Smith", "https://rickandmortyapi.com/api/character/avatar/3.jpeg"),
    ]
}
