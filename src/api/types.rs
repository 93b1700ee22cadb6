//! Wire types for the character endpoint.
//!
//! Only the fields the app displays are modelled. serde ignores the rest of
//! each record (status, species, origin, ...) and the top-level `info` block.

use serde::Deserialize;

use crate::core::state::Character;

/// Response body of `GET /api/character`.
#[derive(Deserialize, Debug)]
pub struct CharacterPage {
    pub results: Vec<CharacterRecord>,
}

/// One raw entry of `results`.
#[derive(Deserialize, Debug, Clone)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub image: String,
}

impl From<CharacterRecord> for Character {
    fn from(record: CharacterRecord) -> Self {
        Character {
            id: record.id,
            name: record.name,
            image_url: record.image,
        }
    }
}

impl CharacterPage {
    pub fn into_characters(self) -> Vec<Character> {
        self.results.into_iter().map(Character::from).collect()
    }
}
