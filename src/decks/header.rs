use crate::cards::Hero;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Deck identifier as it appears in the history and query files.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<&str> for DeckId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}
impl From<String> for DeckId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything about a deck row except its cards.
///
/// `extra` keeps any metadata column we do not interpret, so masking
/// a deck into a sample leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    deck: DeckId,
    date: NaiveDate,
    hero: Option<Hero>,
    extra: BTreeMap<String, String>,
}

impl Header {
    pub fn new(deck: DeckId, date: NaiveDate, hero: Option<Hero>) -> Self {
        Self {
            deck,
            date,
            hero,
            extra: BTreeMap::new(),
        }
    }
    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }
    pub fn deck(&self) -> &DeckId {
        &self.deck
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn hero(&self) -> Option<Hero> {
        self.hero
    }
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }
}
