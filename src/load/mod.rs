//! CSV readers for deck history, query sets and card metadata.
mod columns;
mod corpus;
mod row;
mod table;

pub use columns::*;
pub use row::*;
pub use table::*;

use crate::decks::Deck;
use crate::decks::Query;
use std::path::Path;

/// full 30-card decks, in file order
pub fn decks(path: &Path) -> anyhow::Result<Vec<Deck>> {
    load(path)
}
/// 29-card partial decks to answer
pub fn queries(path: &Path) -> anyhow::Result<Vec<Query>> {
    load(path)
}
