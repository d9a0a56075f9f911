use super::card::Card;
use super::entry::Entry;
use crate::Cost;
use crate::Error;
use std::collections::BTreeMap;

/// Immutable reference table of every known card.
///
/// Built once at startup and shared read-only (behind an `Arc`) by the
/// validity rule and by every scorer that needs costs or classes.
#[derive(Debug, Default, Clone)]
pub struct Corpus(BTreeMap<Card, Entry>);

impl Corpus {
    pub fn lookup(&self, card: Card) -> Result<&Entry, Error> {
        self.0.get(&card).ok_or(Error::UnknownCard(card))
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains_key(&card)
    }
    pub fn cost(&self, card: Card) -> Option<Cost> {
        self.0.get(&card).and_then(Entry::cost)
    }
    /// every card with a known mana cost, ascending by id
    pub fn costs(&self) -> impl Iterator<Item = (Card, Cost)> + '_ {
        self.0
            .iter()
            .filter_map(|(card, entry)| entry.cost().map(|cost| (*card, cost)))
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Card, &Entry)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Card, Entry)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (Card, Entry)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
