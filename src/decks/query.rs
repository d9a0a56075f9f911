use super::header::Header;
use crate::Error;
use crate::QUERY_SIZE;
use crate::cards::Card;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// A partial deck: 29 card slots awaiting one more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    header: Header,
    cards: Vec<Card>,
}

impl Query {
    pub fn new(header: Header, cards: Vec<Card>) -> Result<Self, Error> {
        match cards.len() {
            QUERY_SIZE => Ok(Self { header, cards }),
            found => Err(Error::DeckSize {
                expected: QUERY_SIZE,
                found,
            }),
        }
    }
    pub fn header(&self) -> &Header {
        &self.header
    }
    pub fn hero(&self) -> Option<crate::cards::Hero> {
        self.header.hero()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }
    /// copies per distinct card
    pub fn counts(&self) -> BTreeMap<Card, usize> {
        self.cards.iter().fold(BTreeMap::new(), |mut counts, card| {
            *counts.entry(*card).or_insert(0) += 1;
            counts
        })
    }
    pub fn distinct(&self) -> BTreeSet<Card> {
        self.cards.iter().copied().collect()
    }
    /// cards run as a single copy, ascending by id
    pub fn singles(&self) -> impl Iterator<Item = Card> {
        self.counts()
            .into_iter()
            .filter(|(_, n)| *n == 1)
            .map(|(card, _)| card)
    }
    /// true when no card appears twice
    pub fn is_singleton(&self) -> bool {
        self.counts().values().all(|n| *n == 1)
    }
}
