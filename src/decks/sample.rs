use super::query::Query;
use crate::cards::Card;

/// A masked deck: the partial deck plus the card that was withheld from it.
/// The target is only for fitting and scoring, never for prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    query: Query,
    target: Card,
}

impl Sample {
    pub fn new(query: Query, target: Card) -> Self {
        Self { query, target }
    }
    pub fn query(&self) -> &Query {
        &self.query
    }
    pub fn target(&self) -> Card {
        self.target
    }
    /// all 30 slots: the partial deck followed by the target
    pub fn slots(&self) -> impl Iterator<Item = Card> + '_ {
        self.query
            .cards()
            .iter()
            .copied()
            .chain(std::iter::once(self.target))
    }
}

impl From<Sample> for Query {
    fn from(sample: Sample) -> Self {
        sample.query
    }
}
