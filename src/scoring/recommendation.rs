use crate::Error;
use crate::TOP_K;
use crate::cards::Card;
use crate::cards::Corpus;
use crate::cards::is_valid;
use crate::decks::Query;

/// At most three distinct cards, each legal for the query's deck and hero,
/// in the order they were accepted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recommendation(Vec<Card>);

impl Recommendation {
    /// accept candidates in order until full, skipping invalid
    /// cards and cards already recommended. never pads.
    pub fn fill<I>(mut self, candidates: I, query: &Query, corpus: &Corpus) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        for card in candidates {
            if self.is_full() {
                break;
            }
            if !self.0.contains(&card) && is_valid(query.cards(), card, query.hero(), corpus) {
                self.0.push(card);
            }
        }
        self
    }
    pub fn is_full(&self) -> bool {
        self.0.len() >= TOP_K
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// fails when fewer than three valid candidates existed
    pub fn complete(&self) -> Result<(), Error> {
        match self.is_full() {
            true => Ok(()),
            false => Err(Error::InsufficientCandidates {
                found: self.0.len(),
                wanted: TOP_K,
            }),
        }
    }
}

impl From<Vec<Card>> for Recommendation {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

/// space-joined ids, the submission format
impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = self
            .0
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", ids)
    }
}
