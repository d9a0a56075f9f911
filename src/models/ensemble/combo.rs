use super::signal::Signal;
use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Scores;

/// Reserved: will reward the missing members of a combo cluster
/// the deck already started. Scores nothing for now.
#[derive(Debug, Default, Clone)]
pub struct Combo;

impl Signal for Combo {
    fn fit(&mut self, _: &[Sample]) {}
    fn score(&self, _: &Query) -> Scores {
        Scores::default()
    }
}
