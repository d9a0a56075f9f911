use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Scores;

/// One independent opinion inside the ensemble.
///
/// Each signal fits on its own and scores whichever candidates
/// it has an opinion on; the ensemble fills the gaps with zero.
pub trait Signal: Sync {
    fn fit(&mut self, samples: &[Sample]);
    fn score(&self, query: &Query) -> Scores;
}
