use super::signal::Signal;
use crate::Cost;
use crate::EVEN_LEGENDARY;
use crate::MANA_IN_RANGE;
use crate::MANA_OVERRIDE;
use crate::MANA_PARITY_PENALTY;
use crate::ODD_LEGENDARY;
use crate::Score;
use crate::cards::Corpus;
use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Scores;
use std::sync::Arc;

/// Shape of a partial deck's mana costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    min: Cost,
    max: Cost,
    median: f32,
    odd: bool,
    even: bool,
}

impl Curve {
    /// None when no card of the deck has a known cost.
    pub fn over(costs: impl IntoIterator<Item = Cost>) -> Option<Self> {
        let mut costs = costs.into_iter().collect::<Vec<Cost>>();
        costs.sort_unstable();
        let min = *costs.first()?;
        let max = *costs.last()?;
        let n = costs.len();
        let median = match n % 2 {
            1 => costs[n / 2] as f32,
            _ => (costs[n / 2 - 1] as f32 + costs[n / 2] as f32) / 2.0,
        };
        Some(Self {
            min,
            max,
            median,
            odd: costs.iter().all(|c| c % 2 == 1),
            even: costs.iter().all(|c| c % 2 == 0),
        })
    }
    pub fn min(&self) -> Cost {
        self.min
    }
    pub fn max(&self) -> Cost {
        self.max
    }
    pub fn median(&self) -> f32 {
        self.median
    }
    pub fn is_odd(&self) -> bool {
        self.odd
    }
    pub fn is_even(&self) -> bool {
        self.even
    }
    /// how a card of this cost would sit in the curve
    pub fn fit(&self, cost: Cost) -> Score {
        match cost % 2 {
            0 if self.odd => MANA_PARITY_PENALTY,
            1 if self.even => MANA_PARITY_PENALTY,
            _ if (self.min..=self.max).contains(&cost) => MANA_IN_RANGE,
            _ => 0.0,
        }
    }
}

/// Mana curve fit against the corpus costs.
///
/// A parity-pure deck missing its parity legendary gets that one card
/// and nothing else. Otherwise every costed card is judged by the curve.
#[derive(Debug, Clone)]
pub struct ManaFit {
    corpus: Arc<Corpus>,
}

impl ManaFit {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }
    pub fn curve(&self, query: &Query) -> Option<Curve> {
        Curve::over(query.cards().iter().filter_map(|c| self.corpus.cost(*c)))
    }
}

impl Signal for ManaFit {
    fn fit(&mut self, _: &[Sample]) {}
    fn score(&self, query: &Query) -> Scores {
        let Some(ref curve) = self.curve(query) else {
            return Scores::default();
        };
        if curve.is_odd() && !query.contains(ODD_LEGENDARY) {
            return std::iter::once((ODD_LEGENDARY, MANA_OVERRIDE)).collect();
        }
        if curve.is_even() && !query.contains(EVEN_LEGENDARY) {
            return std::iter::once((EVEN_LEGENDARY, MANA_OVERRIDE)).collect();
        }
        self.corpus
            .costs()
            .map(|(card, cost)| (card, curve.fit(cost)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::fixtures;

    fn signal() -> ManaFit {
        ManaFit::new(Arc::new(fixtures::corpus()))
    }

    #[test]
    fn curve_statistics() {
        let curve = Curve::over([7, 1, 5, 3]).expect("costs");
        assert_eq!(curve.min(), 1);
        assert_eq!(curve.max(), 7);
        assert_eq!(curve.median(), 4.0);
        assert!(curve.is_odd());
        assert!(!curve.is_even());
        assert!(Curve::over([]).is_none());
    }

    #[test]
    fn odd_deck_calls_for_odd_legendary() {
        // fixture costs are id % 11, so these cost 1, 3, 5 and 7
        let ref ids = fixtures::cycle(&[1, 3, 5, 7], 29);
        let scores = signal().score(&fixtures::query("q", "2018-01-01", None, ids));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(ODD_LEGENDARY), MANA_OVERRIDE);
    }

    #[test]
    fn even_deck_calls_for_even_legendary() {
        let ref ids = fixtures::cycle(&[2, 4, 6, 8], 29);
        let scores = signal().score(&fixtures::query("q", "2018-01-01", None, ids));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(EVEN_LEGENDARY), MANA_OVERRIDE);
    }

    #[test]
    fn odd_deck_with_legendary_penalizes_even_costs() {
        let ref mut ids = fixtures::cycle(&[1, 3, 5], 28);
        ids.push(ODD_LEGENDARY.into());
        let scores = signal().score(&fixtures::query("q", "2018-01-01", None, ids));
        assert_eq!(scores.get(Card::new(2)), MANA_PARITY_PENALTY);
        assert_eq!(scores.get(Card::new(3)), MANA_IN_RANGE);
        assert_eq!(scores.get(Card::new(9)), 0.0);
        assert!(scores.contains(Card::new(9)));
    }

    #[test]
    fn mixed_deck_rewards_range() {
        let ref ids = fixtures::cycle(&[2, 3, 4], 29);
        let scores = signal().score(&fixtures::query("q", "2018-01-01", None, ids));
        assert_eq!(scores.get(Card::new(2)), MANA_IN_RANGE);
        assert_eq!(scores.get(Card::new(4)), MANA_IN_RANGE);
        assert_eq!(scores.get(Card::new(5)), 0.0);
        assert_eq!(scores.get(Card::new(1)), 0.0);
    }
}
