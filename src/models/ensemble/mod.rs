//! Weighted blend of independent signals.
//!
//! Each signal scores the candidates it has an opinion on. The ensemble
//! outer-joins them, weights them, ranks the sum and lets the validity
//! rule pick the first three.
mod combo;
mod mana;
mod signal;
mod synergy;
mod trend;
mod weights;

pub use combo::*;
pub use mana::*;
pub use signal::*;
pub use synergy::*;
pub use trend::*;
pub use weights::*;

use super::recommender::Recommender;
use crate::cards::Corpus;
use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Recommendation;
use crate::scoring::Scores;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Ensemble {
    corpus: Arc<Corpus>,
    weights: Weights,
    synergy: Synergy,
    mana: ManaFit,
    trend: Trend,
    combo: Combo,
}

impl Ensemble {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            mana: ManaFit::new(corpus.clone()),
            corpus,
            weights: Weights::default(),
            synergy: Synergy::default(),
            trend: Trend::default(),
            combo: Combo,
        }
    }
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.synergy = self.synergy.cached(dir.clone());
        self.trend = self.trend.cached(dir);
        self
    }
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
    /// blended score of every candidate any signal has an opinion on
    pub fn scores(&self, query: &Query) -> Scores {
        Scores::blend([
            (self.synergy.score(query), self.weights.synergy),
            (self.mana.score(query), self.weights.mana),
            (self.trend.score(query), self.weights.popularity),
            (self.combo.score(query), self.weights.combo),
        ])
    }
}

impl Recommender for Ensemble {
    fn fit(&mut self, samples: &[Sample]) {
        log::info!("fitting ensemble on {} samples", samples.len());
        self.synergy.fit(samples);
        self.mana.fit(samples);
        self.trend.fit(samples);
        self.combo.fit(samples);
    }
    fn absorb(&mut self, queries: &[Query]) {
        self.synergy.absorb(queries);
    }
    fn recommend(&self, query: &Query) -> Recommendation {
        self.scores(query).rank().recommend(query, &self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::is_valid;
    use crate::fixtures;

    fn samples() -> Vec<Sample> {
        let ref core = (1..=14).flat_map(|i| [i, i]).chain([15]).collect::<Vec<u32>>();
        let ref other = (100..=128).collect::<Vec<u32>>();
        vec![
            fixtures::sample("a", "2018-01-01", None, core, 50),
            fixtures::sample("b", "2018-01-05", None, core, 51),
            fixtures::sample("c", "2018-01-09", None, other, 60),
        ]
    }

    fn model() -> Ensemble {
        let mut model = Ensemble::new(Arc::new(fixtures::corpus()));
        model.fit(&samples());
        model
    }

    #[test]
    fn deterministic() {
        let model = model();
        let ref ids = (1..=14).flat_map(|i| [i, i]).chain([130]).collect::<Vec<u32>>();
        let query = fixtures::query("q", "2018-02-01", None, ids);
        assert_eq!(model.recommend(&query), model.recommend(&query));
        assert_eq!(model.scores(&query), model.scores(&query));
    }

    #[test]
    fn recommendations_are_valid_and_distinct() {
        let model = model();
        let ref ids = (1..=14).flat_map(|i| [i, i]).chain([130]).collect::<Vec<u32>>();
        let query = fixtures::query("q", "2018-02-01", None, ids);
        let recommendation = model.recommend(&query);
        let ref corpus = fixtures::corpus();
        assert_eq!(recommendation.len(), 3);
        for card in recommendation.cards() {
            assert!(is_valid(query.cards(), *card, query.hero(), corpus));
        }
        assert!(!recommendation.contains(Card::new(1)));
        // the core's companions ride on synergy
        assert!(recommendation.contains(Card::new(15)));
    }

    #[test]
    fn combo_weight_is_inert() {
        let model = model();
        let ref ids = (100..=128).collect::<Vec<u32>>();
        let query = fixtures::query("q", "2018-02-01", None, ids);
        let mut heavier = Ensemble::new(Arc::new(fixtures::corpus())).with_weights(Weights {
            combo: 100.0,
            ..Weights::default()
        });
        heavier.fit(&samples());
        assert_eq!(model.scores(&query), heavier.scores(&query));
    }

    #[test]
    fn weights_scale_signals() {
        let ref ids = fixtures::cycle(&[1, 3, 5, 7], 29);
        let query = fixtures::query("q", "2018-02-01", None, ids);
        let mana_only = Weights {
            synergy: 0.0,
            mana: 1.0,
            popularity: 0.0,
            combo: 0.0,
        };
        let mut model = Ensemble::new(Arc::new(fixtures::corpus())).with_weights(mana_only);
        model.fit(&samples());
        let scores = model.scores(&query);
        assert_eq!(scores.get(crate::ODD_LEGENDARY), crate::MANA_OVERRIDE);
        assert_eq!(scores.rank().cards().next(), Some(crate::ODD_LEGENDARY));
        assert_eq!(model.recommend(&query).cards()[0], crate::ODD_LEGENDARY);
    }
}
