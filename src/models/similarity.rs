use super::recommender::Recommender;
use crate::cards::Corpus;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::cached;
use crate::scoring::Profiles;
use crate::scoring::Recommendation;
use std::path::PathBuf;
use std::sync::Arc;

/// Recommends the cards whose deck memberships look most like
/// those of the cards already in the deck.
pub struct Similarity {
    corpus: Arc<Corpus>,
    profiles: Profiles,
    cache: Option<PathBuf>,
}

impl Similarity {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            profiles: Profiles::default(),
            cache: None,
        }
    }
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.cache = Some(dir);
        self
    }
}

impl Recommender for Similarity {
    fn fit(&mut self, samples: &[Sample]) {
        self.profiles = cached(self.cache.as_deref(), || Profiles::from(samples));
        log::info!("profiled {} cards", self.profiles.len());
    }
    fn recommend(&self, query: &Query) -> Recommendation {
        self.profiles.scores(query).rank().recommend(query, &self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::evaluation::evaluate;
    use crate::fixtures;

    #[test]
    fn companions_recommended() {
        // 50 and 51 always travel with the core, 60 never does
        let pairs = (1..=14).flat_map(|i| [i, i]);
        let ref core = pairs.clone().chain([15]).collect::<Vec<u32>>();
        let ref other = (100..=128).collect::<Vec<u32>>();
        let samples = [
            fixtures::sample("a", "2018-01-01", None, core, 50),
            fixtures::sample("b", "2018-01-02", None, core, 51),
            fixtures::sample("c", "2018-01-03", None, other, 60),
        ];
        let mut model = Similarity::new(Arc::new(fixtures::corpus()));
        model.fit(&samples);
        let ref ids = pairs.chain([130]).collect::<Vec<u32>>();
        let query = fixtures::query("q", "2018-02-01", None, ids);
        let recommendation = model.recommend(&query);
        assert_eq!(recommendation.cards()[0], Card::new(15));
        assert!(recommendation.contains(Card::new(50)));
        assert!(recommendation.contains(Card::new(51)));
        assert!(!recommendation.contains(Card::new(60)));
    }

    #[test]
    fn validation_ignores_final_decks() {
        let ref ids = (1..=10).flat_map(|i| [i, i]).chain(20..30).collect::<Vec<u32>>();
        let history = (0..3)
            .map(|i| fixtures::deck(&i.to_string(), "2018-01-01", None, ids))
            .collect::<Vec<_>>();
        // final decks that never hold 2 and pull 11 into the core
        let ref others = [1, 3, 4, 5, 6, 7, 8, 9, 10]
            .into_iter()
            .flat_map(|i| [i, i])
            .chain(20..30)
            .chain([11])
            .collect::<Vec<u32>>();
        let finals = ["f0", "f1", "f2"].map(|deck| fixtures::query(deck, "2018-02-01", None, others));
        let ref corpus = Arc::new(fixtures::corpus());
        let mut plain = Similarity::new(corpus.clone());
        let mut enriched = Similarity::new(corpus.clone());
        let without = evaluate(&mut plain, &history, 1, &[], false);
        let with = evaluate(&mut enriched, &history, 1, &finals, true);
        assert_eq!(without.report, with.report);
        assert_eq!(with.report.hits(), 1);
        // the last deck withholds its slot 2, one copy of card 2
        let query = Query::from(history[2].mask(2));
        assert_eq!(plain.recommend(&query), enriched.recommend(&query));
        assert_eq!(plain.recommend(&query).cards()[0], Card::new(2));
    }
}
