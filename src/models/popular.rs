use super::recommender::Recommender;
use crate::cards::Corpus;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::cached;
use crate::scoring::Popularity;
use crate::scoring::Ranking;
use crate::scoring::Recommendation;
use std::path::PathBuf;
use std::sync::Arc;

/// Recommends second copies of the deck's most popular single cards,
/// then the most popular cards overall.
pub struct Popular {
    corpus: Arc<Corpus>,
    popularity: Popularity,
    ranking: Ranking,
    cache: Option<PathBuf>,
}

impl Popular {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            popularity: Popularity::default(),
            ranking: Ranking::default(),
            cache: None,
        }
    }
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.cache = Some(dir);
        self
    }
}

impl Recommender for Popular {
    fn fit(&mut self, samples: &[Sample]) {
        self.popularity = cached(self.cache.as_deref(), || Popularity::from(samples));
        self.ranking = self.popularity.ranking();
    }
    fn recommend(&self, query: &Query) -> Recommendation {
        let upgrades = query
            .singles()
            .map(|card| (card, self.popularity.get(card)))
            .collect::<Ranking>();
        Recommendation::default()
            .fill(upgrades.cards(), query, &self.corpus)
            .fill(self.ranking.cards(), query, &self.corpus)
    }
}
