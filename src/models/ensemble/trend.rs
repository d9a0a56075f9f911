use super::signal::Signal;
use crate::CLASS_STAPLE_BOOST;
use crate::CLASS_STAPLES;
use crate::SINGLE_COPY_BOOST;
use crate::SINGLETON_STAPLE_BOOST;
use crate::SINGLETON_STAPLES;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::cached;
use crate::scoring::Popularity;
use crate::scoring::Scores;
use std::path::PathBuf;

/// Recent popularity with cold-start boosts.
///
/// Singleton decks (no duplicates) are pushed toward flexible value cards,
/// then every other card they lack scores its raw popularity. Decks with
/// duplicates see their single copies lifted above the raw table.
#[derive(Debug, Default, Clone)]
pub struct Trend {
    popularity: Popularity,
    cache: Option<PathBuf>,
}

impl Trend {
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.cache = Some(dir);
        self
    }

    fn singleton(&self, query: &Query) -> Scores {
        let mut scores = Scores::default();
        SINGLETON_STAPLES
            .into_iter()
            .filter(|card| !query.contains(*card))
            .for_each(|card| scores.set(card, SINGLETON_STAPLE_BOOST));
        CLASS_STAPLES
            .into_iter()
            .filter(|(hero, _)| query.hero() == Some(*hero))
            .filter(|(_, card)| !query.contains(*card))
            .for_each(|(_, card)| scores.set(card, CLASS_STAPLE_BOOST));
        let rest = self
            .popularity
            .iter()
            .filter(|(card, _)| !scores.contains(*card))
            .filter(|(card, _)| !query.contains(*card))
            .collect::<Vec<_>>();
        scores.extend(rest);
        scores
    }
    fn duplicates(&self, query: &Query) -> Scores {
        let mut scores = query
            .singles()
            .map(|card| (card, self.popularity.get(card) + SINGLE_COPY_BOOST))
            .collect::<Scores>();
        let rest = self
            .popularity
            .iter()
            .filter(|(card, _)| !scores.contains(*card))
            .collect::<Vec<_>>();
        scores.extend(rest);
        scores
    }
}

impl Signal for Trend {
    fn fit(&mut self, samples: &[Sample]) {
        self.popularity = cached(self.cache.as_deref(), || Popularity::from(samples));
    }
    fn score(&self, query: &Query) -> Scores {
        match query.is_singleton() {
            true => self.singleton(query),
            false => self.duplicates(query),
        }
    }
}
