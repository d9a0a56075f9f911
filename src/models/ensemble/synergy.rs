use super::signal::Signal;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::cached;
use crate::scoring::Profiles;
use crate::scoring::Scores;
use std::path::PathBuf;

/// Jaccard synergy between each profiled card and the deck.
#[derive(Debug, Default, Clone)]
pub struct Synergy {
    profiles: Profiles,
    cache: Option<PathBuf>,
}

impl Synergy {
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.cache = Some(dir);
        self
    }
    pub fn absorb(&mut self, queries: &[Query]) {
        for query in queries {
            self.profiles
                .absorb(query.header().deck(), query.cards().iter().copied());
        }
    }
}

impl Signal for Synergy {
    fn fit(&mut self, samples: &[Sample]) {
        self.profiles = cached(self.cache.as_deref(), || Profiles::from(samples));
    }
    fn score(&self, query: &Query) -> Scores {
        self.profiles.scores(query)
    }
}
