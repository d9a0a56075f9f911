use super::ensemble::Ensemble;
use super::kind::Kind;
use super::naive::NaiveGraph;
use super::popular::Popular;
use super::recommender::Recommender;
use super::similarity::Similarity;
use crate::decks::Query;
use crate::decks::Sample;
use crate::scoring::Recommendation;
use std::path::PathBuf;

/// A recommender chosen at runtime.
pub enum Model {
    Graph(NaiveGraph),
    Similarity(Similarity),
    Popularity(Popular),
    Ensemble(Ensemble),
}

impl Model {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Graph(_) => Kind::Graph,
            Self::Similarity(_) => Kind::Similarity,
            Self::Popularity(_) => Kind::Popularity,
            Self::Ensemble(_) => Kind::Ensemble,
        }
    }
    /// fit artifacts are loaded from and saved to `dir`
    pub fn cached(self, dir: PathBuf) -> Self {
        match self {
            Self::Graph(m) => Self::Graph(m.cached(dir)),
            Self::Similarity(m) => Self::Similarity(m.cached(dir)),
            Self::Popularity(m) => Self::Popularity(m.cached(dir)),
            Self::Ensemble(m) => Self::Ensemble(m.cached(dir)),
        }
    }
}

impl Recommender for Model {
    fn fit(&mut self, samples: &[Sample]) {
        match self {
            Self::Graph(m) => m.fit(samples),
            Self::Similarity(m) => m.fit(samples),
            Self::Popularity(m) => m.fit(samples),
            Self::Ensemble(m) => m.fit(samples),
        }
    }
    fn absorb(&mut self, queries: &[Query]) {
        match self {
            Self::Graph(m) => m.absorb(queries),
            Self::Similarity(m) => m.absorb(queries),
            Self::Popularity(m) => m.absorb(queries),
            Self::Ensemble(m) => m.absorb(queries),
        }
    }
    fn recommend(&self, query: &Query) -> Recommendation {
        match self {
            Self::Graph(m) => m.recommend(query),
            Self::Similarity(m) => m.recommend(query),
            Self::Popularity(m) => m.recommend(query),
            Self::Ensemble(m) => m.recommend(query),
        }
    }
}
