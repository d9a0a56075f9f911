use super::ensemble::Ensemble;
use super::model::Model;
use super::naive::NaiveGraph;
use super::popular::Popular;
use super::similarity::Similarity;
use crate::Error;
use crate::cards::Corpus;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::Arc;

/// Every recommender the crate knows how to build.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Graph,
    Similarity,
    Popularity,
    Ensemble,
}

impl Kind {
    pub const fn all() -> [Self; 4] {
        [Self::Graph, Self::Similarity, Self::Popularity, Self::Ensemble]
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Similarity => "similarity",
            Self::Popularity => "popularity",
            Self::Ensemble => "ensemble",
        }
    }
    /// an unfitted recommender of this kind
    pub fn build(self, corpus: Arc<Corpus>) -> Model {
        match self {
            Self::Graph => Model::Graph(NaiveGraph::new(corpus)),
            Self::Similarity => Model::Similarity(Similarity::new(corpus)),
            Self::Popularity => Model::Popularity(Popular::new(corpus)),
            Self::Ensemble => Model::Ensemble(Ensemble::new(corpus)),
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "graph" | "naive" | "naive-graph" => Ok(Self::Graph),
            "similarity" | "jaccard" => Ok(Self::Similarity),
            "popularity" | "popular" | "simple-popularity" => Ok(Self::Popularity),
            "ensemble" | "knowledge" => Ok(Self::Ensemble),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl FromStr for Kind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
