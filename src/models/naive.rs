use super::recommender::Recommender;
use crate::cards::Corpus;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::cached;
use crate::scoring::Graph;
use crate::scoring::Recommendation;
use std::path::PathBuf;
use std::sync::Arc;

/// Recommends whatever was most often the missing card
/// alongside the cards already in the deck.
pub struct NaiveGraph {
    corpus: Arc<Corpus>,
    graph: Graph,
    cache: Option<PathBuf>,
}

impl NaiveGraph {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self {
            corpus,
            graph: Graph::default(),
            cache: None,
        }
    }
    pub fn cached(mut self, dir: PathBuf) -> Self {
        self.cache = Some(dir);
        self
    }
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

impl Recommender for NaiveGraph {
    fn fit(&mut self, samples: &[Sample]) {
        self.graph = cached(self.cache.as_deref(), || Graph::from(samples));
        log::info!("graph vocabulary {}", self.graph.vocabulary().count());
    }
    fn recommend(&self, query: &Query) -> Recommendation {
        self.graph.scores(query).rank().recommend(query, &self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::fixtures;

    #[test]
    fn missing_card_outranks_strangers() {
        let (a, b, c, d) = (1, 2, 3, 40);
        let ids = [a, a, b]
            .into_iter()
            .chain(10..35)
            .chain([c])
            .collect::<Vec<u32>>();
        let samples = ["x", "y", "z"].map(|deck| fixtures::sample(deck, "2018-02-01", None, &ids, d));
        let mut model = NaiveGraph::new(Arc::new(fixtures::corpus()));
        model.fit(&samples);
        // a stranger with no edges to the deck, known to the graph
        model.graph.update(Card::new(150), Card::new(151), 1.0);
        let query = fixtures::query("q", "2018-03-01", None, &ids);
        let scores = model.graph().scores(&query);
        // a sits in two slots and met d twice per deck
        assert_eq!(scores.get(Card::new(d)), 3.0 * (2.0 * 2.0 + 27.0));
        assert_eq!(scores.get(Card::new(150)), 0.0);
        let recommendation = model.recommend(&query);
        assert_eq!(recommendation.cards()[0], Card::new(d));
        assert_eq!(recommendation.len(), 3);
    }
}
