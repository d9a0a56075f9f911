use super::pair::Pair;
use super::scores::Scores;
use crate::Error;
use crate::Weight;
use crate::cards::Card;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::Disk;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Undirected co-occurrence graph between deck cards and withheld targets.
///
/// Edge weight counts how often two cards met as (deck card, target).
/// Persisted as `{"(lo, hi)": weight}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<String, Weight>",
    try_from = "BTreeMap<String, Weight>"
)]
pub struct Graph {
    edges: BTreeMap<Pair, Weight>,
    vocabulary: BTreeSet<Card>,
}

impl Graph {
    /// accumulate `weight` onto the edge between `a` and `b`
    pub fn update(&mut self, a: Card, b: Card, weight: Weight) {
        self.vocabulary.insert(a);
        self.vocabulary.insert(b);
        *self.edges.entry(Pair::from((a, b))).or_insert(0.0) += weight;
    }
    /// zero when the two cards never met
    pub fn weight(&self, a: Card, b: Card) -> Weight {
        self.edges
            .get(&Pair::from((a, b)))
            .copied()
            .unwrap_or(0.0)
    }
    pub fn vocabulary(&self) -> impl Iterator<Item = Card> + '_ {
        self.vocabulary.iter().copied()
    }
    pub fn edges(&self) -> impl Iterator<Item = (Pair, Weight)> + '_ {
        self.edges.iter().map(|(pair, weight)| (*pair, *weight))
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// every vocabulary card scored by its summed edge weight to each
    /// slot of the partial deck. duplicates count once per slot, and
    /// cards with no edges stay in with a zero.
    pub fn scores(&self, query: &Query) -> Scores {
        self.vocabulary()
            .map(|candidate| {
                let score = query
                    .cards()
                    .iter()
                    .map(|card| self.weight(*card, candidate))
                    .sum::<Weight>();
                (candidate, score)
            })
            .collect()
    }

    /// Connected components over edges heavier than `threshold`,
    /// largest first. Only cards with at least one strong edge appear.
    pub fn clusters(&self, threshold: Weight) -> Vec<BTreeSet<Card>> {
        let strong = self
            .edges()
            .filter(|(_, weight)| *weight > threshold)
            .map(|(pair, _)| pair)
            .collect::<Vec<_>>();
        let nodes = strong
            .iter()
            .flat_map(|pair| [pair.lo(), pair.hi()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let index = |card: Card| nodes.binary_search(&card).expect("strong edge endpoint");
        let mut forest = petgraph::unionfind::UnionFind::<usize>::new(nodes.len());
        for pair in strong.iter() {
            forest.union(index(pair.lo()), index(pair.hi()));
        }
        let mut clusters = nodes
            .iter()
            .enumerate()
            .fold(BTreeMap::<usize, BTreeSet<Card>>::new(), |mut roots, (i, card)| {
                roots.entry(forest.find(i)).or_default().insert(*card);
                roots
            })
            .into_values()
            .collect::<Vec<_>>();
        clusters.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        clusters
    }
}

/// one unit of weight between each deck slot and the target
impl From<&[Sample]> for Graph {
    fn from(samples: &[Sample]) -> Self {
        samples.iter().fold(Self::default(), |mut graph, sample| {
            for card in sample.query().cards() {
                graph.update(*card, sample.target(), 1.0);
            }
            graph
        })
    }
}

impl From<Graph> for BTreeMap<String, Weight> {
    fn from(graph: Graph) -> Self {
        graph
            .edges
            .into_iter()
            .map(|(pair, weight)| (pair.to_string(), weight))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, Weight>> for Graph {
    type Error = Error;
    fn try_from(edges: BTreeMap<String, Weight>) -> Result<Self, Self::Error> {
        edges
            .into_iter()
            .try_fold(Self::default(), |mut graph, (key, weight)| {
                let pair = Pair::try_from(key.as_str())?;
                graph.update(pair.lo(), pair.hi(), weight);
                Ok(graph)
            })
    }
}

impl Disk for Graph {
    fn name() -> &'static str {
        "graph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn symmetric_accumulation() {
        let mut graph = Graph::default();
        graph.update(Card::new(4), Card::new(9), 1.0);
        graph.update(Card::new(9), Card::new(4), 1.0);
        graph.update(Card::new(4), Card::new(5), 1.0);
        assert_eq!(graph.weight(Card::new(4), Card::new(9)), 2.0);
        assert_eq!(graph.weight(Card::new(9), Card::new(4)), 2.0);
        assert_eq!(graph.weight(Card::new(5), Card::new(9)), 0.0);
        assert_eq!(graph.vocabulary().count(), 3);
    }

    #[test]
    fn fit_counts_deck_target_meetings() {
        let ref ids = fixtures::cycle(&[1, 1, 2, 3], 29);
        let samples = [
            fixtures::sample("a", "2018-01-01", None, ids, 50),
            fixtures::sample("b", "2018-01-02", None, ids, 50),
        ];
        let graph = Graph::from(&samples[..]);
        let ones = ids.iter().filter(|id| **id == 1).count() as Weight;
        assert_eq!(graph.weight(Card::new(1), Card::new(50)), 2.0 * ones);
        assert_eq!(graph.weight(Card::new(50), Card::new(1)), 2.0 * ones);
        assert_eq!(graph.weight(Card::new(1), Card::new(2)), 0.0);
    }

    #[test]
    fn json_keys_round_trip() {
        let mut graph = Graph::default();
        graph.update(Card::new(12), Card::new(3), 2.5);
        let json = serde_json::to_string(&graph).expect("serialize");
        assert_eq!(json, r#"{"(3, 12)":2.5}"#);
        let back = serde_json::from_str::<Graph>(&json).expect("deserialize");
        assert_eq!(back, graph);
    }

    #[test]
    fn clusters_over_strong_edges() {
        let mut graph = Graph::default();
        graph.update(Card::new(1), Card::new(2), 10.0);
        graph.update(Card::new(2), Card::new(3), 10.0);
        graph.update(Card::new(3), Card::new(4), 1.0);
        graph.update(Card::new(7), Card::new(8), 10.0);
        let clusters = graph.clusters(5.0);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0], fixtures::cards(&[1, 2, 3]).into_iter().collect::<BTreeSet<_>>());
        assert_eq!(clusters[1], fixtures::cards(&[7, 8]).into_iter().collect::<BTreeSet<_>>());
    }
}
