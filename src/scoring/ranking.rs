use super::recommendation::Recommendation;
use crate::Score;
use crate::cards::Card;
use crate::cards::Corpus;
use crate::decks::Query;

/// Candidates sorted by descending score, ties by ascending card id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Ranking(Vec<(Card, Score)>);

impl Ranking {
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().map(|(card, _)| *card)
    }
    pub fn iter(&self) -> impl Iterator<Item = &(Card, Score)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the first valid candidates in rank order
    pub fn recommend(&self, query: &Query, corpus: &Corpus) -> Recommendation {
        Recommendation::default().fill(self.cards(), query, corpus)
    }
}

impl FromIterator<(Card, Score)> for Ranking {
    fn from_iter<I: IntoIterator<Item = (Card, Score)>>(iter: I) -> Self {
        let mut ranked = iter.into_iter().collect::<Vec<_>>();
        ranked.sort_by(|(a, x), (b, y)| y.total_cmp(x).then(a.cmp(b)));
        Self(ranked)
    }
}
