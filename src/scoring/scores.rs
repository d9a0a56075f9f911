use super::ranking::Ranking;
use crate::Score;
use crate::Weight;
use crate::cards::Card;
use std::collections::BTreeMap;

/// A sparse score per candidate card.
///
/// Cards absent from the map score zero. Two maps combine by outer join:
/// the union of their cards, summing scores, missing sides as zero. Every
/// signal and model speaks this type, so the ensemble is a weighted merge.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scores(BTreeMap<Card, Score>);

impl Scores {
    /// score of a card, zero when unscored
    pub fn get(&self, card: Card) -> Score {
        self.0.get(&card).copied().unwrap_or(0.0)
    }
    pub fn set(&mut self, card: Card, score: Score) {
        self.0.insert(card, score);
    }
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains_key(&card)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Card, Score)> + '_ {
        self.0.iter().map(|(card, score)| (*card, *score))
    }

    /// multiply every score by `weight`, keeping every key
    pub fn scale(mut self, weight: Weight) -> Self {
        self.0.values_mut().for_each(|score| *score *= weight);
        self
    }
    /// outer join, summing, with missing scores as zero
    pub fn merge(self, other: Self) -> Self {
        let (mut big, small) = match self.len() >= other.len() {
            true => (self, other),
            false => (other, self),
        };
        for (card, score) in small.0 {
            *big.0.entry(card).or_insert(0.0) += score;
        }
        big
    }
    /// weighted sum of several signals over the union of their candidates
    pub fn blend<I>(signals: I) -> Self
    where
        I: IntoIterator<Item = (Self, Weight)>,
    {
        signals
            .into_iter()
            .map(|(scores, weight)| scores.scale(weight))
            .fold(Self::default(), Self::merge)
    }
    /// descending by score, ties by ascending card id
    pub fn rank(&self) -> Ranking {
        self.iter().collect()
    }
}

impl FromIterator<(Card, Score)> for Scores {
    fn from_iter<I: IntoIterator<Item = (Card, Score)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Card, Score)> for Scores {
    fn extend<I: IntoIterator<Item = (Card, Score)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Scores {
    type Item = (Card, Score);
    type IntoIter = std::collections::btree_map::IntoIter<Card, Score>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(u32, Score)]) -> Scores {
        pairs.iter().map(|(c, s)| (Card::new(*c), *s)).collect()
    }

    #[test]
    fn merge_is_outer_join() {
        let a = scores(&[(1, 1.0), (2, 2.0)]);
        let b = scores(&[(2, 0.5), (3, 4.0)]);
        let merged = a.merge(b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(Card::new(1)), 1.0);
        assert_eq!(merged.get(Card::new(2)), 2.5);
        assert_eq!(merged.get(Card::new(3)), 4.0);
        assert_eq!(merged.get(Card::new(4)), 0.0);
    }

    #[test]
    fn blend_keeps_zero_weight_candidates() {
        let blended = Scores::blend([
            (scores(&[(1, 1.0)]), 10.0),
            (scores(&[(2, 3.0)]), 0.0),
        ]);
        assert!(blended.contains(Card::new(2)));
        assert_eq!(blended.get(Card::new(1)), 10.0);
        assert_eq!(blended.get(Card::new(2)), 0.0);
    }

    #[test]
    fn rank_breaks_ties_by_id() {
        let ranking = scores(&[(7, 1.0), (3, 1.0), (5, 2.0), (1, -1.0)]).rank();
        let order = ranking.cards().map(u32::from).collect::<Vec<_>>();
        assert_eq!(order, vec![5, 3, 7, 1]);
    }
}
