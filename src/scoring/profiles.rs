use super::scores::Scores;
use crate::Error;
use crate::Score;
use crate::cards::Card;
use crate::decks::DeckId;
use crate::decks::Query;
use crate::decks::Sample;
use crate::save::Disk;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// For each card, the set of decks it was seen in.
///
/// Two cards have synergy when they keep turning up in the same decks,
/// measured as the Jaccard similarity of their deck sets.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(BTreeMap<Card, BTreeSet<DeckId>>);

impl Profiles {
    /// record every card of one deck
    pub fn absorb<I>(&mut self, deck: &DeckId, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        for card in cards {
            self.0.entry(card).or_default().insert(deck.clone());
        }
    }
    pub fn profile(&self, card: Card) -> Option<&BTreeSet<DeckId>> {
        self.0.get(&card)
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.keys().copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Jaccard similarity of two cards' deck sets, if both are profiled
    pub fn jaccard(&self, a: Card, b: Card) -> Option<Score> {
        Some(jaccard(self.profile(a)?, self.profile(b)?))
    }

    /// mean similarity between `candidate` and each distinct deck card,
    /// leaving out the candidate itself and unprofiled deck cards
    pub fn synergy(&self, candidate: Card, deck: &BTreeSet<Card>) -> Result<Score, Error> {
        let profile = self
            .profile(candidate)
            .ok_or(Error::UnknownCard(candidate))?;
        let similarities = deck
            .iter()
            .filter(|card| **card != candidate)
            .filter_map(|card| self.profile(*card))
            .map(|other| jaccard(profile, other))
            .collect::<Vec<_>>();
        match similarities.len() {
            0 => Err(Error::EmptyComparison(candidate)),
            n => Ok(similarities.iter().sum::<Score>() / n as Score),
        }
    }

    /// synergy of every profiled card with the query's deck.
    /// candidates with nothing to compare against score zero.
    pub fn scores(&self, query: &Query) -> Scores {
        let ref deck = query.distinct();
        self.cards()
            .map(|card| (card, self.synergy(card, deck).unwrap_or(0.0)))
            .collect()
    }
}

fn jaccard(a: &BTreeSet<DeckId>, b: &BTreeSet<DeckId>) -> Score {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    match union {
        0 => 0.0,
        n => shared as Score / n as Score,
    }
}

/// all 30 slots of every sample, keyed by deck id
impl From<&[Sample]> for Profiles {
    fn from(samples: &[Sample]) -> Self {
        samples.iter().fold(Self::default(), |mut profiles, sample| {
            profiles.absorb(sample.query().header().deck(), sample.slots());
            profiles
        })
    }
}

impl Disk for Profiles {
    fn name() -> &'static str {
        "profiles"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    /// three decks: 1 & 2 always together, 3 only with 1 once
    fn profiles() -> Profiles {
        let mut profiles = Profiles::default();
        profiles.absorb(&"a".into(), fixtures::cards(&[1, 2, 3]));
        profiles.absorb(&"b".into(), fixtures::cards(&[1, 2]));
        profiles.absorb(&"c".into(), fixtures::cards(&[2, 4]));
        profiles
    }

    #[test]
    fn jaccard_of_deck_sets() {
        let profiles = profiles();
        assert_eq!(profiles.jaccard(Card::new(1), Card::new(2)), Some(2.0 / 3.0));
        assert_eq!(profiles.jaccard(Card::new(1), Card::new(3)), Some(0.5));
        assert_eq!(profiles.jaccard(Card::new(1), Card::new(9)), None);
    }

    #[test]
    fn synergy_excludes_candidate_and_unknowns() {
        let profiles = profiles();
        let deck = fixtures::cards(&[1, 3, 9]).into_iter().collect();
        let synergy = profiles.synergy(Card::new(1), &deck);
        assert_eq!(synergy, Ok(0.5));
    }

    #[test]
    fn synergy_with_nothing_to_compare() {
        let profiles = profiles();
        let deck = fixtures::cards(&[4, 9]).into_iter().collect();
        assert_eq!(
            profiles.synergy(Card::new(4), &deck),
            Err(Error::EmptyComparison(Card::new(4)))
        );
        let ref ids = fixtures::cycle(&[4, 9], 29);
        let query = fixtures::query("q", "2018-01-01", None, ids);
        assert_eq!(profiles.scores(&query).get(Card::new(4)), 0.0);
        assert_eq!(profiles.scores(&query).len(), 4);
    }
}
