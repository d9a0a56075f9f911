use super::ranking::Ranking;
use crate::Weight;
use crate::cards::Card;
use crate::decks::Sample;
use crate::save::Disk;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Recency-weighted card frequency, normalized so the top card is 1.0.
///
/// A deck dated at the start of the training window contributes nothing,
/// one at the end contributes a full unit, linearly in between.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Popularity(BTreeMap<Card, Weight>);

impl Popularity {
    /// zero for cards never seen in training
    pub fn get(&self, card: Card) -> Weight {
        self.lookup(card).unwrap_or(0.0)
    }
    pub fn lookup(&self, card: Card) -> Option<Weight> {
        self.0.get(&card).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Card, Weight)> + '_ {
        self.0.iter().map(|(card, weight)| (*card, *weight))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn max(&self) -> Weight {
        self.0.values().copied().fold(0.0, Weight::max)
    }
    /// every known card, most popular first
    pub fn ranking(&self) -> Ranking {
        self.iter().collect()
    }
}

/// Linear time decay over a training window.
struct Window {
    begin: NaiveDate,
    span: i64,
}

impl Window {
    fn weight(&self, date: NaiveDate) -> Weight {
        match self.span {
            0 => 1.0,
            span => (date - self.begin).num_days() as Weight / span as Weight,
        }
    }
    fn over(samples: &[Sample]) -> Option<Self> {
        let dates = samples.iter().map(|s| s.query().header().date());
        let begin = dates.clone().min()?;
        let end = dates.max()?;
        Some(Self {
            begin,
            span: (end - begin).num_days(),
        })
    }
}

/// each distinct card of a sample's 30 slots gains the sample's decay weight
impl From<&[Sample]> for Popularity {
    fn from(samples: &[Sample]) -> Self {
        let Some(window) = Window::over(samples) else {
            return Self::default();
        };
        let mut table = samples
            .iter()
            .map(|sample| (window.weight(sample.query().header().date()), sample))
            .fold(BTreeMap::<Card, Weight>::new(), |mut table, (weight, sample)| {
                for card in sample.slots().collect::<BTreeSet<_>>() {
                    *table.entry(card).or_insert(0.0) += weight;
                }
                table
            });
        let max = table.values().copied().fold(0.0, Weight::max);
        if max > 0.0 {
            table.values_mut().for_each(|w| *w /= max);
        }
        Self(table)
    }
}

impl FromIterator<(Card, Weight)> for Popularity {
    fn from_iter<I: IntoIterator<Item = (Card, Weight)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Disk for Popularity {
    fn name() -> &'static str {
        "popularity"
    }
}
