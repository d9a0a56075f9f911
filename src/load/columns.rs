use crate::Error;
use crate::cards::Card;
use crate::cards::Hero;
use crate::decks::Header;
use chrono::NaiveDate;
use csv::StringRecord;
use std::collections::BTreeMap;

const DECK: &str = "deckid";
const DATE: &str = "update_date";
const HERO: &str = "hero";
const TARGET: &str = "target";
const CARD: &str = "card";

/// Where each field of a deck row lives, resolved once from the header line.
///
/// Card columns are `card0`, `card1`, ... ordered by their number rather than
/// by their position in the file. Anything unrecognized is kept as metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
    deck: usize,
    date: usize,
    hero: Option<usize>,
    cards: Vec<usize>,
    target: Option<usize>,
    extra: Vec<(String, usize)>,
}

impl Columns {
    pub fn cards(&self) -> usize {
        self.cards.len()
    }

    pub fn header(&self, record: &StringRecord) -> Result<Header, Error> {
        let deck = field(record, self.deck);
        if deck.trim().is_empty() {
            return Err(malformed("empty deckid"));
        }
        let date = date(field(record, self.date))?;
        let hero = match self.hero {
            Some(i) => Hero::parse(field(record, i))?,
            None => None,
        };
        let extra = self
            .extra
            .iter()
            .map(|(name, i)| (name.clone(), field(record, *i).to_string()))
            .collect::<BTreeMap<_, _>>();
        Ok(Header::new(deck.into(), date, hero).with_extra(extra))
    }
    pub fn slots(&self, record: &StringRecord) -> Result<Vec<Card>, Error> {
        self.cards
            .iter()
            .map(|i| Card::try_from(field(record, *i)))
            .collect()
    }
    pub fn target(&self, record: &StringRecord) -> Result<Card, Error> {
        let i = self.target.ok_or_else(|| malformed("no target column"))?;
        Card::try_from(field(record, i))
    }
}

impl TryFrom<&StringRecord> for Columns {
    type Error = anyhow::Error;
    fn try_from(names: &StringRecord) -> Result<Self, Self::Error> {
        let find = |name: &str| names.iter().position(|n| n.trim() == name);
        let deck = find(DECK).ok_or_else(|| anyhow::anyhow!("missing {} column", DECK))?;
        let date = find(DATE).ok_or_else(|| anyhow::anyhow!("missing {} column", DATE))?;
        let mut numbered = names
            .iter()
            .enumerate()
            .filter_map(|(i, n)| slot(n).map(|k| (k, i)))
            .collect::<Vec<_>>();
        numbered.sort();
        let cards = numbered.into_iter().map(|(_, i)| i).collect::<Vec<_>>();
        if cards.is_empty() {
            anyhow::bail!("no {}N columns", CARD);
        }
        let extra = names
            .iter()
            .enumerate()
            .filter(|(_, n)| ![DECK, DATE, HERO, TARGET].contains(&n.trim()))
            .filter(|(_, n)| slot(n).is_none())
            .map(|(i, n)| (n.trim().to_string(), i))
            .collect();
        Ok(Self {
            deck,
            date,
            hero: find(HERO),
            cards,
            target: find(TARGET),
            extra,
        })
    }
}

/// `card17` -> 17
fn slot(name: &str) -> Option<usize> {
    name.trim().strip_prefix(CARD)?.parse().ok()
}

fn field(record: &StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}

/// `YYYY-MM-DD`, ignoring any time of day after it
fn date(s: &str) -> Result<NaiveDate, Error> {
    let s = s.trim();
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| malformed(&format!("date {:?}: {}", s, e)))
}

fn malformed(reason: &str) -> Error {
    Error::MalformedRow {
        line: 0,
        reason: reason.to_string(),
    }
}
