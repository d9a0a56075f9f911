//! Shared test fixtures: a small corpus and deck builders.
use crate::cards::Card;
use crate::cards::Corpus;
use crate::cards::Entry;
use crate::cards::Hero;
use crate::cards::Rarity;
use crate::decks::Deck;
use crate::decks::Header;
use crate::decks::Query;
use crate::decks::Sample;

/// neutral legendary, cost 5
pub const LEGENDARY: u32 = 900;
/// neutral common, cost 2
pub const NEUTRAL_COMMON: u32 = 901;
/// mage-only rare, cost 3
pub const MAGE_RARE: u32 = 902;

/// Cards 1..=200 are neutral commons costing `id % 11`.
/// A handful of special cards cover rarity, class and the cold-start ids.
pub fn corpus() -> Corpus {
    (1..=200u32)
        .map(|id| (Card::new(id), Entry::new(None, Rarity::Common, Some((id % 11) as u8))))
        .chain([
            (Card::new(LEGENDARY), Entry::new(None, Rarity::Legendary, Some(5))),
            (Card::new(NEUTRAL_COMMON), Entry::new(None, Rarity::Common, Some(2))),
            (Card::new(MAGE_RARE), Entry::new(Some(Hero::Mage), Rarity::Rare, Some(3))),
            (crate::ODD_LEGENDARY, Entry::new(None, Rarity::Legendary, Some(1))),
            (crate::EVEN_LEGENDARY, Entry::new(None, Rarity::Legendary, Some(6))),
            (Card::new(1024971), Entry::new(None, Rarity::Legendary, Some(10))),
            (Card::new(49622), Entry::new(None, Rarity::Legendary, Some(6))),
            (Card::new(49744), Entry::new(Some(Hero::Warlock), Rarity::Legendary, Some(9))),
            (Card::new(49693), Entry::new(Some(Hero::Mage), Rarity::Legendary, Some(7))),
            (Card::new(49702), Entry::new(Some(Hero::Priest), Rarity::Legendary, Some(8))),
        ])
        .collect()
}

pub fn header(deck: &str, date: &str, hero: Option<Hero>) -> Header {
    Header::new(
        deck.into(),
        chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        hero,
    )
}

pub fn cards(ids: &[u32]) -> Vec<Card> {
    ids.iter().copied().map(Card::new).collect()
}

pub fn query(deck: &str, date: &str, hero: Option<Hero>, ids: &[u32]) -> Query {
    Query::new(header(deck, date, hero), cards(ids)).expect("29 fixture cards")
}

pub fn sample(deck: &str, date: &str, hero: Option<Hero>, ids: &[u32], target: u32) -> Sample {
    Sample::new(query(deck, date, hero, ids), Card::new(target))
}

pub fn deck(deck: &str, date: &str, hero: Option<Hero>, ids: &[u32]) -> Deck {
    Deck::new(header(deck, date, hero), cards(ids)).expect("30 fixture cards")
}

/// `n` ids cycling through `ids`
pub fn cycle(ids: &[u32], n: usize) -> Vec<u32> {
    ids.iter().copied().cycle().take(n).collect()
}
