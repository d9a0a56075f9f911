use super::header::Header;
use super::query::Query;
use super::sample::Sample;
use crate::Arbitrary;
use crate::DECK_SIZE;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hero;

/// A complete 30-card deck from the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    header: Header,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(header: Header, cards: Vec<Card>) -> Result<Self, Error> {
        match cards.len() {
            DECK_SIZE => Ok(Self { header, cards }),
            found => Err(Error::DeckSize {
                expected: DECK_SIZE,
                found,
            }),
        }
    }
    pub fn header(&self) -> &Header {
        &self.header
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// withhold the card at `position % 30`, keeping the order of the rest.
    /// `position` is the deck's place in the history, so masking many
    /// consecutive decks spreads targets evenly over slots.
    pub fn mask(&self, position: usize) -> Sample {
        let slot = position % DECK_SIZE;
        let target = self.cards[slot];
        let cards = self
            .cards
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != slot)
            .map(|(_, card)| *card)
            .collect::<Vec<_>>();
        let query = Query::new(self.header.clone(), cards).expect("30 slots minus one");
        Sample::new(query, target)
    }
}

impl Arbitrary for Deck {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let date = chrono::NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid date")
            + chrono::Days::new(rng.random_range(0..365));
        let header = Header::new(
            format!("{:08x}", rng.random::<u32>()).into(),
            date,
            Some(Hero::random()),
        );
        let cards = (0..DECK_SIZE).map(|_| Card::random()).collect();
        Self { header, cards }
    }
}
