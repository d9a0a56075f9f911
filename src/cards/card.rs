use crate::Arbitrary;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// A card id. Every table in the crate is keyed by it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u32);

impl Card {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl From<u32> for Card {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
impl From<Card> for u32 {
    fn from(card: Card) -> u32 {
        card.0
    }
}

/// parses plain integers, and the `49622.0` form that
/// float-typed csv columns produce
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let s = s.trim();
        s.parse::<u32>()
            .ok()
            .or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|x| x.fract() == 0.0 && *x >= 0.0 && *x <= u32::MAX as f64)
                    .map(|x| x as u32)
            })
            .map(Self)
            .ok_or_else(|| Error::InvalidCard(s.to_string()))
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(1..=1024))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_and_float_forms() {
        assert_eq!(Card::try_from("49622"), Ok(Card::new(49622)));
        assert_eq!(Card::try_from(" 49622.0 "), Ok(Card::new(49622)));
        assert!(Card::try_from("49622.5").is_err());
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("-3").is_err());
    }
}
