use crate::Error;
use crate::cards::Card;

/// An unordered pair of cards, stored lower id first
/// so (a, b) and (b, a) are the same edge.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pair(Card, Card);

impl Pair {
    pub fn lo(&self) -> Card {
        self.0
    }
    pub fn hi(&self) -> Card {
        self.1
    }
}

impl From<(Card, Card)> for Pair {
    fn from((a, b): (Card, Card)) -> Self {
        match a <= b {
            true => Self(a, b),
            false => Self(b, a),
        }
    }
}

/// `(lo, hi)`
impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl TryFrom<&str> for Pair {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let broken = || Error::InvalidPair(s.to_string());
        let (a, b) = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .and_then(|s| s.split_once(','))
            .ok_or_else(broken)?;
        let a = Card::try_from(a).map_err(|_| broken())?;
        let b = Card::try_from(b).map_err(|_| broken())?;
        Ok(Self::from((a, b)))
    }
}
