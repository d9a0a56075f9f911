use super::hero::Hero;

/// Who may play a card.
///
/// `Other` covers class tags no hero answers to (`DREAM`, `DEATHKNIGHT`):
/// such a card only passes when the deck's hero is unknown.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Class {
    Neutral,
    Hero(Hero),
    Other,
}

impl Class {
    /// nullable metadata column; never fails
    pub fn parse(s: &str) -> Self {
        match Hero::parse(s) {
            Ok(Some(hero)) => Self::Hero(hero),
            Ok(None) => Self::Neutral,
            Err(_) => Self::Other,
        }
    }
    pub fn hero(&self) -> Option<Hero> {
        match self {
            Self::Hero(hero) => Some(*hero),
            _ => None,
        }
    }
    pub fn admits(&self, hero: Option<Hero>) -> bool {
        match (self, hero) {
            (Self::Neutral, _) => true,
            (_, None) => true,
            (Self::Hero(class), Some(hero)) => *class == hero,
            (Self::Other, Some(_)) => false,
        }
    }
}

impl From<Option<Hero>> for Class {
    fn from(hero: Option<Hero>) -> Self {
        hero.map(Self::Hero).unwrap_or(Self::Neutral)
    }
}
