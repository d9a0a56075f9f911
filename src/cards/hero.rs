use crate::Arbitrary;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;

/// The faction a deck is built for. Class cards are restricted to their own hero.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hero {
    Druid,
    Hunter,
    Mage,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl Hero {
    pub const fn all() -> [Self; 9] {
        [
            Self::Druid,
            Self::Hunter,
            Self::Mage,
            Self::Paladin,
            Self::Priest,
            Self::Rogue,
            Self::Shaman,
            Self::Warlock,
            Self::Warrior,
        ]
    }
    /// nullable column form: blank, `neutral` and `nan` mean no faction
    pub fn parse(s: &str) -> Result<Option<Self>, Error> {
        match s.trim().to_lowercase().as_str() {
            "" | "neutral" | "nan" | "none" => Ok(None),
            _ => Self::try_from(s).map(Some),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Druid => "druid",
            Self::Hunter => "hunter",
            Self::Mage => "mage",
            Self::Paladin => "paladin",
            Self::Priest => "priest",
            Self::Rogue => "rogue",
            Self::Shaman => "shaman",
            Self::Warlock => "warlock",
            Self::Warrior => "warrior",
        }
    }
}

impl TryFrom<&str> for Hero {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|hero| hero.name() == lower)
            .ok_or_else(|| Error::UnknownHero(s.to_string()))
    }
}

impl Arbitrary for Hero {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Self::all().choose(&mut rand::rng()).expect("non empty")
    }
}

impl std::fmt::Display for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Hero::try_from("Warlock"), Ok(Hero::Warlock));
        assert_eq!(Hero::try_from(" MAGE "), Ok(Hero::Mage));
        assert!(Hero::try_from("necromancer").is_err());
    }

    #[test]
    fn nullable_column() {
        assert_eq!(Hero::parse(""), Ok(None));
        assert_eq!(Hero::parse("NEUTRAL"), Ok(None));
        assert_eq!(Hero::parse("priest"), Ok(Some(Hero::Priest)));
    }
}
