use crate::Error;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Free,
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// copies allowed in a single deck
    pub fn limit(&self) -> usize {
        match self {
            Self::Legendary => crate::LEGENDARY_LIMIT,
            _ => crate::COPY_LIMIT,
        }
    }
}

impl TryFrom<&str> for Rarity {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "common" => Ok(Self::Common),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            _ => Err(Error::UnknownRarity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Common => write!(f, "common"),
            Self::Rare => write!(f, "rare"),
            Self::Epic => write!(f, "epic"),
            Self::Legendary => write!(f, "legendary"),
        }
    }
}
