use crate::cards::Card;

/// Domain failures. None of these abort a batch: callers score the
/// affected candidate as zero, skip it, or skip the offending row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("card {0} is not in the corpus")]
    UnknownCard(Card),
    #[error("card {0} has no comparable deck cards")]
    EmptyComparison(Card),
    #[error("only {found} of {wanted} valid candidates")]
    InsufficientCandidates { found: usize, wanted: usize },
    #[error("row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },
    #[error("expected {expected} card slots, found {found}")]
    DeckSize { expected: usize, found: usize },
    #[error("unknown hero {0:?}")]
    UnknownHero(String),
    #[error("unknown rarity {0:?}")]
    UnknownRarity(String),
    #[error("unknown model {0:?}")]
    UnknownModel(String),
    #[error("invalid card id {0:?}")]
    InvalidCard(String),
    #[error("invalid card pair {0:?}")]
    InvalidPair(String),
}

impl Error {
    /// attach a line number, turning any parse failure into a malformed row
    pub fn at(self, line: usize) -> Self {
        match self {
            Self::MalformedRow { reason, .. } => Self::MalformedRow { line, reason },
            other => Self::MalformedRow {
                line,
                reason: other.to_string(),
            },
        }
    }
}
