//! Next-card recommendations for partially built collectible card game decks.
//!
//! A partial deck of 29 cards goes in, at most three legal cards come out.
//!
//! # Module Structure
//!
//! - `cards`: Card ids, heroes, rarities, the corpus and the validity rule
//! - `decks`: Full decks, partial-deck queries and masked samples
//! - `scoring`: Sparse scores, rankings and the fit-time indices
//! - `models`: Interchangeable recommenders and the ensemble
//! - `evaluation`: Leave-one-card-out masking and top-3 accuracy
//! - `load`: CSV readers for deck history, query sets and the corpus
//! - `save`: Optional JSON cache for fit artifacts
pub mod cards;
pub mod decks;
pub mod evaluation;
pub mod load;
pub mod models;
pub mod save;
pub mod scoring;

mod error;
pub use error::*;

#[cfg(test)]
mod fixtures;

use cards::Card;
use cards::Hero;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Per-signal and aggregated candidate scores.
pub type Score = f32;
/// Co-occurrence edge weights, popularity mass and ensemble weights.
pub type Weight = f32;
/// Mana cost of a card.
pub type Cost = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for benchmarks and property-style tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK SHAPE
// ============================================================================
/// Card slots in a complete deck.
pub const DECK_SIZE: usize = 30;
/// Card slots in a partial deck (one withheld).
pub const QUERY_SIZE: usize = DECK_SIZE - 1;
/// Recommendations returned per query.
pub const TOP_K: usize = 3;
/// Copies of a legendary card allowed in one deck.
pub const LEGENDARY_LIMIT: usize = 1;
/// Copies of any other card allowed in one deck.
pub const COPY_LIMIT: usize = 2;

// ============================================================================
// ENSEMBLE WEIGHTS
// Synergy dominates; mana and combo only nudge. Combo is inert until it has
// a real implementation.
// ============================================================================
pub const WEIGHT_SYNERGY: Weight = 10.0;
pub const WEIGHT_MANA: Weight = 0.1;
pub const WEIGHT_POPULARITY: Weight = 0.5;
pub const WEIGHT_COMBO: Weight = 0.0;

// ============================================================================
// MANA CURVE
// ============================================================================
/// Legendary that rewards an all-odd deck.
pub const ODD_LEGENDARY: Card = Card::new(89335);
/// Legendary that rewards an all-even deck.
pub const EVEN_LEGENDARY: Card = Card::new(89336);
/// Score given to the parity legendary when the deck is parity-pure without it.
pub const MANA_OVERRIDE: Score = 10.0;
/// Score for a card that would break the deck's parity purity.
pub const MANA_PARITY_PENALTY: Score = -5.0;
/// Score for a card whose cost lies within the deck's cost range.
pub const MANA_IN_RANGE: Score = 1.0;

// ============================================================================
// POPULARITY COLD START
// Singleton decks (no duplicates) get flexible value cards pushed up front.
// ============================================================================
/// Value cards boosted for every singleton deck.
pub const SINGLETON_STAPLES: [Card; 2] = [Card::new(1024971), Card::new(49622)];
/// Boost for `SINGLETON_STAPLES`.
pub const SINGLETON_STAPLE_BOOST: Score = 10.0;
/// Value cards boosted for singleton decks of one hero.
pub const CLASS_STAPLES: [(Hero, Card); 3] = [
    (Hero::Warlock, Card::new(49744)),
    (Hero::Mage, Card::new(49693)),
    (Hero::Priest, Card::new(49702)),
];
/// Boost for `CLASS_STAPLES`.
pub const CLASS_STAPLE_BOOST: Score = 5.0;
/// Bonus on top of popularity for a card the deck runs a single copy of.
pub const SINGLE_COPY_BOOST: Score = 2.0;

// ============================================================================
// RUNTIME
// ============================================================================
/// Predictions between progress log messages.
pub const PROGRESS_INTERVAL: usize = 100;
/// Default number of trailing history decks held out for validation.
pub const VALIDATION_SIZE: usize = 200;
/// Default minimum edge weight for a strong pairing in cluster exploration.
pub const CLUSTER_THRESHOLD: Weight = 650.0;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
