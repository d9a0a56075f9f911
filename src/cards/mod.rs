mod card;
mod class;
mod corpus;
mod entry;
mod hero;
mod rarity;
mod validity;

pub use card::*;
pub use class::*;
pub use corpus::*;
pub use entry::*;
pub use hero::*;
pub use rarity::*;
pub use validity::*;
