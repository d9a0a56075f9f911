mod deck;
mod header;
mod query;
mod sample;

pub use deck::*;
pub use header::*;
pub use query::*;
pub use sample::*;
