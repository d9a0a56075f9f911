mod graph;
mod pair;
mod popularity;
mod profiles;
mod ranking;
mod recommendation;
mod scores;

pub use graph::*;
pub use pair::*;
pub use popularity::*;
pub use profiles::*;
pub use ranking::*;
pub use recommendation::*;
pub use scores::*;
