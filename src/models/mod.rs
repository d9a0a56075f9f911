//! Interchangeable recommenders.
//!
//! Three co-occurrence baselines and the ensemble share one contract,
//! [`Recommender`], and one registry, [`Kind`].
mod ensemble;
mod kind;
mod model;
mod naive;
mod popular;
mod recommender;
mod similarity;

pub use ensemble::*;
pub use kind::*;
pub use model::*;
pub use naive::*;
pub use popular::*;
pub use recommender::*;
pub use similarity::*;
