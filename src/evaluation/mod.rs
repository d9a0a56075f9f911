//! Leave-one-card-out validation.
mod harness;
mod mask;
mod report;
mod submission;

pub use harness::*;
pub use mask::*;
pub use report::*;
pub use submission::*;
