//! Data models shared between the repository and the API layer.

mod member;
mod scan;
mod stats;

pub use member::*;
pub use scan::*;
pub use stats::*;
