//! Data models

pub mod metadata;
pub mod prediction;
pub mod transaction;

pub use metadata::*;
pub use prediction::*;
pub use transaction::*;
