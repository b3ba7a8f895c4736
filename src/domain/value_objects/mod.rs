//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod name;
mod tier;

pub use hash::ContentHash;
pub use name::{normalize_name, title_case, title_from_filename};
pub use tier::Tier;
