//! Type-safe wrappers for basketball statistics identifiers.

pub mod ids;
pub mod time;


pub use ids::PlayerId;
pub use time::Season;
