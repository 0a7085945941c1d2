//! Player registry: map leaderboard player names to configuration files in
//! the prompt collection.

pub mod default;
pub mod load;
pub mod types;

pub use load::*;
pub use types::*;
