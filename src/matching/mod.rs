//! Name normalization and matching
//!
//! Everything that decides whether two spellings refer to the same person.

pub mod matcher;
pub mod normalize;
pub mod roster;

pub use matcher::{find_best_match, similarity, MATCH_THRESHOLD};
pub use normalize::{normalize, tokens};
pub use roster::{MatchKind, Roster};
