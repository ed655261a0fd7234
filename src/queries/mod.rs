//! Pure query operations over the cached datasets.
//!
//! Every function here is a single-shot computation over row slices; no
//! I/O, no state, no mutation of the datasets. Validation failures come
//! back as [`ScorebookError::InvalidInput`](crate::error::ScorebookError)
//! carrying the caller-facing message.

pub mod batting;
pub mod seasons;
pub mod teams;
pub mod types;

pub use batting::{batter_rankings, batter_vs_teams};
pub use seasons::{season_winners, venues};
pub use teams::{head_to_head, list_teams, team_at_venue, team_record};
pub use types::{BatterRank, HeadToHead, TeamList, TeamRecord, VenueRecord};
