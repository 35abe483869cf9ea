//! Blackout Rugby API access and the two projections of its player data.
//!
//! - `http`: the single fetch-and-validate routine shared by every caller
//! - `types`: envelope, raw players and normalized records
//! - `normalize`: raw players → [`types::PlayerRecord`]
//! - `summary`: raw players → display text

pub mod http;
pub mod normalize;
pub mod summary;
pub mod types;

pub use http::{BrClient, LastResponse};
pub use types::{PlayerCollection, PlayerRecord, RawPlayer, Skills};
