//! Collects a character's arena match history from an armory site and joins
//! every match with the per-character stats of its participants.

mod aggregate;
mod client;
mod config;
mod error;
mod model;
pub mod normalize;
pub(crate) mod scraper;

pub use aggregate::aggregate;
pub use client::ArenaClient;
pub use config::{ClientConfig, DEFAULT_MAX_CONCURRENT_FETCHES};
pub use error::{ArenaError, Result};
pub use model::*;
pub use self::scraper::details::DetailSource;
