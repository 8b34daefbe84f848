//! ARAM Match History Crawler and Recap Library
//!
//! This library provides functionality for crawling a summoner's ARAM
//! match history from the Riot Games API into a durable local cache, and
//! for aggregating statistics over the cached records. API calls are
//! rate-limited to a configurable requests-per-minute cap.
//!
//! # Examples
//!
//! ```rust,no_run
//! use aram_recap::cache::MatchCache;
//! use aram_recap::config::Config;
//! use aram_recap::crawler::Crawler;
//! use aram_recap::data_source::{Region, RiotClient};
//! use aram_recap::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = RiotClient::new(&config)?;
//!     let cache = MatchCache::open(config.resolved_cache_dir()).await?;
//!
//!     let summary = Crawler::new(client, cache)
//!         .crawl("Faker", "01/01/2024", Region::Euw)
//!         .await?;
//!     println!(
//!         "{} fetched, {} already cached",
//!         summary.fetched, summary.skipped
//!     );
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod constants;
pub mod crawler;
pub mod data_source;
pub mod error;
pub mod recap;

// Re-export commonly used types for convenience
pub use cache::MatchCache;
pub use config::Config;
pub use crawler::{CrawlSummary, Crawler};
pub use data_source::{MatchRecord, Region, RiotClient, SummonerInfo, Throttle};
pub use error::AppError;
pub use recap::{Recap, RecapSummary};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
