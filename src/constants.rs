//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Default maximum number of API requests issued per minute
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 40;

/// Host template for the Riot API; `{server}` is replaced with the
/// platform or regional subdomain depending on the endpoint family
pub const DEFAULT_API_HOST_TEMPLATE: &str = "https://{server}.api.riotgames.com/lol";

/// Environment variable prefix used for configuration overrides
pub const ENV_PREFIX: &str = "RECAP";

/// Suffix appended to match ids to form cache entry keys
pub const CACHE_ENTRY_SUFFIX: &str = ".json";

/// Riot API constants
pub mod riot {
    /// Queue id of the ARAM game mode in the match-v5 API
    pub const ARAM_QUEUE_ID: u32 = 450;

    /// Match ids fetched per history request. The match-v5 API caps the
    /// page size at 100; a single page is fetched per crawl.
    pub const MATCH_PAGE_SIZE: u32 = 100;

    /// Summoner spell id of the poro toss ("Mark") available on the
    /// Howling Abyss
    pub const PORO_TOSS_SPELL_ID: i64 = 32;

    /// Header carrying the API credential
    pub const API_TOKEN_HEADER: &str = "X-Riot-Token";
}

/// Seconds in one calendar day; the crawl window is exactly one day
pub const SECONDS_PER_DAY: i64 = 86_400;
