use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Remote responded but declined the request
    #[error("Summoner '{name}' not found on {region} (HTTP {status})")]
    SummonerNotFound {
        name: String,
        region: String,
        status: u16,
    },

    #[error("Match history unavailable for puuid '{puuid}' (HTTP {status})")]
    MatchHistoryNotFound { puuid: String, status: u16 },

    #[error("Match '{match_id}' not found (HTTP {status})")]
    MatchNotFound { match_id: String, status: u16 },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Cached payloads that no longer decode into the match schema
    #[error("Match record '{entry}' does not match the expected schema: {message}")]
    MatchSchema { entry: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a summoner-not-found error from a non-success HTTP status
    pub fn summoner_not_found(
        name: impl Into<String>,
        region: impl Into<String>,
        status: u16,
    ) -> Self {
        Self::SummonerNotFound {
            name: name.into(),
            region: region.into(),
            status,
        }
    }

    /// Create a match-history-not-found error from a non-success HTTP status
    pub fn match_history_not_found(puuid: impl Into<String>, status: u16) -> Self {
        Self::MatchHistoryNotFound {
            puuid: puuid.into(),
            status,
        }
    }

    /// Create a match-not-found error from a non-success HTTP status
    pub fn match_not_found(match_id: impl Into<String>, status: u16) -> Self {
        Self::MatchNotFound {
            match_id: match_id.into(),
            status,
        }
    }

    /// Create a network timeout error for a specific URL
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error with details
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a schema error for a cache entry that failed to decode
    pub fn match_schema(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MatchSchema {
            entry: entry.into(),
            message: message.into(),
        }
    }

    /// True for errors where the remote responded but had no data for the
    /// request, as opposed to transport-level failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SummonerNotFound { .. }
                | Self::MatchHistoryNotFound { .. }
                | Self::MatchNotFound { .. }
        )
    }

    /// True for transport-level failures (DNS, timeout, connection reset).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkTimeout { .. } | Self::NetworkConnection { .. } | Self::ApiFetch(_)
        )
    }
}
