//! Statistics over cached match records
//!
//! Pure data reduction: no network calls beyond resolving the summoner
//! name, everything else reads the local cache. A cache entry that no
//! longer decodes into the match schema fails the whole recap with the
//! entry named, rather than being silently dropped from the totals.

use crate::cache::MatchCache;
use crate::constants::riot::PORO_TOSS_SPELL_ID;
use crate::data_source::models::MatchRecord;
use crate::data_source::{Region, RiotClient};
use crate::error::AppError;
use std::fmt;
use tracing::{info, instrument};

/// Aggregated statistics for one player over the cached matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecapSummary {
    /// Cached matches the player participated in.
    pub matches: usize,
    /// Total seconds spent in those matches.
    pub seconds_in_game: u64,
    /// Total poro toss casts across the player's spell slots.
    pub poro_casts: u64,
}

impl fmt::Display for RecapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  - Number of matches: {}", self.matches)?;
        writeln!(
            f,
            "  - Time spent in game: {}",
            format_play_time(self.seconds_in_game)
        )?;
        write!(f, "  - Poro casts: {}", self.poro_casts)
    }
}

/// Recap driver: resolves the summoner, then aggregates the cache.
#[derive(Debug)]
pub struct Recap {
    client: RiotClient,
    cache: MatchCache,
}

impl Recap {
    pub fn new(client: RiotClient, cache: MatchCache) -> Self {
        Recap { client, cache }
    }

    /// Computes the recap for a summoner over every cached match record.
    #[instrument(skip(self))]
    pub async fn run(
        &self,
        summoner_name: &str,
        region: Region,
    ) -> Result<RecapSummary, AppError> {
        info!("Crawling summoner data for '{}'", summoner_name);
        let summoner = self.client.resolve_summoner(summoner_name, region).await?;

        info!("Filtering cached matches");
        let matches = collect_matches(&self.cache, &summoner.puuid).await?;

        info!("Computing statistics over {} match(es)", matches.len());
        Ok(summarize(&matches, &summoner.puuid))
    }
}

/// Decodes every cache entry and keeps the matches `puuid` took part in.
///
/// # Returns
/// * `Ok(Vec<MatchRecord>)` - The player's matches, cache order
/// * `Err(AppError)` - `MatchSchema` naming the first undecodable entry,
///   or an I/O error reading the cache
pub async fn collect_matches(
    cache: &MatchCache,
    puuid: &str,
) -> Result<Vec<MatchRecord>, AppError> {
    let mut matches = Vec::new();
    for path in cache.entries().await? {
        let contents = cache.read(&path).await?;
        let record: MatchRecord = serde_json::from_str(&contents)
            .map_err(|e| AppError::match_schema(path.display().to_string(), e.to_string()))?;
        if record.has_participant(puuid) {
            matches.push(record);
        }
    }
    Ok(matches)
}

/// Reduces a set of match records to the player's totals.
pub fn summarize(matches: &[MatchRecord], puuid: &str) -> RecapSummary {
    let seconds_in_game = matches.iter().map(|m| m.info.game_duration).sum();
    let poro_casts = matches
        .iter()
        .flat_map(|m| &m.info.participants)
        .filter(|p| p.puuid == puuid)
        .map(|p| p.casts_of(PORO_TOSS_SPELL_ID))
        .sum();

    RecapSummary {
        matches: matches.len(),
        seconds_in_game,
        poro_casts,
    }
}

/// Renders a duration in seconds as `Xd Xh Xm Xs`.
pub fn format_play_time(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let seconds = seconds % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}
