//! Crawl orchestration
//!
//! Drives one crawl run as a strict sequence: resolve the summoner, list
//! the day's match ids, then walk the ids in the order returned and fetch
//! whatever the cache does not already hold. Every failure aborts the run
//! immediately; nothing is swallowed. Reruns are cheap because already
//! cached matches are skipped.

use crate::cache::MatchCache;
use crate::data_source::{Region, RiotClient};
use crate::error::AppError;
use tracing::{info, instrument};

/// Outcome of one completed crawl run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Match ids returned for the date window.
    pub listed: usize,
    /// Matches fetched and stored during this run.
    pub fetched: usize,
    /// Matches skipped because the cache already held them.
    pub skipped: usize,
}

/// Sequential crawl driver owning the client and the cache.
#[derive(Debug)]
pub struct Crawler {
    client: RiotClient,
    cache: MatchCache,
}

impl Crawler {
    pub fn new(client: RiotClient, cache: MatchCache) -> Self {
        Crawler { client, cache }
    }

    /// Crawls all ARAM matches a summoner finished on one UTC day.
    ///
    /// # Arguments
    /// * `summoner_name` - The summoner whose history is crawled
    /// * `date` - The crawl date in `dd/mm/yyyy` format
    /// * `region` - Server region of the summoner
    ///
    /// # Returns
    /// * `Ok(CrawlSummary)` - Every listed match is now in the cache
    /// * `Err(AppError)` - The first failure encountered; earlier stores
    ///   remain committed
    #[instrument(skip(self))]
    pub async fn crawl(
        &self,
        summoner_name: &str,
        date: &str,
        region: Region,
    ) -> Result<CrawlSummary, AppError> {
        info!("Crawling summoner data for '{}'", summoner_name);
        let summoner = self.client.resolve_summoner(summoner_name, region).await?;

        info!("Crawling ARAM match history on {}", date);
        let match_ids = self
            .client
            .list_match_ids(&summoner.puuid, date, region)
            .await?;

        let mut summary = CrawlSummary {
            listed: match_ids.len(),
            fetched: 0,
            skipped: 0,
        };

        for match_id in &match_ids {
            let key = MatchCache::entry_key(match_id);
            if self.cache.exists(&key).await {
                info!("Skipping match '{}': cache hit", match_id);
                summary.skipped += 1;
                continue;
            }

            info!("Crawling match '{}'", match_id);
            let record = self.client.fetch_match(match_id, region).await?;
            let payload = serde_json::to_string_pretty(&record)?;
            self.cache.store(&key, &payload).await?;
            summary.fetched += 1;
        }

        info!(
            "Crawl finished: {} listed, {} fetched, {} skipped",
            summary.listed, summary.fetched, summary.skipped
        );
        Ok(summary)
    }
}
