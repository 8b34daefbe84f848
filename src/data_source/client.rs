//! Riot API client
//!
//! One logical fetch per operation: wait on the throttle, issue a single
//! authenticated GET, classify the outcome. Transport failures and
//! not-found responses are distinct error variants so the caller can tell
//! "the remote declined" apart from "the network broke". There is no retry
//! policy; reruns are cheap because of the match cache.

use crate::config::Config;
use crate::constants::riot::API_TOKEN_HEADER;
use crate::constants::{DEFAULT_API_HOST_TEMPLATE, HTTP_POOL_MAX_IDLE_PER_HOST};
use crate::data_source::date_logic::day_window_utc;
use crate::data_source::models::{MatchRecord, SummonerInfo};
use crate::data_source::region::Region;
use crate::data_source::throttle::Throttle;
use crate::data_source::urls::{build_match_history_url, build_match_url, build_summoner_url};
use crate::error::AppError;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Rate-limited client for the summoner-v4 and match-v5 endpoints.
#[derive(Debug)]
pub struct RiotClient {
    client: Client,
    throttle: Throttle,
    api_token: String,
    host_template: String,
}

impl RiotClient {
    /// Creates a client from the application configuration, talking to the
    /// production Riot API hosts.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_host_template(config, DEFAULT_API_HOST_TEMPLATE)
    }

    /// Creates a client against a custom host template. A template without
    /// the `{server}` placeholder routes every endpoint family to one host,
    /// which is how the integration tests point the client at a mock server.
    pub fn with_host_template(config: &Config, host_template: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        Ok(RiotClient {
            client,
            throttle: Throttle::new(config.max_requests_per_minute)?,
            api_token: config.api_token.clone(),
            host_template: host_template.to_string(),
        })
    }

    /// Resolves a summoner name to its account identity.
    ///
    /// # Returns
    /// * `Ok(SummonerInfo)` - The resolved account, including its puuid
    /// * `Err(AppError)` - `SummonerNotFound` if the remote declined, or a
    ///   transport error
    #[instrument(skip(self))]
    pub async fn resolve_summoner(
        &self,
        summoner_name: &str,
        region: Region,
    ) -> Result<SummonerInfo, AppError> {
        let url = build_summoner_url(&self.host_template, region, summoner_name);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Summoner lookup for '{}' on {} failed with HTTP {}",
                summoner_name, region, status
            );
            return Err(AppError::summoner_not_found(
                summoner_name,
                region.to_string(),
                status.as_u16(),
            ));
        }

        let body = response.text().await?;
        let summoner: SummonerInfo = serde_json::from_str(&body)?;
        debug!("Resolved '{}' to puuid '{}'", summoner_name, summoner.puuid);
        Ok(summoner)
    }

    /// Lists the ARAM match ids a player finished within one UTC day.
    ///
    /// Only the first page (100 ids) is requested; a day with more ARAM
    /// games than that is truncated.
    ///
    /// # Arguments
    /// * `puuid` - The resolved player identity
    /// * `date` - The crawl date in `dd/mm/yyyy` format
    /// * `region` - Region routing the match-v5 call
    #[instrument(skip(self, puuid))]
    pub async fn list_match_ids(
        &self,
        puuid: &str,
        date: &str,
        region: Region,
    ) -> Result<Vec<String>, AppError> {
        let (start_epoch, end_epoch) = day_window_utc(date)?;
        let url = build_match_history_url(&self.host_template, region, puuid, start_epoch, end_epoch);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Match history for puuid '{}' failed with HTTP {}",
                puuid, status
            );
            return Err(AppError::match_history_not_found(puuid, status.as_u16()));
        }

        let body = response.text().await?;
        let match_ids: Vec<String> = serde_json::from_str(&body)?;
        if match_ids.len() as u32 >= crate::constants::riot::MATCH_PAGE_SIZE {
            debug!("Match history returned a full page; the list may be truncated");
        }
        info!("Found {} match(es) on {}", match_ids.len(), date);
        Ok(match_ids)
    }

    /// Fetches one match record by id.
    #[instrument(skip(self))]
    pub async fn fetch_match(
        &self,
        match_id: &str,
        region: Region,
    ) -> Result<MatchRecord, AppError> {
        let url = build_match_url(&self.host_template, region, match_id);
        let response = self.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            error!("Match '{}' fetch failed with HTTP {}", match_id, status);
            return Err(AppError::match_not_found(match_id, status.as_u16()));
        }

        let body = response.text().await?;
        let record: MatchRecord = serde_json::from_str(&body)?;
        Ok(record)
    }

    /// Issues one throttled, authenticated GET and maps transport-level
    /// failures to their typed variants. Status classification is left to
    /// the per-operation callers.
    async fn get(&self, url: &str) -> Result<Response, AppError> {
        self.throttle.acquire().await;
        debug!("GET {}", url);

        match self
            .client
            .get(url)
            .header(API_TOKEN_HEADER, &self.api_token)
            .send()
            .await
        {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Request failed for URL {}: {}", url, e);
                if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                }
            }
        }
    }
}
