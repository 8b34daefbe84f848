//! URL building utilities for Riot API endpoints

use crate::constants::riot::{ARAM_QUEUE_ID, MATCH_PAGE_SIZE};
use crate::data_source::region::Region;

/// Placeholder in the host template replaced by an endpoint subdomain
const SERVER_PLACEHOLDER: &str = "{server}";

/// Substitutes the endpoint subdomain into a host template.
///
/// Templates without the placeholder are returned unchanged, which lets
/// tests route every endpoint family to a single mock server.
fn resolve_host(host_template: &str, subdomain: &str) -> String {
    host_template.replace(SERVER_PLACEHOLDER, subdomain)
}

/// Builds the summoner-v4 URL resolving a summoner name to its account.
/// Routed through the region's platform subdomain.
///
/// # Example
/// ```
/// use aram_recap::data_source::Region;
/// use aram_recap::data_source::urls::build_summoner_url;
///
/// let url = build_summoner_url(
///     "https://{server}.api.riotgames.com/lol",
///     Region::Euw,
///     "Faker",
/// );
/// assert_eq!(
///     url,
///     "https://euw1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Faker"
/// );
/// ```
pub fn build_summoner_url(host_template: &str, region: Region, summoner_name: &str) -> String {
    let host = resolve_host(host_template, region.platform_subdomain());
    format!("{host}/summoner/v4/summoners/by-name/{summoner_name}")
}

/// Builds the match-v5 URL listing a player's ARAM match ids inside an
/// epoch-second window. Routed through the region's regional subdomain.
///
/// The query pins the ARAM queue and the maximum page size; only the first
/// page is ever requested.
///
/// # Example
/// ```
/// use aram_recap::data_source::Region;
/// use aram_recap::data_source::urls::build_match_history_url;
///
/// let url = build_match_history_url(
///     "https://{server}.api.riotgames.com/lol",
///     Region::Euw,
///     "puuid-123",
///     1704067200,
///     1704153600,
/// );
/// assert_eq!(
///     url,
///     "https://europe.api.riotgames.com/lol/match/v5/matches/by-puuid/puuid-123/ids\
///      ?queue=450&start=0&count=100&startTime=1704067200&endTime=1704153600"
/// );
/// ```
pub fn build_match_history_url(
    host_template: &str,
    region: Region,
    puuid: &str,
    start_epoch: i64,
    end_epoch: i64,
) -> String {
    let host = resolve_host(host_template, region.regional_subdomain());
    format!(
        "{host}/match/v5/matches/by-puuid/{puuid}/ids\
         ?queue={ARAM_QUEUE_ID}&start=0&count={MATCH_PAGE_SIZE}\
         &startTime={start_epoch}&endTime={end_epoch}"
    )
}

/// Builds the match-v5 URL fetching one match record.
/// Routed through the region's regional subdomain.
///
/// # Example
/// ```
/// use aram_recap::data_source::Region;
/// use aram_recap::data_source::urls::build_match_url;
///
/// let url = build_match_url(
///     "https://{server}.api.riotgames.com/lol",
///     Region::Euw,
///     "EUW1_6859000000",
/// );
/// assert_eq!(
///     url,
///     "https://europe.api.riotgames.com/lol/match/v5/matches/EUW1_6859000000"
/// );
/// ```
pub fn build_match_url(host_template: &str, region: Region, match_id: &str) -> String {
    let host = resolve_host(host_template, region.regional_subdomain());
    format!("{host}/match/v5/matches/{match_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_vs_regional_routing_for_same_region() {
        let template = "https://{server}.api.riotgames.com/lol";

        let summoner_url = build_summoner_url(template, Region::Euw, "Faker");
        assert!(summoner_url.starts_with("https://euw1."));

        let history_url = build_match_history_url(template, Region::Euw, "p", 0, 86_400);
        assert!(history_url.starts_with("https://europe."));

        let match_url = build_match_url(template, Region::Euw, "EUW1_1");
        assert!(match_url.starts_with("https://europe."));
    }

    #[test]
    fn test_history_query_pins_queue_and_page_size() {
        let url = build_match_history_url(
            "https://{server}.api.riotgames.com/lol",
            Region::Na,
            "puuid-abc",
            100,
            200,
        );
        assert!(url.contains("queue=450"));
        assert!(url.contains("start=0"));
        assert!(url.contains("count=100"));
        assert!(url.contains("startTime=100"));
        assert!(url.contains("endTime=200"));
    }

    #[test]
    fn test_template_without_placeholder_routes_to_single_host() {
        let template = "http://127.0.0.1:8080";
        let summoner_url = build_summoner_url(template, Region::Euw, "Faker");
        let match_url = build_match_url(template, Region::Euw, "EUW1_1");
        assert!(summoner_url.starts_with("http://127.0.0.1:8080/"));
        assert!(match_url.starts_with("http://127.0.0.1:8080/"));
    }
}
