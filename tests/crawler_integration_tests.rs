use aram_recap::{
    cache::MatchCache,
    config::Config,
    crawler::Crawler,
    data_source::{Region, RiotClient},
    error::AppError,
    recap::Recap,
};
use serde_json::json;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

fn test_config(cache_dir: &str) -> Config {
    Config {
        api_token: "RGAPI-test-token".to_string(),
        cache_dir: Some(cache_dir.to_string()),
        log_file_path: None,
        http_timeout_seconds: 5,
        // Effectively unthrottled so tests run fast
        max_requests_per_minute: 60_000,
    }
}

async fn test_client(server: &MockServer, cache_dir: &str) -> RiotClient {
    RiotClient::with_host_template(&test_config(cache_dir), &server.uri()).unwrap()
}

fn match_record(match_id: &str, puuid: &str, duration: u64, poro_casts: u64) -> serde_json::Value {
    json!({
        "metadata": {
            "dataVersion": "2",
            "matchId": match_id,
            "participants": [puuid, "someone-else"]
        },
        "info": {
            "gameDuration": duration,
            "gameMode": "ARAM",
            "participants": [
                {
                    "puuid": puuid,
                    "summoner1Id": 32,
                    "summoner1Casts": poro_casts,
                    "summoner2Id": 4,
                    "summoner2Casts": 1
                },
                {
                    "puuid": "someone-else",
                    "summoner1Id": 6,
                    "summoner1Casts": 0,
                    "summoner2Id": 7,
                    "summoner2Casts": 2
                }
            ]
        }
    })
}

async fn mount_summoner(server: &MockServer, name: &str, puuid: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/summoner/v4/summoners/by-name/{name}")))
        .and(header("X-Riot-Token", "RGAPI-test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "puuid": puuid,
            "name": name
        })))
        .mount(server)
        .await;
}

async fn mount_match_ids(server: &MockServer, puuid: &str, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/match/v5/matches/by-puuid/{puuid}/ids")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
        .mount(server)
        .await;
}

/// Full crawl against a mocked API: everything listed ends up in the cache.
#[tokio::test]
async fn test_crawl_stores_all_listed_matches() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    mount_summoner(&server, "Faker", "puuid-a").await;
    mount_match_ids(&server, "puuid-a", &["EUW1_1", "EUW1_2"]).await;
    for id in ["EUW1_1", "EUW1_2"] {
        Mock::given(method("GET"))
            .and(path(format!("/match/v5/matches/{id}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(match_record(id, "puuid-a", 1200, 5)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server, &cache_path).await;
    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    let summary = Crawler::new(client, cache.clone())
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();

    assert_eq!(summary.listed, 2);
    assert_eq!(summary.fetched, 2);
    assert_eq!(summary.skipped, 0);
    assert!(cache.exists("EUW1_1.json").await);
    assert!(cache.exists("EUW1_2.json").await);

    // Stored payloads keep fields the typed schema does not name
    let entries = cache.entries().await.unwrap();
    let contents = cache.read(&entries[0]).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["info"]["gameMode"], "ARAM");
}

/// The match history query pins the ARAM queue, the page size, and the
/// exact UTC day window for the requested date.
#[tokio::test]
async fn test_match_history_query_parameters() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    mount_summoner(&server, "Faker", "puuid-a").await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/by-puuid/puuid-a/ids"))
        .and(query_param("queue", "450"))
        .and(query_param("count", "100"))
        .and(query_param("startTime", "1704067200"))
        .and(query_param("endTime", "1704153600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, &cache_path).await;
    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    let summary = Crawler::new(client, cache)
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();
    assert_eq!(summary.listed, 0);
}

/// A pre-populated cache entry suppresses its fetch entirely.
#[tokio::test]
async fn test_cached_match_is_skipped() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    cache
        .store(
            "EUW1_1.json",
            &match_record("EUW1_1", "puuid-a", 900, 2).to_string(),
        )
        .await
        .unwrap();

    mount_summoner(&server, "Faker", "puuid-a").await;
    mount_match_ids(&server, "puuid-a", &["EUW1_1", "EUW1_2"]).await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_record("EUW1_2", "puuid-a", 1100, 3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, &cache_path).await;
    let summary = Crawler::new(client, cache.clone())
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();

    assert_eq!(summary.fetched, 1);
    assert_eq!(summary.skipped, 1);
    assert!(cache.exists("EUW1_2.json").await);
}

/// A failing match fetch aborts the run: earlier stores stay committed and
/// later ids are never requested.
#[tokio::test]
async fn test_match_fetch_failure_aborts_run() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    mount_summoner(&server, "Faker", "puuid-a").await;
    mount_match_ids(&server, "puuid-a", &["EUW1_1", "EUW1_2", "EUW1_3"]).await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_record("EUW1_1", "puuid-a", 900, 1)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_2"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server, &cache_path).await;
    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    let err = Crawler::new(client, cache.clone())
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap_err();

    match err {
        AppError::MatchNotFound { match_id, status } => {
            assert_eq!(match_id, "EUW1_2");
            assert_eq!(status, 404);
        }
        other => panic!("expected MatchNotFound, got {other:?}"),
    }
    assert!(cache.exists("EUW1_1.json").await);
    assert!(!cache.exists("EUW1_2.json").await);
    assert!(!cache.exists("EUW1_3.json").await);
}

/// A summoner that fails to resolve aborts before any history call.
#[tokio::test]
async fn test_unresolvable_summoner_aborts_before_listing() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    Mock::given(method("GET"))
        .and(path("/summoner/v4/summoners/by-name/Nobody"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/by-puuid/puuid-a/ids"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server, &cache_path).await;
    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    let err = Crawler::new(client, cache)
        .crawl("Nobody", "01/01/2024", Region::Euw)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::SummonerNotFound { .. }));
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Nobody"));
}

/// An unreachable host is a transport error, not a not-found error.
#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Bind and immediately release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();
    let client =
        RiotClient::with_host_template(&test_config(&cache_path), &format!("http://{addr}"))
            .unwrap();

    let err = client.resolve_summoner("Faker", Region::Euw).await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert!(!err.is_not_found());
}

/// Crawl-then-recap round trip over the same cache.
#[tokio::test]
async fn test_recap_over_crawled_cache() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    mount_summoner(&server, "Faker", "puuid-a").await;
    mount_match_ids(&server, "puuid-a", &["EUW1_1", "EUW1_2"]).await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_record("EUW1_1", "puuid-a", 1000, 4)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_record("EUW1_2", "puuid-a", 2000, 6)),
        )
        .mount(&server)
        .await;

    let cache = MatchCache::open(cache_dir.path()).await.unwrap();
    let crawl_client = test_client(&server, &cache_path).await;
    Crawler::new(crawl_client, cache.clone())
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();

    let recap_client = test_client(&server, &cache_path).await;
    let summary = Recap::new(recap_client, cache)
        .run("Faker", Region::Euw)
        .await
        .unwrap();

    assert_eq!(summary.matches, 2);
    assert_eq!(summary.seconds_in_game, 3000);
    assert_eq!(summary.poro_casts, 10);
}

/// Rerunning a crawl after a full pass fetches nothing.
#[tokio::test]
async fn test_rerun_is_idempotent() {
    let server = MockServer::start().await;
    let cache_dir = tempdir().unwrap();
    let cache_path = cache_dir.path().to_string_lossy().to_string();

    mount_summoner(&server, "Faker", "puuid-a").await;
    mount_match_ids(&server, "puuid-a", &["EUW1_1"]).await;
    Mock::given(method("GET"))
        .and(path("/match/v5/matches/EUW1_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(match_record("EUW1_1", "puuid-a", 800, 0)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let cache = MatchCache::open(cache_dir.path()).await.unwrap();

    let client = test_client(&server, &cache_path).await;
    let first = Crawler::new(client, cache.clone())
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();
    assert_eq!(first.fetched, 1);

    let client = test_client(&server, &cache_path).await;
    let second = Crawler::new(client, cache)
        .crawl("Faker", "01/01/2024", Region::Euw)
        .await
        .unwrap();
    assert_eq!(second.fetched, 0);
    assert_eq!(second.skipped, 1);
}
