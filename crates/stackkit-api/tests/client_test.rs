#![allow(clippy::unwrap_used)]
// Integration tests for `StackClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stackkit_api::{Badge, BadgeRank, Error, SiteState, StackClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, StackClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = StackClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn sites_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "name": "Stack Overflow",
                "audience": "professional and enthusiast programmers",
                "launch_date": 1_221_436_800,
                "site_state": "normal",
                "site_url": "https://stackoverflow.com",
                "logo_url": "https://cdn.sstatic.net/Sites/stackoverflow/Img/logo.png",
                "icon_url": "https://cdn.sstatic.net/Sites/stackoverflow/Img/apple-touch-icon.png",
                "favicon_url": "https://cdn.sstatic.net/Sites/stackoverflow/Img/favicon.ico",
                "api_site_parameter": "stackoverflow"
            },
            {
                "name": "Ask Ubuntu",
                "audience": "Ubuntu users and developers",
                "launch_date": 1_286_668_800,
                "site_state": "normal",
                "site_url": "https://askubuntu.com",
                "api_site_parameter": "askubuntu"
            },
            {
                "name": "Genealogy & Family History",
                "audience": "genealogists",
                "launch_date": 1_349_740_800,
                "site_state": "open_beta",
                "api_site_parameter": "genealogy"
            }
        ],
        "has_more": false
    })
}

fn badge_body(rank: u8) -> serde_json::Value {
    json!({
        "items": [{
            "badge_id": 183,
            "name": "Necromancer",
            "description": "Answered a question more than 60 days later with score of 5 or more",
            "rank": rank,
            "award_count": 1024,
            "tag_based": false
        }],
        "has_more": false
    })
}

// ── Site tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    let sites = client.sites().await.unwrap();

    assert_eq!(sites.len(), 3);
    assert_eq!(sites[0].name, "Stack Overflow");
    assert_eq!(sites[0].site_state, SiteState::Normal);
    assert_eq!(
        sites[0].site_url.as_ref().map(Url::as_str),
        Some("https://stackoverflow.com/")
    );
    assert_eq!(sites[0].api_site_parameter.as_deref(), Some("stackoverflow"));
    assert_eq!(sites[2].site_state, SiteState::OpenBeta);
    assert!(sites[2].site_url.is_none());
}

#[tokio::test]
async fn test_site_named_like_finds_best_match() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    let site = client.site_named_like("ubuntu").await.unwrap().unwrap();
    assert_eq!(site.name, "Ask Ubuntu");

    let site = client.site_named_like("Stack Overflow").await.unwrap().unwrap();
    assert_eq!(site.api_site_parameter.as_deref(), Some("stackoverflow"));
}

#[tokio::test]
async fn test_site_named_like_no_match_is_ok_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    let result = client.site_named_like("nonexistent-xyz").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_site_named_like_empty_name_fails_before_any_request() {
    // No mock mounted: a request would fail with a connection error, so an
    // InvalidArgument result proves the precondition fired first.
    let (_server, client) = setup().await;

    let result = client.site_named_like("  ").await;

    assert!(
        matches!(result, Err(Error::InvalidArgument { .. })),
        "expected InvalidArgument, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unknown_site_state_is_decode_error() {
    let (server, client) = setup().await;

    let body = json!({
        "items": [{
            "name": "Area 51",
            "audience": "proposal voters",
            "launch_date": 0,
            "site_state": "staging"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let result = client.sites().await;

    assert!(
        matches!(result, Err(Error::Decode { .. })),
        "expected Decode error, got: {result:?}"
    );
}

// ── Badge tests ─────────────────────────────────────────────────────

async fn first_site(client: &StackClient) -> stackkit_api::Site {
    client.sites().await.unwrap().remove(0)
}

#[tokio::test]
async fn test_list_badges() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/badges"))
        .and(query_param("site", "stackoverflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(badge_body(1)))
        .mount(&server)
        .await;

    let site = first_site(&client).await;
    let badges = client.badges(&site).await.unwrap();

    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].id, 183);
    assert_eq!(badges[0].name, "Necromancer");
    assert_eq!(badges[0].rank, BadgeRank::Silver);
    assert_eq!(badges[0].award_count, 1024);
    assert!(!badges[0].tag_based);
}

#[tokio::test]
async fn test_fetch_badge_by_ref() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/badges/183"))
        .and(query_param("site", "stackoverflow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(badge_body(2)))
        .mount(&server)
        .await;

    let site = first_site(&client).await;
    let badge_ref = Badge::with_site(&site, "183").unwrap();
    let badge = client.badge(&badge_ref).await.unwrap().unwrap();

    assert_eq!(badge.id, 183);
    assert_eq!(badge.rank, BadgeRank::Gold);
}

#[tokio::test]
async fn test_fetch_unknown_badge_is_ok_none() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/badges/9999999"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "items": [], "has_more": false })),
        )
        .mount(&server)
        .await;

    let site = first_site(&client).await;
    let badge_ref = Badge::with_site(&site, "9999999").unwrap();
    let badge = client.badge(&badge_ref).await.unwrap();

    assert!(badge.is_none());
}

#[tokio::test]
async fn test_out_of_range_rank_is_decode_error_never_defaulted() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/badges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(badge_body(7)))
        .mount(&server)
        .await;

    let site = first_site(&client).await;
    let result = client.badges(&site).await;

    match result {
        Err(Error::Decode { ref message, .. }) => {
            assert!(
                message.contains("unrecognized badge rank"),
                "unexpected decode message: {message}"
            );
        }
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

// ── Error envelope tests ────────────────────────────────────────────

#[tokio::test]
async fn test_api_error_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_id": 400,
            "error_name": "bad_parameter",
            "error_message": "site is required"
        })))
        .mount(&server)
        .await;

    let result = client.sites().await;

    match result {
        Err(Error::Api {
            status,
            error_id,
            ref error_name,
            ref message,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(error_id, Some(400));
            assert_eq!(error_name.as_deref(), Some("bad_parameter"));
            assert_eq!(message, "site is required");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_name_alone_is_still_an_api_error() {
    let (server, client) = setup().await;

    // Some failures arrive on a 200 with only `error_name` set; that must
    // never read as a successful empty listing.
    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "error_name": "throttle_violation"
        })))
        .mount(&server)
        .await;

    let result = client.sites().await;

    match result {
        Err(Error::Api {
            status,
            ref error_name,
            ref message,
            ..
        }) => {
            assert_eq!(status, 200);
            assert_eq!(error_name.as_deref(), Some("throttle_violation"));
            assert_eq!(message, "throttle_violation");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_bare_503_is_api_error_and_transient() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client.sites().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 503, .. }));
    assert!(err.is_transient());
    assert_eq!(err.api_error_id(), None);
}

// ── Concurrency tests ───────────────────────────────────────────────

#[tokio::test]
async fn test_concurrent_requests_each_resolve_exactly_once() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sites_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/badges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(badge_body(0)))
        .mount(&server)
        .await;

    let site = first_site(&client).await;

    // Three independent in-flight requests; each future resolves to a
    // single terminal value and failures never leak across requests.
    let (sites, badges, lookup) = tokio::join!(
        client.sites(),
        client.badges(&site),
        client.site_named_like("ubuntu"),
    );

    assert_eq!(sites.unwrap().len(), 3);
    assert_eq!(badges.unwrap()[0].rank, BadgeRank::Bronze);
    assert_eq!(lookup.unwrap().unwrap().name, "Ask Ubuntu");
}
