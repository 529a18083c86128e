use mockito::{Matcher, Server, ServerGuard};
use napcli::{
    config::Config,
    management::{FavoritesCollection, collect_favorites},
    napster::{Authenticator, FavoritesClient, MetadataClient},
    types::TrackDetail,
};
use reqwest::blocking::Client;

// Helper: clients for the mock server, as the CLI wires them up
fn clients(server: &ServerGuard) -> (FavoritesClient, MetadataClient) {
    let config = Config::new("key", "secret")
        .with_user("user", "pass")
        .with_api_url(server.url());

    let http = Client::new();
    let auth = Authenticator::from_config(http.clone(), &config).unwrap();

    (
        FavoritesClient::new(http.clone(), config.api_v2_url(), auth),
        MetadataClient::new(http, config.api_v2_url(), &config.api_key),
    )
}

fn mock_token(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/oauth/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"tok","refresh_token":"ref","expires_in":3600}"#)
        .expect(1)
        .create()
}

fn mock_favorites_page(server: &mut ServerGuard, offset: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/v2.0/me/favorites")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), offset.into()),
            Matcher::UrlEncoded("limit".into(), "2".into()),
        ]))
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
}

fn favorite(id: &str) -> String {
    format!(
        r#"{{"id":"{}","date":"2017-01-01T00:00:00Z","type":"favorite","links":{{}}}}"#,
        id
    )
}

fn track_json(id: &str, artist: &str, album: &str, index: i32, name: &str) -> String {
    format!(
        r#"{{"type":"track","id":"{}","index":{},"disc":1,"name":"{}","artistName":"{}","albumName":"{}","formats":[]}}"#,
        id, index, name, artist, album
    )
}

#[test]
fn test_collect_favorites_walks_all_pages() {
    let mut server = Server::new();
    let token_mock = mock_token(&mut server);

    let page_one = format!(r#"{{"favorites":[{},{}]}}"#, favorite("tra.1"), favorite("tra.2"));
    let page_two = format!(r#"{{"favorites":[{}]}}"#, favorite("tra.3"));
    let first = mock_favorites_page(&mut server, "0", &page_one);
    let second = mock_favorites_page(&mut server, "2", &page_two);
    let last = mock_favorites_page(&mut server, "3", r#"{"favorites":[]}"#);

    let tracks_one = server
        .mock("GET", "/v2.0/tracks/tra.1,tra.2")
        .match_query(Matcher::UrlEncoded("apikey".into(), "key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"tracks":[{},{}]}}"#,
            track_json("tra.1", "B", "Y", 2, "Song2"),
            track_json("tra.2", "A", "X", 1, "Song1")
        ))
        .expect(1)
        .create();
    let tracks_two = server
        .mock("GET", "/v2.0/tracks/tra.3")
        .match_query(Matcher::UrlEncoded("apikey".into(), "key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"tracks":[{}]}}"#,
            track_json("tra.3", "A", "X", 3, "Song3")
        ))
        .expect(1)
        .create();

    let (mut favorites, metadata) = clients(&server);
    let mut pages = Vec::new();

    let collection = collect_favorites(&mut favorites, &metadata, 2, |offset, limit| {
        pages.push((offset, limit))
    })
    .unwrap();

    assert_eq!(pages, vec![(0, 2), (2, 2), (3, 2)]);
    assert_eq!(collection.artist_count(), 2);
    assert_eq!(collection.track_count(), 3);
    assert_eq!(
        collection.render(),
        "A\n  X\n    1: Song1\n    3: Song3\n\nB\n  Y\n    2: Song2\n\n"
    );

    token_mock.assert();
    first.assert();
    second.assert();
    last.assert();
    tracks_one.assert();
    tracks_two.assert();
}

#[test]
fn test_collect_favorites_stops_on_empty_page() {
    let mut server = Server::new();
    let token_mock = mock_token(&mut server);
    let empty = mock_favorites_page(&mut server, "0", r#"{"favorites":[]}"#);
    let tracks_mock = server
        .mock("GET", Matcher::Regex("^/v2.0/tracks".into()))
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let (mut favorites, metadata) = clients(&server);
    let collection = collect_favorites(&mut favorites, &metadata, 2, |_, _| {}).unwrap();

    assert!(collection.is_empty());
    assert_eq!(collection.render(), "");

    token_mock.assert();
    empty.assert();
    tracks_mock.assert();
}

#[test]
fn test_collect_favorites_aborts_on_first_failure() {
    let mut server = Server::new();
    let token_mock = mock_token(&mut server);
    let page = format!(r#"{{"favorites":[{}]}}"#, favorite("tra.1"));
    let first = mock_favorites_page(&mut server, "0", &page);
    let tracks_mock = server
        .mock("GET", "/v2.0/tracks/tra.1")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .expect(1)
        .create();
    let next_page = server
        .mock("GET", "/v2.0/me/favorites")
        .match_query(Matcher::UrlEncoded("offset".into(), "1".into()))
        .expect(0)
        .create();

    let (mut favorites, metadata) = clients(&server);
    let err = collect_favorites(&mut favorites, &metadata, 2, |_, _| {}).unwrap_err();

    assert!(matches!(err, napcli::Error::Api { status: 502, .. }));

    token_mock.assert();
    first.assert();
    tracks_mock.assert();
    next_page.assert();
}

#[test]
fn test_collection_report_to_writer() {
    let mut collection = FavoritesCollection::new();
    collection.insert(&TrackDetail {
        artist_name: "Needtobreathe".into(),
        album_name: "The Heat".into(),
        index: 4,
        name: "Return".into(),
        ..Default::default()
    });

    let mut out = Vec::new();
    collection.write_report(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Needtobreathe\n  The Heat\n    4: Return\n\n"
    );
}
