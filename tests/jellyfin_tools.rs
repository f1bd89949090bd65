//! End-to-end tool calls against a mocked Jellyfin server.

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jellyfin_mcp_server::core::JellyfinConfig;
use jellyfin_mcp_server::domains::tools::{ToolContext, ToolError, ToolRegistry};

const API_KEY: &str = "secret-key";
const USER_ID: &str = "user-1";

fn registry_for(url: &str) -> ToolRegistry {
    let jellyfin = JellyfinConfig::new(url, API_KEY, USER_ID);
    let ctx = ToolContext::connect(jellyfin).unwrap();
    ToolRegistry::new(Arc::new(ctx))
}

#[tokio::test]
async fn test_search_media_projects_songs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Items"))
        .and(query_param("searchTerm", "money"))
        .and(query_param("IncludeItemTypes", "Audio"))
        .and(query_param("Recursive", "true"))
        .and(query_param("Limit", "50"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TotalRecordCount": 1,
            "Items": [{
                "Id": "song1",
                "Name": "Money",
                "Type": "Audio",
                "Artists": ["Pink Floyd"],
                "Album": "The Dark Side of the Moon",
                "ProductionYear": 1973,
                "RunTimeTicks": 3_830_000_000i64,
                "ImageTags": {"Primary": "abc"},
            }],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&format!("{}/", mock_server.uri()));
    let result = registry
        .call_tool("search_media", json!({"query": "money", "limit": 500}))
        .await
        .unwrap();

    assert_eq!(
        result,
        json!({
            "total": 1,
            "items": [{
                "id": "song1",
                "name": "Money",
                "artist": "Pink Floyd",
                "album": "The Dark Side of the Moon",
                "year": 1973,
                "duration": "6:23",
                "api_stream": format!("{}/Audio/song1/universal?api_key={}", mock_server.uri(), API_KEY),
            }],
        })
    );

    let keys: Vec<_> = result["items"][0]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(
        keys,
        ["id", "name", "artist", "album", "year", "duration", "api_stream"]
    );
}

#[tokio::test]
async fn test_search_media_two_songs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Items"))
        .and(query_param("searchTerm", "test query"))
        .and(query_param("Limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TotalRecordCount": 2,
            "Items": [
                {"Id": "1", "Name": "Song A", "Artists": ["Artist X"], "Album": "Album Y", "ProductionYear": 2020, "RunTimeTicks": 2_400_000_000i64},
                {"Id": "2", "Name": "Song B", "Artists": [], "RunTimeTicks": 0},
            ],
        })))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let result = registry
        .call_tool("search_media", json!({"query": "test query"}))
        .await
        .unwrap();

    assert_eq!(result["total"], 2);
    assert_eq!(result["items"][0]["duration"], "4:00");
    assert_eq!(result["items"][0]["artist"], "Artist X");
    assert_eq!(
        result["items"][1],
        json!({
            "id": "2",
            "name": "Song B",
            "api_stream": format!("{}/Audio/2/universal?api_key={}", mock_server.uri(), API_KEY),
        })
    );
}

#[tokio::test]
async fn test_get_recent_accepts_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/Users/{}/Items/Latest", USER_ID)))
        .and(query_param("IncludeItemTypes", "MusicAlbum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": "a1", "Name": "Kind of Blue", "AlbumArtist": "Miles Davis", "ProductionYear": 1959, "Genres": ["Jazz"]},
            {"Id": "a2", "Name": "Blue Train", "AlbumArtist": "John Coltrane", "Genres": []},
        ])))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let result = registry.call_tool("get_recent", Value::Null).await.unwrap();

    assert_eq!(result["total"], 2);
    assert_eq!(
        result["items"][0],
        json!({"id": "a1", "name": "Kind of Blue", "album_artist": "Miles Davis", "year": 1959, "genre": "Jazz"})
    );
    assert_eq!(
        result["items"][1],
        json!({"id": "a2", "name": "Blue Train", "album_artist": "John Coltrane"})
    );
}

#[tokio::test]
async fn test_library_stats() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Items/Counts"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SongCount": 10,
            "AlbumCount": 2,
            "ArtistCount": 1,
            "MovieCount": 0,
            "SeriesCount": 0,
            "EpisodeCount": 0,
        })))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let result = registry.call_tool("library_stats", json!({})).await.unwrap();
    assert_eq!(
        result,
        json!({"songs": 10, "albums": 2, "artists": 1, "movies": 0, "series": 0, "episodes": 0})
    );
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/MusicGenres"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let err = registry
        .call_tool("list_genres", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Upstream(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unknown_tool() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let registry = registry_for(&mock_server.uri());
    let err = registry.call_tool("delete_everything", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}

#[tokio::test]
async fn test_unconfigured_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let jellyfin = JellyfinConfig::new(mock_server.uri(), "", USER_ID);
    let registry = ToolRegistry::new(Arc::new(ToolContext::connect(jellyfin).unwrap()));

    let result = registry
        .call_tool("list_albums", json!({"genre": "Rock"}))
        .await
        .unwrap();
    assert_eq!(result, json!({"error": "JELLYFIN_API_KEY not configured"}));
}
