//! Integration tests for the music service client using wiremock.

use tune_core::AudioResolver;
use tune_service_client::{MusicServiceClient, ServiceClientError, ServiceConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> MusicServiceClient {
    MusicServiceClient::new(ServiceConfig::new(server.uri())).unwrap()
}

fn song_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "videoId": id,
        "title": title,
        "thumbnail": format!("https://i.ytimg.com/vi/{}/hq.jpg", id),
        "duration": 200,
        "playCount": 3
    })
}

// ============================================================================
// Client construction
// ============================================================================

mod client_construction {
    use super::*;

    #[test]
    fn rejects_empty_url() {
        let result = MusicServiceClient::new(ServiceConfig::new(""));
        assert!(matches!(result, Err(ServiceClientError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_missing_scheme() {
        let result = MusicServiceClient::new(ServiceConfig::new("music.example.com"));
        assert!(matches!(result, Err(ServiceClientError::InvalidUrl(_))));
    }

    #[test]
    fn normalizes_trailing_slash() {
        let client = MusicServiceClient::new(ServiceConfig::new("https://music.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://music.example.com");
    }

    #[test]
    fn default_points_at_public_service() {
        let client = MusicServiceClient::new(ServiceConfig::default()).unwrap();
        assert_eq!(client.base_url(), tune_service_client::DEFAULT_BASE_URL);
    }
}

// ============================================================================
// Lists
// ============================================================================

mod lists {
    use super::*;

    #[tokio::test]
    async fn trending_returns_songs_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_trending_music"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "trending_music": [song_json("a", "A"), song_json("b", "B")]
            })))
            .mount(&server)
            .await;

        let songs = client_for(&server).await.trending().await.unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].video_id, "a");
        assert_eq!(songs[1].title, "B");
        assert_eq!(songs[0].play_count, 3);
    }

    #[tokio::test]
    async fn missing_list_key_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_trending_music"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let songs = client_for(&server).await.trending().await.unwrap();
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn most_played_reads_both_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_most_played_songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "most_played_music": [song_json("x", "X")]
            })))
            .mount(&server)
            .await;

        let songs = client_for(&server).await.most_played().await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].video_id, "x");
    }

    #[tokio::test]
    async fn server_error_maps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_most_played_songs"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.most_played().await.unwrap_err();
        match err {
            ServiceClientError::ServerError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_trending_music"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.trending().await.unwrap_err();
        assert!(matches!(err, ServiceClientError::ParseError(_)));
    }
}

// ============================================================================
// Search
// ============================================================================

mod search {
    use super::*;

    #[tokio::test]
    async fn sends_trimmed_encoded_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search_music"))
            .and(query_param("query", "lo-fi & chill"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "search_results": [song_json("s", "S")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let songs = client_for(&server).await.search("  lo-fi & chill ").await.unwrap();
        assert_eq!(songs.len(), 1);
    }

    #[tokio::test]
    async fn blank_query_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let songs = client_for(&server).await.search("   ").await.unwrap();
        assert!(songs.is_empty());
    }
}

// ============================================================================
// Audio resolution
// ============================================================================

mod audio {
    use super::*;

    #[tokio::test]
    async fn resolves_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_audio"))
            .and(query_param("videoId", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioUrl": "https://cdn.example.com/abc.m4a"
            })))
            .mount(&server)
            .await;

        let url = client_for(&server).await.audio_url("abc").await.unwrap();
        assert_eq!(url, "https://cdn.example.com/abc.m4a");
    }

    #[tokio::test]
    async fn empty_url_is_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_audio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "audioUrl": ""
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.audio_url("abc").await.unwrap_err();
        assert!(matches!(err, ServiceClientError::MissingAudioUrl(id) if id == "abc"));
    }

    #[tokio::test]
    async fn absent_url_is_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_audio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server).await.audio_url("abc").await.unwrap_err();
        assert!(matches!(err, ServiceClientError::MissingAudioUrl(_)));
    }

    #[tokio::test]
    async fn resolver_trait_maps_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_audio"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let resolver: &dyn AudioResolver = &client;
        let err = resolver.resolve_audio("abc").await.unwrap_err();
        assert!(matches!(err, tune_core::CoreError::Resolution(_)));
    }

    #[tokio::test]
    async fn unreachable_service() {
        // Nothing listens on port 9 on loopback
        let client = MusicServiceClient::new(ServiceConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.audio_url("abc").await.unwrap_err();
        assert!(matches!(err, ServiceClientError::ServerUnreachable(_)));
    }
}
