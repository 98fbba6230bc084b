//! Axum router configuration with middleware.
//!
//! JSON routes live under `/api/`, `/health` sits at the root, and
//! everything else falls through to the static directory (`index.html`
//! at `/`). Middleware: CORS (any origin), request tracing.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/voices", get(handlers::voices::list_voices));

    if !static_dir.join("index.html").exists() {
        tracing::warn!(path = %static_dir.display(), "No index.html in static directory");
    }

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use voxbot_core::llm::box_provider::BoxLlmProvider;
    use voxbot_core::llm::provider::LlmProvider;
    use voxbot_core::speech::box_provider::BoxSpeechProvider;
    use voxbot_core::speech::provider::{AudioStream, SpeechProvider};
    use voxbot_types::config::VoxbotConfig;
    use voxbot_types::llm::{CompletionRequest, CompletionResponse, LlmError};
    use voxbot_types::speech::{SpeechError, SpeechRequest, Voice};

    use super::*;

    struct StubCompletion {
        reply: Option<String>,
        calls: Arc<AtomicUsize>,
    }

    impl LlmProvider for StubCompletion {
        fn name(&self) -> &str {
            "stub-llm"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Some(text) => Ok(CompletionResponse {
                    id: "resp-1".to_string(),
                    content: text.clone(),
                    model: request.model.clone(),
                }),
                None => Err(LlmError::AuthenticationFailed),
            }
        }
    }

    struct StubSpeech {
        audio: Result<Vec<Vec<u8>>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl SpeechProvider for StubSpeech {
        fn name(&self) -> &str {
            "stub-speech"
        }

        fn synthesize(&self, _request: SpeechRequest) -> AudioStream {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let items: Vec<Result<Vec<u8>, SpeechError>> = match &self.audio {
                Ok(chunks) => chunks.iter().cloned().map(Ok).collect(),
                Err(msg) => vec![Err(SpeechError::Provider {
                    status: 500,
                    message: msg.clone(),
                })],
            };
            Box::pin(futures_util::stream::iter(items))
        }

        async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
            match &self.audio {
                Ok(_) => Ok(vec![Voice {
                    name: "Rachel".to_string(),
                    voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
                }]),
                Err(msg) => Err(SpeechError::Http(msg.clone())),
            }
        }
    }

    struct TestApp {
        router: Router,
        completion_calls: Arc<AtomicUsize>,
        speech_calls: Arc<AtomicUsize>,
        _static_dir: TempDir,
    }

    /// `completion`: None = unconfigured, Some(None) = failing, Some(Some(text)) = replies.
    /// `speech`: None = unconfigured, Some(Err) = failing, Some(Ok(chunks)) = audio.
    fn app(
        completion: Option<Option<&str>>,
        speech: Option<Result<Vec<Vec<u8>>, &str>>,
    ) -> TestApp {
        let completion_calls = Arc::new(AtomicUsize::new(0));
        let speech_calls = Arc::new(AtomicUsize::new(0));

        let completion = completion.map(|reply| {
            BoxLlmProvider::new(StubCompletion {
                reply: reply.map(str::to_string),
                calls: completion_calls.clone(),
            })
        });
        let speech = speech.map(|audio| {
            BoxSpeechProvider::new(StubSpeech {
                audio: audio.map_err(str::to_string),
                calls: speech_calls.clone(),
            })
        });

        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join("index.html"),
            "<html><body>Sesli AI Chatbot</body></html>",
        )
        .unwrap();

        let state = AppState::from_providers(&VoxbotConfig::default(), completion, speech);
        TestApp {
            router: build_router(state, static_dir.path()),
            completion_calls,
            speech_calls,
            _static_dir: static_dir,
        }
    }

    fn id3_audio() -> Vec<Vec<u8>> {
        vec![vec![0x49, 0x44, 0x33], vec![0x04, 0x00, 0x00, 0x00, 0x00, 0x21]]
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_chat_merhaba_scenario() {
        let app = app(
            Some(Some("Merhaba! Nasıl yardımcı olabilirim?")),
            Some(Ok(id3_audio())),
        );

        let (status, json) = send_json(&app.router, chat_request(r#"{"message": "Merhaba"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["text"], "Merhaba! Nasıl yardımcı olabilirim?");
        let audio = json["audio"].as_str().unwrap();
        assert!(audio.starts_with("data:audio/mpeg;base64,SUQz"));

        let payload = audio.strip_prefix("data:audio/mpeg;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), id3_audio().concat());
    }

    #[tokio::test]
    async fn test_chat_blank_message_is_400_without_provider_calls() {
        let app = app(Some(Some("hi")), Some(Ok(id3_audio())));

        for body in [r#"{"message": "   "}"#, r#"{"message": ""}"#, "{}"] {
            let (status, json) = send_json(&app.router, chat_request(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json, serde_json::json!({ "error": "Mesaj boş olamaz" }));
        }

        assert_eq!(app.completion_calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.speech_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_500() {
        let app = app(Some(Some("hi")), Some(Ok(id3_audio())));

        let (status, json) = send_json(&app.router, chat_request("{not json")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert!(!json["error"].as_str().unwrap().is_empty());
        assert_eq!(app.completion_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chat_completion_failure_still_returns_audio() {
        let app = app(Some(None), Some(Ok(id3_audio())));

        let (status, json) = send_json(&app.router, chat_request(r#"{"message": "Merhaba"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(
            json["text"],
            "Üzgünüm, şu anda yanıt üretemiyorum. Lütfen tekrar deneyin."
        );
        assert_eq!(app.speech_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_chat_synthesis_failure_is_500_with_message() {
        let app = app(Some(Some("Selam")), Some(Err("quota_exceeded")));

        let (status, json) = send_json(&app.router, chat_request(r#"{"message": "Merhaba"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("quota_exceeded"));
    }

    #[tokio::test]
    async fn test_chat_speech_unconfigured_is_500() {
        let app = app(Some(Some("Selam")), None);

        let (status, json) = send_json(&app.router, chat_request(r#"{"message": "Merhaba"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "ElevenLabs API anahtarı yapılandırılmamış");
    }

    #[tokio::test]
    async fn test_voices_lists_provider_voices() {
        let app = app(None, Some(Ok(id3_audio())));

        let (status, json) = send_json(&app.router, get_request("/api/voices")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "voices": [{ "name": "Rachel", "voice_id": "21m00Tcm4TlvDq8ikWAM" }]
            })
        );
    }

    #[tokio::test]
    async fn test_voices_unconfigured_is_500() {
        let app = app(Some(Some("Selam")), None);

        let (status, json) = send_json(&app.router, get_request("/api/voices")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json,
            serde_json::json!({ "error": "ElevenLabs API anahtarı yapılandırılmamış" })
        );
    }

    #[tokio::test]
    async fn test_voices_provider_failure_is_500() {
        let app = app(None, Some(Err("connection refused")));

        let (status, json) = send_json(&app.router, get_request("/api/voices")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_health_reports_all_credential_combinations() {
        let cases = [
            (true, true, "connected", "connected"),
            (true, false, "connected", "not configured"),
            (false, true, "not configured", "connected"),
            (false, false, "not configured", "not configured"),
        ];

        for (openai, elevenlabs, openai_label, elevenlabs_label) in cases {
            let app = app(
                openai.then_some(Some("Selam")),
                elevenlabs.then(|| Ok(id3_audio())),
            );

            let (status, json) = send_json(&app.router, get_request("/health")).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                json,
                serde_json::json!({
                    "status": "healthy",
                    "elevenlabs": elevenlabs_label,
                    "openai": openai_label,
                })
            );
        }
    }

    #[tokio::test]
    async fn test_root_serves_landing_page() {
        let app = app(None, None);

        let (status, body) = send(&app.router, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("Sesli AI Chatbot"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = app(None, None);
        let request = Request::builder()
            .uri("/health")
            .header("origin", "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
