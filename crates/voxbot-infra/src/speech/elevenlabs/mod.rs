//! ElevenLabs speech provider.
//!
//! Text-to-speech goes through `POST {base}/v1/text-to-speech/{voice_id}`
//! with the `xi-api-key` header. The MP3 body is forwarded chunk by chunk as
//! it arrives; the orchestrator is responsible for draining it.

pub mod types;

use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};

use voxbot_core::speech::provider::{AudioStream, SpeechProvider};
use voxbot_types::speech::{SpeechError, SpeechRequest, Voice};

use self::types::{ErrorResponse, TextToSpeechBody, VoicesResponse};

const API_KEY_HEADER: &str = "xi-api-key";

/// ElevenLabs text-to-speech client.
///
/// Does NOT derive Debug to keep the API key out of logs.
pub struct ElevenLabsProvider {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl ElevenLabsProvider {
    /// Create a provider talking to `base_url` (e.g. `https://api.elevenlabs.io`).
    pub fn new(api_key: SecretString, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn speech_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{voice_id}", self.base_url)
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices", self.base_url)
    }

    fn build_speech_request(&self, request: &SpeechRequest) -> Result<reqwest::Request, SpeechError> {
        let body = TextToSpeechBody {
            text: &request.text,
            model_id: &request.model_id,
        };

        self.client
            .post(self.speech_url(&request.voice_id))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(ACCEPT, "audio/mpeg")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .build()
            .map_err(|e| SpeechError::Http(e.to_string()))
    }

    fn build_voices_request(&self) -> Result<reqwest::Request, SpeechError> {
        self.client
            .get(self.voices_url())
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .build()
            .map_err(|e| SpeechError::Http(e.to_string()))
    }
}

impl SpeechProvider for ElevenLabsProvider {
    fn name(&self) -> &str {
        "elevenlabs"
    }

    fn synthesize(&self, request: SpeechRequest) -> AudioStream {
        let http_request = match self.build_speech_request(&request) {
            Ok(req) => req,
            Err(e) => {
                return Box::pin(futures_util::stream::once(async move { Err(e) }));
            }
        };

        // Clone the client for the 'static stream
        let client = self.client.clone();

        Box::pin(async_stream::try_stream! {
            let response = client
                .execute(http_request)
                .await
                .map_err(|e| SpeechError::Http(e.to_string()))?;
            let response = check_status(response).await?;

            let mut body = response.bytes_stream();
            while let Some(chunk) = body.next().await {
                let chunk = chunk.map_err(|e| SpeechError::Stream(e.to_string()))?;
                yield chunk.to_vec();
            }
        })
    }

    async fn list_voices(&self) -> Result<Vec<Voice>, SpeechError> {
        let response = self
            .client
            .execute(self.build_voices_request()?)
            .await
            .map_err(|e| SpeechError::Http(e.to_string()))?;
        let response = check_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::Http(e.to_string()))?;
        parse_voices(&body)
    }
}

/// Pass through 2xx responses; turn anything else into a [`SpeechError`].
async fn check_status(response: Response) -> Result<Response, SpeechError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(map_error_status(status, &body))
}

fn map_error_status(status: StatusCode, body: &str) -> SpeechError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.detail.message().to_string())
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            }
        });

    if status == StatusCode::UNAUTHORIZED {
        SpeechError::AuthenticationFailed(message)
    } else {
        SpeechError::Provider {
            status: status.as_u16(),
            message,
        }
    }
}

fn parse_voices(body: &str) -> Result<Vec<Voice>, SpeechError> {
    let parsed: VoicesResponse =
        serde_json::from_str(body).map_err(|e| SpeechError::Deserialization(e.to_string()))?;
    Ok(parsed.voices.into_iter().map(Voice::from).collect())
}
