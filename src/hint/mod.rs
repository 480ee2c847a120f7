//! Hint generation via an external language model
//!
//! The game only needs one contract: "given the solution, return a short
//! hint string". `HintService` is that seam; `GeminiHint` implements it
//! against the Gemini REST API with a blocking client, and
//! [`spawn_hint_fetch`] runs the call on a worker thread so the session's
//! single-threaded event loop never blocks on the network.

use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed message when no API key is configured
pub const HINT_DISABLED_MSG: &str =
    "A funcionalidade de dica está desativada. Nenhuma chave de API foi encontrada.";

/// Fixed message when the model returns an empty hint
pub const HINT_EMPTY_MSG: &str = "Não foi possível gerar uma dica. Tente novamente.";

/// Fixed message when the fetch fails outright
pub const HINT_FAILED_MSG: &str = "Ocorreu um erro ao buscar a dica. Tente novamente.";

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const GEMINI_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Hint fetch failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// Transport or HTTP-level failure
    Service(String),
    /// Response arrived but did not carry a hint
    MalformedResponse,
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(detail) => write!(f, "Hint service call failed: {detail}"),
            Self::MalformedResponse => write!(f, "Hint service response carried no hint"),
        }
    }
}

impl std::error::Error for HintError {}

/// Capability to produce a hint for a solution word
pub trait HintService: Send + Sync {
    /// Fetch a hint for `solution`
    ///
    /// # Errors
    /// Returns [`HintError`] on transport failure or an unusable response.
    /// Missing configuration is not an error: implementations degrade to a
    /// fixed "feature disabled" message instead.
    fn hint(&self, solution: &Word) -> Result<String, HintError>;
}

/// Gemini-backed hint service
pub struct GeminiHint {
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GeminiHint {
    /// Build a service with an explicit (possibly absent) API key
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self { api_key, client }
    }

    /// Build a service from the `GEMINI_API_KEY` environment variable
    ///
    /// With the variable unset or empty the service stays constructible and
    /// every request returns the fixed disabled message.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var(GEMINI_API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!("{GEMINI_API_KEY_VAR} not set, hints are disabled");
        }

        Self::new(api_key)
    }
}

impl HintService for GeminiHint {
    fn hint(&self, solution: &Word) -> Result<String, HintError> {
        let Some(key) = &self.api_key else {
            return Ok(HINT_DISABLED_MSG.to_string());
        };

        let prompt = format!(
            "Forneça uma dica curta e inteligente para a palavra em português de 5 letras: \
             '{solution}'. A dica não deve conter nenhuma das letras da palavra. Seja criativo \
             e responda apenas com a dica."
        );

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{GEMINI_MODEL}:generateContent?key={key}"
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 0.9,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| HintError::Service(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .map_err(|_| HintError::MalformedResponse)?;

        let hint = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .ok_or(HintError::MalformedResponse)?;

        if hint.is_empty() {
            Ok(HINT_EMPTY_MSG.to_string())
        } else {
            Ok(hint)
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Resolved hint fetch, tagged with the session it was issued for
#[derive(Debug)]
pub struct HintResponse {
    pub session_id: u64,
    pub result: Result<String, HintError>,
}

/// Run one hint fetch on a worker thread
///
/// The result is delivered over `tx`; the receiving event loop matches
/// `session_id` against the live session and drops stale responses. A closed
/// receiver (caller quit) is fine — the send result is ignored.
pub fn spawn_hint_fetch(
    service: Arc<dyn HintService>,
    solution: Word,
    session_id: u64,
    tx: Sender<HintResponse>,
) {
    thread::spawn(move || {
        let result = service.hint(&solution);
        if let Err(error) = &result {
            warn!(%error, session_id, "hint fetch failed");
        } else {
            debug!(session_id, "hint fetch resolved");
        }

        let _ = tx.send(HintResponse { session_id, result });
    });
}
