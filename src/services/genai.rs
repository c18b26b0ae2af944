//! Generative text service: request/response wire types and the HTTP client.
//!
//! The landing page only ever asks for a small JSON object constrained by a
//! response schema, so the request shape is fixed to a single text prompt plus
//! a flat object of required string fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thiserror::Error;

use super::config::GenAiConfig;

/// Why a content request produced nothing usable.
#[derive(Debug, Error)]
pub enum ContentError {
	/// The build carried no API key.
	#[error("no API key configured")]
	MissingApiKey,
	/// The request never got an HTTP answer.
	#[error("request failed: {0}")]
	Transport(String),
	/// Non-success HTTP status.
	#[error("service answered with HTTP {0}")]
	Status(u16),
	/// No candidate, or only blank text.
	#[error("response carried no text")]
	EmptyResponse,
	/// Text did not parse as the requested object.
	#[error("response text is not the expected JSON: {0}")]
	Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ContentError {
	fn from(e: reqwest::Error) -> Self {
		match e.status() {
			Some(status) => ContentError::Status(status.as_u16()),
			None => ContentError::Transport(e.to_string()),
		}
	}
}

/// A prompt and the JSON object shape the answer must have.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
	/// Instruction text sent as the only user part.
	pub prompt: &'static str,
	/// Required string fields of the response object, in schema order.
	pub fields: &'static [&'static str],
}

impl GenerateRequest {
	/// `responseSchema` for the request: an object whose fields are all
	/// required strings.
	pub fn response_schema(&self) -> Value {
		let properties: Map<String, Value> = self
			.fields
			.iter()
			.map(|name| (name.to_string(), json!({ "type": "STRING" })))
			.collect();
		json!({
			"type": "OBJECT",
			"properties": properties,
			"required": self.fields,
		})
	}

	/// Full `generateContent` request body.
	pub fn body(&self) -> GenerateContentBody {
		GenerateContentBody {
			contents: vec![Content {
				parts: vec![Part {
					text: Some(self.prompt.to_string()),
				}],
			}],
			generation_config: GenerationConfig {
				response_mime_type: "application/json",
				response_schema: self.response_schema(),
			},
		}
	}
}

/// Serialized `generateContent` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody {
	contents: Vec<Content>,
	generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
	response_mime_type: &'static str,
	response_schema: Value,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
	#[serde(default)]
	parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Part {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
	#[serde(default)]
	content: Content,
}

/// The parts of a `generateContent` answer the page reads.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
	#[serde(default)]
	candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
	/// Text of the first candidate, all parts joined.
	pub fn text(&self) -> Option<String> {
		let candidate = self.candidates.first()?;
		let text: String = candidate
			.content
			.parts
			.iter()
			.filter_map(|p| p.text.as_deref())
			.collect();
		if text.trim().is_empty() { None } else { Some(text) }
	}
}

/// Anything that can turn a [`GenerateRequest`] into raw response text.
#[allow(async_fn_in_trait, reason = "single-threaded wasm target, futures are never sent")]
pub trait TextGenerator {
	/// Answer text for `request`, unparsed.
	async fn generate(&self, request: &GenerateRequest) -> Result<String, ContentError>;
}

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
	http: reqwest::Client,
	config: GenAiConfig,
}

impl GeminiClient {
	/// Client for `config`. Makes no request yet.
	pub fn new(config: GenAiConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			config,
		}
	}

	/// Client configured from the build environment.
	pub fn from_build_env() -> Self {
		Self::new(GenAiConfig::from_build_env())
	}
}

impl TextGenerator for GeminiClient {
	async fn generate(&self, request: &GenerateRequest) -> Result<String, ContentError> {
		let key = self
			.config
			.api_key
			.as_deref()
			.ok_or(ContentError::MissingApiKey)?;

		let response = self
			.http
			.post(self.config.generate_url())
			.header("x-goog-api-key", key)
			.json(&request.body())
			.send()
			.await?
			.error_for_status()?
			.json::<GenerateContentResponse>()
			.await?;

		response.text().ok_or(ContentError::EmptyResponse)
	}
}
