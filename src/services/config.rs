//! Generative text service settings, baked in at build time by `build.rs`.

/// Public Gemini REST root.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when the build does not name one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Where and how to reach the generative text service.
#[derive(Clone, Debug, PartialEq)]
pub struct GenAiConfig {
	/// API root, without trailing slash.
	pub endpoint: String,
	/// Model name in the `models/{model}:generateContent` path.
	pub model: String,
	/// `None` when the build had no `GEMINI_API_KEY`.
	pub api_key: Option<String>,
}

impl Default for GenAiConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			model: DEFAULT_MODEL.to_string(),
			api_key: None,
		}
	}
}

impl GenAiConfig {
	/// Settings captured from the build environment.
	pub fn from_build_env() -> Self {
		Self::from_values(
			option_env!("GEMINI_ENDPOINT"),
			option_env!("GEMINI_MODEL"),
			option_env!("GEMINI_API_KEY"),
		)
	}

	fn from_values(endpoint: Option<&str>, model: Option<&str>, api_key: Option<&str>) -> Self {
		fn non_empty(v: Option<&str>) -> Option<&str> {
			v.map(str::trim).filter(|v| !v.is_empty())
		}
		Self {
			endpoint: non_empty(endpoint)
				.unwrap_or(DEFAULT_ENDPOINT)
				.trim_end_matches('/')
				.to_string(),
			model: non_empty(model).unwrap_or(DEFAULT_MODEL).to_string(),
			api_key: non_empty(api_key).map(str::to_string),
		}
	}

	/// `generateContent` URL for the configured model.
	pub fn generate_url(&self) -> String {
		format!("{}/models/{}:generateContent", self.endpoint, self.model)
	}
}
