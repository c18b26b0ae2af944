//! Insight and challenge payloads for the playground panels.
//!
//! Both fetches follow the same policy: one request, parse the answer as JSON,
//! and on any failure substitute a fixed payload. The caller always gets
//! something to show; [`Fetched`] records which branch was taken.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::genai::{ContentError, GenerateRequest, TextGenerator};

/// A short quote-like insight shown beside the playground.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
	/// Short heading shown after the quote.
	pub topic: String,
	/// The quote itself.
	pub wisdom: String,
	/// Attribution. Requested but not displayed.
	pub author: String,
}

impl Insight {
	/// Shown whenever a fresh insight cannot be had.
	pub fn fallback() -> Self {
		Self {
			topic: "Market Synthesis".to_string(),
			wisdom: "Wealth is not found in the noise of the ticker, but in the silence between the moves."
				.to_string(),
			author: "Edufintra Quant".to_string(),
		}
	}
}

/// A trading riddle and its hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
	/// The riddle.
	pub challenge: String,
	/// One-line nudge shown under the riddle.
	pub hint: String,
}

impl Challenge {
	/// Shown whenever a fresh challenge cannot be had.
	pub fn fallback() -> Self {
		Self {
			challenge: "I have two peaks but am not a mountain; I suggest a fall but am not a leaf. What pattern am I?"
				.to_string(),
			hint: "Double trouble for bulls.".to_string(),
		}
	}
}

/// Prompt and schema for [`Insight`].
pub const INSIGHT_REQUEST: GenerateRequest = GenerateRequest {
	prompt: "Generate a profound trading intelligence insight for a platform named Edufintra. \
		Focus on market psychology, technical mastery, and the future of algorithmic trading. \
		Keep it concise, high-end, and professional.",
	fields: &["topic", "wisdom", "author"],
};

/// Prompt and schema for [`Challenge`].
pub const CHALLENGE_REQUEST: GenerateRequest = GenerateRequest {
	prompt: "Create a short trading-related logical puzzle or technical analysis riddle. \
		Something a pro trader would find intriguing.",
	fields: &["challenge", "hint"],
};

/// Outcome of a content fetch. Both branches carry a value to display.
#[derive(Debug)]
pub enum Fetched<T> {
	/// Parsed from the service's answer.
	Fresh(T),
	/// The fixed payload, with the reason the fresh one was unusable.
	Fallback(T, ContentError),
}

impl<T> Fetched<T> {
	/// Whether the fixed payload was used.
	pub fn is_fallback(&self) -> bool {
		matches!(self, Fetched::Fallback(..))
	}

	/// The value to display.
	pub fn value(&self) -> &T {
		match self {
			Fetched::Fresh(v) | Fetched::Fallback(v, _) => v,
		}
	}

	/// Take the value to display.
	pub fn into_inner(self) -> T {
		match self {
			Fetched::Fresh(v) | Fetched::Fallback(v, _) => v,
		}
	}
}

/// Parse the answer text as the expected JSON object.
pub fn parse_payload<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, ContentError> {
	Ok(serde_json::from_str(text.trim())?)
}

async fn fetch<T, G>(generator: &G, request: &GenerateRequest, fallback: fn() -> T) -> Fetched<T>
where
	T: for<'de> Deserialize<'de>,
	G: TextGenerator,
{
	let outcome = match generator.generate(request).await {
		Ok(text) => parse_payload(&text),
		Err(e) => Err(e),
	};
	match outcome {
		Ok(value) => Fetched::Fresh(value),
		Err(e) => {
			warn!("edufintra: using fallback content ({}): {}", request.fields.join("/"), e);
			Fetched::Fallback(fallback(), e)
		}
	}
}

/// Fetch one insight. Never fails.
pub async fn fetch_insight(generator: &impl TextGenerator) -> Fetched<Insight> {
	let fetched = fetch(generator, &INSIGHT_REQUEST, Insight::fallback).await;
	if let Fetched::Fresh(insight) = &fetched {
		info!("edufintra: insight \"{}\" by {}", insight.topic, insight.author);
	}
	fetched
}

/// Fetch one challenge. Never fails.
pub async fn fetch_challenge(generator: &impl TextGenerator) -> Fetched<Challenge> {
	fetch(generator, &CHALLENGE_REQUEST, Challenge::fallback).await
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;

	/// Replays a canned answer and records what was asked.
	struct Canned {
		answer: fn() -> Result<String, ContentError>,
		seen: RefCell<Vec<GenerateRequest>>,
	}

	impl Canned {
		fn new(answer: fn() -> Result<String, ContentError>) -> Self {
			Self {
				answer,
				seen: RefCell::new(Vec::new()),
			}
		}
	}

	impl TextGenerator for Canned {
		async fn generate(&self, request: &GenerateRequest) -> Result<String, ContentError> {
			self.seen.borrow_mut().push(request.clone());
			(self.answer)()
		}
	}

	#[test]
	fn insight_parses_service_json() {
		let generator = Canned::new(|| {
			Ok(r#"
				{"topic": "Liquidity", "wisdom": "Depth hides intent.", "author": "Desk 7"}
			"#
			.to_string())
		});

		let fetched = block_on(fetch_insight(&generator));

		assert!(!fetched.is_fallback());
		assert_eq!(fetched.value().topic, "Liquidity");
		assert_eq!(generator.seen.borrow()[0], INSIGHT_REQUEST);
	}

	#[test]
	fn insight_falls_back_on_transport_error() {
		let generator = Canned::new(|| Err(ContentError::Transport("offline".to_string())));

		let fetched = block_on(fetch_insight(&generator));

		assert!(matches!(fetched, Fetched::Fallback(_, ContentError::Transport(_))));
		let insight = fetched.into_inner();
		assert_eq!(insight.topic, "Market Synthesis");
		assert_eq!(
			insight.wisdom,
			"Wealth is not found in the noise of the ticker, but in the silence between the moves."
		);
		assert_eq!(insight.author, "Edufintra Quant");
	}

	#[test]
	fn insight_falls_back_on_non_json() {
		let generator = Canned::new(|| Ok("The market is a voting machine.".to_string()));

		let fetched = block_on(fetch_insight(&generator));

		assert!(matches!(fetched, Fetched::Fallback(_, ContentError::Malformed(_))));
		assert_eq!(fetched.into_inner(), Insight::fallback());
	}

	#[test]
	fn challenge_falls_back_on_schema_mismatch() {
		let generator = Canned::new(|| Ok(r#"{"challenge": "What am I?"}"#.to_string()));

		let fetched = block_on(fetch_challenge(&generator));

		assert!(fetched.is_fallback());
		let challenge = fetched.into_inner();
		assert_eq!(
			challenge.challenge,
			"I have two peaks but am not a mountain; I suggest a fall but am not a leaf. What pattern am I?"
		);
		assert_eq!(challenge.hint, "Double trouble for bulls.");
	}

	#[test]
	fn challenge_falls_back_on_missing_key_and_http_errors() {
		for answer in [
			(|| Err(ContentError::MissingApiKey)) as fn() -> Result<String, ContentError>,
			|| Err(ContentError::Status(503)),
			|| Err(ContentError::EmptyResponse),
		] {
			let fetched = block_on(fetch_challenge(&Canned::new(answer)));
			assert_eq!(fetched.into_inner(), Challenge::fallback());
		}
	}

	#[test]
	fn challenge_parses_service_json() {
		let generator = Canned::new(|| {
			Ok(r#"{"challenge": "Three pushes up, volume fading.", "hint": "Exhaustion."}"#.to_string())
		});

		let fetched = block_on(fetch_challenge(&generator));

		assert_eq!(
			fetched.into_inner(),
			Challenge {
				challenge: "Three pushes up, volume fading.".to_string(),
				hint: "Exhaustion.".to_string(),
			}
		);
		assert_eq!(generator.seen.borrow()[0].fields, &["challenge", "hint"]);
	}

	#[test]
	fn requests_ask_for_every_payload_field() {
		assert_eq!(INSIGHT_REQUEST.fields, &["topic", "wisdom", "author"]);
		assert_eq!(CHALLENGE_REQUEST.fields, &["challenge", "hint"]);
	}
}
