//! Bakes generative-text settings into the binary at compile time.
//!
//! A `.env` file is optional. Missing values are not an error: the content
//! panels fall back to their fixed copy when no API key is present.

use dotenvy::dotenv;

const FORWARDED: [&str; 3] = ["GEMINI_API_KEY", "GEMINI_MODEL", "GEMINI_ENDPOINT"];

fn main() {
	println!("cargo::rerun-if-changed=.env");

	let _ = dotenv();

	for key in FORWARDED {
		println!("cargo::rerun-if-env-changed={key}");
		if let Ok(value) = std::env::var(key) {
			println!("cargo::rustc-env={key}={value}");
		}
	}
}
