//! edufintra: pre-launch landing page for the Edufintra trading platform.
//!
//! A WASM client-side app that renders an animated particle background, a
//! pointer-tilted 3D hero card, a waitlist form, and two panels filled from a
//! generative text service with fixed fallbacks when the service is unusable.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod page;
pub mod services;

pub use page::LandingPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("edufintra: logging initialized");
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Edufintra | Trading Intelligence" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<LandingPage />
	}
}
