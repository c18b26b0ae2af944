//! Small helpers over `web_sys::Window` shared by the animated components.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, Window};

/// Current `innerWidth` / `innerHeight`.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Seed for per-mount randomness.
pub fn browser_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// An event listener registered on `window`, removed again when dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Listen for `event` on `window`. `None` when there is no window or the
	/// browser rejects the listener.
	pub fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		debug!("edufintra: listening for window {event}");
		Some(Self { event, callback })
	}

	/// Listen for `mousemove` and receive the cursor's client coordinates.
	pub fn pointer_move(mut handler: impl FnMut(f64, f64) + 'static) -> Option<Self> {
		Self::attach("mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				handler(ev.client_x() as f64, ev.client_y() as f64);
			}
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				self.event,
				self.callback.as_ref().unchecked_ref(),
			);
		}
	}
}
