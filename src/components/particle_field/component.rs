//! Leptos component wrapping the particle background canvas.
//!
//! The canvas fills the viewport. Window `resize` re-sizes the canvas and
//! respawns the particles; window `mousemove` records the pointer used for
//! repulsion. An animation loop runs via `requestAnimationFrame` and is stopped,
//! together with both listeners, when the component is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::{Bounds, FieldConfig, ParticleField, Pointer};
use super::render;
use super::theme::FieldTheme;
use crate::components::dom::{WindowListener, browser_seed, viewport_size};
use crate::components::frame_loop::{RafLoop, spawn_raf_loop};

/// Simulation plus everything the per-frame closure needs.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
	rng: SmallRng,
	pointer: Option<Pointer>,
}

/// Resources released on teardown. Dropping them detaches the listeners and
/// stops the loop.
struct FieldRuntime {
	frame_loop: RafLoop,
	_listeners: Vec<WindowListener>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn size_canvas(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width as u32);
	canvas.set_height(bounds.height as u32);
}

/// Full-viewport animated background of drifting points and candle bars.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime = StoredValue::new_local(None::<FieldRuntime>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			debug!("edufintra: 2d context unavailable, background disabled");
			return;
		};

		let (w, h) = viewport_size(&window).unwrap_or((800.0, 600.0));
		let bounds = Bounds::new(w, h);
		size_canvas(&canvas, bounds);

		let mut rng = SmallRng::seed_from_u64(browser_seed());
		let context = Rc::new(RefCell::new(FieldContext {
			field: ParticleField::new(FieldConfig::default(), bounds, &mut rng),
			theme: FieldTheme::default(),
			rng,
			pointer: None,
		}));

		let context_resize = context.clone();
		let on_resize = WindowListener::attach("resize", move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			let bounds = Bounds::new(nw, nh);
			size_canvas(&canvas, bounds);
			let mut c = context_resize.borrow_mut();
			let c = &mut *c;
			c.field.resize(bounds, &mut c.rng);
		});

		let context_pointer = context.clone();
		let on_pointer = WindowListener::pointer_move(move |x, y| {
			context_pointer.borrow_mut().pointer = Some(Pointer { x, y });
		});

		let count = context.borrow().field.particles().len();
		let frame_loop = spawn_raf_loop(move |_| {
			let mut c = context.borrow_mut();
			let c = &mut *c;
			render::draw_frame(&ctx, &mut c.field, &c.theme, c.pointer);
		});

		info!(
			"edufintra: particle field started ({} particles, {}x{})",
			count,
			bounds.width,
			bounds.height
		);
		runtime.set_value(Some(FieldRuntime {
			frame_loop,
			_listeners: on_resize.into_iter().chain(on_pointer).collect(),
		}));
	});

	on_cleanup(move || {
		if let Some(Some(rt)) = runtime.try_update_value(Option::take) {
			debug!(
				"edufintra: particle field stopped after {} frames",
				rt.frame_loop.frames_drawn()
			);
		}
	});

	view! {
		<div class="canvas-container">
			<canvas node_ref=canvas_ref class="particle-field" />
			<div class="canvas-vignette" />
		</div>
	}
}
