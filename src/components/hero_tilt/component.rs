//! Hero visual: a stack of glass cards that tilts toward the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use web_sys::HtmlElement;

use super::tilt::{TiltDriver, target_rotation};
use crate::components::dom::{WindowListener, viewport_size};
use crate::components::frame_loop::{RafLoop, spawn_raf_loop_until};

/// Chart bar heights on the main card, in percent.
const BAR_HEIGHTS: [u32; 7] = [40, 70, 45, 90, 65, 80, 55];

struct TiltRuntime {
	_frame_loop: RafLoop,
	_listener: Option<WindowListener>,
}

/// 3D hero card. The whole stack rotates toward the cursor anywhere in the
/// viewport.
#[component]
pub fn HeroVisual() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let runtime = StoredValue::new_local(None::<TiltRuntime>);

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		if runtime.with_value(Option::is_some) {
			return;
		}
		let container: HtmlElement = container.into();
		let driver = Rc::new(RefCell::new(TiltDriver::default()));

		let driver_frame = driver.clone();
		let frame_loop = spawn_raf_loop_until(move |timestamp| {
			let frame = driver_frame.borrow_mut().advance(timestamp);
			if let Some(rotation) = frame.write {
				let _ = container.style().set_property("transform", &rotation.to_css());
			}
			frame.animating
		});

		let waker = frame_loop.waker();
		let listener = WindowListener::pointer_move(move |x, y| {
			let Some((w, h)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			driver.borrow_mut().point_at(target_rotation(x, y, w, h));
			waker.wake();
		});

		debug!("edufintra: hero tilt attached");
		runtime.set_value(Some(TiltRuntime {
			_frame_loop: frame_loop,
			_listener: listener,
		}));
	});

	on_cleanup(move || {
		let _ = runtime.try_update_value(Option::take);
	});

	view! {
		<div
			node_ref=container_ref
			class="hero-stack perspective-container"
			style="transform-style: preserve-3d;"
		>
			<div class="hero-glow" />

			<div class="glass-panel hero-card" style="transform: translateZ(50px);">
				<div class="hero-card-head">
					<div class="hero-pair">
						<span class="hero-pair-icon">"▲"</span>
						<span class="hero-pair-label">"BTC/USD"</span>
					</div>
					<span class="hero-change">"+4.28%"</span>
				</div>

				<div class="hero-bars">
					{BAR_HEIGHTS
						.iter()
						.enumerate()
						.map(|(i, h)| {
							let style = format!(
								"height: {h}%; animation-delay: {:.1}s;",
								i as f64 * 0.1
							);
							view! { <div class="hero-bar" style=style /> }
						})
						.collect_view()}
				</div>

				<div class="hero-price">"$64,821.50"</div>
				<div class="hero-caption">"Holographic Data Stream"</div>
			</div>

			<div
				class="glass-panel hero-float hero-float-shield floating-element"
				style="transform: translateZ(100px) translateX(120px) translateY(-50px);"
			>
				<span class="hero-float-icon">"⛨"</span>
				<span class="hero-float-label">"Protocol" <br /> "Secured"</span>
			</div>

			<div
				class="glass-panel hero-float hero-float-disc floating-element"
				style="transform: translateZ(80px) translateX(-100px) translateY(40px);"
			>
				<div class="spin-slow">"▮▯▮"</div>
			</div>
		</div>
	}
}
