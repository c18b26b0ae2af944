//! Start/stop wrapper around `requestAnimationFrame`.
//!
//! A [`FrameLoop`] draws once per delivered frame and asks its scheduler for
//! the next one. After [`FrameLoop::stop`] the pending frame is cancelled and
//! any frame the host still delivers is ignored, so nothing draws against a
//! torn-down surface.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

/// Handle returned by the host when a frame is requested.
pub type FrameHandle = i32;

/// Something that can deliver a single future frame callback.
pub trait FrameScheduler {
	/// Request one frame. `None` when the host refused.
	fn request_frame(&self) -> Option<FrameHandle>;
	/// Withdraw a request that has not fired yet.
	fn cancel_frame(&self, handle: FrameHandle);
}

/// Explicit render task with a start/stop contract.
pub struct FrameLoop<S> {
	scheduler: S,
	running: bool,
	pending: Option<FrameHandle>,
	frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
	/// An idle loop. Nothing is requested until [`FrameLoop::start`].
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			running: false,
			pending: None,
			frames: 0,
		}
	}

	/// Request the first frame. No-op while already running.
	pub fn start(&mut self) {
		if self.running {
			return;
		}
		self.running = true;
		self.pending = self.scheduler.request_frame();
	}

	/// Cancel the pending frame and ignore any that still arrive.
	pub fn stop(&mut self) {
		self.running = false;
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
	}

	/// Called by the host for every delivered frame.
	pub fn on_frame(&mut self, draw: impl FnOnce()) {
		self.on_frame_until(|| {
			draw();
			true
		});
	}

	/// Like [`FrameLoop::on_frame`], but `draw` returns whether it wants
	/// another frame. On `false` the loop idles until the next `start`.
	pub fn on_frame_until(&mut self, draw: impl FnOnce() -> bool) {
		self.pending = None;
		if !self.running {
			return;
		}
		let again = draw();
		self.frames += 1;
		if again {
			self.pending = self.scheduler.request_frame();
		} else {
			self.running = false;
		}
	}

	/// Whether frames are currently being requested.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Frames drawn since creation.
	pub fn frames_drawn(&self) -> u64 {
		self.frames
	}
}

/// Shared slot for the per-frame closure. The closure re-registers itself, so
/// the scheduler and the closure both point at the same slot.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Browser scheduler backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
	callback: FrameCallback,
}

impl RafScheduler {
	/// Scheduler that registers whatever closure sits in `callback`.
	pub fn new(callback: FrameCallback) -> Self {
		Self { callback }
	}
}

impl FrameScheduler for RafScheduler {
	fn request_frame(&self) -> Option<FrameHandle> {
		let window = web_sys::window()?;
		let slot = self.callback.borrow();
		let cb = slot.as_ref()?;
		window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}

/// Build a running loop that calls `draw(timestamp_ms)` every animation frame.
///
/// Dropping the returned handle stops the loop and clears the closure slot,
/// which breaks the reference cycle between loop and closure.
pub fn spawn_raf_loop(mut draw: impl FnMut(f64) + 'static) -> RafLoop {
	spawn_raf_loop_until(move |timestamp| {
		draw(timestamp);
		true
	})
}

/// Like [`spawn_raf_loop`], but the loop idles whenever `draw` returns
/// `false`. Use [`RafLoop::waker`] to start it again.
pub fn spawn_raf_loop_until(mut draw: impl FnMut(f64) -> bool + 'static) -> RafLoop {
	let callback: FrameCallback = Rc::new(RefCell::new(None));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler::new(callback.clone()))));

	let loop_inner = frame_loop.clone();
	*callback.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		loop_inner.borrow_mut().on_frame_until(|| draw(timestamp));
	}));
	frame_loop.borrow_mut().start();

	RafLoop {
		frame_loop,
		callback,
	}
}

/// Owning handle for a loop started with [`spawn_raf_loop`].
pub struct RafLoop {
	frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
	callback: FrameCallback,
}

impl RafLoop {
	/// Stop for good: cancel the pending frame and drop the closure.
	pub fn stop(&self) {
		self.frame_loop.borrow_mut().stop();
		self.callback.borrow_mut().take();
	}

	/// Frames drawn so far.
	pub fn frames_drawn(&self) -> u64 {
		self.frame_loop.borrow().frames_drawn()
	}

	/// Handle that restarts an idle loop. Must not be used from inside the
	/// loop's own draw callback.
	pub fn waker(&self) -> RafWaker {
		RafWaker {
			frame_loop: Rc::downgrade(&self.frame_loop),
		}
	}
}

/// Restarts a [`RafLoop`] that went idle. Does nothing once the loop is gone.
#[derive(Clone)]
pub struct RafWaker {
	frame_loop: Weak<RefCell<FrameLoop<RafScheduler>>>,
}

impl RafWaker {
	/// Resume the loop if it is idle.
	pub fn wake(&self) {
		if let Some(frame_loop) = self.frame_loop.upgrade() {
			frame_loop.borrow_mut().start();
		}
	}
}

impl Drop for RafLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
