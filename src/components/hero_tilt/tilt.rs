//! Pointer-driven 3D rotation for the hero card.
//!
//! The target rotation comes straight from the cursor offset to the viewport
//! center, divided by a fixed factor. It is not clamped, so the largest angle
//! is `viewport_dimension / 2 / divisor`.

use crate::components::ease::Ease;

/// Cursor offset in pixels per degree of rotation.
pub const TILT_DIVISOR: f64 = 25.0;
/// Time to reach a new target.
pub const TILT_DURATION_MS: f64 = 1000.0;

/// Rotation of the card container, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
	/// Around the horizontal axis; positive tips the top away.
	pub x_deg: f64,
	/// Around the vertical axis; positive turns the right side away.
	pub y_deg: f64,
}

impl Rotation {
	/// Linear blend toward `other`, `t` in `[0, 1]`.
	pub fn lerp(self, other: Rotation, t: f64) -> Self {
		Self {
			x_deg: self.x_deg + (other.x_deg - self.x_deg) * t,
			y_deg: self.y_deg + (other.y_deg - self.y_deg) * t,
		}
	}

	/// CSS `transform` value.
	pub fn to_css(self) -> String {
		format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.x_deg, self.y_deg)
	}
}

/// Rotation the card should head toward for a pointer at `(px, py)`.
pub fn target_rotation(px: f64, py: f64, viewport_width: f64, viewport_height: f64) -> Rotation {
	Rotation {
		x_deg: -(py - viewport_height / 2.0) / TILT_DIVISOR,
		y_deg: (px - viewport_width / 2.0) / TILT_DIVISOR,
	}
}

/// Eased transition between two rotations, restartable mid-flight.
#[derive(Clone, Debug)]
pub struct TiltTween {
	from: Rotation,
	to: Rotation,
	start_ms: f64,
	duration_ms: f64,
	ease: Ease,
}

impl Default for TiltTween {
	fn default() -> Self {
		Self {
			from: Rotation::default(),
			to: Rotation::default(),
			start_ms: 0.0,
			duration_ms: TILT_DURATION_MS,
			ease: Ease::Power2Out,
		}
	}
}

impl TiltTween {
	/// Rotation at time `now_ms`.
	pub fn sample(&self, now_ms: f64) -> Rotation {
		let t = if self.duration_ms <= 0.0 {
			1.0
		} else {
			(now_ms - self.start_ms) / self.duration_ms
		};
		self.from.lerp(self.to, self.ease.apply(t))
	}

	/// Head for `target`, starting from wherever the card is at `now_ms`.
	pub fn retarget(&mut self, now_ms: f64, target: Rotation) {
		self.from = self.sample(now_ms);
		self.to = target;
		self.start_ms = now_ms;
	}

	/// Whether the tween has reached its target by `now_ms`.
	pub fn is_settled(&self, now_ms: f64) -> bool {
		now_ms - self.start_ms >= self.duration_ms
	}
}

/// What one animation frame should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltFrame {
	/// New transform to write, `None` when unchanged since the last write.
	pub write: Option<Rotation>,
	/// Whether the tween still needs frames.
	pub animating: bool,
}

/// Frame-side state of the tilt: the tween plus the latest pointer target.
///
/// Pointer events only record a target. The next frame restarts the tween
/// from there, using the frame's own timestamp, so an idle loop can be woken
/// without a separate clock.
#[derive(Clone, Debug, Default)]
pub struct TiltDriver {
	tween: TiltTween,
	pending: Option<Rotation>,
	written: Option<Rotation>,
}

impl TiltDriver {
	/// Record a new target; it takes effect on the next frame.
	pub fn point_at(&mut self, target: Rotation) {
		self.pending = Some(target);
	}

	/// Step to the frame at `now_ms`.
	pub fn advance(&mut self, now_ms: f64) -> TiltFrame {
		if let Some(target) = self.pending.take() {
			self.tween.retarget(now_ms, target);
		}
		let rotation = self.tween.sample(now_ms);
		let write = (self.written != Some(rotation)).then_some(rotation);
		self.written = Some(rotation);
		TiltFrame {
			write,
			animating: !self.tween.is_settled(now_ms),
		}
	}
}
