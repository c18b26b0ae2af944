//! Easing curves shared by the tilt tween and the CSS entrance timeline.
//!
//! Names follow the usual animation-library convention: `Power2Out` is a cubic
//! ease-out, `Power3Out` quartic, `Power4Out` quintic.

/// An easing curve over normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
	/// No easing.
	Linear,
	/// Cubic ease-out.
	Power2Out,
	/// Quartic ease-out.
	Power3Out,
	/// Quintic ease-out.
	Power4Out,
	/// Exponential ease-out.
	ExpoOut,
}

impl Ease {
	/// Map linear progress `t` in `[0, 1]` to eased progress.
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		let inv = 1.0 - t;
		match self {
			Ease::Linear => t,
			Ease::Power2Out => 1.0 - inv.powi(3),
			Ease::Power3Out => 1.0 - inv.powi(4),
			Ease::Power4Out => 1.0 - inv.powi(5),
			Ease::ExpoOut => {
				if t >= 1.0 {
					1.0
				} else {
					1.0 - 2f64.powf(-10.0 * t)
				}
			}
		}
	}

	/// Closest CSS timing function.
	pub fn css(self) -> &'static str {
		match self {
			Ease::Linear => "linear",
			Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
			Ease::Power3Out => "cubic-bezier(0.25, 1, 0.5, 1)",
			Ease::Power4Out => "cubic-bezier(0.22, 1, 0.36, 1)",
			Ease::ExpoOut => "cubic-bezier(0.16, 1, 0.3, 1)",
		}
	}
}
