//! Colors for the particle background.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Palette used by the background renderer.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Stroke for the lines between nearby particles. Alpha comes per line.
	pub link: Color,
	/// Line width of the links.
	pub link_width: f64,
	/// Round particles.
	pub dot: Color,
	/// Candle bars drifting down the screen.
	pub candle_up: Color,
	/// Candle bars drifting up the screen.
	pub candle_down: Color,
	/// Bar width.
	pub candle_width: f64,
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self {
			link: Color::rgb(16, 185, 129),
			link_width: 0.5,
			dot: Color::rgb(255, 255, 255),
			candle_up: Color::rgb(16, 185, 129),   // #10b981
			candle_down: Color::rgb(239, 68, 68), // #ef4444
			candle_width: 2.0,
		}
	}
}

impl FieldTheme {
	/// Candle color follows the instantaneous vertical drift.
	pub fn candle_color(&self, rising: bool) -> Color {
		if rising { self.candle_up } else { self.candle_down }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(16, 185, 129).to_css(), "#10b981");
		assert_eq!(Color::rgb(239, 68, 68).to_css(), "#ef4444");
	}

	#[test]
	fn css_uses_rgba_when_translucent() {
		let link = FieldTheme::default().link.with_alpha(0.05);
		assert_eq!(link.to_css(), "rgba(16, 185, 129, 0.05)");
	}

	#[test]
	fn candle_color_tracks_drift_direction() {
		let theme = FieldTheme::default();
		assert_eq!(theme.candle_color(true).to_css(), "#10b981");
		assert_eq!(theme.candle_color(false).to_css(), "#ef4444");
	}
}
