//! Canvas rendering for the particle background.
//!
//! One frame is drawn in three passes:
//! 1. Clear the surface
//! 2. Lines between nearby particles (positions from the previous frame)
//! 3. Step the simulation, then draw every particle on top

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, ParticleField, Pointer};
use super::theme::FieldTheme;

/// Draw one frame and advance the simulation by one step.
pub fn draw_frame(
	ctx: &CanvasRenderingContext2d,
	field: &mut ParticleField,
	theme: &FieldTheme,
	pointer: Option<Pointer>,
) {
	let bounds = field.bounds();
	ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);

	draw_links(ctx, field, theme);

	field.step(pointer);

	for p in field.particles() {
		draw_particle(ctx, p, theme);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_links(ctx: &CanvasRenderingContext2d, field: &ParticleField, theme: &FieldTheme) {
	let particles = field.particles();
	ctx.set_line_width(theme.link_width);

	for link in field.links() {
		let (a, b) = (&particles[link.a], &particles[link.b]);
		ctx.set_stroke_style_str(&theme.link.with_alpha(link.alpha).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle, theme: &FieldTheme) {
	ctx.set_global_alpha(p.opacity);

	if p.is_candle {
		ctx.set_fill_style_str(&theme.candle_color(p.is_rising()).to_css());
		ctx.fill_rect(
			p.x - theme.candle_width / 2.0,
			p.y - p.candle_height / 2.0,
			theme.candle_width,
			p.candle_height,
		);
	} else {
		ctx.set_fill_style_str(&theme.dot.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
