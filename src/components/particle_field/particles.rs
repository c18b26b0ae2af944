//! Drifting background particles.
//!
//! The simulation is independent of any drawing surface: it owns a particle
//! buffer and a viewport, and each [`ParticleField::step`] advances every
//! particle, pushes it away from the pointer and wraps it back into the
//! viewport. Rendering reads the buffer and the pairwise [`ParticleField::links`].

use rand::Rng;

/// Tunable constants for the particle background.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of particles in every batch.
	pub count: usize,
	/// Per-axis speed is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Dot radius range.
	pub radius_min: f64,
	/// Upper end of the radius range, exclusive.
	pub radius_max: f64,
	/// Per-particle opacity range.
	pub opacity_min: f64,
	/// Upper end of the opacity range, exclusive.
	pub opacity_max: f64,
	/// Probability that a particle is drawn as a candle bar.
	pub candle_chance: f64,
	/// Candle bar height range.
	pub candle_height_min: f64,
	/// Upper end of the candle height range, exclusive.
	pub candle_height_max: f64,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	/// Line alpha is `(link_distance - d) / link_alpha_divisor`.
	pub link_alpha_divisor: f64,
	/// Pointer influence radius.
	pub repulsion_radius: f64,
	/// Fraction of the pointer offset applied per frame at zero distance.
	pub repulsion_strength: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 100,
			max_speed: 0.075,
			radius_min: 0.5,
			radius_max: 2.0,
			opacity_min: 0.1,
			opacity_max: 0.4,
			candle_chance: 0.1,
			candle_height_min: 10.0,
			candle_height_max: 50.0,
			link_distance: 120.0,
			link_alpha_divisor: 1200.0,
			repulsion_radius: 150.0,
			repulsion_strength: 0.01,
		}
	}
}

impl FieldConfig {
	/// Alpha of the line joining two particles `distance` apart, or `None`
	/// when they are too far apart to be linked.
	pub fn link_alpha(&self, distance: f64) -> Option<f64> {
		if distance < self.link_distance {
			Some((self.link_distance - distance) / self.link_alpha_divisor)
		} else {
			None
		}
	}

	/// Proximity factor in `[0, 1]` for a particle `distance` away from the
	/// pointer. Zero at or beyond the repulsion radius.
	pub fn repulsion_factor(&self, distance: f64) -> f64 {
		if distance < self.repulsion_radius {
			(self.repulsion_radius - distance) / self.repulsion_radius
		} else {
			0.0
		}
	}
}

/// Viewport the particles live in. Both dimensions are at least one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Bounds {
	/// Clamp both sides to at least one unit; non-finite sides become one.
	pub fn new(width: f64, height: f64) -> Self {
		let clamp = |v: f64| if v.is_finite() { v.max(1.0) } else { 1.0 };
		Self {
			width: clamp(width),
			height: clamp(height),
		}
	}

	/// Whether `(x, y)` lies in `[0, width) x [0, height)`.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
	}
}

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
	/// Client x.
	pub x: f64,
	/// Client y.
	pub y: f64,
}

/// A single drifting point or candle bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Position, inside the field bounds.
	pub x: f64,
	/// Position, inside the field bounds.
	pub y: f64,
	/// Horizontal drift per frame.
	pub speed_x: f64,
	/// Vertical drift per frame.
	pub speed_y: f64,
	/// Dot radius.
	pub radius: f64,
	/// Global alpha while this particle is drawn.
	pub opacity: f64,
	/// Drawn as a vertical bar instead of a dot.
	pub is_candle: bool,
	/// Bar height when `is_candle`.
	pub candle_height: f64,
}

impl Particle {
	fn random(config: &FieldConfig, bounds: Bounds, rng: &mut impl Rng) -> Self {
		Self {
			x: rng.random_range(0.0..bounds.width),
			y: rng.random_range(0.0..bounds.height),
			speed_x: rng.random_range(-config.max_speed..config.max_speed),
			speed_y: rng.random_range(-config.max_speed..config.max_speed),
			radius: rng.random_range(config.radius_min..config.radius_max),
			opacity: rng.random_range(config.opacity_min..config.opacity_max),
			is_candle: rng.random_bool(config.candle_chance),
			candle_height: rng.random_range(config.candle_height_min..config.candle_height_max),
		}
	}

	/// Candles drifting downward on screen read as "up" bars.
	pub fn is_rising(&self) -> bool {
		self.speed_y > 0.0
	}
}

/// A line between two particles, by index into the buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// First endpoint.
	pub a: usize,
	/// Second endpoint.
	pub b: usize,
	/// Stroke alpha for this line.
	pub alpha: f64,
}

/// Toroidal wrap into `[0, extent)`.
fn wrap(value: f64, extent: f64) -> f64 {
	let wrapped = value.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if wrapped >= extent || !wrapped.is_finite() {
		0.0
	} else {
		wrapped
	}
}

/// The particle buffer plus the viewport and constants it is simulated in.
#[derive(Clone, Debug)]
pub struct ParticleField {
	config: FieldConfig,
	bounds: Bounds,
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Spawn `config.count` particles uniformly inside `bounds`.
	pub fn new(config: FieldConfig, bounds: Bounds, rng: &mut impl Rng) -> Self {
		let mut field = Self {
			config,
			bounds,
			particles: Vec::new(),
		};
		field.respawn(rng);
		field
	}

	fn respawn(&mut self, rng: &mut impl Rng) {
		let (config, bounds) = (&self.config, self.bounds);
		self.particles = (0..config.count)
			.map(|_| Particle::random(config, bounds, &mut *rng))
			.collect();
	}

	/// Replace the whole batch with fresh particles spread over `bounds`.
	pub fn resize(&mut self, bounds: Bounds, rng: &mut impl Rng) {
		self.bounds = bounds;
		self.respawn(rng);
	}

	/// Current particle buffer.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Viewport the field is simulated in.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Advance one frame: drift, pointer repulsion, wrap.
	pub fn step(&mut self, pointer: Option<Pointer>) {
		let (config, bounds) = (&self.config, self.bounds);
		for p in &mut self.particles {
			p.x += p.speed_x;
			p.y += p.speed_y;

			if let Some(pointer) = pointer {
				let (dx, dy) = (pointer.x - p.x, pointer.y - p.y);
				let factor = config.repulsion_factor((dx * dx + dy * dy).sqrt());
				if factor > 0.0 {
					p.x -= dx * factor * config.repulsion_strength;
					p.y -= dy * factor * config.repulsion_strength;
				}
			}

			p.x = wrap(p.x, bounds.width);
			p.y = wrap(p.y, bounds.height);
		}
	}

	/// All unordered pairs close enough to be joined, with their line alpha.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (a, pa) in self.particles.iter().enumerate() {
			for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				if let Some(alpha) = self.config.link_alpha((dx * dx + dy * dy).sqrt()) {
					links.push(Link {
						a,
						b: a + 1 + offset,
						alpha,
					});
				}
			}
		}
		links
	}

	#[cfg(test)]
	fn from_particles(config: FieldConfig, bounds: Bounds, particles: Vec<Particle>) -> Self {
		Self {
			config,
			bounds,
			particles,
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			radius: 1.0,
			opacity: 0.2,
			is_candle: false,
			candle_height: 10.0,
		}
	}

	#[test]
	fn new_field_respects_config_ranges() {
		let mut rng = SmallRng::seed_from_u64(7);
		let config = FieldConfig::default();
		let bounds = Bounds::new(1280.0, 720.0);
		let field = ParticleField::new(config.clone(), bounds, &mut rng);

		assert_eq!(field.particles().len(), 100);
		for p in field.particles() {
			assert!(bounds.contains(p.x, p.y));
			assert!((-0.075..0.075).contains(&p.speed_x));
			assert!((-0.075..0.075).contains(&p.speed_y));
			assert!((0.5..2.0).contains(&p.radius));
			assert!(p.opacity >= 0.1 && p.opacity < 0.4);
			assert!((10.0..50.0).contains(&p.candle_height));
		}
	}

	#[test]
	fn roughly_one_in_ten_are_candles() {
		let mut rng = SmallRng::seed_from_u64(42);
		let config = FieldConfig {
			count: 10_000,
			..FieldConfig::default()
		};
		let field = ParticleField::new(config, Bounds::new(800.0, 600.0), &mut rng);
		let candles = field.particles().iter().filter(|p| p.is_candle).count();
		assert!((700..1300).contains(&candles), "got {candles} candles");
	}

	#[test]
	fn particles_stay_in_bounds_over_many_steps() {
		let viewports = [(1.0, 1.0), (3.5, 900.0), (320.0, 568.0), (2560.0, 1440.0)];
		let pointers = [
			None,
			Some(Pointer { x: 0.0, y: 0.0 }),
			Some(Pointer { x: 160.0, y: 284.0 }),
			Some(Pointer { x: -50.0, y: 5000.0 }),
		];
		for (seed, &(w, h)) in viewports.iter().enumerate() {
			let mut rng = SmallRng::seed_from_u64(seed as u64);
			let bounds = Bounds::new(w, h);
			let mut field = ParticleField::new(FieldConfig::default(), bounds, &mut rng);
			for frame in 0..2_000 {
				field.step(pointers[frame % pointers.len()]);
			}
			for p in field.particles() {
				assert!(bounds.contains(p.x, p.y), "({}, {}) outside {w}x{h}", p.x, p.y);
			}
			assert_eq!(field.particles().len(), 100);
		}
	}

	#[test]
	fn wrap_is_toroidal_not_reflective() {
		let bounds = Bounds::new(100.0, 100.0);
		let mut right = still(99.99, 50.0);
		right.speed_x = 0.05;
		let mut top = still(50.0, 0.01);
		top.speed_y = -0.05;
		let mut field = ParticleField::from_particles(FieldConfig::default(), bounds, vec![right, top]);

		field.step(None);

		let p = field.particles();
		assert!(p[0].x < 1.0, "exited right, should re-enter left: {}", p[0].x);
		assert!(p[1].y > 99.0, "exited top, should re-enter bottom: {}", p[1].y);
	}

	#[test]
	fn wrap_never_returns_extent() {
		assert_eq!(wrap(-1e-20, 10.0), 0.0);
		assert_eq!(wrap(10.0, 10.0), 0.0);
		assert!((wrap(-0.5, 10.0) - 9.5).abs() < 1e-12);
		assert!((wrap(23.0, 10.0) - 3.0).abs() < 1e-12);
	}

	#[test]
	fn repulsion_pushes_away_from_pointer() {
		let bounds = Bounds::new(1000.0, 1000.0);
		let mut field =
			ParticleField::from_particles(FieldConfig::default(), bounds, vec![still(450.0, 500.0)]);

		field.step(Some(Pointer { x: 500.0, y: 500.0 }));

		let p = &field.particles()[0];
		assert!(p.x < 450.0);
		assert_eq!(p.y, 500.0);
	}

	#[test]
	fn repulsion_factor_is_monotonic_and_zero_outside_radius() {
		let config = FieldConfig::default();
		let mut previous = f64::INFINITY;
		for step in 0..=300 {
			let distance = step as f64 * 0.5;
			let factor = config.repulsion_factor(distance);
			assert!(factor <= previous);
			previous = factor;
		}
		assert_eq!(config.repulsion_factor(0.0), 1.0);
		assert_eq!(config.repulsion_factor(150.0), 0.0);
		assert_eq!(config.repulsion_factor(400.0), 0.0);
	}

	#[test]
	fn no_displacement_beyond_repulsion_radius() {
		let bounds = Bounds::new(1000.0, 1000.0);
		let mut field =
			ParticleField::from_particles(FieldConfig::default(), bounds, vec![still(100.0, 100.0)]);

		field.step(Some(Pointer { x: 250.0, y: 100.0 }));

		assert_eq!(field.particles()[0].x, 100.0);
	}

	#[test]
	fn link_alpha_fades_with_distance() {
		let config = FieldConfig::default();
		assert!((config.link_alpha(0.0).unwrap() - 0.1).abs() < 1e-12);
		let mut previous = f64::INFINITY;
		for step in 0..240 {
			let alpha = config.link_alpha(step as f64 * 0.5).unwrap();
			assert!(alpha < previous);
			previous = alpha;
		}
		assert_eq!(config.link_alpha(120.0), None);
		assert_eq!(config.link_alpha(500.0), None);
	}

	#[test]
	fn links_cover_unordered_close_pairs_only() {
		let bounds = Bounds::new(1000.0, 1000.0);
		let field = ParticleField::from_particles(
			FieldConfig::default(),
			bounds,
			vec![still(0.0, 0.0), still(60.0, 0.0), still(500.0, 500.0)],
		);

		let links = field.links();

		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].alpha - 0.05).abs() < 1e-12);
	}

	#[test]
	fn resize_replaces_the_batch() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut field = ParticleField::new(FieldConfig::default(), Bounds::new(1920.0, 1080.0), &mut rng);
		let before = field.particles().to_vec();

		let small = Bounds::new(200.0, 100.0);
		field.resize(small, &mut rng);

		assert_eq!(field.bounds(), small);
		assert_eq!(field.particles().len(), 100);
		assert_ne!(field.particles(), before.as_slice());
		assert!(field.particles().iter().all(|p| small.contains(p.x, p.y)));
	}

	#[test]
	fn degenerate_viewport_is_clamped() {
		let bounds = Bounds::new(0.0, f64::NAN);
		assert_eq!(bounds, Bounds::new(1.0, 1.0));
	}
}
