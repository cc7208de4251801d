//! Ambient particle effects for the hero background.

use rand::Rng;

use super::style::FieldStyle;

/// A single drifting dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Fill alpha, fixed for the particle's lifetime.
	pub opacity: f64,
}

impl Particle {
	/// Sample a particle somewhere inside a `width` x `height` surface.
	///
	/// Both dimensions must be positive and `style` must have passed
	/// [`FieldStyle::validate`], otherwise sampling panics on an empty range.
	pub fn random<R: Rng>(
		rng: &mut R,
		style: &FieldStyle,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			x: rng.gen_range(0.0..width),
			y: rng.gen_range(0.0..height),
			vx: rng.gen_range(-style.speed..=style.speed),
			vy: rng.gen_range(-style.speed..=style.speed),
			size: rng.gen_range(style.size_min..style.size_max),
			opacity: rng.gen_range(style.opacity_min..style.opacity_max),
		}
	}

	/// Move one frame and bounce off the surface edges.
	///
	/// The edge test runs after the move, so a particle may sit up to one
	/// velocity step outside the bounds before heading back. Position is
	/// never clamped.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			size: 2.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn random_particles_respect_style_ranges() {
		let mut rng = StdRng::seed_from_u64(42);
		let style = FieldStyle::default();

		for _ in 0..1000 {
			let p = Particle::random(&mut rng, &style, 800.0, 600.0);
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..=0.25).contains(&p.vx));
			assert!((-0.25..=0.25).contains(&p.vy));
			assert!((1.0..4.0).contains(&p.size));
			assert!((0.2..0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn interior_move_keeps_velocity() {
		let mut p = particle(100.0, 200.0, 0.2, -0.1);
		p.advance(800.0, 600.0);

		assert_eq!(p.x, 100.0 + 0.2);
		assert_eq!(p.y, 200.0 - 0.1);
		assert_eq!((p.vx, p.vy), (0.2, -0.1));
	}

	#[test]
	fn crossing_right_edge_flips_vx_without_clamping() {
		let mut p = particle(799.9, 300.0, 0.2, 0.0);
		p.advance(800.0, 600.0);

		assert!(p.x > 800.0);
		assert_eq!(p.vx, -0.2);
		assert_eq!(p.vy, 0.0);

		p.advance(800.0, 600.0);
		assert!(p.x < 800.0);
		assert_eq!(p.vx, -0.2);
	}

	#[test]
	fn crossing_top_edge_flips_vy() {
		let mut p = particle(10.0, 0.05, 0.0, -0.1);
		p.advance(800.0, 600.0);

		assert!(p.y < 0.0);
		assert_eq!(p.vy, 0.1);
		assert_eq!(p.vx, 0.0);
	}

	#[test]
	fn particle_outside_shrunk_bounds_turns_back() {
		let mut p = particle(700.0, 500.0, 0.25, 0.25);
		p.advance(400.0, 300.0);

		assert_eq!((p.vx, p.vy), (-0.25, -0.25));
		assert_eq!((p.x, p.y), (700.25, 500.25));
	}

	#[test]
	fn advance_leaves_size_and_opacity_alone() {
		let mut p = particle(0.1, 0.1, -0.2, -0.2);
		for _ in 0..100 {
			p.advance(800.0, 600.0);
		}
		assert_eq!(p.size, 2.0);
		assert_eq!(p.opacity, 0.5);
	}
}
