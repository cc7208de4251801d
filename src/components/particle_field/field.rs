//! The fixed-size particle set and the surface bounds it bounces inside.

use rand::Rng;

use super::particles::Particle;
use super::style::FieldStyle;

/// Number of dots in the hero background.
pub const PARTICLE_COUNT: usize = 50;

/// Particle state owned by one mounted canvas.
///
/// Created once when the canvas becomes available, then advanced every
/// frame. Resizing only records the new bounds; positions are kept as-is and
/// the bounce rule brings stray particles back.
pub struct ParticleField {
	particles: [Particle; PARTICLE_COUNT],
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Seed a field for a `width` x `height` surface.
	///
	/// Returns `None` for empty or non-finite dimensions, which is how an
	/// unusable surface shows up before anything gets drawn, and for a style
	/// that fails [`FieldStyle::validate`].
	pub fn new<R: Rng>(rng: &mut R, style: &FieldStyle, width: f64, height: f64) -> Option<Self> {
		if !has_area(width, height) {
			return None;
		}
		if let Err(e) = style.validate() {
			log::warn!("hero-particles: unusable particle style: {}", e);
			return None;
		}

		let particles = std::array::from_fn(|_| Particle::random(rng, style, width, height));

		Some(Self {
			particles,
			width,
			height,
		})
	}

	/// The particles in insertion (and paint) order.
	pub fn particles(&self) -> &[Particle; PARTICLE_COUNT] {
		&self.particles
	}

	/// Current surface width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle by one frame, in insertion order.
	pub fn tick(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.advance(width, height);
		}
	}

	/// Record new surface bounds without touching particle positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn has_area(width: f64, height: f64) -> bool {
	width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
