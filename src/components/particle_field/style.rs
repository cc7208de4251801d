//! Visual styling for the particle field.
//!
//! Provides the RGBA color type and the tunable ranges particles are drawn from.

use serde::Deserialize;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`; defaults to opaque when omitted.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, new alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Saturated pink used for the hero dots.
pub const BRAND_PINK: Color = Color::rgb(255, 42, 109);

/// Ranges a fresh particle is sampled from.
///
/// Every field is optional when deserializing; missing fields keep their
/// default. Velocity components are drawn from `[-speed, speed]`, the other
/// ranges are half-open.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
	/// Fill color; its alpha is replaced by each particle's opacity.
	pub color: Color,
	/// Maximum absolute velocity per axis, in pixels per frame.
	pub speed: f64,
	/// Smallest radius, in pixels.
	pub size_min: f64,
	/// Exclusive upper bound of the radius, in pixels.
	pub size_max: f64,
	/// Lowest opacity.
	pub opacity_min: f64,
	/// Exclusive upper bound of the opacity.
	pub opacity_max: f64,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			color: BRAND_PINK,
			speed: 0.25,
			size_min: 1.0,
			size_max: 4.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
		}
	}
}

/// Reasons a [`FieldStyle`] cannot be used for sampling.
#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
	/// A field is NaN or infinite.
	#[error("{field} must be a finite number, got {value}")]
	NotFinite {
		/// Name of the offending field.
		field: &'static str,
		/// The rejected value.
		value: f64,
	},

	/// Speed is below zero.
	#[error("speed must not be negative, got {0}")]
	NegativeSpeed(f64),

	/// Speed is so large that `[-speed, speed]` cannot be sampled.
	#[error("speed {0} is too large to sample a velocity from")]
	SpeedOverflow(f64),

	/// Radius range is empty, unbounded or starts at or below zero.
	#[error("size range {min}..{max} is empty, unbounded or not positive")]
	SizeRange {
		/// Lower bound.
		min: f64,
		/// Upper bound.
		max: f64,
	},

	/// Opacity range is empty or leaves `0..=1`.
	#[error("opacity range {min}..{max} is empty or outside 0..=1")]
	OpacityRange {
		/// Lower bound.
		min: f64,
		/// Upper bound.
		max: f64,
	},
}

impl FieldStyle {
	/// Check that every range can be sampled from.
	pub fn validate(&self) -> Result<(), StyleError> {
		for (field, value) in [
			("speed", self.speed),
			("size_min", self.size_min),
			("size_max", self.size_max),
			("opacity_min", self.opacity_min),
			("opacity_max", self.opacity_max),
		] {
			if !value.is_finite() {
				return Err(StyleError::NotFinite { field, value });
			}
		}

		if self.speed < 0.0 {
			return Err(StyleError::NegativeSpeed(self.speed));
		}
		// The width of `[-speed, speed]` must stay finite after the sampler
		// rescales it, so leave a factor of two of headroom.
		if !(4.0 * self.speed).is_finite() {
			return Err(StyleError::SpeedOverflow(self.speed));
		}
		if self.size_min <= 0.0
			|| self.size_min >= self.size_max
			|| !(self.size_max - self.size_min).is_finite()
		{
			return Err(StyleError::SizeRange {
				min: self.size_min,
				max: self.size_max,
			});
		}
		if self.opacity_min < 0.0 || self.opacity_max > 1.0 || self.opacity_min >= self.opacity_max
		{
			return Err(StyleError::OpacityRange {
				min: self.opacity_min,
				max: self.opacity_max,
			});
		}

		Ok(())
	}

	/// CSS fill for a particle of the given opacity.
	pub fn fill_css(&self, opacity: f64) -> String {
		self.color.with_alpha(opacity).to_css()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_style_is_valid() {
		assert_eq!(FieldStyle::default().validate(), Ok(()));
	}

	#[test]
	fn fill_uses_particle_opacity() {
		let style = FieldStyle::default();
		assert_eq!(style.fill_css(0.5), "rgba(255, 42, 109, 0.5)");
	}

	#[test]
	fn opaque_color_renders_as_hex() {
		assert_eq!(Color::rgb(255, 42, 109).to_css(), "#ff2a6d");
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let style: FieldStyle = serde_json::from_str(r#"{ "speed": 0.5 }"#).unwrap();
		assert_eq!(style.speed, 0.5);
		assert_eq!(style.size_min, 1.0);
		assert_eq!(style.opacity_max, 0.7);
		assert_eq!(style.color, BRAND_PINK);
	}

	#[test]
	fn color_alpha_defaults_to_opaque() {
		let style: FieldStyle =
			serde_json::from_str(r#"{ "color": { "r": 1, "g": 2, "b": 3 } }"#).unwrap();
		assert_eq!(style.color, Color::rgb(1, 2, 3));
	}

	#[test]
	fn rejects_empty_ranges() {
		let style = FieldStyle {
			size_min: 4.0,
			size_max: 4.0,
			..FieldStyle::default()
		};
		assert!(matches!(style.validate(), Err(StyleError::SizeRange { .. })));

		let style = FieldStyle {
			opacity_min: 0.7,
			opacity_max: 0.2,
			..FieldStyle::default()
		};
		assert!(matches!(
			style.validate(),
			Err(StyleError::OpacityRange { .. })
		));
	}

	#[test]
	fn rejects_ranges_too_wide_to_sample() {
		let style = FieldStyle {
			speed: 1e308,
			..FieldStyle::default()
		};
		assert_eq!(style.validate(), Err(StyleError::SpeedOverflow(1e308)));

		let style = FieldStyle {
			speed: f64::MAX / 2.0,
			..FieldStyle::default()
		};
		assert!(matches!(style.validate(), Err(StyleError::SpeedOverflow(_))));

		let style = FieldStyle {
			size_min: 1e-300,
			size_max: f64::MAX,
			..FieldStyle::default()
		};
		assert_eq!(style.validate(), Ok(()));

		let style: FieldStyle = serde_json::from_str(r#"{ "speed": 1e308 }"#).unwrap();
		assert!(style.validate().is_err());
	}

	#[test]
	fn rejects_bad_numbers() {
		let style = FieldStyle {
			speed: -1.0,
			..FieldStyle::default()
		};
		assert_eq!(style.validate(), Err(StyleError::NegativeSpeed(-1.0)));

		let style = FieldStyle {
			opacity_max: f64::NAN,
			..FieldStyle::default()
		};
		assert!(matches!(
			style.validate(),
			Err(StyleError::NotFinite {
				field: "opacity_max",
				..
			})
		));
	}
}
