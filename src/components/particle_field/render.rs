//! Canvas rendering for the particle field.
//!
//! Each frame wipes the whole surface, then advances and paints every
//! particle as a filled circle in insertion order.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::style::FieldStyle;

/// The 2D drawing operations the field needs from its surface.
pub trait Surface {
	/// Whether the surface is currently part of the page. Frames are skipped
	/// while it is not.
	fn is_attached(&self) -> bool {
		true
	}
	/// Wipe the `width` x `height` area from the origin.
	fn clear(&self, width: f64, height: f64);
	/// Paint a filled circle with a CSS color.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn is_attached(&self) -> bool {
		self.canvas().is_some_and(|canvas| canvas.is_connected())
	}

	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
		self.set_fill_style_str(fill);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Runs one animation frame: clear, move, paint.
///
/// A detached surface skips the frame entirely, so the field resumes where
/// it left off once the canvas is back in the document.
pub fn render_frame<S: Surface + ?Sized>(field: &mut ParticleField, style: &FieldStyle, surface: &S) {
	if !surface.is_attached() {
		return;
	}

	surface.clear(field.width(), field.height());
	field.tick();

	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.size, &style.fill_css(p.opacity));
	}
}
