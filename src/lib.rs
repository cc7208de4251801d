//! hero-particles: portfolio hero section with an ambient particle canvas.
//!
//! This crate provides a WASM-based page whose hero banner is backed by a
//! full-viewport canvas of slowly bouncing, semi-transparent dots, plus a
//! persisted light/dark theme toggle.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed for its `js` feature, which backs `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod dark_mode;

pub use components::particle_field::{FieldStyle, PARTICLE_COUNT, ParticleFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-particles: logging initialized");
}

/// Parse and validate a style override. Any problem yields `None` after a warning.
fn parse_style(json_text: &str) -> Option<FieldStyle> {
	let style = match serde_json::from_str::<FieldStyle>(json_text) {
		Ok(style) => style,
		Err(e) => {
			warn!("hero-particles: failed to parse particle style: {}", e);
			return None;
		}
	};
	if let Err(e) = style.validate() {
		warn!("hero-particles: rejected particle style: {}", e);
		return None;
	}
	info!("hero-particles: loaded particle style overrides");
	Some(style)
}

/// Load particle style overrides from a script element with id="particle-style".
/// Expected format: a JSON object with any subset of the [`FieldStyle`] fields.
fn load_particle_style() -> Option<FieldStyle> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-style")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	parse_style(&json_text)
}

/// Main application component.
/// Renders the hero banner over the particle canvas and the theme toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let style = load_particle_style().unwrap_or_default();
	let (dark, set_dark) = signal(dark_mode::load());

	Effect::new(move |_| dark_mode::apply(dark.get()));

	let toggle_theme = move |_| {
		let next = !dark.get_untracked();
		set_dark.set(next);
		dark_mode::store(next);
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Motion Design Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section id="home" class="hero">
			<div class="hero-background">
				<ParticleFieldCanvas field_style=style canvas_class="hero-canvas" />
			</div>
			<div class="hero-content">
				<h1>"Motion Design & Animation"</h1>
				<p class="subtitle">"Bringing brands to life, one frame at a time."</p>
			</div>
			<button class="theme-toggle" on:click=toggle_theme>
				{move || if dark.get() { "Light mode" } else { "Dark mode" }}
			</button>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn style_override_merges_with_defaults() {
		let style = parse_style(r#"{ "speed": 0.1, "opacity_max": 0.5 }"#).unwrap();
		assert_eq!(style.speed, 0.1);
		assert_eq!(style.opacity_max, 0.5);
		assert_eq!(style.size_max, FieldStyle::default().size_max);
	}

	#[test]
	fn malformed_or_invalid_style_is_dropped() {
		assert!(parse_style("not json").is_none());
		assert!(parse_style(r#"{ "size_min": 5.0 }"#).is_none());
		assert!(parse_style(r#"{ "speed": 1e308 }"#).is_none());
	}
}
