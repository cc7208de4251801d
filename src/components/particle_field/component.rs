//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-viewport canvas, seeds the particle field once
//! the element is mounted, and drives it through a [`FrameLoop`] backed by
//! `requestAnimationFrame`. A window `resize` listener keeps the canvas sized
//! to the viewport. Everything is torn down when the component's owner is
//! cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::frame_loop::{BrowserScheduler, FrameCallback, FrameLoop};
use super::mount::{BrowserResize, FieldMount};
use super::render;
use super::style::FieldStyle;

type BrowserMount = FieldMount<BrowserScheduler, BrowserResize, Closure<dyn FnMut()>>;

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Seed the field on `canvas` and start animating it.
///
/// Returns `None`, without scheduling anything, when the window, the 2D
/// context or a usable viewport size is missing, or the style is unusable.
fn mount(canvas: HtmlCanvasElement, style: FieldStyle) -> Option<BrowserMount> {
	let window = web_sys::window()?;
	let (w, h) = viewport_size(&window)?;

	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let field = ParticleField::new(&mut rand::thread_rng(), &style, w, h)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let field = Rc::new(RefCell::new(field));

	let on_resize = {
		let (field, canvas) = (field.clone(), canvas.clone());
		Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Some((nw, nh)) = viewport_size(&win) else {
				return;
			};
			canvas.set_width(nw as u32);
			canvas.set_height(nh as u32);
			field.borrow_mut().resize(nw, nh);
		})
	};
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let frames = Rc::new(FrameLoop::new(BrowserScheduler::new(
		window.clone(),
		animate.clone(),
	)));

	{
		let frames_inner = frames.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			frames_inner.run_frame(|| {
				render::render_frame(&mut field.borrow_mut(), &style, &ctx);
			});
		}));
	}

	let mounted = FieldMount::new(frames.clone(), BrowserResize::new(window), on_resize, animate);
	frames.start();

	log::debug!("hero-particles: particle field mounted at {}x{}", w, h);

	Some(mounted)
}

/// Renders the animated particle background of the hero section.
///
/// The canvas fills the viewport and tracks window resizes. If the browser
/// cannot provide a 2D context the canvas simply stays blank.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] field_style: FieldStyle,
	#[prop(into, optional)] canvas_class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<BrowserMount>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted.with_value(Option::is_some) {
			return;
		}

		let canvas: HtmlCanvasElement = canvas.into();
		match mount(canvas, field_style.clone()) {
			Some(m) => mounted.set_value(Some(m)),
			None => log::debug!("hero-particles: no drawing surface, particle field skipped"),
		}
	});

	on_cleanup(move || {
		mounted.try_update_value(|m| {
			m.take();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=canvas_class
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
