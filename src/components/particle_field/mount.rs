//! Ownership of a running field's browser resources.
//!
//! A [`FieldMount`] bundles the frame loop, the attached resize listener and
//! the slot holding the frame callback. Dropping it is the teardown.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::frame_loop::{FrameLoop, FrameScheduler};

/// Host source of viewport `resize` notifications.
pub trait ResizeSource {
	/// Callback type the host registers.
	type Listener;

	/// Register `listener` for resize notifications.
	fn attach(&self, listener: &Self::Listener);
	/// Unregister a listener passed to [`ResizeSource::attach`].
	fn detach(&self, listener: &Self::Listener);
}

/// Window `resize` events.
pub struct BrowserResize {
	window: Window,
}

impl BrowserResize {
	/// Resize source backed by `window`.
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl ResizeSource for BrowserResize {
	type Listener = Closure<dyn FnMut()>;

	fn attach(&self, listener: &Self::Listener) {
		let _ = self
			.window
			.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
	}

	fn detach(&self, listener: &Self::Listener) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
	}
}

/// Live resources of a mounted field.
///
/// Dropping it stops the loop (cancelling the queued frame), detaches the
/// resize listener and empties the frame callback slot. The callback usually
/// captures the loop, which holds the slot, so emptying it breaks that cycle.
pub struct FieldMount<S: FrameScheduler, R: ResizeSource, C> {
	frames: Rc<FrameLoop<S>>,
	resize: R,
	on_resize: Option<R::Listener>,
	animate: Rc<RefCell<Option<C>>>,
}

impl<S: FrameScheduler, R: ResizeSource, C> FieldMount<S, R, C> {
	/// Attach `on_resize` to `resize` and take ownership of everything.
	pub fn new(
		frames: Rc<FrameLoop<S>>,
		resize: R,
		on_resize: R::Listener,
		animate: Rc<RefCell<Option<C>>>,
	) -> Self {
		resize.attach(&on_resize);
		Self {
			frames,
			resize,
			on_resize: Some(on_resize),
			animate,
		}
	}
}

impl<S: FrameScheduler, R: ResizeSource, C> Drop for FieldMount<S, R, C> {
	fn drop(&mut self) {
		self.frames.stop();
		if let Some(listener) = self.on_resize.take() {
			self.resize.detach(&listener);
		}
		self.animate.borrow_mut().take();
		log::debug!("hero-particles: particle field torn down");
	}
}
