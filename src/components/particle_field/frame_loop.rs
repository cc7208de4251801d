//! Explicit start/stop animation loop on top of a per-frame scheduler.
//!
//! Instead of a callback that blindly re-requests itself, every frame goes
//! through [`FrameLoop::run_frame`], which consults a shared running flag
//! before doing any work or asking for the next frame. Stopping clears the
//! flag and cancels the request that is already queued.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Identifier returned by the host when a frame is requested.
pub type FrameRequest = i32;

/// Host primitive that calls back once before the next repaint.
pub trait FrameScheduler {
	/// Queue the loop's callback for the next frame. `None` if the host refused.
	fn request_frame(&self) -> Option<FrameRequest>;
	/// Withdraw a request that has not fired yet.
	fn cancel_frame(&self, request: FrameRequest);
}

/// Shared slot holding the JS callback the browser scheduler hands out.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
///
/// The callback lives in a shared slot so the closure can be created after
/// the scheduler (it usually captures the loop that owns this scheduler).
pub struct BrowserScheduler {
	window: Window,
	callback: FrameCallback,
}

impl BrowserScheduler {
	/// Scheduler that hands the closure in `callback` to `window`.
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for BrowserScheduler {
	fn request_frame(&self) -> Option<FrameRequest> {
		let slot = self.callback.borrow();
		let cb: &js_sys::Function = slot.as_ref()?.as_ref().unchecked_ref();
		self.window.request_animation_frame(cb).ok()
	}

	fn cancel_frame(&self, request: FrameRequest) {
		let _ = self.window.cancel_animation_frame(request);
	}
}

/// Handle that stops a [`FrameLoop`] from outside the frame callback.
#[derive(Clone)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
	/// No frame body runs and nothing is rescheduled after this.
	pub fn stop(&self) {
		self.0.set(false);
	}

	/// Whether the loop this handle belongs to is still running.
	pub fn is_running(&self) -> bool {
		self.0.get()
	}
}

/// A frame loop with an externally owned running flag.
pub struct FrameLoop<S: FrameScheduler> {
	scheduler: S,
	running: Rc<Cell<bool>>,
	pending: Cell<Option<FrameRequest>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
	/// A stopped loop; call [`FrameLoop::start`] to queue the first frame.
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			running: Rc::new(Cell::new(false)),
			pending: Cell::new(None),
		}
	}

	/// Handle sharing this loop's running flag.
	pub fn stop_handle(&self) -> StopHandle {
		StopHandle(self.running.clone())
	}

	/// Whether frames are still being run and scheduled.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Mark the loop running and queue the first frame.
	pub fn start(&self) {
		if self.running.replace(true) {
			return;
		}
		self.schedule();
	}

	/// Entry point for each frame callback.
	///
	/// Returns whether the loop is still running afterwards. A stopped loop
	/// neither runs `body` nor requests another frame.
	pub fn run_frame(&self, body: impl FnOnce()) -> bool {
		self.pending.set(None);
		if !self.running.get() {
			return false;
		}

		body();

		if self.running.get() {
			self.schedule();
		}
		self.running.get()
	}

	/// Stop the loop and cancel the queued frame, if any. Idempotent.
	pub fn stop(&self) {
		self.running.set(false);
		if let Some(request) = self.pending.take() {
			self.scheduler.cancel_frame(request);
		}
	}

	fn schedule(&self) {
		match self.scheduler.request_frame() {
			Some(request) => self.pending.set(Some(request)),
			None => {
				log::debug!("hero-particles: frame request refused, loop halted");
				self.running.set(false);
			}
		}
	}
}
