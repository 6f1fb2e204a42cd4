//! Cancellable per-frame loop.
//!
//! [`AnimationLoop::start`] runs a tick callback once per display refresh
//! until the returned [`AnimationHandle`] is stopped or dropped. Stopping
//! revokes the pending frame request, so a loop never outlives the canvas it
//! draws into.
//!
//! Each loop binds one callback to its scheduler and re-requests it every
//! frame. That callback only holds a weak reference to the loop, so the tick
//! closure (and whatever it captured) is freed when the handle goes away,
//! together with the scheduler's copy of the callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Host-assigned id of a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest(pub i32);

/// Source of display-refresh callbacks.
///
/// A loop binds one callback up front and then re-requests it every frame.
pub trait FrameScheduler {
	/// Install the callback every later request fires with the frame
	/// timestamp in milliseconds. Replaces any earlier binding.
	fn bind(&self, callback: Box<dyn FnMut(f64)>);

	/// Queue the bound callback for the next refresh. `None` means the host
	/// cannot schedule frames.
	fn request(&self) -> Option<FrameRequest>;

	/// Revoke a request that has not fired yet.
	fn cancel(&self, request: FrameRequest);
}

/// `requestAnimationFrame` on the global window, re-using a single closure.
#[derive(Default)]
pub struct RafScheduler {
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameScheduler for RafScheduler {
	fn bind(&self, callback: Box<dyn FnMut(f64)>) {
		*self.callback.borrow_mut() = Some(Closure::wrap(callback));
	}

	fn request(&self) -> Option<FrameRequest> {
		let window = web_sys::window()?;
		let bound = self.callback.borrow();
		let callback = bound.as_ref()?;
		window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
			.map(FrameRequest)
	}

	fn cancel(&self, request: FrameRequest) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(request.0);
		}
	}
}

// The scheduler (and with it the bound JS closure) lives exactly as long as
// the loop state; the bound callback only holds a `Weak` back to it.
struct LoopState<S: FrameScheduler> {
	scheduler: S,
	tick: RefCell<Box<dyn FnMut(f64)>>,
	pending: Cell<Option<FrameRequest>>,
	running: Cell<bool>,
}

impl<S: FrameScheduler + 'static> LoopState<S> {
	fn schedule(&self) {
		let request = self.scheduler.request();
		if request.is_none() {
			warn!("seasonal-backdrop: no frame scheduler available, animation stopped");
			self.running.set(false);
		}
		self.pending.set(request);
	}

	fn run(&self, timestamp: f64) {
		self.pending.set(None);
		if !self.running.get() {
			return;
		}

		(&mut *self.tick.borrow_mut())(timestamp);

		if self.running.get() {
			self.schedule();
		}
	}

	fn halt(&self) {
		if self.running.replace(false) {
			debug!("seasonal-backdrop: animation loop stopped");
		}
		if let Some(request) = self.pending.take() {
			self.scheduler.cancel(request);
		}
	}
}

/// Entry point for starting a frame loop.
pub struct AnimationLoop;

impl AnimationLoop {
	/// Start calling `tick` with each frame timestamp, beginning on the next
	/// refresh.
	pub fn start<S: FrameScheduler + 'static>(
		scheduler: S,
		tick: impl FnMut(f64) + 'static,
	) -> AnimationHandle<S> {
		let state = Rc::new(LoopState {
			scheduler,
			tick: RefCell::new(Box::new(tick)),
			pending: Cell::new(None),
			running: Cell::new(true),
		});

		let weak = Rc::downgrade(&state);
		state.scheduler.bind(Box::new(move |timestamp| {
			if let Some(state) = weak.upgrade() {
				state.run(timestamp);
			}
		}));
		state.schedule();
		AnimationHandle { state }
	}
}

/// Ownership of a running loop. Dropping it stops the loop.
#[must_use = "the animation stops as soon as the handle is dropped"]
pub struct AnimationHandle<S: FrameScheduler + 'static> {
	state: Rc<LoopState<S>>,
}

impl<S: FrameScheduler + 'static> AnimationHandle<S> {
	/// Stop the loop. A tick already executing finishes; nothing runs after it.
	pub fn stop(self) {}

	/// Whether frames are still being requested.
	pub fn is_running(&self) -> bool {
		self.state.running.get()
	}
}

impl<S: FrameScheduler + 'static> Drop for AnimationHandle<S> {
	fn drop(&mut self) {
		self.state.halt();
	}
}
