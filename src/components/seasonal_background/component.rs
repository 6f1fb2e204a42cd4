//! Leptos component wrapping the seasonal background canvas.
//!
//! The component owns a fixed, full-viewport canvas. Whenever the season or
//! the viewport size changes, the running loop is stopped and a fresh
//! [`Scene`] with its own loop takes over. The loop also stops when the
//! component is torn down.

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::animation::{AnimationHandle, AnimationLoop, RafScheduler};
use super::config::BackdropConfig;
use super::season::Season;
use super::state::Scene;
use super::store::SeasonStore;

type Session = Option<AnimationHandle<RafScheduler>>;

/// Current window inner size, or `(0, 0)` without a window.
fn viewport_size() -> (f64, f64) {
	let Some(window) = web_sys::window() else {
		return (0.0, 0.0);
	};
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(
		dimension(window.inner_width()),
		dimension(window.inner_height()),
	)
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Window `resize` listener that unregisters itself on drop.
struct ResizeListener {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	fn attach(on_resize: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self { window, callback })
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}

/// Size the canvas, build a scene and start its loop.
///
/// Returns `None` (drawing nothing) when the canvas has no 2D context.
fn start_session(
	canvas: HtmlCanvasElement,
	season: Season,
	(width, height): (f64, f64),
	config: BackdropConfig,
) -> Session {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);

	let Some(mut ctx) = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
	else {
		warn!("seasonal-backdrop: canvas has no 2d context, background disabled");
		return None;
	};

	let mut scene = Scene::new(
		season,
		width,
		height,
		config,
		SmallRng::seed_from_u64(random_seed()),
	);
	info!(
		"seasonal-backdrop: starting {} scene with {} particles at {}x{}",
		season.name(),
		scene.field().particles.len(),
		width,
		height
	);

	Some(AnimationLoop::start(RafScheduler::default(), move |timestamp| {
		scene.frame(timestamp, &mut ctx)
	}))
}

/// Animated seasonal particles behind the page content.
///
/// Follows `store`: every season change regenerates the particles. The canvas
/// ignores pointer events so the page underneath stays interactive.
#[component]
pub fn SeasonalBackground(
	store: SeasonStore,
	#[prop(default = BackdropConfig::default())] config: BackdropConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let season = RwSignal::new(store.season());
	let viewport = RwSignal::new(viewport_size());

	let subscription = store.subscribe(move |s| season.set(s));
	let resize_listener = ResizeListener::attach(move || viewport.set(viewport_size()));
	if resize_listener.is_none() {
		warn!("seasonal-backdrop: no window to watch for resizes");
	}

	// The effect's value is the running session. Replacing it on re-run, or
	// dropping it with the effect, stops the previous loop.
	Effect::new(move |previous: Option<Session>| {
		let _ = (&subscription, &resize_listener);
		drop(previous);

		let (season, size) = (season.get(), viewport.get());
		let Some(canvas) = canvas_ref.get() else {
			return None;
		};
		start_session(canvas.into(), season, size, config.clone())
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="seasonal-background"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0;"
		/>
	}
}
