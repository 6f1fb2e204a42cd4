//! Ring of small season-colored dots circling the hero.
//!
//! Geometry is fixed per index; only the colors follow the season. Motion is
//! a CSS animation, so nothing here runs per frame.

use leptos::prelude::*;
use leptos_meta::Style;

use super::seasonal_background::SeasonStore;
use super::seasonal_background::season::{Color, Season};

/// Dots in the ring.
pub const ORBIT_COUNT: usize = 15;

const ORBIT_KEYFRAMES: &str = "\
@keyframes season-orbit {
	0% { transform: rotate(var(--orbit-angle)) translateX(var(--orbit-radius)) scale(1); opacity: 0.8; }
	33% { transform: rotate(calc(var(--orbit-angle) + 120deg)) translateX(var(--orbit-radius)) scale(1.2); opacity: 1; }
	66% { transform: rotate(calc(var(--orbit-angle) + 240deg)) translateX(var(--orbit-radius)) scale(0.8); opacity: 0.8; }
	100% { transform: rotate(calc(var(--orbit-angle) + 360deg)) translateX(var(--orbit-radius)) scale(1); opacity: 0.8; }
}";

/// One dot's place in the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParticle {
	/// Position in the ring, picks the color.
	pub index: usize,
	/// Starting angle in degrees, spread evenly.
	pub angle: f64,
	/// Distance from the center in pixels: 140, 170 or 200.
	pub radius: f64,
	/// Seconds per revolution: 10 to 30 in steps of 5.
	pub period: f64,
	/// Diameter in pixels: 6 to 15 in steps of 3.
	pub size: f64,
}

impl OrbitParticle {
	/// Layout of dot `index` in a ring of `count`.
	pub fn new(index: usize, count: usize) -> Self {
		Self {
			index,
			angle: index as f64 / count.max(1) as f64 * 360.0,
			radius: 140.0 + (index % 3) as f64 * 30.0,
			period: 10.0 + (index % 5) as f64 * 5.0,
			size: 6.0 + (index % 4) as f64 * 3.0,
		}
	}

	/// Fill color of this dot in `season`.
	pub fn color(&self, season: Season) -> Color {
		season.orbit_colors()[self.index % 3]
	}

	/// Inline style for the dot's `<span>`.
	pub fn style(&self, season: Season) -> String {
		format!(
			"position: absolute; top: 50%; left: 50%; width: {size}px; height: {size}px; \
			 margin-top: {margin}px; margin-left: {margin}px; border-radius: 50%; \
			 background-color: {color}; z-index: 2; pointer-events: none; \
			 --orbit-angle: {angle}deg; --orbit-radius: {radius}px; \
			 animation: season-orbit {period}s linear infinite;",
			size = self.size,
			margin = -self.size / 2.0,
			color = self.color(season).to_css(),
			angle = self.angle,
			radius = self.radius,
			period = self.period,
		)
	}
}

/// The full ring layout.
pub fn orbit_layout(count: usize) -> Vec<OrbitParticle> {
	(0..count).map(|i| OrbitParticle::new(i, count)).collect()
}

/// Dots orbiting the center of their (positioned) parent, recolored on every
/// season change.
#[component]
pub fn SeasonOrbit(store: SeasonStore) -> impl IntoView {
	let season = RwSignal::new(store.season());
	// Unsubscribes when the component's owner is disposed.
	let _subscription = StoredValue::new_local(store.subscribe(move |s| season.set(s)));

	view! {
		<Style>{ORBIT_KEYFRAMES}</Style>
		<div class="season-orbit" aria-hidden="true">
			{orbit_layout(ORBIT_COUNT)
				.into_iter()
				.map(|p| view! { <span class="season-orbit-dot" style=move || p.style(season.get()) /> })
				.collect_view()}
		</div>
	}
}
