//! Tunable renderer settings.
//!
//! Loaded from page JSON (see [`crate::load_config`]); every field has a
//! default, so an empty object or a missing element yields the stock look.
//!
//! # Units
//!
//! Particle velocities are authored in pixels per *reference frame*. The
//! stepper multiplies elapsed seconds by [`BackdropConfig::reference_rate`] so
//! motion stays time-based: a 144 Hz display and a 30 Hz one move particles
//! the same distance per second.

use serde::Deserialize;

use super::season::Season;

/// Per-particle positional wobble applied at draw time.
///
/// `x += amplitude_x * sin(frequency_x * t + seed)` and
/// `y += amplitude_y * cos(frequency_y * t + seed)`, `t` in seconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WobbleConfig {
	/// Horizontal swing in pixels.
	pub amplitude_x: f64,
	/// Vertical swing in pixels.
	pub amplitude_y: f64,
	/// Horizontal rate in radians per second.
	pub frequency_x: f64,
	/// Vertical rate in radians per second.
	pub frequency_y: f64,
}

impl Default for WobbleConfig {
	fn default() -> Self {
		Self {
			amplitude_x: 1.0,
			amplitude_y: 1.0,
			frequency_x: 1.0,
			frequency_y: 2.0,
		}
	}
}

impl WobbleConfig {
	/// Wobble offset for a particle with phase `seed` at `time` seconds.
	pub fn offset(&self, time: f64, seed: f64) -> (f64, f64) {
		(
			self.amplitude_x * (time * self.frequency_x + seed).sin(),
			self.amplitude_y * (time * self.frequency_y + seed).cos(),
		)
	}
}

/// Complete renderer configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	/// Season shown before the visitor touches the wheel.
	pub initial_season: Season,
	/// Updates per second that particle velocities are tuned for.
	pub reference_rate: f64,
	/// Multiplier on each season's particle count.
	pub density: f64,
	/// Visual sway added at draw time.
	pub wobble: WobbleConfig,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			initial_season: Season::Spring,
			reference_rate: 60.0,
			density: 1.0,
			wobble: WobbleConfig::default(),
		}
	}
}

impl BackdropConfig {
	/// Particle count for `season` after applying [`Self::density`].
	pub fn particle_count(&self, season: Season) -> usize {
		let base = season.style().particle_count as f64;
		(base * self.density.max(0.0)).round() as usize
	}
}
