//! Scene state advanced by the animation loop.
//!
//! A [`Scene`] bundles the active season, its particles, the frame clock and
//! the random source particles respawn from. The component builds a fresh one
//! for every season or viewport change; `set_season` and `resize` do the same
//! in place for callers that keep a scene around.

use rand::Rng;
use rand::rngs::SmallRng;

use super::clock::FrameClock;
use super::config::BackdropConfig;
use super::particles::ParticleField;
use super::render;
use super::season::{Season, SeasonStyle};
use super::surface::Surface;

/// Everything one running background needs between frames.
pub struct Scene<R: Rng = SmallRng> {
	season: Season,
	style: SeasonStyle,
	field: ParticleField,
	clock: FrameClock,
	config: BackdropConfig,
	rng: R,
}

impl<R: Rng> Scene<R> {
	/// Generate a field for `season` on a `width` x `height` surface.
	pub fn new(season: Season, width: f64, height: f64, config: BackdropConfig, mut rng: R) -> Self {
		let style = season.style();
		let field = ParticleField::generate(
			&style,
			config.particle_count(season),
			width,
			height,
			&mut rng,
		);

		Self {
			season,
			style,
			field,
			clock: FrameClock::new(),
			config,
			rng,
		}
	}

	/// The season being rendered.
	pub fn season(&self) -> Season {
		self.season
	}

	/// Current particles.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Current particles, for callers that place them by hand.
	pub fn field_mut(&mut self) -> &mut ParticleField {
		&mut self.field
	}

	/// Switch season, discarding every particle of the previous one.
	pub fn set_season(&mut self, season: Season) {
		self.season = season;
		self.style = season.style();
		self.regenerate(self.field.width(), self.field.height());
	}

	/// Rebuild the particle set for a new surface size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.regenerate(width, height);
	}

	fn regenerate(&mut self, width: f64, height: f64) {
		self.field = ParticleField::generate(
			&self.style,
			self.config.particle_count(self.season),
			width,
			height,
			&mut self.rng,
		);
		self.clock.reset();
	}

	/// One animation callback: advance by the time since the previous frame,
	/// then draw. `timestamp_ms` is the host's frame timestamp.
	pub fn frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) {
		let dt = self.clock.tick(timestamp_ms);
		self.field
			.step(dt, self.config.reference_rate, &mut self.rng);
		render::render(
			surface,
			&self.field,
			&self.style,
			&self.config.wobble,
			timestamp_ms / 1000.0,
		);
	}
}
