//! Per-frame canvas rendering.
//!
//! Draw order:
//! 1. Clear the whole surface
//! 2. The season's ambient effect
//! 3. Every particle, each under its own translate/rotate/alpha transform

use super::config::WobbleConfig;
use super::particles::{Particle, ParticleField, ShapeKind};
use super::season::SeasonStyle;
use super::shapes;
use super::surface::Surface;

/// Renders one complete frame. `time` is in seconds.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	field: &ParticleField,
	style: &SeasonStyle,
	wobble: &WobbleConfig,
	time: f64,
) {
	let (width, height) = (field.width(), field.height());
	surface.clear(width, height);
	style.ambient.paint(surface, width, height, time);

	for p in &field.particles {
		draw_particle(surface, p, wobble, time);
	}
}

fn draw_particle<S: Surface + ?Sized>(
	surface: &mut S,
	p: &Particle,
	wobble: &WobbleConfig,
	time: f64,
) {
	let (dx, dy) = wobble.offset(time, p.seed);

	surface.save();
	surface.translate(p.x + dx, p.y + dy);
	surface.rotate(p.rotation);
	surface.set_global_alpha(p.opacity);
	shapes::draw_shape(surface, p.kind, p.size, p.color, shape_time(p, time));
	surface.restore();
}

/// Animation clock for a shape: butterflies flap at full speed, frost drifts
/// at a tenth of it. Both are offset by the particle's seed.
fn shape_time(p: &Particle, time: f64) -> f64 {
	match p.kind {
		ShapeKind::Frost => time * 0.1 + p.seed,
		_ => time + p.seed,
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::seasonal_background::Season;
	use crate::components::seasonal_background::surface::recording::{Command, RecordingSurface};

	fn frame(season: Season, count: usize, time: f64) -> (ParticleField, RecordingSurface) {
		let mut rng = SmallRng::seed_from_u64(21);
		let style = season.style();
		let field = ParticleField::generate(&style, count, 640.0, 480.0, &mut rng);
		let mut surface = RecordingSurface::default();
		render(&mut surface, &field, &style, &WobbleConfig::default(), time);
		(field, surface)
	}

	#[test]
	fn clears_then_paints_ambient_before_particles() {
		let (_, s) = frame(Season::Fall, 5, 1.0);
		assert_eq!(s.commands[0], Command::Clear(640.0, 480.0));
		assert!(matches!(s.commands[1], Command::FillRect(..)));
		assert_eq!(s.commands[2], Command::Save);
	}

	#[test]
	fn every_particle_is_isolated_in_save_restore() {
		let (field, s) = frame(Season::Winter, 30, 2.5);
		// Particles contribute one save each; the aurora contributes none.
		assert_eq!(s.count(|c| *c == Command::Save), field.particles.len());
		assert_eq!(s.count(|c| *c == Command::Restore), field.particles.len());

		let alphas: Vec<f64> = s
			.commands
			.iter()
			.filter_map(|c| match c {
				Command::GlobalAlpha(a) => Some(*a),
				_ => None,
			})
			.collect();
		let expected: Vec<f64> = field.particles.iter().map(|p| p.opacity).collect();
		assert_eq!(alphas, expected);
	}

	#[test]
	fn wobble_offsets_translation_but_not_state() {
		let (field, s) = frame(Season::Spring, 1, 3.0);
		let p = &field.particles[0];
		let (dx, dy) = WobbleConfig::default().offset(3.0, p.seed);
		assert!(s.commands.contains(&Command::Translate(p.x + dx, p.y + dy)));
		assert!(s.commands.contains(&Command::Rotate(p.rotation)));
	}

	#[test]
	fn empty_field_still_paints_background() {
		let (_, s) = frame(Season::Summer, 0, 0.0);
		assert_eq!(s.commands[0], Command::Clear(640.0, 480.0));
		assert_eq!(s.fills(), 1);
	}
}
