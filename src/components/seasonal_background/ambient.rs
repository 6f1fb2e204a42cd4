//! Full-surface washes painted under the particles.

use std::f64::consts::TAU;

use super::season::Color;
use super::surface::{LinearGradient, Paint, Surface};

/// Horizontal step between aurora edge samples, in pixels.
const AURORA_STEP: usize = 10;
const AURORA_FREQUENCY: f64 = 0.003;

/// The season-wide backdrop drawn once per frame before any particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientEffect {
	/// Faint diagonal rainbow.
	RainbowWash,
	/// Soft sun disc near the top-right corner.
	SunGlow,
	/// Faint warm vertical gradient.
	WarmWash,
	/// Undulating translucent bands drifting with time.
	Aurora { bands: usize },
}

impl AmbientEffect {
	/// Paint the effect over a `width × height` surface. `time` is in seconds.
	pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, height: f64, time: f64) {
		match *self {
			AmbientEffect::RainbowWash => paint_rainbow(surface, width, height),
			AmbientEffect::SunGlow => paint_sun_glow(surface, width, height),
			AmbientEffect::WarmWash => paint_warm_wash(surface, width, height),
			AmbientEffect::Aurora { bands } => paint_aurora(surface, width, height, time, bands),
		}
	}
}

fn paint_rainbow<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64) {
	const BANDS: [Color; 6] = [
		Color::rgba(255, 0, 0, 0.03),
		Color::rgba(255, 165, 0, 0.03),
		Color::rgba(255, 255, 0, 0.03),
		Color::rgba(0, 128, 0, 0.03),
		Color::rgba(0, 0, 255, 0.03),
		Color::rgba(75, 0, 130, 0.03),
	];

	let stops = BANDS
		.iter()
		.enumerate()
		.map(|(i, c)| (i as f64 / (BANDS.len() - 1) as f64, *c))
		.collect();
	surface.set_fill(&Paint::Linear(LinearGradient {
		from: (0.0, 0.0),
		to: (width, height),
		stops,
	}));
	surface.fill_rect(0.0, 0.0, width, height);
}

fn paint_sun_glow<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64) {
	surface.save();
	surface.begin_path();
	surface.arc(width * 0.9, height * 0.1, 50.0, 0.0, TAU);
	surface.set_fill(&Paint::Solid(Color::rgba(255, 235, 59, 0.1)));
	surface.fill();
	surface.restore();
}

fn paint_warm_wash<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64) {
	surface.set_fill(&Paint::Linear(LinearGradient {
		from: (0.0, 0.0),
		to: (0.0, height),
		stops: vec![
			(0.0, Color::rgba(255, 248, 225, 0.05)),
			(1.0, Color::rgba(255, 224, 178, 0.05)),
		],
	}));
	surface.fill_rect(0.0, 0.0, width, height);
}

fn paint_aurora<S: Surface + ?Sized>(
	surface: &mut S,
	width: f64,
	height: f64,
	time: f64,
	bands: usize,
) {
	let edge = Color::rgba(0, 128, 128, 0.0);
	let glow = Color::rgba(0, 255, 255, 0.1);

	for i in 0..bands {
		let band = i as f64;
		let base_y = height * 0.3 + band / bands as f64 * height * 0.3;
		let amplitude = 50.0 + (time * 0.3 + band).sin() * 30.0;

		surface.set_fill(&Paint::Linear(LinearGradient {
			from: (0.0, base_y - amplitude),
			to: (0.0, base_y + amplitude),
			stops: vec![(0.0, edge), (0.5, glow), (1.0, edge)],
		}));

		surface.begin_path();
		surface.move_to(0.0, base_y);
		let mut x = 0.0;
		while x < width {
			let wave = (x * AURORA_FREQUENCY + time * 0.5 + band).sin() * amplitude;
			surface.line_to(x, base_y + wave);
			x += AURORA_STEP as f64;
		}
		surface.line_to(width, height);
		surface.line_to(0.0, height);
		surface.close_path();
		surface.fill();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::seasonal_background::surface::recording::{Command, RecordingSurface};

	fn painted(effect: AmbientEffect, time: f64) -> RecordingSurface {
		let mut surface = RecordingSurface::default();
		effect.paint(&mut surface, 800.0, 600.0, time);
		surface
	}

	#[test]
	fn rainbow_covers_the_surface_diagonally() {
		let s = painted(AmbientEffect::RainbowWash, 0.0);
		let [Command::FillRect(x, y, w, h, Paint::Linear(g))] = s.commands.as_slice() else {
			panic!("unexpected commands: {:?}", s.commands);
		};
		assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 800.0, 600.0));
		assert_eq!(g.to, (800.0, 600.0));
		assert_eq!(g.stops.len(), 6);
		assert_eq!(g.stops.first().map(|s| s.0), Some(0.0));
		assert_eq!(g.stops.last().map(|s| s.0), Some(1.0));
		assert!(g.stops.iter().all(|(_, c)| c.a == 0.03));
	}

	#[test]
	fn sun_glow_sits_top_right() {
		let s = painted(AmbientEffect::SunGlow, 0.0);
		let arc = s.commands.iter().find_map(|c| match c {
			Command::Arc(x, y, r) => Some((*x, *y, *r)),
			_ => None,
		});
		let (x, y, r) = arc.expect("no glow drawn");
		assert!((x - 720.0).abs() < 1e-9 && (y - 60.0).abs() < 1e-9);
		assert_eq!(r, 50.0);
		assert_eq!(s.commands.first(), Some(&Command::Save));
		assert_eq!(s.commands.last(), Some(&Command::Restore));
	}

	#[test]
	fn warm_wash_is_vertical() {
		let s = painted(AmbientEffect::WarmWash, 0.0);
		let [Command::FillRect(.., Paint::Linear(g))] = s.commands.as_slice() else {
			panic!("unexpected commands: {:?}", s.commands);
		};
		assert_eq!((g.from, g.to), ((0.0, 0.0), (0.0, 600.0)));
	}

	#[test]
	fn aurora_draws_one_closed_band_each() {
		let s = painted(AmbientEffect::Aurora { bands: 3 }, 12.0);
		assert_eq!(s.fills(), 3);
		assert_eq!(s.count(|c| *c == Command::ClosePath), 3);
		// 80 edge samples plus two closing corners per band.
		assert_eq!(s.line_tos(), 3 * (80 + 2));
	}

	#[test]
	fn aurora_drifts_over_time() {
		let fills = |time| -> Vec<Paint> {
			painted(AmbientEffect::Aurora { bands: 3 }, time)
				.commands
				.into_iter()
				.filter_map(|c| match c {
					Command::Fill(p) => Some(p),
					_ => None,
				})
				.collect()
		};
		assert_ne!(fills(0.0), fills(5.0));
		assert_eq!(fills(5.0), fills(5.0));
	}
}
