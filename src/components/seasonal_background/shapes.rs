//! Per-kind particle drawing.
//!
//! Every routine draws around `(x, y)` in the surface's current transform; the
//! caller is expected to have translated and rotated to the particle already.
//! Output depends only on the arguments, so a particle looks the same for the
//! same `(size, color, time)` every time.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, TAU};

use super::particles::ShapeKind;
use super::season::Color;
use super::surface::{Paint, Surface};

const LEAF_VEIN: Color = Color::rgba(0, 0, 0, 0.2);
const BUTTERFLY_BODY: Color = Color::rgba(0, 0, 0, 0.4);

/// Draw one shape of `kind`. `time` only matters for animated kinds
/// (butterfly, frost) and should already include the particle's seed.
pub fn draw_shape<S: Surface + ?Sized>(
	surface: &mut S,
	kind: ShapeKind,
	size: f64,
	color: Color,
	time: f64,
) {
	match kind {
		ShapeKind::Snow => draw_snowflake(surface, 0.0, 0.0, size, color),
		ShapeKind::Raindrop => draw_raindrop(surface, 0.0, 0.0, size, color),
		ShapeKind::Butterfly => draw_butterfly(surface, 0.0, 0.0, size, color, time),
		ShapeKind::Petal => draw_petal(surface, 0.0, 0.0, size, color),
		ShapeKind::IceCrystal => draw_ice_crystal(surface, 0.0, 0.0, size, color),
		ShapeKind::Frost => draw_frost(surface, 0.0, 0.0, size, color, time),
		ShapeKind::Leaf => draw_leaf(surface, 0.0, 0.0, size, color),
	}
}

/// Pointed lens from two mirrored cubic curves, with a center vein.
pub fn draw_leaf<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, size: f64, color: Color) {
	let half = size / 2.0;
	lens(surface, x, y, half, half);
	surface.set_fill(&Paint::Solid(color));
	surface.fill();

	surface.begin_path();
	surface.move_to(x, y - half);
	surface.line_to(x, y + half);
	surface.set_stroke(LEAF_VEIN);
	surface.set_line_width(size / 10.0);
	surface.stroke();
}

/// Six spokes, each with a pair of ticks branching off its midpoint.
pub fn draw_snowflake<S: Surface + ?Sized>(
	surface: &mut S,
	x: f64,
	y: f64,
	size: f64,
	color: Color,
) {
	const SPOKES: usize = 6;
	let tick = size * 0.5;

	surface.begin_path();
	for i in 0..SPOKES {
		let angle = TAU * i as f64 / SPOKES as f64;
		surface.move_to(x, y);
		surface.line_to(x + angle.cos() * size, y + angle.sin() * size);

		let (mx, my) = (x + angle.cos() * size * 0.5, y + angle.sin() * size * 0.5);
		for branch in [angle + FRAC_PI_8, angle - FRAC_PI_8] {
			surface.move_to(mx, my);
			surface.line_to(mx + branch.cos() * tick, my + branch.sin() * tick);
		}
	}
	surface.set_stroke(color);
	surface.set_line_width(size / 10.0);
	surface.stroke();
}

/// A narrower lens than the leaf, no vein.
pub fn draw_raindrop<S: Surface + ?Sized>(
	surface: &mut S,
	x: f64,
	y: f64,
	size: f64,
	color: Color,
) {
	lens(surface, x, y, size / 2.0, size / 4.0);
	surface.set_fill(&Paint::Solid(color));
	surface.fill();
}

/// Petal: an upright ellipse, filled.
pub fn draw_petal<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, size: f64, color: Color) {
	surface.begin_path();
	surface.ellipse(x, y, size / 2.0, size, 0.0, 0.0, TAU);
	surface.set_fill(&Paint::Solid(color));
	surface.fill();
}

/// Two tilted wing ellipses whose width flaps with `time`, over a dark body.
pub fn draw_butterfly<S: Surface + ?Sized>(
	surface: &mut S,
	x: f64,
	y: f64,
	size: f64,
	color: Color,
	time: f64,
) {
	let flap = (time * 5.0).sin() * 0.3 + 0.7;
	let wing_x = size / 2.0 * flap;
	let wing_y = size / 3.0;

	for (offset, tilt) in [(-size / 2.0, FRAC_PI_4), (size / 2.0, -FRAC_PI_4)] {
		surface.begin_path();
		surface.ellipse(x + offset, y, wing_x, wing_y, tilt, 0.0, TAU);
		surface.set_fill(&Paint::Solid(color));
		surface.fill();
	}

	surface.begin_path();
	surface.ellipse(x, y, size / 10.0, size / 3.0, 0.0, 0.0, TAU);
	surface.set_fill(&Paint::Solid(BUTTERFLY_BODY));
	surface.fill();
}

/// Eight spokes, each forked 60% of the way out.
pub fn draw_ice_crystal<S: Surface + ?Sized>(
	surface: &mut S,
	x: f64,
	y: f64,
	size: f64,
	color: Color,
) {
	const SPOKES: usize = 8;
	let branch_len = size * 0.5;

	surface.set_stroke(color);
	surface.set_line_width(2.0);
	for i in 0..SPOKES {
		let angle = i as f64 / SPOKES as f64 * TAU;

		surface.begin_path();
		surface.move_to(x, y);
		surface.line_to(x + angle.cos() * size, y + angle.sin() * size);
		surface.stroke();

		let (bx, by) = (x + angle.cos() * size * 0.6, y + angle.sin() * size * 0.6);
		for branch in [angle + FRAC_PI_6, angle - FRAC_PI_6] {
			surface.begin_path();
			surface.move_to(bx, by);
			surface.line_to(bx + branch.cos() * branch_len, by + branch.sin() * branch_len);
			surface.stroke();
		}
	}
}

/// Six curved tendrils; `time` slowly turns the whole pattern.
pub fn draw_frost<S: Surface + ?Sized>(
	surface: &mut S,
	x: f64,
	y: f64,
	size: f64,
	color: Color,
	time: f64,
) {
	const TENDRILS: usize = 6;

	surface.begin_path();
	for i in 0..TENDRILS {
		let angle = i as f64 / TENDRILS as f64 * TAU + time;
		let bend = angle + 0.5;
		surface.move_to(x, y);
		surface.quadratic_curve_to(
			x + bend.cos() * size * 0.5,
			y + bend.sin() * size * 0.5,
			x + angle.cos() * size,
			y + angle.sin() * size,
		);
	}
	surface.set_stroke(color);
	surface.set_line_width(2.0);
	surface.stroke();
}

/// Closed vertical lens from `(x, y - half_height)` to `(x, y + half_height)`.
/// Control points sit `bulge` out to either side and `bulge` above and below
/// the center line.
fn lens<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, half_height: f64, bulge: f64) {
	surface.begin_path();
	surface.move_to(x, y - half_height);
	surface.bezier_curve_to(x + bulge, y - bulge, x + bulge, y + bulge, x, y + half_height);
	surface.bezier_curve_to(x - bulge, y + bulge, x - bulge, y - bulge, x, y - half_height);
}
