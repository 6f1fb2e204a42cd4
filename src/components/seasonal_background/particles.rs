//! Seasonal particles: generation and time-stepped motion.

use std::f64::consts::TAU;

use rand::Rng;

use super::season::{Color, DEFAULT_FALL_SPEED, ParticleRecipe, SeasonStyle};

/// Which drawing recipe a particle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	/// Lens-shaped leaf with a center vein.
	Leaf,
	/// Plain ellipse.
	Petal,
	/// Narrow lens.
	Raindrop,
	/// Two flapping wings around a dark body.
	Butterfly,
	/// Six-spoke flake.
	Snow,
	/// Eight-spoke crystal, stroked.
	IceCrystal,
	/// Slowly turning tendrils.
	Frost,
}

/// A single drifting decoration.
///
/// Velocities are in pixels per reference frame (1/60 s by default), spin in
/// radians per reference frame.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Position in surface pixels.
	pub x: f64,
	/// Position in surface pixels, growing downward.
	pub y: f64,
	/// Nominal extent; also the wrap margin.
	pub size: f64,
	/// Horizontal drift.
	pub vx: f64,
	/// Fall speed.
	pub vy: f64,
	/// Current angle in radians.
	pub rotation: f64,
	/// Angular velocity.
	pub spin: f64,
	/// Which shape to draw.
	pub kind: ShapeKind,
	/// Fill or stroke color.
	pub color: Color,
	/// Global alpha while drawing.
	pub opacity: f64,
	/// Per-particle phase offset for wobble and flutter.
	pub seed: f64,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
	lo + rng.r#gen::<f64>() * (hi - lo)
}

impl Particle {
	fn from_recipe<R: Rng + ?Sized>(
		recipe: &ParticleRecipe,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let color = recipe.colors[rng.gen_range(0..recipe.colors.len())];
		Self {
			x: rng.r#gen::<f64>() * width,
			y: rng.r#gen::<f64>() * height,
			size: sample(rng, recipe.size),
			vx: sample(rng, (-1.0, 1.0)),
			vy: sample(rng, recipe.fall_speed.unwrap_or(DEFAULT_FALL_SPEED)),
			rotation: rng.r#gen::<f64>() * TAU,
			spin: sample(rng, (-1.0, 1.0)).to_radians(),
			kind: recipe.kind,
			color,
			opacity: sample(rng, recipe.opacity),
			seed: rng.r#gen::<f64>() * 1000.0,
		}
	}
}

/// The live particle set for one season on one surface size.
///
/// Never grown or shrunk in place: a season change or resize builds a new
/// field.
#[derive(Clone, Debug)]
pub struct ParticleField {
	/// Every live particle, in draw order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populate `count` particles spread over the whole surface.
	pub fn generate<R: Rng + ?Sized>(
		style: &SeasonStyle,
		count: usize,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let particles = (0..count)
			.map(|_| {
				let recipe = ParticleRecipe::pick(style.recipes, rng);
				Particle::from_recipe(recipe, width, height, rng)
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Surface width the field was generated for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the field was generated for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle by `dt` seconds.
	///
	/// Particles that fall off the bottom respawn just above the top at a
	/// random column; particles leaving either side wrap to the other.
	pub fn step<R: Rng + ?Sized>(&mut self, dt: f64, reference_rate: f64, rng: &mut R) {
		let frames = dt.max(0.0) * reference_rate;
		if frames == 0.0 {
			return;
		}

		for p in &mut self.particles {
			p.x += p.vx * frames;
			p.y += p.vy * frames;
			p.rotation += p.spin * frames;

			if p.y > self.height {
				p.y = -p.size;
				p.x = rng.r#gen::<f64>() * self.width;
			}

			if p.x < -p.size {
				p.x = self.width + p.size;
			} else if p.x > self.width + p.size {
				p.x = -p.size;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::seasonal_background::Season;

	fn field(season: Season, count: usize, seed: u64) -> (ParticleField, SmallRng) {
		let mut rng = SmallRng::seed_from_u64(seed);
		let field = ParticleField::generate(&season.style(), count, 800.0, 600.0, &mut rng);
		(field, rng)
	}

	#[test]
	fn generates_requested_count_inside_surface() {
		let (field, _) = field(Season::Spring, 80, 1);
		assert_eq!(field.particles.len(), 80);
		for p in &field.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((0.0..1000.0).contains(&p.seed));
			assert!((-1.0..=1.0).contains(&p.vx));
			assert!(p.vy > 0.0);
		}
	}

	#[test]
	fn winter_is_mostly_snow() {
		let (field, _) = field(Season::Winter, 1000, 42);
		let snow = field
			.particles
			.iter()
			.filter(|p| p.kind == ShapeKind::Snow)
			.count();
		assert!(snow >= 600, "only {snow} of 1000 were snow");
	}

	#[test]
	fn recipe_ranges_are_respected() {
		let (field, _) = field(Season::Winter, 500, 3);
		for p in &field.particles {
			match p.kind {
				ShapeKind::Snow => {
					assert!((2.0..=8.0).contains(&p.size));
					assert!((0.5..=2.0).contains(&p.vy));
					assert_eq!(p.opacity, 1.0);
				}
				ShapeKind::IceCrystal => assert!((0.3..=0.7).contains(&p.opacity)),
				ShapeKind::Frost => assert!((80.0..=230.0).contains(&p.size)),
				other => panic!("winter produced {other:?}"),
			}
		}
	}

	#[test]
	fn only_season_kinds_are_generated() {
		for season in Season::ALL {
			let style = season.style();
			let allowed: HashSet<_> = style.kinds().collect();
			let (field, _) = field(season, 300, 9);
			assert!(field.particles.iter().all(|p| allowed.contains(&p.kind)));
		}
	}

	#[test]
	fn zero_dt_changes_nothing() {
		let (mut field, mut rng) = field(Season::Spring, 80, 5);
		let before = field.particles.clone();
		field.step(0.0, 60.0, &mut rng);
		field.step(-0.5, 60.0, &mut rng);
		for (a, b) in before.iter().zip(&field.particles) {
			assert_eq!((a.x, a.y, a.rotation), (b.x, b.y, b.rotation));
		}
	}

	#[test]
	fn wrap_invariant_holds_over_many_steps() {
		let (mut field, mut rng) = field(Season::Fall, 40, 11);
		for i in 0..2000 {
			// Mix tiny and huge steps.
			let dt = if i % 97 == 0 { 3.0 } else { 0.016 };
			field.step(dt, 60.0, &mut rng);
			for p in &field.particles {
				assert!(p.x >= -p.size && p.x <= 800.0 + p.size);
				assert!(p.y <= 600.0);
			}
		}
	}

	#[test]
	fn bottom_exit_respawns_above_top() {
		let (mut field, mut rng) = field(Season::Winter, 80, 13);
		let p = &mut field.particles[0];
		p.x = 400.0;
		p.y = 598.0;
		p.vx = 0.0;
		p.vy = 2.0;
		let size = p.size;

		field.step(1.0, 60.0, &mut rng);

		let p = &field.particles[0];
		assert_eq!(p.y, -size);
		assert!(p.y < 0.0);
		assert!((0.0..800.0).contains(&p.x));
	}

	#[test]
	fn horizontal_exit_wraps_to_opposite_edge() {
		let (mut field, mut rng) = field(Season::Summer, 2, 17);
		field.particles[0].x = 0.0;
		field.particles[0].y = 10.0;
		field.particles[0].vx = -1.0;
		field.particles[0].size = 5.0;
		field.particles[1].x = 800.0;
		field.particles[1].y = 10.0;
		field.particles[1].vx = 1.0;
		field.particles[1].size = 5.0;

		field.step(0.1, 60.0, &mut rng);

		assert_eq!(field.particles[0].x, 805.0);
		assert_eq!(field.particles[1].x, -5.0);
	}

	#[test]
	fn degenerate_surface_is_tolerated() {
		let mut rng = SmallRng::seed_from_u64(0);
		let mut field = ParticleField::generate(&Season::Spring.style(), 10, 0.0, 0.0, &mut rng);
		field.step(1.0, 60.0, &mut rng);
		assert!(field.particles.iter().all(|p| p.y <= 0.0));
	}
}
