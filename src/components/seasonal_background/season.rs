//! Seasons, their palettes, and the particle recipes each one spawns.
//!
//! Everything here is immutable table data. The renderer looks up a
//! [`SeasonStyle`] whenever the season changes and regenerates from it.

use rand::Rng;
use serde::Deserialize;

use super::ambient::AmbientEffect;
use super::particles::ShapeKind;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque white.
	pub const WHITE: Self = Self::rgb(255, 255, 255);

	/// Opaque color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from channels plus alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build an opaque color from a packed `0xRRGGBB` value.
	pub const fn hex(rgb: u32) -> Self {
		Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Page colors derived from the active season.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	/// Main accent, used for borders and highlights.
	pub primary: Color,
	pub secondary: Color,
	pub accent: Color,
	/// Body text color.
	pub text: Color,
	/// Top and bottom stops of the page background gradient.
	pub background: (Color, Color),
}

impl Palette {
	/// CSS `linear-gradient` for the page background.
	pub fn background_css(&self) -> String {
		format!(
			"linear-gradient(to bottom, {}, {})",
			self.background.0.to_css(),
			self.background.1.to_css()
		)
	}
}

/// One weighted entry in a season's particle table.
#[derive(Clone, Copy, Debug)]
pub struct ParticleRecipe {
	/// Shape every particle from this recipe gets.
	pub kind: ShapeKind,
	/// Relative likelihood of this recipe being picked.
	pub weight: f64,
	/// Candidate colors, picked uniformly.
	pub colors: &'static [Color],
	/// Size range in pixels.
	pub size: (f64, f64),
	/// Downward speed range in pixels per reference frame. `None` uses
	/// [`DEFAULT_FALL_SPEED`].
	pub fall_speed: Option<(f64, f64)>,
	/// Opacity range.
	pub opacity: (f64, f64),
}

/// Fall speed for recipes that don't specify one.
pub const DEFAULT_FALL_SPEED: (f64, f64) = (0.5, 1.5);

impl ParticleRecipe {
	/// Weighted pick from a recipe table.
	pub fn pick<'a, R: Rng + ?Sized>(recipes: &'a [ParticleRecipe], rng: &mut R) -> &'a Self {
		let total: f64 = recipes.iter().map(|r| r.weight).sum();
		let mut roll = rng.r#gen::<f64>() * total;
		for recipe in recipes {
			if roll < recipe.weight {
				return recipe;
			}
			roll -= recipe.weight;
		}
		// Float slop can leave a sliver past the last weight.
		&recipes[recipes.len() - 1]
	}
}

/// Everything needed to populate and decorate a season's canvas.
#[derive(Clone, Copy, Debug)]
pub struct SeasonStyle {
	/// Particles at density 1.0.
	pub particle_count: usize,
	/// Weighted particle table.
	pub recipes: &'static [ParticleRecipe],
	/// Wash painted under the particles.
	pub ambient: AmbientEffect,
}

impl SeasonStyle {
	/// Shape kinds this style can ever produce.
	pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
		self.recipes.iter().map(|r| r.kind)
	}
}

const FULL_OPACITY: (f64, f64) = (1.0, 1.0);
const SPRING_OPACITY: (f64, f64) = (0.7, 1.0);

const SPRING_RECIPES: &[ParticleRecipe] = &[
	ParticleRecipe {
		kind: ShapeKind::Petal,
		weight: 0.3,
		colors: &[Color::hex(0xf8bbd0)],
		size: (5.0, 15.0),
		fall_speed: None,
		opacity: SPRING_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::Leaf,
		weight: 0.35,
		colors: &[Color::hex(0xc5e1a5)],
		size: (8.0, 20.0),
		fall_speed: None,
		opacity: SPRING_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::Raindrop,
		weight: 0.245,
		colors: &[Color::hex(0xb3e5fc)],
		size: (3.0, 8.0),
		fall_speed: Some((2.0, 5.0)),
		opacity: SPRING_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::Butterfly,
		weight: 0.105,
		colors: &[Color::WHITE],
		size: (8.0, 18.0),
		fall_speed: None,
		opacity: SPRING_OPACITY,
	},
];

const SUMMER_RECIPES: &[ParticleRecipe] = &[
	ParticleRecipe {
		kind: ShapeKind::Leaf,
		weight: 0.4,
		colors: &[Color::hex(0x4caf50)],
		size: (8.0, 23.0),
		fall_speed: None,
		opacity: FULL_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::Leaf,
		weight: 0.42,
		colors: &[Color::hex(0x8bc34a)],
		size: (10.0, 25.0),
		fall_speed: None,
		opacity: FULL_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::Butterfly,
		weight: 0.18,
		colors: &[
			Color::hex(0xf44336),
			Color::hex(0xe91e63),
			Color::hex(0x9c27b0),
		],
		size: (10.0, 25.0),
		fall_speed: None,
		opacity: FULL_OPACITY,
	},
];

const FALL_RECIPES: &[ParticleRecipe] = &[ParticleRecipe {
	kind: ShapeKind::Leaf,
	weight: 1.0,
	colors: &[
		Color::hex(0xff9800),
		Color::hex(0xf44336),
		Color::hex(0xffeb3b),
		Color::hex(0x795548),
		Color::hex(0xe65100),
	],
	size: (10.0, 30.0),
	fall_speed: Some((1.0, 3.0)),
	opacity: FULL_OPACITY,
}];

const WINTER_RECIPES: &[ParticleRecipe] = &[
	ParticleRecipe {
		kind: ShapeKind::Snow,
		weight: 0.7,
		colors: &[Color::WHITE],
		size: (2.0, 8.0),
		fall_speed: Some((0.5, 2.0)),
		opacity: FULL_OPACITY,
	},
	ParticleRecipe {
		kind: ShapeKind::IceCrystal,
		weight: 0.27,
		colors: &[Color::hex(0xe1f5fe)],
		size: (15.0, 40.0),
		fall_speed: None,
		opacity: (0.3, 0.7),
	},
	// Rare, huge and faint.
	ParticleRecipe {
		kind: ShapeKind::Frost,
		weight: 0.03,
		colors: &[Color::hex(0xb3e5fc)],
		size: (80.0, 230.0),
		fall_speed: None,
		opacity: (0.1, 0.3),
	},
];

/// The four seasons a visitor can cycle through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
	#[default]
	Spring,
	Summer,
	Fall,
	Winter,
}

impl Season {
	/// Every season, in cycling order.
	pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

	/// The season after this one, wrapping winter back to spring.
	pub fn next(self) -> Self {
		match self {
			Season::Spring => Season::Summer,
			Season::Summer => Season::Fall,
			Season::Fall => Season::Winter,
			Season::Winter => Season::Spring,
		}
	}

	/// Lowercase identifier, as used in configuration and the DOM.
	pub fn name(self) -> &'static str {
		match self {
			Season::Spring => "spring",
			Season::Summer => "summer",
			Season::Fall => "fall",
			Season::Winter => "winter",
		}
	}

	/// Capitalized name for display.
	pub fn label(self) -> &'static str {
		match self {
			Season::Spring => "Spring",
			Season::Summer => "Summer",
			Season::Fall => "Fall",
			Season::Winter => "Winter",
		}
	}

	/// Icon shown on the season wheel.
	pub fn emoji(self) -> &'static str {
		match self {
			Season::Spring => "🌱",
			Season::Summer => "☀️",
			Season::Fall => "🍂",
			Season::Winter => "❄️",
		}
	}

	/// Hero-section quote shown while this season is active.
	pub fn quote(self) -> &'static str {
		match self {
			Season::Spring => "Bloom where you are planted.",
			Season::Summer => "Sunshine is the best medicine.",
			Season::Fall => "Every leaf speaks bliss to me, fluttering from the autumn tree.",
			Season::Winter => "Winter is not a season, it's a celebration.",
		}
	}

	/// Colors the hero orbit cycles through, by particle index modulo 3.
	pub fn orbit_colors(self) -> [Color; 3] {
		match self {
			Season::Spring => [Color::hex(0x88c9a1), Color::hex(0xf8bbd0), Color::hex(0xc5e1a5)],
			Season::Summer => [Color::hex(0xffa726), Color::hex(0xffeb3b), Color::hex(0xff9800)],
			Season::Fall => [Color::hex(0xff9800), Color::hex(0xf44336), Color::hex(0xffeb3b)],
			Season::Winter => [Color::hex(0xb3e5fc), Color::hex(0xe1f5fe), Color::WHITE],
		}
	}

	/// Page colors for this season.
	pub fn palette(self) -> Palette {
		match self {
			Season::Spring => Palette {
				primary: Color::hex(0x88c9a1),
				secondary: Color::hex(0xf8bbd0),
				accent: Color::hex(0xc5e1a5),
				text: Color::hex(0x2e7d32),
				background: (Color::hex(0xe8f5e9), Color::hex(0xf3e5f5)),
			},
			Season::Summer => Palette {
				primary: Color::hex(0x4caf50),
				secondary: Color::hex(0xffeb3b),
				accent: Color::hex(0x2196f3),
				text: Color::hex(0x1b5e20),
				background: (Color::hex(0xe3f2fd), Color::hex(0xe8f5e9)),
			},
			Season::Fall => Palette {
				primary: Color::hex(0xff9800),
				secondary: Color::hex(0xf44336),
				accent: Color::hex(0x795548),
				text: Color::hex(0xe65100),
				background: (Color::hex(0xfff8e1), Color::hex(0xfff3e0)),
			},
			Season::Winter => Palette {
				primary: Color::hex(0x90caf9),
				secondary: Color::hex(0xe1f5fe),
				accent: Color::hex(0xb0bec5),
				text: Color::hex(0x0d47a1),
				background: (Color::hex(0xe8eaf6), Color::hex(0xe1f5fe)),
			},
		}
	}

	/// Particle table and ambient effect for this season.
	pub fn style(self) -> SeasonStyle {
		match self {
			Season::Spring => SeasonStyle {
				particle_count: 80,
				recipes: SPRING_RECIPES,
				ambient: AmbientEffect::RainbowWash,
			},
			// Busier shapes, so fewer of them.
			Season::Summer => SeasonStyle {
				particle_count: 40,
				recipes: SUMMER_RECIPES,
				ambient: AmbientEffect::SunGlow,
			},
			Season::Fall => SeasonStyle {
				particle_count: 40,
				recipes: FALL_RECIPES,
				ambient: AmbientEffect::WarmWash,
			},
			Season::Winter => SeasonStyle {
				particle_count: 80,
				recipes: WINTER_RECIPES,
				ambient: AmbientEffect::Aurora { bands: 3 },
			},
		}
	}
}
