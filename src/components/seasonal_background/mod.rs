//! Seasonal particle background.
//!
//! Paints a full-viewport canvas behind the page with:
//! - Drifting particles whose shapes depend on the season (petals, leaves,
//!   raindrops, butterflies, snow, ice crystals, frost)
//! - A season-wide ambient wash (rainbow, sun glow, warm gradient, aurora)
//! - Time-based motion that wraps particles around the edges
//!
//! The season lives in a [`SeasonStore`] owned by the app root. Changing it
//! (or resizing the window) throws away every particle and restarts the
//! animation loop from scratch.
//!
//! # Example
//!
//! ```ignore
//! use seasonal_backdrop::components::seasonal_background::{SeasonalBackground, SeasonStore, Season};
//!
//! let store = SeasonStore::new(Season::Winter);
//! view! { <SeasonalBackground store=store /> }
//! ```

mod ambient;
mod animation;
mod clock;
mod component;
pub mod config;
mod particles;
mod render;
pub mod season;
mod shapes;
mod state;
mod store;
mod surface;

pub use ambient::AmbientEffect;
pub use animation::{AnimationHandle, AnimationLoop, FrameRequest, FrameScheduler, RafScheduler};
pub use clock::FrameClock;
pub use component::SeasonalBackground;
pub use config::{BackdropConfig, WobbleConfig};
pub use particles::{Particle, ParticleField, ShapeKind};
pub use season::{Color, Palette, Season, SeasonStyle};
pub use shapes::draw_shape;
pub use state::Scene;
pub use store::{SeasonStore, Subscription};
pub use surface::{LinearGradient, Paint, Surface};
