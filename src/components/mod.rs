//! UI components.

pub mod season_orbit;
pub mod season_wheel;
pub mod seasonal_background;
