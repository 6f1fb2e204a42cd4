//! seasonal-backdrop: animated seasonal theme for a personal portfolio page.
//!
//! This crate provides a WASM-based hero page whose background is a canvas of
//! drifting seasonal particles, plus a wheel that cycles the season and
//! re-themes the page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlScriptElement, Window};

pub mod components;

pub use components::season_orbit::SeasonOrbit;
pub use components::season_wheel::SeasonWheel;
pub use components::seasonal_background::{
	BackdropConfig, Season, SeasonStore, SeasonalBackground,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("seasonal-backdrop: logging initialized");
}

/// Load renderer configuration from a script element with id="backdrop-config".
/// Expected format: JSON matching [`BackdropConfig`]; missing fields default.
pub fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<BackdropConfig>(&json_text) {
		Ok(config) => {
			info!(
				"seasonal-backdrop: loaded config, starting in {}",
				config.initial_season.name()
			);
			Some(config)
		}
		Err(e) => {
			warn!("seasonal-backdrop: failed to parse config: {}", e);
			None
		}
	}
}

/// CSS custom properties published on `<html>` for `season`.
pub fn season_custom_properties(season: Season) -> [(&'static str, String); 5] {
	let palette = season.palette();
	[
		("--season-color", palette.primary.to_css()),
		("--season-secondary", palette.secondary.to_css()),
		("--season-accent", palette.accent.to_css()),
		("--season-text", palette.text.to_css()),
		("--season-background", palette.background_css()),
	]
}

/// Inline `<body>` style for `season`: its gradient and text color.
pub fn body_style(season: Season) -> [(&'static str, String); 4] {
	let palette = season.palette();
	[
		("background", palette.background_css()),
		("color", palette.text.to_css()),
		("min-height", "100vh".to_string()),
		("transition", "background 1s, color 1s".to_string()),
	]
}

/// Theme the document for `season`: custom properties on `<html>`, the
/// gradient on `<body>`, and a `data-season` attribute for stylesheets.
pub fn apply_season_to_document(season: Season) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	if let Some(root) = document
		.document_element()
		.and_then(|e| e.dyn_into::<HtmlElement>().ok())
	{
		let style = root.style();
		for (name, value) in season_custom_properties(season) {
			let _ = style.set_property(name, &value);
		}
	}

	match document.body() {
		Some(body) => {
			let style = body.style();
			for (name, value) in body_style(season) {
				let _ = style.set_property(name, &value);
			}
			let _ = body.set_attribute("data-season", season.name());
		}
		None => warn!("seasonal-backdrop: no <body> to theme"),
	}
}

/// Main application component.
/// Owns the season store and lays out the background, hero text and wheel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let store = SeasonStore::new(config.initial_season);
	let season = RwSignal::new(store.season());

	apply_season_to_document(store.season());
	store
		.subscribe(move |s| {
			apply_season_to_document(s);
			season.set(s);
		})
		.detach();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="portfolio">
			<SeasonalBackground store=store.clone() config=config />
			<main class="hero">
				<h1>"Hello, welcome to my portfolio"</h1>
				<p class="season-quote">{move || season.get().quote()}</p>
				<div
					class="season-wheel-slot"
					style="position: relative; width: 256px; height: 256px; margin: 0 auto; display: flex; align-items: center; justify-content: center;"
				>
					<SeasonOrbit store=store.clone() />
					<SeasonWheel store=store />
				</div>
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn body_gets_the_season_gradient() {
		let style = body_style(Season::Winter);
		let background = style
			.iter()
			.find(|(name, _)| *name == "background")
			.map(|(_, value)| value.as_str());
		assert_eq!(
			background,
			Some("linear-gradient(to bottom, #e8eaf6, #e1f5fe)")
		);
	}

	#[test]
	fn body_background_changes_with_the_season() {
		let spring = body_style(Season::Spring);
		let fall = body_style(Season::Fall);
		assert_ne!(spring[0].1, fall[0].1);
		assert_eq!(fall[1], ("color", "#e65100".to_string()));
	}

	#[test]
	fn custom_properties_cover_the_palette() {
		let props = season_custom_properties(Season::Summer);
		let names: Vec<&str> = props.iter().map(|(name, _)| *name).collect();
		assert_eq!(
			names,
			vec![
				"--season-color",
				"--season-secondary",
				"--season-accent",
				"--season-text",
				"--season-background"
			]
		);
		assert_eq!(props[0].1, "#4caf50");
		assert_eq!(props[4].1, body_style(Season::Summer)[0].1);
	}
}
