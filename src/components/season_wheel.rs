//! Round button that cycles the active season.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::seasonal_background::SeasonStore;
use super::seasonal_background::season::Season;

/// Inline look of the wheel: a white 128px disc with a 4px border in the
/// season's primary color.
pub fn wheel_style(season: Season) -> String {
	format!(
		"width: 128px; height: 128px; border-radius: 50%; border: 4px solid {}; \
		 background: #ffffff; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); \
		 display: flex; flex-direction: column; align-items: center; \
		 justify-content: center; cursor: pointer; position: relative; z-index: 3;",
		season.palette().primary.to_css()
	)
}

/// Shows the current season's emoji and label; each click advances the store
/// to the next season.
#[component]
pub fn SeasonWheel(store: SeasonStore) -> impl IntoView {
	let season = RwSignal::new(store.season());
	let subscription = store.subscribe(move |s| season.set(s));

	let on_click = move |_: MouseEvent| {
		let _ = &subscription;
		store.cycle();
	};

	view! {
		<button
			class="season-wheel"
			title="Change season"
			style=move || wheel_style(season.get())
			on:click=on_click
		>
			<span class="season-wheel-emoji" style="font-size: 3rem; margin-bottom: 0.5rem;">
				{move || season.get().emoji()}
			</span>
			<span class="season-wheel-label" style="font-size: 1.125rem; font-weight: 500;">
				{move || season.get().label()}
			</span>
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wheel_is_a_round_disc_bordered_in_the_primary_color() {
		let css = wheel_style(Season::Fall);
		assert!(css.contains("border-radius: 50%"));
		assert!(css.contains("width: 128px; height: 128px"));
		assert!(css.contains("border: 4px solid #ff9800"));
	}

	#[test]
	fn border_follows_the_season() {
		for season in Season::ALL {
			let expected = format!("solid {};", season.palette().primary.to_css());
			assert!(wheel_style(season).contains(&expected));
		}
	}
}
