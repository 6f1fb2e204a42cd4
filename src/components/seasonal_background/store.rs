//! The active season, shared between the wheel, the background and the page.
//!
//! One [`SeasonStore`] is created by the app root and handed to every
//! component that needs it. Components subscribe for changes instead of
//! reading global state.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use super::season::{Palette, Season};

type Listener = Rc<dyn Fn(Season)>;

struct StoreInner {
	season: Cell<Season>,
	/// Bumped on every actual change.
	revision: Cell<u64>,
	next_id: Cell<u64>,
	listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Observable holder of the current [`Season`]. Cloning shares the store.
#[derive(Clone)]
pub struct SeasonStore {
	inner: Rc<StoreInner>,
}

impl SeasonStore {
	/// Create a store holding `initial`, with no subscribers.
	pub fn new(initial: Season) -> Self {
		Self {
			inner: Rc::new(StoreInner {
				season: Cell::new(initial),
				revision: Cell::new(0),
				next_id: Cell::new(0),
				listeners: RefCell::new(Vec::new()),
			}),
		}
	}

	/// The current season.
	pub fn season(&self) -> Season {
		self.inner.season.get()
	}

	/// Page colors of the current season.
	pub fn palette(&self) -> Palette {
		self.season().palette()
	}

	/// Make `season` current. Subscribers hear about it only if it differs
	/// from the current one.
	pub fn set(&self, season: Season) {
		let previous = self.inner.season.replace(season);
		if previous == season {
			return;
		}
		debug!(
			"seasonal-backdrop: season {} -> {}",
			previous.name(),
			season.name()
		);

		let revision = self.inner.revision.get() + 1;
		self.inner.revision.set(revision);

		// Snapshot so listeners may subscribe, unsubscribe or set again.
		let listeners: Vec<Listener> = self
			.inner
			.listeners
			.borrow()
			.iter()
			.map(|(_, l)| l.clone())
			.collect();
		for listener in listeners {
			// A listener moved the store on; the nested set has already told
			// everyone about the newer season.
			if self.inner.revision.get() != revision {
				break;
			}
			listener(season);
		}
	}

	/// Advance to the next season in cycling order.
	pub fn cycle(&self) {
		self.set(self.season().next());
	}

	/// Call `listener` after every season change until the returned
	/// [`Subscription`] is dropped.
	pub fn subscribe(&self, listener: impl Fn(Season) + 'static) -> Subscription {
		let id = self.inner.next_id.get();
		self.inner.next_id.set(id + 1);
		self.inner
			.listeners
			.borrow_mut()
			.push((id, Rc::new(listener)));

		Subscription {
			store: Rc::downgrade(&self.inner),
			id,
			detached: false,
		}
	}

	#[cfg(test)]
	pub(crate) fn subscriber_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}
}

/// Keeps a store listener registered. Dropping it unsubscribes.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
	store: Weak<StoreInner>,
	id: u64,
	detached: bool,
}

impl Subscription {
	/// Keep the listener for as long as the store lives.
	pub fn detach(mut self) {
		self.detached = true;
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if self.detached {
			return;
		}
		if let Some(store) = self.store.upgrade() {
			store.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn recorder(store: &SeasonStore) -> (Rc<RefCell<Vec<Season>>>, Subscription) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		let sub = store.subscribe(move |s| sink.borrow_mut().push(s));
		(seen, sub)
	}

	#[test]
	fn cycle_walks_all_four_seasons() {
		let store = SeasonStore::new(Season::Spring);
		let (seen, _sub) = recorder(&store);
		for _ in 0..4 {
			store.cycle();
		}
		assert_eq!(
			*seen.borrow(),
			vec![Season::Summer, Season::Fall, Season::Winter, Season::Spring]
		);
		assert_eq!(store.season(), Season::Spring);
	}

	#[test]
	fn setting_the_same_season_is_silent() {
		let store = SeasonStore::new(Season::Winter);
		let (seen, _sub) = recorder(&store);
		store.set(Season::Winter);
		assert!(seen.borrow().is_empty());
	}

	#[test]
	fn dropping_a_subscription_unsubscribes() {
		let store = SeasonStore::new(Season::Spring);
		let (seen, sub) = recorder(&store);
		store.cycle();
		drop(sub);
		store.cycle();
		assert_eq!(*seen.borrow(), vec![Season::Summer]);
		assert_eq!(store.subscriber_count(), 0);
	}

	#[test]
	fn detached_subscriptions_persist() {
		let store = SeasonStore::new(Season::Spring);
		let (seen, sub) = recorder(&store);
		sub.detach();
		store.set(Season::Fall);
		assert_eq!(*seen.borrow(), vec![Season::Fall]);
		assert_eq!(store.subscriber_count(), 1);
	}

	#[test]
	fn palette_tracks_season() {
		let store = SeasonStore::new(Season::Spring);
		store.set(Season::Winter);
		assert_eq!(store.palette(), Season::Winter.palette());
	}

	#[test]
	fn listeners_may_reenter_the_store() {
		let store = SeasonStore::new(Season::Spring);
		let inner = store.clone();
		// Skip fall entirely.
		let _sub = store.subscribe(move |s| {
			if s == Season::Fall {
				inner.cycle();
			}
		});
		store.set(Season::Fall);
		assert_eq!(store.season(), Season::Winter);
	}

	#[test]
	fn later_listeners_end_on_the_latest_season() {
		let store = SeasonStore::new(Season::Spring);
		let inner = store.clone();
		let _skip_fall = store.subscribe(move |s| {
			if s == Season::Fall {
				inner.cycle();
			}
		});
		let (seen, _sub) = recorder(&store);

		store.set(Season::Fall);

		assert_eq!(store.season(), Season::Winter);
		assert_eq!(*seen.borrow(), vec![Season::Winter]);
	}

	#[test]
	fn earlier_listeners_hear_both_changes_in_order() {
		let store = SeasonStore::new(Season::Spring);
		let (seen, _sub) = recorder(&store);
		let inner = store.clone();
		let _skip_fall = store.subscribe(move |s| {
			if s == Season::Fall {
				inner.cycle();
			}
		});

		store.set(Season::Fall);

		assert_eq!(*seen.borrow(), vec![Season::Fall, Season::Winter]);
		assert_eq!(seen.borrow().last().copied(), Some(store.season()));
	}

	#[test]
	fn subscription_outliving_store_is_fine() {
		let store = SeasonStore::new(Season::Spring);
		let (_, sub) = recorder(&store);
		drop(store);
		drop(sub);
	}
}
