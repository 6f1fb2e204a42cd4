//! Elapsed-time tracking between animation frames.

/// Remembers the previous frame timestamp so motion can be time-based.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
	last_ms: Option<f64>,
}

impl FrameClock {
	/// A clock that has not seen a frame yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record `timestamp_ms` and return seconds since the previous call.
	///
	/// The first call returns zero, as does any timestamp earlier than the
	/// previous one.
	pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
		let dt = match self.last_ms.replace(timestamp_ms) {
			Some(last) => (timestamp_ms - last) / 1000.0,
			None => 0.0,
		};
		dt.max(0.0)
	}

	/// Forget the previous timestamp; the next tick starts from zero again.
	pub fn reset(&mut self) {
		self.last_ms = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_frame_has_no_elapsed_time() {
		let mut clock = FrameClock::new();
		assert_eq!(clock.tick(123_456.0), 0.0);
		assert!((clock.tick(123_472.0) - 0.016).abs() < 1e-9);
	}

	#[test]
	fn backwards_time_clamps_to_zero() {
		let mut clock = FrameClock::new();
		clock.tick(1000.0);
		assert_eq!(clock.tick(900.0), 0.0);
		assert!((clock.tick(1900.0) - 1.0).abs() < 1e-9);
	}

	#[test]
	fn reset_restarts_from_zero() {
		let mut clock = FrameClock::new();
		clock.tick(0.0);
		clock.tick(5000.0);
		clock.reset();
		assert_eq!(clock.tick(9000.0), 0.0);
	}
}
