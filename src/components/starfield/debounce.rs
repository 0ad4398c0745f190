//! Last-value-wins debouncing for bursty event streams.
//!
//! Events are recorded with [`Debouncer::notify`] and released by
//! [`Debouncer::poll`] once no new event has arrived for the configured
//! quiet period. The frame loop polls every frame, so no separate timer is
//! needed.

/// Coalesces a burst of values into the most recent one.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
	delay_ms: f64,
	pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
	pub fn new(delay_ms: f64) -> Self {
		Self {
			delay_ms,
			pending: None,
		}
	}

	/// Records `value` at `now_ms`, replacing any pending value and
	/// restarting the quiet period.
	pub fn notify(&mut self, now_ms: f64, value: T) {
		self.pending = Some((now_ms, value));
	}

	/// Returns the pending value once `delay_ms` has elapsed since the last
	/// [`notify`](Self::notify). Each burst is released exactly once.
	pub fn poll(&mut self, now_ms: f64) -> Option<T> {
		match self.pending {
			Some((at, _)) if now_ms - at >= self.delay_ms => {
				self.pending.take().map(|(_, value)| value)
			}
			_ => None,
		}
	}
}
