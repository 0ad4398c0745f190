//! Warp-speed transition state.

use super::easing::warp_multiplier;

/// Tracks the most recent warp trigger.
///
/// Triggering again while a ramp is in flight restarts it from zero; ramps
/// never stack. Unless `auto_reset` is set, the state stays active after the
/// ramp finishes and the multiplier remains at its peak.
#[derive(Clone, Debug)]
pub struct WarpState {
	active: bool,
	started_at: Option<f64>,
	duration_ms: f64,
	peak: f64,
	auto_reset: bool,
}

impl WarpState {
	pub fn new(duration_ms: f64, peak: f64, auto_reset: bool) -> Self {
		Self {
			active: false,
			started_at: None,
			duration_ms,
			peak,
			auto_reset,
		}
	}

	/// Starts (or restarts) the ramp at `now_ms`.
	pub fn trigger(&mut self, now_ms: f64) {
		self.active = true;
		self.started_at = Some(now_ms);
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Speed multiplier at `now_ms`. `1` when no warp is in progress.
	pub fn multiplier(&self, now_ms: f64) -> f64 {
		match (self.active, self.started_at) {
			(true, Some(start)) => {
				warp_multiplier((now_ms - start).max(0.0), self.duration_ms, self.peak)
			}
			_ => 1.0,
		}
	}

	/// Per-frame bookkeeping. Only has an effect with `auto_reset` enabled,
	/// where it deactivates the warp once the ramp has fully elapsed.
	pub fn update(&mut self, now_ms: f64) {
		if !self.auto_reset {
			return;
		}
		if let (true, Some(start)) = (self.active, self.started_at) {
			if now_ms - start >= self.duration_ms {
				self.active = false;
				self.started_at = None;
			}
		}
	}
}
