//! Tunables for the starfield and the page interactions that drive it.
//!
//! Every field has a default matching the stock site, so an empty JSON
//! object (or no config element at all) reproduces the standard look.

use serde::Deserialize;

/// Starfield and page-interaction configuration.
///
/// Deserialized from camelCase JSON, e.g.
/// `{ "warpDurationMs": 600, "starColor": "#ccddff" }`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StarfieldConfig {
	/// Surface area (px²) per star. Star count is `floor(area / star_density)`.
	pub star_density: f64,
	/// Length of the warp ramp in milliseconds.
	pub warp_duration_ms: f64,
	/// Speed multiplier reached at the end of the warp ramp.
	pub warp_peak_multiplier: f64,
	/// Fraction of the extra speed applied as vertical stretch while warping.
	pub warp_stretch: f64,
	/// Quiet period after the last resize event before reseeding.
	pub resize_debounce_ms: f64,
	/// Return to normal drift once the warp ramp finishes. Off by default,
	/// in which case the multiplier stays at its peak until the next warp.
	pub warp_auto_reset: bool,
	/// Delay between clicking an internal link and navigating.
	pub navigation_delay_ms: f64,
	/// Scroll offset past which the scroll indicator hides.
	pub scroll_indicator_threshold: f64,
	/// Center color of the background gradient.
	pub background_inner: String,
	/// Edge color of the background gradient.
	pub background_outer: String,
	/// Star fill color.
	pub star_color: String,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			star_density: 3000.0,
			warp_duration_ms: 400.0,
			warp_peak_multiplier: 50.0,
			warp_stretch: 0.4,
			resize_debounce_ms: 200.0,
			warp_auto_reset: false,
			navigation_delay_ms: 400.0,
			scroll_indicator_threshold: 100.0,
			background_inner: "#030014".into(),
			background_outer: "#000000".into(),
			star_color: "#ffffff".into(),
		}
	}
}

impl StarfieldConfig {
	/// Parses a JSON config, falling back to defaults on malformed input.
	pub fn from_json(json_text: &str) -> Self {
		match serde_json::from_str::<StarfieldConfig>(json_text) {
			Ok(config) => config.sanitized(),
			Err(e) => {
				log::warn!("starfield: failed to parse config: {}", e);
				Self::default()
			}
		}
	}

	/// Replaces non-positive or non-finite numeric values with defaults.
	pub fn sanitized(self) -> Self {
		let d = Self::default();
		let positive = |v: f64, fallback: f64| {
			if v.is_finite() && v > 0.0 { v } else { fallback }
		};
		let non_negative = |v: f64, fallback: f64| {
			if v.is_finite() && v >= 0.0 { v } else { fallback }
		};
		Self {
			star_density: positive(self.star_density, d.star_density),
			warp_duration_ms: positive(self.warp_duration_ms, d.warp_duration_ms),
			warp_peak_multiplier: if self.warp_peak_multiplier.is_finite()
				&& self.warp_peak_multiplier >= 1.0
			{
				self.warp_peak_multiplier
			} else {
				d.warp_peak_multiplier
			},
			warp_stretch: non_negative(self.warp_stretch, d.warp_stretch),
			resize_debounce_ms: non_negative(self.resize_debounce_ms, d.resize_debounce_ms),
			navigation_delay_ms: non_negative(self.navigation_delay_ms, d.navigation_delay_ms),
			scroll_indicator_threshold: non_negative(
				self.scroll_indicator_threshold,
				d.scroll_indicator_threshold,
			),
			..self
		}
	}
}
