//! Easing curve for the warp ramp.

/// Cubic ease-in-out: slow start, fast middle, slow end.
///
/// Maps `t` in [0, 1] to [0, 1]; input outside that range is clamped.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Speed multiplier `elapsed_ms` into a warp ramp of `duration_ms`.
///
/// Ramps from `1` to `peak` along [`ease_in_out_cubic`]; progress past the
/// end of the ramp is clamped, so the result stays at `peak`.
pub fn warp_multiplier(elapsed_ms: f64, duration_ms: f64, peak: f64) -> f64 {
	let progress = if duration_ms > 0.0 {
		(elapsed_ms / duration_ms).min(1.0)
	} else {
		1.0
	};
	1.0 + ease_in_out_cubic(progress) * (peak - 1.0)
}
