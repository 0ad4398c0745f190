//! Property-based invariant tests for the starfield engine.
//!
//! 1. Star count is `floor(area / 3000)` after seeding and after reseeding.
//! 2. Every star's fields fall inside their documented ranges.
//! 3. The warp multiplier starts at 1, ends at the peak and never decreases.
//! 4. Stars stay inside `[0, height]` across frames, warp or not.
//! 5. A resize burst reseeds exactly once, with the last size.
//! 6. Frame count never changes the star count.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::f64::consts::TAU;

use deep_space::components::starfield::easing::warp_multiplier;
use deep_space::components::starfield::particles::{StarSet, star_count};
use deep_space::components::starfield::{Color, StarfieldConfig, StarfieldEngine, Surface};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Counts draw calls without painting anything.
#[derive(Default)]
struct CountingSurface {
	discs: usize,
	rects: usize,
}

impl Surface for CountingSurface {
	fn clear(&mut self, _width: f64, _height: f64) {}

	fn fill_radial_background(
		&mut self,
		_width: f64,
		_height: f64,
		_radius: f64,
		_inner: Color,
		_outer: Color,
	) {
	}

	fn set_fill(&mut self, _color: Color) {}

	fn set_alpha(&mut self, alpha: f64) {
		assert!((0.0..=1.0).contains(&alpha), "alpha out of range: {alpha}");
	}

	fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, h: f64) {
		assert!(h >= 0.0);
		self.rects += 1;
	}

	fn fill_disc(&mut self, _x: f64, _y: f64, _r: f64) {
		self.discs += 1;
	}
}

fn dims() -> impl Strategy<Value = (f64, f64)> {
	(0u32..=2560, 0u32..=1600).prop_map(|(w, h)| (w as f64, h as f64))
}

fn engine(width: f64, height: f64, seed: u64) -> StarfieldEngine {
	StarfieldEngine::new(
		StarfieldConfig::default(),
		width,
		height,
		StdRng::seed_from_u64(seed),
	)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Count invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn count_matches_area((w, h) in dims(), seed in any::<u64>()) {
		let e = engine(w, h, seed);
		prop_assert_eq!(e.stars().len(), ((w * h) / 3000.0).floor() as usize);
	}

	#[test]
	fn reseed_count_matches_new_area(
		(w, h) in dims(),
		(w2, h2) in dims(),
		seed in any::<u64>(),
	) {
		let mut e = engine(w, h, seed);
		e.reseed(w2, h2);
		prop_assert_eq!(e.stars().len(), star_count(w2, h2, 3000.0));
		prop_assert_eq!((e.width(), e.height()), (w2, h2));
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Field ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn fields_in_range((w, h) in dims(), seed in any::<u64>()) {
		let set = StarSet::new(&mut StdRng::seed_from_u64(seed), w, h, 3000.0);
		for s in &set.stars {
			prop_assert!((0.0..1.5).contains(&s.size));
			prop_assert!((0.5..1.0).contains(&s.base_opacity));
			prop_assert!((0.01..0.03).contains(&s.twinkle_speed));
			prop_assert!((0.0..TAU).contains(&s.twinkle_offset));
			prop_assert!((0.05..0.25).contains(&s.speed));
			prop_assert!((0.0..w).contains(&s.x));
			prop_assert!((0.0..h).contains(&s.y));
		}
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Warp multiplier curve
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn multiplier_monotonic(a in 0.0f64..=400.0, b in 0.0f64..=400.0) {
		let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
		prop_assert!(warp_multiplier(lo, 400.0, 50.0) <= warp_multiplier(hi, 400.0, 50.0));
	}

	#[test]
	fn multiplier_bounded(elapsed in 0.0f64..100_000.0) {
		let m = warp_multiplier(elapsed, 400.0, 50.0);
		prop_assert!((1.0..=50.0).contains(&m));
	}

	#[test]
	fn multiplier_pinned_after_ramp(elapsed in 400.0f64..1e9) {
		prop_assert_eq!(warp_multiplier(elapsed, 400.0, 50.0), 50.0);
	}
}

#[test]
fn multiplier_scenarios() {
	assert_eq!(warp_multiplier(0.0, 400.0, 50.0), 1.0);
	assert!((warp_multiplier(200.0, 400.0, 50.0) - 25.5).abs() < 1e-9);
	assert_eq!(warp_multiplier(400.0, 400.0, 50.0), 50.0);
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Stars stay on the surface
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn stars_stay_in_bounds(
		(w, h) in (100u32..=800, 100u32..=600).prop_map(|(w, h)| (w as f64, h as f64)),
		seed in any::<u64>(),
		warp_at in proptest::option::of(0.0f64..2000.0),
	) {
		let mut e = engine(w, h, seed);
		let mut surface = CountingSurface::default();
		for f in 0..240 {
			let now = f as f64 * 16.0;
			if warp_at.is_some_and(|t| t <= now) && !e.warp_state().is_active() {
				e.warp(now);
			}
			e.frame(&mut surface, now);
			for s in &e.stars().stars {
				prop_assert!(s.y >= 0.0 && s.y <= h, "y={} h={}", s.y, h);
				prop_assert!(s.x >= 0.0 && s.x < w);
			}
		}
		prop_assert_eq!(surface.discs + surface.rects, 240 * e.stars().len());
	}

	#[test]
	fn near_bottom_star_does_not_wrap_at_base_speed(
		h in 1.0f64..2000.0,
		eps in 1e-9f64..1e-3,
		seed in any::<u64>(),
	) {
		let mut set = StarSet::new(&mut StdRng::seed_from_u64(seed), 300.0, h.max(10.0), 3000.0);
		if set.is_empty() {
			return Ok(());
		}
		let height = set.height();
		set.stars[0].y = height - eps;
		let x_before = set.stars[0].x;
		set.advance(0, 1.0, &mut StdRng::seed_from_u64(seed));
		prop_assert!(set.stars[0].y >= 0.0);
		prop_assert_eq!(set.stars[0].x, x_before);
	}
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Resize debounce
// ═════════════════════════════════════════════════════════════════════════

proptest! {
	#[test]
	fn resize_burst_reseeds_once(
		sizes in proptest::collection::vec(dims(), 1..8),
		gap in 0.0f64..50.0,
		seed in any::<u64>(),
	) {
		let mut e = engine(1024.0, 768.0, seed);
		let mut t = 0.0;
		for &(w, h) in &sizes {
			e.notify_resize(t, w, h);
			t += gap;
		}
		let last_event = t - gap;
		let mut applied = Vec::new();
		let mut now = 0.0;
		while now < last_event + 1000.0 {
			if let Some(size) = e.poll_resize(now) {
				prop_assert!(now - last_event >= 200.0);
				applied.push(size);
			}
			now += 16.0;
		}
		let expected = sizes[sizes.len() - 1];
		prop_assert_eq!(applied, vec![expected]);
		prop_assert_eq!(e.stars().len(), star_count(expected.0, expected.1, 3000.0));
	}
}
