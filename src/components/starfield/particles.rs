//! Star particles drifting up the backdrop.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::Rng;

/// Base radius range.
pub const SIZE_RANGE: Range<f64> = 0.0..1.5;
/// Steady-state alpha range.
pub const BASE_OPACITY_RANGE: Range<f64> = 0.5..1.0;
/// Twinkle frequency range.
pub const TWINKLE_SPEED_RANGE: Range<f64> = 0.01..0.03;
/// Twinkle phase range.
pub const TWINKLE_OFFSET_RANGE: Range<f64> = 0.0..TAU;
/// Upward drift range, in px per frame at 1x.
pub const SPEED_RANGE: Range<f64> = 0.05..0.25;

/// A single star. Only the position changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub base_opacity: f64,
	pub twinkle_speed: f64,
	pub twinkle_offset: f64,
	pub speed: f64,
}

impl Star {
	/// A star placed uniformly inside `width` x `height`.
	pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
		Self {
			x: uniform(rng, width),
			y: uniform(rng, height),
			size: rng.gen_range(SIZE_RANGE),
			base_opacity: rng.gen_range(BASE_OPACITY_RANGE),
			twinkle_speed: rng.gen_range(TWINKLE_SPEED_RANGE),
			twinkle_offset: rng.gen_range(TWINKLE_OFFSET_RANGE),
			speed: rng.gen_range(SPEED_RANGE),
		}
	}

	/// Twinkle factor at `time_s` seconds, oscillating in [0.4, 1.0].
	pub fn twinkle(&self, time_s: f64) -> f64 {
		(time_s * self.twinkle_speed * 100.0 + self.twinkle_offset).sin() * 0.3 + 0.7
	}

	/// Draw alpha at `time_s` seconds.
	pub fn alpha(&self, time_s: f64) -> f64 {
		self.base_opacity * self.twinkle(time_s)
	}
}

/// Uniform sample in `[0, upper)`; degenerate bounds collapse to 0.
fn uniform<R: Rng>(rng: &mut R, upper: f64) -> f64 {
	if upper > 0.0 {
		rng.gen_range(0.0..upper)
	} else {
		0.0
	}
}

/// Number of stars for a `width` x `height` surface.
pub fn star_count(width: f64, height: f64, density: f64) -> usize {
	let area = width.max(0.0) * height.max(0.0);
	if density > 0.0 && area.is_finite() {
		(area / density).floor() as usize
	} else {
		0
	}
}

/// The full star collection for one surface size.
///
/// Recreated wholesale on resize; stars never carry over between sizes.
#[derive(Clone, Debug)]
pub struct StarSet {
	pub stars: Vec<Star>,
	width: f64,
	height: f64,
}

impl StarSet {
	pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, density: f64) -> Self {
		let count = star_count(width, height, density);
		let stars = (0..count)
			.map(|_| Star::random(rng, width, height))
			.collect();
		Self {
			stars,
			width,
			height,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn len(&self) -> usize {
		self.stars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stars.is_empty()
	}

	/// Moves one star up by `speed * multiplier`, wrapping it to the bottom
	/// edge at a fresh random column once it passes the top.
	pub fn advance<R: Rng>(&mut self, index: usize, multiplier: f64, rng: &mut R) {
		let (width, height) = (self.width, self.height);
		if let Some(star) = self.stars.get_mut(index) {
			star.y -= star.speed * multiplier;
			if star.y < 0.0 {
				star.y = height;
				star.x = uniform(rng, width);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn rng() -> StdRng {
		StdRng::seed_from_u64(0x5eed)
	}

	#[test]
	fn count_is_floor_of_area_over_density() {
		assert_eq!(star_count(1920.0, 1080.0, 3000.0), 691);
		assert_eq!(star_count(100.0, 29.0, 3000.0), 0);
		assert_eq!(star_count(100.0, 30.0, 3000.0), 1);
		assert_eq!(star_count(0.0, 1080.0, 3000.0), 0);
		assert_eq!(star_count(-5.0, 1080.0, 3000.0), 0);
	}

	#[test]
	fn seeded_set_matches_count() {
		let set = StarSet::new(&mut rng(), 1920.0, 1080.0, 3000.0);
		assert_eq!(set.len(), 691);
	}

	#[test]
	fn positions_are_inside_surface() {
		let set = StarSet::new(&mut rng(), 800.0, 600.0, 3000.0);
		for s in &set.stars {
			assert!((0.0..800.0).contains(&s.x));
			assert!((0.0..600.0).contains(&s.y));
		}
	}

	#[test]
	fn twinkle_stays_in_band() {
		let star = Star::random(&mut rng(), 100.0, 100.0);
		for i in 0..500 {
			let t = star.twinkle(i as f64 * 0.037);
			assert!((0.4 - 1e-12..=1.0 + 1e-12).contains(&t));
		}
	}

	#[test]
	fn advance_moves_up_by_speed_times_multiplier() {
		let mut set = StarSet::new(&mut rng(), 300.0, 300.0, 3000.0);
		set.stars[0].y = 150.0;
		let speed = set.stars[0].speed;
		set.advance(0, 10.0, &mut rng());
		assert!((set.stars[0].y - (150.0 - speed * 10.0)).abs() < 1e-12);
	}

	#[test]
	fn advance_wraps_to_bottom() {
		let mut set = StarSet::new(&mut rng(), 300.0, 200.0, 3000.0);
		set.stars[0].y = 0.01;
		set.stars[0].speed = 0.05;
		let before = set.stars[0].clone();
		set.advance(0, 1.0, &mut rng());
		let after = &set.stars[0];
		assert_eq!(after.y, 200.0);
		assert!((0.0..300.0).contains(&after.x));
		assert_eq!(after.size, before.size);
		assert_eq!(after.speed, before.speed);
		assert_eq!(after.twinkle_offset, before.twinkle_offset);
	}

	#[test]
	fn advance_out_of_range_is_ignored() {
		let mut set = StarSet::new(&mut rng(), 100.0, 30.0, 3000.0);
		set.advance(99, 1.0, &mut rng());
		assert_eq!(set.len(), 1);
	}
}
