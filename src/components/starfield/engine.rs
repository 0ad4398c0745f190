//! Starfield simulation state and the per-frame update/draw step.
//!
//! [`StarfieldEngine`] owns everything that changes from frame to frame:
//! surface size, the star set, warp state and the pending resize. It is
//! driven entirely by timestamps passed in by the caller, which makes it
//! independent of the browser clock and scheduler.

use rand::Rng;
use rand::rngs::StdRng;

use super::config::StarfieldConfig;
use super::debounce::Debouncer;
use super::particles::StarSet;
use super::render::Surface;
use super::theme::SpaceTheme;
use super::warp::WarpState;

/// Particle engine behind the animated backdrop.
///
/// Generic over the random source so tests can supply a seeded RNG.
pub struct StarfieldEngine<R = StdRng> {
	config: StarfieldConfig,
	theme: SpaceTheme,
	stars: StarSet,
	warp: WarpState,
	resize: Debouncer<(f64, f64)>,
	rng: R,
}

impl<R: Rng> StarfieldEngine<R> {
	/// Seeds a star set for a `width` x `height` surface.
	pub fn new(config: StarfieldConfig, width: f64, height: f64, mut rng: R) -> Self {
		let stars = StarSet::new(&mut rng, width, height, config.star_density);
		log::debug!(
			"starfield: seeded {} stars for {}x{}",
			stars.len(),
			width,
			height
		);
		Self {
			theme: SpaceTheme::from_config(&config),
			warp: WarpState::new(
				config.warp_duration_ms,
				config.warp_peak_multiplier,
				config.warp_auto_reset,
			),
			resize: Debouncer::new(config.resize_debounce_ms),
			stars,
			config,
			rng,
		}
	}

	pub fn width(&self) -> f64 {
		self.stars.width()
	}

	pub fn height(&self) -> f64 {
		self.stars.height()
	}

	pub fn stars(&self) -> &StarSet {
		&self.stars
	}

	pub fn warp_state(&self) -> &WarpState {
		&self.warp
	}

	pub fn config(&self) -> &StarfieldConfig {
		&self.config
	}

	/// Discards every star and seeds a fresh set for the new size.
	pub fn reseed(&mut self, width: f64, height: f64) {
		self.stars = StarSet::new(&mut self.rng, width, height, self.config.star_density);
		log::debug!(
			"starfield: reseeded {} stars for {}x{}",
			self.stars.len(),
			width,
			height
		);
	}

	/// Records a viewport resize. The reseed happens on the first frame
	/// after the debounce window has passed without another resize.
	pub fn notify_resize(&mut self, now_ms: f64, width: f64, height: f64) {
		self.resize.notify(now_ms, (width, height));
	}

	/// Applies a debounced resize if one is due. Returns the new size.
	pub fn poll_resize(&mut self, now_ms: f64) -> Option<(f64, f64)> {
		let (width, height) = self.resize.poll(now_ms)?;
		self.reseed(width, height);
		Some((width, height))
	}

	/// Starts or restarts the warp ramp.
	pub fn warp(&mut self, now_ms: f64) {
		self.warp.trigger(now_ms);
	}

	/// Current speed multiplier.
	pub fn warp_multiplier(&self, now_ms: f64) -> f64 {
		self.warp.multiplier(now_ms)
	}

	/// Draws one frame at `now_ms` and advances every star.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) {
		let (width, height) = (self.width(), self.height());

		surface.clear(width, height);
		surface.fill_radial_background(
			width,
			height,
			width,
			self.theme.background_inner,
			self.theme.background_outer,
		);
		surface.set_fill(self.theme.star);

		let warping = self.warp.is_active();
		let multiplier = self.warp.multiplier(now_ms);
		let stretch = 1.0 + (multiplier - 1.0) * self.config.warp_stretch;
		let time_s = now_ms * 0.001;

		for i in 0..self.stars.len() {
			let star = &self.stars.stars[i];
			surface.set_alpha(star.alpha(time_s));
			if warping {
				surface.fill_rect(star.x, star.y, star.size, star.size * stretch);
			} else {
				surface.fill_disc(star.x, star.y, star.size);
			}
			self.stars.advance(i, multiplier, &mut self.rng);
		}

		surface.set_alpha(1.0);
		self.warp.update(now_ms);
	}
}
