//! Drawing primitives used by the frame loop.
//!
//! The engine only ever talks to a [`Surface`], which keeps the per-frame
//! logic independent of the browser canvas. [`CanvasRenderingContext2d`]
//! is the production implementation.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// The minimal 2D drawing API the starfield needs.
pub trait Surface {
	/// Clears the whole `width` x `height` surface.
	fn clear(&mut self, width: f64, height: f64);

	/// Fills the surface with a radial gradient centered on the surface,
	/// from `inner` at the center to `outer` at radius `radius`.
	fn fill_radial_background(
		&mut self,
		width: f64,
		height: f64,
		radius: f64,
		inner: Color,
		outer: Color,
	);

	/// Sets the fill color for subsequent shapes.
	fn set_fill(&mut self, color: Color);

	/// Sets the global alpha for subsequent shapes.
	fn set_alpha(&mut self, alpha: f64);

	/// Fills an axis-aligned rectangle with its top-left corner at `(x, y)`.
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

	/// Fills a disc of radius `r` centered at `(x, y)`.
	fn fill_disc(&mut self, x: f64, y: f64, r: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_radial_background(
		&mut self,
		width: f64,
		height: f64,
		radius: f64,
		inner: Color,
		outer: Color,
	) {
		self.set_global_alpha(1.0);
		match self.create_radial_gradient(
			width / 2.0,
			height / 2.0,
			0.0,
			width / 2.0,
			height / 2.0,
			radius.max(0.0),
		) {
			Ok(gradient) => {
				let _ = gradient.add_color_stop(0.0, &inner.to_css());
				let _ = gradient.add_color_stop(1.0, &outer.to_css());
				#[allow(deprecated)]
				self.set_fill_style(&gradient);
			}
			Err(_) => self.set_fill_style_str(&outer.to_css()),
		}
		CanvasRenderingContext2d::fill_rect(self, 0.0, 0.0, width, height);
	}

	fn set_fill(&mut self, color: Color) {
		self.set_fill_style_str(&color.to_css());
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.begin_path();
		self.rect(x, y, w, h);
		self.fill();
	}

	fn fill_disc(&mut self, x: f64, y: f64, r: f64) {
		self.begin_path();
		let _ = self.arc(x, y, r, 0.0, PI * 2.0);
		self.fill();
	}
}

/// A [`Surface`] that records draw calls instead of painting. Used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub ops: Vec<DrawOp>,
}

/// A single recorded draw call.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear(f64, f64),
	Background { radius: f64, inner: Color, outer: Color },
	Fill(Color),
	Alpha(f64),
	Rect(f64, f64, f64, f64),
	Disc(f64, f64, f64),
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear(width, height));
	}

	fn fill_radial_background(
		&mut self,
		_width: f64,
		_height: f64,
		radius: f64,
		inner: Color,
		outer: Color,
	) {
		self.ops.push(DrawOp::Background {
			radius,
			inner,
			outer,
		});
	}

	fn set_fill(&mut self, color: Color) {
		self.ops.push(DrawOp::Fill(color));
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.ops.push(DrawOp::Alpha(alpha));
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ops.push(DrawOp::Rect(x, y, w, h));
	}

	fn fill_disc(&mut self, x: f64, y: f64, r: f64) {
		self.ops.push(DrawOp::Disc(x, y, r));
	}
}
