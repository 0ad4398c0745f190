//! Colors for the deep-space backdrop.

use super::config::StarfieldConfig;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string.
	/// Supports hex (`#RRGGBB`, `#RGB`) and `rgb()`/`rgba()` functional notation.
	/// Returns `None` for anything else so callers can fall back to a default.
	pub fn parse(color_str: &str) -> Option<Color> {
		let s = color_str.trim();
		if let Some(hex) = s.strip_prefix('#') {
			return match hex.len() {
				6 => Some(Color::rgb(
					u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
					u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
					u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
				)),
				3 => {
					let digit = |i: usize| -> Option<u8> {
						let v = u8::from_str_radix(hex.get(i..i + 1)?, 16).ok()?;
						Some(v * 17)
					};
					Some(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
				}
				_ => None,
			};
		}

		if s.starts_with("rgb") {
			let nums: Vec<&str> = s
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			if nums.len() < 3 {
				return None;
			}
			let r = nums[0].parse().ok()?;
			let g = nums[1].parse().ok()?;
			let b = nums[2].parse().ok()?;
			let a = match nums.get(3) {
				Some(a) => a.parse::<f64>().ok()?.clamp(0.0, 1.0),
				None => 1.0,
			};
			return Some(Color::rgba(r, g, b, a));
		}

		None
	}
}

/// The palette used to paint each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceTheme {
	/// Center of the radial background gradient.
	pub background_inner: Color,
	/// Edge of the radial background gradient.
	pub background_outer: Color,
	/// Fill color for stars (alpha is applied per star).
	pub star: Color,
}

impl SpaceTheme {
	/// Near-black deep blue fading to black, with white stars.
	pub fn deep_space() -> Self {
		Self {
			background_inner: Color::rgb(0x03, 0x00, 0x14),
			background_outer: Color::BLACK,
			star: Color::WHITE,
		}
	}

	/// Builds the palette from configured CSS strings, keeping the default
	/// for any entry that does not parse.
	pub fn from_config(config: &StarfieldConfig) -> Self {
		let fallback = Self::deep_space();
		let pick = |value: &str, default: Color, name: &str| {
			Color::parse(value).unwrap_or_else(|| {
				log::warn!("starfield: invalid {name} color {value:?}, using default");
				default
			})
		};
		Self {
			background_inner: pick(
				&config.background_inner,
				fallback.background_inner,
				"backgroundInner",
			),
			background_outer: pick(
				&config.background_outer,
				fallback.background_outer,
				"backgroundOuter",
			),
			star: pick(&config.star_color, fallback.star, "starColor"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_forms() {
		assert_eq!(Color::parse("#030014"), Some(Color::rgb(3, 0, 20)));
		assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
		assert_eq!(Color::parse("#12345"), None);
		assert_eq!(Color::parse("#zzzzzz"), None);
	}

	#[test]
	fn parses_functional_notation() {
		assert_eq!(Color::parse("rgb(1, 2, 3)"), Some(Color::rgb(1, 2, 3)));
		assert_eq!(
			Color::parse("rgba(10, 20, 30, 0.5)"),
			Some(Color::rgba(10, 20, 30, 0.5))
		);
		assert_eq!(Color::parse("rgb(1, 2)"), None);
		assert_eq!(Color::parse("hotpink"), None);
	}

	#[test]
	fn css_output_drops_opaque_alpha() {
		assert_eq!(Color::rgb(3, 0, 20).to_css(), "#030014");
		assert_eq!(
			Color::rgba(255, 255, 255, 0.25).to_css(),
			"rgba(255, 255, 255, 0.25)"
		);
	}

	#[test]
	fn default_config_yields_deep_space() {
		let theme = SpaceTheme::from_config(&StarfieldConfig::default());
		assert_eq!(theme, SpaceTheme::deep_space());
	}

	#[test]
	fn invalid_config_color_falls_back() {
		let config = StarfieldConfig {
			star_color: "not-a-color".into(),
			background_inner: "#102030".into(),
			..StarfieldConfig::default()
		};
		let theme = SpaceTheme::from_config(&config);
		assert_eq!(theme.star, Color::WHITE);
		assert_eq!(theme.background_inner, Color::rgb(0x10, 0x20, 0x30));
	}
}
