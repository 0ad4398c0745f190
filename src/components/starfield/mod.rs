//! Animated deep-space backdrop.
//!
//! Draws a drifting, twinkling starfield on a full-viewport canvas with:
//! - Star density proportional to the viewport area, reseeded after resizes
//! - A warp-speed ramp (cubic ease-in-out) fired before page navigation
//! - Configurable timing and palette via [`StarfieldConfig`]
//!
//! The simulation itself ([`StarfieldEngine`]) is plain Rust driven by
//! timestamps; [`Starfield`] and [`StarfieldHandle`] bind it to the browser.
//!
//! # Example
//!
//! ```ignore
//! use deep_space::components::starfield::{mount_starfield, StarfieldConfig};
//!
//! if let Some(starfield) = mount_starfield(&StarfieldConfig::default()) {
//!     // later, right before navigating away
//!     starfield.warp();
//! }
//! ```

mod component;
pub mod config;
pub mod debounce;
pub mod easing;
pub mod engine;
pub mod particles;
pub mod render;
pub mod theme;
pub mod warp;

pub use component::{Starfield, StarfieldHandle, mount_starfield};
pub use config::StarfieldConfig;
pub use engine::StarfieldEngine;
pub use render::Surface;
pub use theme::{Color, SpaceTheme};
