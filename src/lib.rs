//! deep-space: client-side behavior for the Deep Space portfolio site.
//!
//! This crate provides the WASM client that paints the animated starfield
//! backdrop and wires page transitions, the project modal, the mobile menu
//! and the scroll hint onto the static pages.

use log::{Level, info};

pub mod components;
pub mod dom;
pub mod page;

#[cfg(target_arch = "wasm32")]
use getrandom as _;
#[cfg(test)]
use proptest as _;

pub use components::starfield::{
	Starfield, StarfieldConfig, StarfieldEngine, StarfieldHandle, mount_starfield,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("deep-space: logging initialized");
}

/// Load starfield settings from a script element with id="starfield-config".
/// Falls back to defaults when the element is absent or malformed.
fn load_config() -> StarfieldConfig {
	match dom::document().and_then(|d| dom::script_text(&d, "starfield-config")) {
		Some(json_text) => {
			let config = StarfieldConfig::from_json(&json_text);
			info!("deep-space: loaded starfield config");
			config
		}
		None => StarfieldConfig::default(),
	}
}

/// Boots every page behavior.
///
/// The starfield is mounted first so its handle can be injected into the
/// page-transition handler.
pub fn start() {
	let config = load_config();

	let starfield = mount_starfield(&config);
	page::init_page_transitions(starfield, config.navigation_delay_ms);
	page::init_scroll_indicator(config.scroll_indicator_threshold);
	page::init_project_modal();
	page::init_mobile_menu();

	info!(":: SYSTEM ONLINE ::");
}
