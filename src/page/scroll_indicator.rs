//! Hides the "scroll down" hint once the visitor has scrolled.

use wasm_bindgen::prelude::*;
use web_sys::AddEventListenerOptions;

use crate::dom;

/// Two-state tracker that only reports changes.
#[derive(Clone, Debug)]
pub struct ScrollIndicator {
	threshold: f64,
	hidden: bool,
}

impl ScrollIndicator {
	pub fn new(threshold: f64) -> Self {
		Self {
			threshold,
			hidden: false,
		}
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Feeds the current scroll offset. Returns the new visibility when it
	/// changes: `Some(true)` to hide, `Some(false)` to show again.
	pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
		let hide = scroll_y > self.threshold;
		if hide == self.hidden {
			return None;
		}
		self.hidden = hide;
		Some(hide)
	}
}

/// Attaches a passive scroll listener driving `.scroll-indicator`.
pub fn init_scroll_indicator(threshold: f64) {
	let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
		return;
	};
	let Some(indicator) = dom::query(&document, ".scroll-indicator") else {
		return;
	};

	let mut state = ScrollIndicator::new(threshold);
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let Some(scroll_y) = dom::window().and_then(|w| w.scroll_y().ok()) else {
			return;
		};
		if let Some(hidden) = state.on_scroll(scroll_y) {
			dom::set_class(&indicator, "hidden", hidden);
		}
	});

	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
		"scroll",
		on_scroll.as_ref().unchecked_ref(),
		&options,
	);
	on_scroll.forget();
}
