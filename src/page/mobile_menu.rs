//! Hamburger menu for narrow viewports.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::dom;

/// Open/closed state of the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
	open: bool,
}

impl MobileMenu {
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Flips the menu and returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Closes the menu. Returns whether anything changed.
	pub fn close(&mut self) -> bool {
		std::mem::replace(&mut self.open, false)
	}
}

struct MenuElements {
	toggle: Element,
	nav: Element,
}

impl MenuElements {
	fn apply(&self, open: bool) {
		dom::set_class(&self.toggle, "active", open);
		dom::set_class(&self.nav, "active", open);
		let _ = self
			.toggle
			.set_attribute("aria-expanded", if open { "true" } else { "false" });
		dom::lock_body_scroll(open);
	}

	fn contains(&self, target: Option<&Node>) -> bool {
		let toggle: &Node = self.toggle.as_ref();
		let nav: &Node = self.nav.as_ref();
		toggle.contains(target) || nav.contains(target)
	}
}

/// Wires `.mobile-menu-toggle` and `.nav-links`.
///
/// The menu closes on a nav-link click, a click outside the menu, or Escape.
pub fn init_mobile_menu() {
	let Some(document) = dom::document() else {
		return;
	};
	let (Some(toggle), Some(nav)) = (
		dom::query(&document, ".mobile-menu-toggle"),
		dom::query(&document, ".nav-links"),
	) else {
		return;
	};

	let elements = Rc::new(MenuElements { toggle, nav });
	let state = Rc::new(RefCell::new(MobileMenu::default()));

	let (el, st) = (elements.clone(), state.clone());
	let on_toggle = Closure::<dyn FnMut()>::new(move || {
		let open = st.borrow_mut().toggle();
		el.apply(open);
	});
	let _ = elements
		.toggle
		.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
	on_toggle.forget();

	for link in dom::query_all(&elements.nav, ".nav-link") {
		let (el, st) = (elements.clone(), state.clone());
		let on_link = Closure::<dyn FnMut()>::new(move || {
			st.borrow_mut().close();
			el.apply(false);
		});
		let _ = link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref());
		on_link.forget();
	}

	let (el, st) = (elements.clone(), state.clone());
	let on_outside = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
		let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
		// Only act on a real close so an open project modal keeps its scroll lock.
		if !el.contains(target.as_ref()) && st.borrow_mut().close() {
			el.apply(false);
		}
	});
	let _ = document.add_event_listener_with_callback("click", on_outside.as_ref().unchecked_ref());
	on_outside.forget();

	let (el, st) = (elements, state);
	let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
		if ev.key() == "Escape" && st.borrow_mut().close() {
			el.apply(false);
		}
	});
	let _ = document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
	on_key.forget();
}
