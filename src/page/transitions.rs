//! Animated page transitions for internal links.
//!
//! Clicking an internal link fires the starfield warp, fades the page out
//! via the `page-exit` body class and navigates once the fade has run.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use crate::components::starfield::StarfieldHandle;
use crate::dom;

/// How a link is handled on click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	/// In-page anchor; the browser scrolls to it.
	Anchor,
	/// Mail, phone, absolute URL or new-tab link; left to the browser.
	External,
	/// Same-site page; navigated with a transition.
	Internal,
}

/// Classifies a link from its `href` and whether it carries a `target`.
pub fn classify_link(href: &str, has_target: bool) -> LinkKind {
	if href.starts_with('#') {
		LinkKind::Anchor
	} else if href.is_empty()
		|| href.starts_with("mailto")
		|| href.starts_with("tel")
		|| href.starts_with("http")
		|| has_target
	{
		LinkKind::External
	} else {
		LinkKind::Internal
	}
}

/// Wires transitions onto every internal `a[href]` in the document.
///
/// `starfield` is `None` when the backdrop is disabled; links still fade
/// and navigate, just without the warp.
pub fn init_page_transitions(starfield: Option<StarfieldHandle>, delay_ms: f64) {
	let Some(document) = dom::document() else {
		return;
	};

	let mut wired = 0usize;
	for link in dom::query_all(&document, "a[href]") {
		let Some(href) = link.get_attribute("href") else {
			continue;
		};
		if classify_link(&href, link.has_attribute("target")) != LinkKind::Internal {
			continue;
		}

		let starfield = starfield.clone();
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			ev.prevent_default();
			if let Some(ref starfield) = starfield {
				starfield.warp();
			}
			if let Some(body) = dom::body() {
				dom::set_class(&body, "page-exit", true);
			}
			navigate_after(href.clone(), delay_ms);
		});
		let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
		wired += 1;
	}
	debug!("page: transitions wired on {} links", wired);
}

fn navigate_after(href: String, delay_ms: f64) {
	let Some(window) = dom::window() else {
		return;
	};
	let navigate = Closure::once_into_js(move || {
		if let Some(window) = dom::window() {
			let _ = window.location().set_href(&href);
		}
	});
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		navigate.unchecked_ref::<js_sys::Function>(),
		delay_ms.round() as i32,
	);
}
