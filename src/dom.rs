//! Small helpers over `web-sys` for the page scripts.
//!
//! Lookups return `Option` so callers can bail out quietly when the page
//! lacks an element; none of these helpers panic.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlScriptElement, Window};

pub fn window() -> Option<Window> {
	web_sys::window()
}

pub fn document() -> Option<Document> {
	window()?.document()
}

pub fn body() -> Option<HtmlElement> {
	document()?.body()
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
	window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or_else(js_sys::Date::now)
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
		v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
	};
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Whether the user asked the platform to minimize motion.
pub fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.map(|mql| mql.matches())
		.unwrap_or(false)
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
	document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &impl AsRef<web_sys::Node>, selector: &str) -> Vec<Element> {
	let root: &web_sys::Node = root.as_ref();
	let list = if let Some(document) = root.dyn_ref::<Document>() {
		document.query_selector_all(selector)
	} else if let Some(element) = root.dyn_ref::<Element>() {
		element.query_selector_all(selector)
	} else {
		return Vec::new();
	};
	let Ok(list) = list else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Text content of a `<script>` element by id, for inline JSON payloads.
pub fn script_text(document: &Document, id: &str) -> Option<String> {
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
	let _ = element.class_list().toggle_with_force(class, on);
}

pub fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}

/// Locks or restores page scrolling.
pub fn lock_body_scroll(locked: bool) {
	if let Some(body) = body() {
		let _ = body
			.style()
			.set_property("overflow", if locked { "hidden" } else { "" });
	}
}
