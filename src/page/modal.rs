//! Project detail modal.
//!
//! Project cards (`#projects .card[data-project]`) open `#project-modal`
//! filled from a JSON catalog. The crate ships the site's catalog in
//! `projects.json`; a page can replace it with its own script element:
//!
//! ```html
//! <script id="project-data" type="application/json">
//!   { "Nexus": { "stack": "GAMING • WEB3", "description": "<p>…</p>" } }
//! </script>
//! ```
//!
//! Unknown keys in an entry are ignored.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::dom;

/// Detail entry for one project card.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProjectEntry {
	/// Short technology line shown under the title.
	pub stack: String,
	/// Body markup. Authored alongside the page, so inserted as HTML.
	pub description: String,
	#[serde(default)]
	pub demo: Option<String>,
	#[serde(default)]
	pub github: Option<String>,
}

/// Project entries keyed by the card's `data-project` value.
pub type ProjectCatalog = HashMap<String, ProjectEntry>;

const BUILTIN_CATALOG: &str = include_str!("projects.json");

/// Parses the embedded catalog; malformed JSON yields an empty catalog.
pub fn parse_catalog(json_text: &str) -> ProjectCatalog {
	match serde_json::from_str::<ProjectCatalog>(json_text) {
		Ok(catalog) => catalog,
		Err(e) => {
			warn!("page: failed to parse project data: {}", e);
			ProjectCatalog::new()
		}
	}
}

/// The project entries shipped with the site.
pub fn builtin_catalog() -> ProjectCatalog {
	parse_catalog(BUILTIN_CATALOG)
}

/// Picks the page's inline catalog when present, the built-in one otherwise.
pub fn resolve_catalog(inline: Option<&str>) -> ProjectCatalog {
	match inline {
		Some(json_text) => parse_catalog(json_text),
		None => builtin_catalog(),
	}
}

fn escape_attr(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

/// Button markup for the entry's demo and source links.
pub fn links_html(entry: &ProjectEntry) -> String {
	let mut html = String::new();
	if let Some(ref demo) = entry.demo {
		html.push_str(&format!(
			r#"<a href="{}" class="btn btn-primary" target="_blank">Live Demo →</a>"#,
			escape_attr(demo)
		));
	}
	if let Some(ref github) = entry.github {
		html.push_str(&format!(
			r#"<a href="{}" class="btn btn-secondary" target="_blank">GitHub →</a>"#,
			escape_attr(github)
		));
	}
	html
}

struct ModalElements {
	modal: Element,
	title: Option<Element>,
	stack: Option<Element>,
	body: Option<Element>,
	links: Option<Element>,
}

impl ModalElements {
	fn open(&self, key: &str, entry: &ProjectEntry) {
		if let Some(ref title) = self.title {
			title.set_text_content(Some(key));
		}
		if let Some(ref stack) = self.stack {
			stack.set_text_content(Some(&entry.stack));
		}
		if let Some(ref body) = self.body {
			body.set_inner_html(&entry.description);
		}
		if let Some(ref links) = self.links {
			links.set_inner_html(&links_html(entry));
		}
		dom::set_class(&self.modal, "active", true);
		dom::lock_body_scroll(true);
	}

	fn close(&self) {
		if dom::has_class(&self.modal, "active") {
			dom::set_class(&self.modal, "active", false);
			dom::lock_body_scroll(false);
		}
	}
}

/// Wires project cards to the detail modal.
pub fn init_project_modal() {
	let Some(document) = dom::document() else {
		return;
	};
	let Some(modal) = document.get_element_by_id("project-modal") else {
		return;
	};
	let inline = dom::script_text(&document, "project-data");
	let catalog = Rc::new(resolve_catalog(inline.as_deref()));
	debug!("page: {} project entries", catalog.len());

	let close_btn = modal.query_selector(".modal-close").ok().flatten();
	let elements = Rc::new(ModalElements {
		title: document.get_element_by_id("modal-title"),
		stack: document.get_element_by_id("modal-stack"),
		body: document.get_element_by_id("modal-body"),
		links: document.get_element_by_id("modal-links"),
		modal,
	});

	for card in dom::query_all(&document, "#projects .card") {
		let known = card
			.get_attribute("data-project")
			.is_some_and(|key| catalog.contains_key(&key));
		if let Some(card) = card.dyn_ref::<HtmlElement>().filter(|_| known) {
			let _ = card.style().set_property("cursor", "pointer");
		}
		let (el, cat, card_key) = (elements.clone(), catalog.clone(), card.clone());
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let clicked_link = ev
				.target()
				.and_then(|t| t.dyn_into::<Element>().ok())
				.is_some_and(|t| t.tag_name().eq_ignore_ascii_case("a"));
			if clicked_link {
				return;
			}
			let Some(key) = card_key.get_attribute("data-project") else {
				return;
			};
			match cat.get(&key) {
				Some(entry) => el.open(&key, entry),
				None => debug!("page: no project entry for {:?}", key),
			}
		});
		let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
		on_click.forget();
	}

	if let Some(close_btn) = close_btn {
		let el = elements.clone();
		let on_close = Closure::<dyn FnMut()>::new(move || el.close());
		let _ = close_btn.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
		on_close.forget();
	}

	let el = elements.clone();
	let on_backdrop = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		let modal_node: &Node = el.modal.as_ref();
		let on_backdrop = ev
			.target()
			.and_then(|t| t.dyn_into::<Node>().ok())
			.is_some_and(|t| t.is_same_node(Some(modal_node)));
		if on_backdrop {
			el.close();
		}
	});
	let _ = elements
		.modal
		.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref());
	on_backdrop.forget();

	let el = elements;
	let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
		if ev.key() == "Escape" {
			el.close();
		}
	});
	let _ = document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
	on_key.forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	const CATALOG: &str = r#"{
		"Nexus": {
			"stack": "GAMING • COMMUNITY • WEB3",
			"description": "<p>Gaming hub</p>",
			"status": "coming-soon"
		},
		"Crypto Wallet": {
			"stack": "BLOCKCHAIN • NODE.JS • SECURITY",
			"description": "<p>Wallet</p>",
			"demo": "https://demo.example.com/?a=1&b=\"2\"",
			"github": "https://github.com/example/wallet"
		}
	}"#;

	#[test]
	fn parses_catalog() {
		let catalog = parse_catalog(CATALOG);
		assert_eq!(catalog.len(), 2);
		let nexus = &catalog["Nexus"];
		assert_eq!(nexus.stack, "GAMING • COMMUNITY • WEB3");
		assert!(nexus.demo.is_none() && nexus.github.is_none());
	}

	#[test]
	fn builtin_catalog_has_site_projects() {
		let catalog = builtin_catalog();
		let mut keys: Vec<_> = catalog.keys().map(String::as_str).collect();
		keys.sort_unstable();
		assert_eq!(keys, ["AI File Converter", "Crypto Wallet", "Nexus"]);
		for entry in catalog.values() {
			assert!(!entry.stack.is_empty());
			assert!(entry.description.contains("Key Features"));
			assert_eq!(links_html(entry), "");
		}
		assert_eq!(catalog["Nexus"].stack, "GAMING • COMMUNITY • WEB3");
	}

	#[test]
	fn inline_catalog_overrides_builtin() {
		let inline = resolve_catalog(Some(CATALOG));
		assert_eq!(inline.len(), 2);
		assert!(!inline.contains_key("AI File Converter"));
		assert_eq!(resolve_catalog(None), builtin_catalog());
	}

	#[test]
	fn malformed_catalog_is_empty() {
		assert!(parse_catalog("[1, 2").is_empty());
		assert!(parse_catalog(r#"{ "x": { "stack": 3 } }"#).is_empty());
	}

	#[test]
	fn no_links_without_urls() {
		let catalog = parse_catalog(CATALOG);
		assert_eq!(links_html(&catalog["Nexus"]), "");
	}

	#[test]
	fn links_are_escaped_and_ordered() {
		let catalog = parse_catalog(CATALOG);
		let html = links_html(&catalog["Crypto Wallet"]);
		let demo = html.find("Live Demo").unwrap();
		let github = html.find("GitHub").unwrap();
		assert!(demo < github);
		assert!(html.contains(r#"href="https://demo.example.com/?a=1&amp;b=&quot;2&quot;""#));
		assert!(html.contains(r#"target="_blank""#));
	}
}
