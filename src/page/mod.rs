//! Page-level interactions layered over the static markup.
//!
//! Each initializer looks up its elements and silently does nothing when the
//! current page lacks them, so every page can call all of them.

mod mobile_menu;
mod modal;
mod scroll_indicator;
mod transitions;

pub use mobile_menu::{MobileMenu, init_mobile_menu};
pub use modal::{
	ProjectCatalog, ProjectEntry, builtin_catalog, init_project_modal, links_html, parse_catalog,
	resolve_catalog,
};
pub use scroll_indicator::{ScrollIndicator, init_scroll_indicator};
pub use transitions::{LinkKind, classify_link, init_page_transitions};
