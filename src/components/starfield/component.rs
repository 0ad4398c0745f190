//! Leptos component and runtime handle for the starfield canvas.
//!
//! The component renders a fixed, full-viewport canvas behind the page. Once
//! the canvas is in the DOM, [`StarfieldHandle::start`] creates the engine,
//! listens for window resizes and drives a `requestAnimationFrame` loop.
//! Closures only hold weak references to the shared state, so dropping every
//! handle (or calling [`StarfieldHandle::stop`]) ends the loop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::mount::mount_to;
use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use super::config::StarfieldConfig;
use super::engine::StarfieldEngine;
use crate::dom;

const CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
	z-index: -1; pointer-events: none; display: block;";

/// State shared between the handle and the browser callbacks.
#[derive(Default)]
struct Shared {
	engine: RefCell<Option<StarfieldEngine>>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	resize_cb: RefCell<Option<Closure<dyn FnMut()>>>,
	frame_id: Cell<Option<i32>>,
	stopped: Cell<bool>,
}

impl Shared {
	fn request_frame(&self) {
		if self.stopped.get() {
			return;
		}
		let Some(window) = dom::window() else {
			return;
		};
		if let Some(ref cb) = *self.animate.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.frame_id.set(Some(id)),
				Err(e) => warn!("starfield: requestAnimationFrame failed: {:?}", e),
			}
		}
	}
}

/// Cheap, clonable handle to a running starfield.
///
/// Hand a clone to anything that needs to trigger the warp effect, such as
/// the page-transition handler.
#[derive(Clone, Default)]
pub struct StarfieldHandle {
	shared: Rc<Shared>,
}

impl StarfieldHandle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts (or restarts) the warp ramp. No-op before the canvas mounts.
	pub fn warp(&self) {
		match self.shared.engine.borrow_mut().as_mut() {
			Some(engine) => {
				engine.warp(dom::now_ms());
				debug!("starfield: warp engaged");
			}
			None => debug!("starfield: warp requested before start"),
		}
	}

	/// Binds the engine to `canvas` and starts the frame loop.
	pub fn start(&self, canvas: HtmlCanvasElement, config: StarfieldConfig) {
		if self.shared.stopped.get() || self.shared.engine.borrow().is_some() {
			warn!("starfield: start called on a handle that already ran");
			return;
		}
		let Some(window) = dom::window() else {
			return;
		};

		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(mut ctx) = ctx else {
			warn!("starfield: 2d canvas context unavailable");
			return;
		};

		let (w, h) = dom::viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let engine = StarfieldEngine::new(config, w, h, StdRng::from_entropy());
		info!(
			"starfield: {} stars on a {}x{} surface",
			engine.stars().len(),
			w,
			h
		);
		*self.shared.engine.borrow_mut() = Some(engine);

		let weak: Weak<Shared> = Rc::downgrade(&self.shared);
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let (Some(shared), Some(win)) = (weak.upgrade(), dom::window()) else {
				return;
			};
			let (nw, nh) = dom::viewport_size(&win);
			if let Some(ref mut engine) = *shared.engine.borrow_mut() {
				engine.notify_resize(dom::now_ms(), nw, nh);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
		*self.shared.resize_cb.borrow_mut() = Some(resize_cb);

		let weak: Weak<Shared> = Rc::downgrade(&self.shared);
		let animate = Closure::<dyn FnMut()>::new(move || {
			let Some(shared) = weak.upgrade() else {
				return;
			};
			if shared.stopped.get() {
				return;
			}
			let now = dom::now_ms();
			if let Some(ref mut engine) = *shared.engine.borrow_mut() {
				if let Some((nw, nh)) = engine.poll_resize(now) {
					canvas.set_width(nw as u32);
					canvas.set_height(nh as u32);
				}
				engine.frame(&mut ctx, now);
			}
			shared.request_frame();
		});
		*self.shared.animate.borrow_mut() = Some(animate);
		self.shared.request_frame();
	}

	/// Cancels the pending frame, detaches the resize listener and releases
	/// the callbacks. Safe to call more than once.
	pub fn stop(&self) {
		if self.shared.stopped.replace(true) {
			return;
		}
		if let Some(window) = dom::window() {
			if let Some(id) = self.shared.frame_id.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *self.shared.resize_cb.borrow() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.shared.resize_cb.borrow_mut().take();
		self.shared.animate.borrow_mut().take();
		info!("starfield: stopped");
	}
}

/// Full-viewport animated starfield canvas.
///
/// The canvas sits behind all content and ignores pointer input. The
/// animation is driven through `handle`, which callers keep to trigger
/// [`StarfieldHandle::warp`] later.
#[component]
pub fn Starfield(handle: StarfieldHandle, config: StarfieldConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		handle.start(canvas, config.clone());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield-canvas"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}

/// Mounts the starfield behind the page.
///
/// The canvas replaces the `.space-background` placeholder when the page
/// has one and is otherwise prepended to `<body>`. Returns `None` without
/// touching the DOM when the user prefers reduced motion.
pub fn mount_starfield(config: &StarfieldConfig) -> Option<StarfieldHandle> {
	let window = dom::window()?;
	if dom::prefers_reduced_motion(&window) {
		info!("starfield: reduced motion preferred, not starting");
		return None;
	}
	let document = window.document()?;

	let host: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
	host.set_class_name("starfield-host");
	match dom::query(&document, ".space-background") {
		Some(placeholder) => {
			let _ = placeholder.replace_with_with_node_1(&host);
		}
		None => {
			debug!("starfield: no .space-background placeholder, prepending to body");
			let _ = document.body()?.prepend_with_node_1(&host);
		}
	}

	let handle = StarfieldHandle::new();
	let (mount_handle, mount_config) = (handle.clone(), config.clone());
	mount_to(host, move || {
		view! { <Starfield handle=mount_handle config=mount_config /> }
	})
	.forget();

	Some(handle)
}
