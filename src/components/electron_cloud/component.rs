//! Leptos component owning the cloud canvas.
//!
//! Once the page has loaded, the component fits the canvas over the anchor
//! element and builds the first scene. A window `resize` listener rebuilds the
//! scene from scratch, and a `requestAnimationFrame` loop steps and paints it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::config::CloudConfig;
use super::driver::FrameDriver;
use super::error::CloudError;
use super::layout;
use super::scene::CloudScene;
use super::surface::CanvasSurface;

/// Everything the frame loop touches, shared between callbacks.
struct CloudContext {
	surface: CanvasSurface,
	config: CloudConfig,
	rng: StdRng,
	scene: CloudScene,
	driver: FrameDriver,
}

impl CloudContext {
	fn bind(
		surface: CanvasSurface,
		config: CloudConfig,
		window: &Window,
	) -> Result<Self, CloudError> {
		let mut rng = StdRng::from_entropy();
		let scene = layout_scene(&surface, &config, &mut rng, window)?;
		Ok(Self {
			surface,
			config,
			rng,
			scene,
			driver: FrameDriver::new(),
		})
	}

	/// Re-measure the anchor and replace the scene.
	fn relayout(&mut self, window: &Window) -> Result<(), CloudError> {
		self.scene = layout_scene(&self.surface, &self.config, &mut self.rng, window)?;
		Ok(())
	}

	fn frame(&mut self, timestamp: f64) -> bool {
		self.driver
			.frame(timestamp, &mut self.scene, &self.surface, &self.config)
	}
}

fn layout_scene(
	surface: &CanvasSurface,
	config: &CloudConfig,
	rng: &mut StdRng,
	window: &Window,
) -> Result<CloudScene, CloudError> {
	let document = window
		.document()
		.ok_or_else(|| CloudError::AnchorMissing(config.anchor_selector.clone()))?;
	let geometry = layout::measure_anchor(
		&document,
		&config.anchor_selector,
		window.device_pixel_ratio(),
	)?;
	layout::apply(surface, &geometry)?;
	Ok(CloudScene::new(geometry, config, rng))
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) {
	if let Some(window) = web_sys::window() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// Claim the one-time startup. Only the first caller gets `true`.
fn claim_start(started: &Cell<bool>) -> bool {
	!started.replace(true)
}

/// Run `f` once the page and its fonts have loaded.
fn on_page_load(window: &Window, f: impl FnOnce() + 'static) {
	let loaded = window
		.document()
		.is_some_and(|d| d.ready_state() == "complete");
	if loaded {
		f();
		return;
	}
	let cb = Closure::once_into_js(f);
	let _ = window.add_event_listener_with_callback("load", cb.unchecked_ref());
}

/// Animated electron cloud drawn over the element matching
/// `config.anchor_selector`.
///
/// The canvas itself is positioned by page CSS; the component only controls
/// its size and contents.
#[component]
pub fn ElectronCloudCanvas(
	/// Cloud parameters; the default reproduces the standard look.
	#[prop(optional)]
	config: CloudConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let canvas_id = config.canvas_id.clone();
	let started = Rc::new(Cell::new(false));
	let context: Rc<RefCell<Option<CloudContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};
		// Set before waiting on `load` so a re-run cannot queue a second start.
		if !claim_start(&started) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let surface = match CanvasSurface::new(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				error!("electron-cloud: {}", e);
				return;
			}
		};

		let (context_load, animate_load, resize_load, config_load) = (
			context.clone(),
			animate.clone(),
			resize_cb.clone(),
			config.clone(),
		);
		on_page_load(&window, move || {
			start(surface, config_load, context_load, animate_load, resize_load);
		});
	});

	view! {
		<canvas node_ref=canvas_ref id=canvas_id class="electron-canvas" aria-hidden="true" />
	}
}

fn start(
	surface: CanvasSurface,
	config: CloudConfig,
	context: Rc<RefCell<Option<CloudContext>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let mut cloud = match CloudContext::bind(surface, config, &window) {
		Ok(cloud) => cloud,
		Err(e) => {
			error!("electron-cloud: layout failed, not starting: {}", e);
			return;
		}
	};
	info!(
		"electron-cloud: started with {} particles",
		cloud.scene.particles().len()
	);
	cloud.driver.start();
	*context.borrow_mut() = Some(cloud);

	let context_resize = context.clone();
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			if let Err(e) = c.relayout(&win) {
				warn!("electron-cloud: relayout failed, keeping previous scene: {}", e);
			}
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
	}

	let (context_anim, animate_inner) = (context.clone(), animate.clone());
	*animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		let again = match *context_anim.borrow_mut() {
			Some(ref mut c) => c.frame(timestamp),
			None => false,
		};
		if again {
			if let Some(ref cb) = *animate_inner.borrow() {
				request_frame(cb);
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		request_frame(cb);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn startup_is_claimed_once() {
		let started = Cell::new(false);
		assert!(claim_start(&started));
		assert!(!claim_start(&started));
		assert!(!claim_start(&started));
		assert!(started.get());
	}
}
