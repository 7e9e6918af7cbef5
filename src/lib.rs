//! electron-cloud: animated particle cloud around a glyph.
//!
//! This crate provides a WASM page that renders a swirling cloud of electrons
//! over a letter of its wordmark, plus a collapsible navigation menu.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to switch on the `js` entropy backend for wasm32.
use getrandom as _;

pub mod components;

pub use components::electron_cloud::{CloudConfig, ElectronCloudCanvas};
pub use components::nav_menu::{NavMenu, NavState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("electron-cloud: logging initialized");
}

/// Load cloud overrides from a script element with id="electron-cloud-config".
/// Expected format: JSON matching [`CloudConfig`]; missing fields keep defaults.
fn load_config() -> Option<CloudConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("electron-cloud-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<CloudConfig>(&json_text) {
		Ok(config) => {
			info!(
				"electron-cloud: loaded config, {} particles",
				config.particle_count()
			);
			Some(config)
		}
		Err(e) => {
			warn!("electron-cloud: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the navigation and the wordmark with its electron cloud.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="electron" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="site-header">
			<NavMenu>
				<li><a href="#about">"About"</a></li>
				<li><a href="#work">"Work"</a></li>
				<li><a href="#contact">"Contact"</a></li>
			</NavMenu>
		</header>
		<main class="hero">
			<h1 class="wordmark">"electr"<span class="electron-o">"o"</span>"n"</h1>
			<ElectronCloudCanvas config=config />
		</main>
	}
}
