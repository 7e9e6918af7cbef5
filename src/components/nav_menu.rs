//! Collapsible site navigation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Open/closed state of the navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
	open: bool,
}

impl NavState {
	/// Whether the link list is shown.
	pub fn is_open(self) -> bool {
		self.open
	}

	/// Flip the menu and return the new state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Hide the link list regardless of current state.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Value for the toggle's `aria-expanded` attribute.
	pub fn aria_expanded(self) -> &'static str {
		if self.open { "true" } else { "false" }
	}

	/// Class list for the link container.
	pub fn links_class(self) -> &'static str {
		if self.open {
			"nav-links nav-links--open"
		} else {
			"nav-links"
		}
	}
}

/// Whether a click on an element with this tag name should close the menu.
fn closes_menu(tag: &str) -> bool {
	tag.eq_ignore_ascii_case("a")
}

fn clicked_link(ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.is_some_and(|el| closes_menu(&el.tag_name()))
}

/// Navigation bar with a toggle button for narrow screens.
///
/// Children are the `<li>` items of the link list. Following any link closes
/// the menu.
#[component]
pub fn NavMenu(
	/// `<li>` items of the link list.
	children: Children,
) -> impl IntoView {
	let state = RwSignal::new(NavState::default());

	let on_toggle = move |_: MouseEvent| {
		state.update(|s| {
			s.toggle();
		});
	};

	let on_links_click = move |ev: MouseEvent| {
		if clicked_link(&ev) {
			state.update(NavState::close);
		}
	};

	view! {
		<nav class="site-nav">
			<button
				class="nav-toggle"
				type="button"
				aria-label="Toggle navigation"
				aria-expanded=move || state.get().aria_expanded()
				on:click=on_toggle
			>
				<span class="nav-toggle__bar"></span>
				<span class="nav-toggle__bar"></span>
				<span class="nav-toggle__bar"></span>
			</button>
			<ul class=move || state.get().links_class() on:click=on_links_click>
				{children()}
			</ul>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_keeps_class_and_aria_in_lockstep() {
		let mut state = NavState::default();
		assert_eq!(state.aria_expanded(), "false");
		assert_eq!(state.links_class(), "nav-links");

		assert!(state.toggle());
		assert_eq!(state.aria_expanded(), "true");
		assert_eq!(state.links_class(), "nav-links nav-links--open");

		assert!(!state.toggle());
		assert_eq!(state.aria_expanded(), "false");
		assert!(!state.is_open());
	}

	#[test]
	fn only_links_close_the_menu() {
		assert!(closes_menu("A"));
		assert!(closes_menu("a"));
		assert!(!closes_menu("LI"));
		assert!(!closes_menu("UL"));
		assert!(!closes_menu("ABBR"));
	}

	#[test]
	fn close_always_ends_closed() {
		let mut state = NavState::default();
		state.close();
		assert!(!state.is_open());

		state.toggle();
		state.close();
		assert!(!state.is_open());
		assert_eq!(state.aria_expanded(), "false");
	}
}
