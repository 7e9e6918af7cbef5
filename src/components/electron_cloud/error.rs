//! Failures that can stop the cloud from starting.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while binding the cloud to the page.
#[derive(Debug, Error)]
pub enum CloudError {
	/// No element matched the anchor selector.
	#[error("anchor element `{0}` not found")]
	AnchorMissing(String),
	/// The canvas refused to hand out a 2D context.
	#[error("canvas 2d context unavailable")]
	ContextUnavailable,
	/// A DOM call threw.
	#[error("dom call failed: {0}")]
	Js(String),
}

impl From<JsValue> for CloudError {
	fn from(value: JsValue) -> Self {
		let message = match value.dyn_ref::<js_sys::Error>() {
			Some(err) => String::from(err.message()),
			None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
		};
		Self::Js(message)
	}
}
