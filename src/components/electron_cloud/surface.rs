//! The drawing surface the cloud renders onto.
//!
//! Layout and rendering only talk to [`Surface`], so they can run against a
//! recorder in tests. [`CanvasSurface`] is the browser implementation.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::CloudError;

/// Operations the cloud needs from a 2D canvas.
///
/// All coordinates after [`Surface::set_scale`] are in logical pixels.
pub trait Surface {
	/// Set the on-page (CSS) size of the surface.
	fn set_css_size(&self, width: f64, height: f64) -> Result<(), CloudError>;
	/// Set the backing store resolution in device pixels.
	fn set_backing_size(&self, width: u32, height: u32);
	/// Replace the current transform with a uniform scale.
	fn set_scale(&self, scale: f64) -> Result<(), CloudError>;
	/// Clear a rectangle to transparent.
	fn clear(&self, x: f64, y: f64, width: f64, height: f64);
	/// Set the fill colour for following rectangles.
	fn set_fill(&self, css: &str);
	/// Paint a filled rectangle.
	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
}

/// A canvas element paired with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap `canvas`, fetching its 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, CloudError> {
		let ctx = canvas
			.get_context("2d")?
			.ok_or(CloudError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| CloudError::ContextUnavailable)?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn set_css_size(&self, width: f64, height: f64) -> Result<(), CloudError> {
		let style = self.canvas.style();
		style.set_property("width", &format!("{width}px"))?;
		style.set_property("height", &format!("{height}px"))?;
		Ok(())
	}

	fn set_backing_size(&self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_scale(&self, scale: f64) -> Result<(), CloudError> {
		self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
		Ok(())
	}

	fn clear(&self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn set_fill(&self, css: &str) {
		self.ctx.set_fill_style_str(css);
	}

	fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.fill_rect(x, y, width, height);
	}
}
