//! Fitting the canvas over the anchor element.
//!
//! The canvas is sized to the anchor's bounding box in CSS pixels, while its
//! backing store is multiplied by the device pixel ratio so dots stay crisp on
//! dense screens. A uniform scale transform lets everything else draw in
//! logical pixels.

use log::debug;
use web_sys::Document;

use super::error::CloudError;
use super::surface::Surface;

/// Size and resolution of the surface for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
	/// Logical (CSS pixel) width.
	pub width: f64,
	/// Logical (CSS pixel) height.
	pub height: f64,
	/// Device pixels per logical pixel.
	pub scale: f64,
	/// Backing store width in device pixels.
	pub backing_width: u32,
	/// Backing store height in device pixels.
	pub backing_height: u32,
}

impl SurfaceGeometry {
	/// Geometry for a rectangle measured at the given device pixel ratio.
	///
	/// A ratio that is zero, negative, or not finite counts as 1.
	pub fn measure(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		let scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
			device_pixel_ratio
		} else {
			1.0
		};
		Self {
			width,
			height,
			scale,
			// Canvas dimensions truncate to whole pixels.
			backing_width: (width * scale) as u32,
			backing_height: (height * scale) as u32,
		}
	}

	/// Middle of the logical area.
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}

/// Measure the element matching `selector`.
pub fn measure_anchor(
	document: &Document,
	selector: &str,
	device_pixel_ratio: f64,
) -> Result<SurfaceGeometry, CloudError> {
	let anchor = document
		.query_selector(selector)?
		.ok_or_else(|| CloudError::AnchorMissing(selector.to_string()))?;
	let rect = anchor.get_bounding_client_rect();
	Ok(SurfaceGeometry::measure(
		rect.width(),
		rect.height(),
		device_pixel_ratio,
	))
}

/// Resize `surface` to `geometry` and reset its transform to the pixel ratio.
pub fn apply<S: Surface + ?Sized>(
	surface: &S,
	geometry: &SurfaceGeometry,
) -> Result<(), CloudError> {
	surface.set_css_size(geometry.width, geometry.height)?;
	surface.set_backing_size(geometry.backing_width, geometry.backing_height);
	surface.set_scale(geometry.scale)?;
	debug!(
		"electron-cloud: surface {}x{} css, {}x{} backing",
		geometry.width, geometry.height, geometry.backing_width, geometry.backing_height
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Debug, PartialEq)]
	enum Call {
		Css(f64, f64),
		Backing(u32, u32),
		Scale(f64),
	}

	#[derive(Default)]
	struct Recorder {
		calls: RefCell<Vec<Call>>,
	}

	impl Surface for Recorder {
		fn set_css_size(&self, width: f64, height: f64) -> Result<(), CloudError> {
			self.calls.borrow_mut().push(Call::Css(width, height));
			Ok(())
		}

		fn set_backing_size(&self, width: u32, height: u32) {
			self.calls.borrow_mut().push(Call::Backing(width, height));
		}

		fn set_scale(&self, scale: f64) -> Result<(), CloudError> {
			self.calls.borrow_mut().push(Call::Scale(scale));
			Ok(())
		}

		fn clear(&self, _: f64, _: f64, _: f64, _: f64) {}
		fn set_fill(&self, _: &str) {}
		fn fill_rect(&self, _: f64, _: f64, _: f64, _: f64) {}
	}

	#[test]
	fn backing_store_scales_with_pixel_ratio() {
		let geometry = SurfaceGeometry::measure(200.0, 100.0, 2.0);
		assert_eq!(geometry.backing_width, 400);
		assert_eq!(geometry.backing_height, 200);
		assert_eq!(geometry.scale, 2.0);
		assert_eq!(geometry.center(), (100.0, 50.0));
	}

	#[test]
	fn apply_sets_size_and_uniform_scale() {
		let recorder = Recorder::default();
		apply(&recorder, &SurfaceGeometry::measure(200.0, 100.0, 2.0)).unwrap();
		assert_eq!(
			*recorder.calls.borrow(),
			vec![
				Call::Css(200.0, 100.0),
				Call::Backing(400, 200),
				Call::Scale(2.0)
			]
		);
	}

	#[test]
	fn missing_pixel_ratio_falls_back_to_one() {
		for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
			let geometry = SurfaceGeometry::measure(30.0, 40.0, ratio);
			assert_eq!(geometry.scale, 1.0);
			assert_eq!((geometry.backing_width, geometry.backing_height), (30, 40));
		}
	}

	#[test]
	fn fractional_backing_size_truncates() {
		let geometry = SurfaceGeometry::measure(33.7, 21.2, 1.5);
		assert_eq!(geometry.backing_width, 50);
		assert_eq!(geometry.backing_height, 31);
	}
}
