//! Painting the cloud.
//!
//! Each particle is a tiny filled square anchored at its top-left corner.
//! Nucleus dots are slightly larger so the center reads as denser.

use super::config::CloudConfig;
use super::particles::ParticleKind;
use super::scene::CloudScene;
use super::surface::Surface;

/// Clears the logical area and paints every particle in store order.
pub fn render<S: Surface + ?Sized>(scene: &CloudScene, surface: &S, config: &CloudConfig) {
	let geometry = scene.geometry();
	surface.clear(0.0, 0.0, geometry.width, geometry.height);

	surface.set_fill(&config.fill);
	for p in scene.particles() {
		let (x, y) = p.position();
		let size = match p.kind() {
			ParticleKind::Nucleus => config.nucleus.size,
			ParticleKind::Outer => config.outer.size,
		};
		surface.fill_rect(x, y, size, size);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::electron_cloud::error::CloudError;
	use crate::components::electron_cloud::layout::SurfaceGeometry;
	use crate::components::electron_cloud::particles::{Orbit, Particle, ParticleStore};

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64, f64, f64),
		Fill(String),
		Rect(f64, f64, f64, f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: RefCell<Vec<Op>>,
	}

	impl Surface for Recorder {
		fn set_css_size(&self, _: f64, _: f64) -> Result<(), CloudError> {
			Ok(())
		}
		fn set_backing_size(&self, _: u32, _: u32) {}
		fn set_scale(&self, _: f64) -> Result<(), CloudError> {
			Ok(())
		}

		fn clear(&self, x: f64, y: f64, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Clear(x, y, width, height));
		}

		fn set_fill(&self, css: &str) {
			self.ops.borrow_mut().push(Op::Fill(css.to_string()));
		}

		fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Rect(x, y, width, height));
		}
	}

	fn still(kind: ParticleKind, angle: f64, radius: f64) -> Particle {
		let orbit = Orbit {
			angular_velocity: 0.0,
			jitter_phase: 0.0,
			jitter_speed: 0.0,
			jitter_amount: 0.0,
		};
		Particle::new(kind, (50.0, 25.0), angle, radius, orbit)
	}

	#[test]
	fn clears_then_paints_each_particle() {
		let store = ParticleStore::from_particles(vec![
			still(ParticleKind::Outer, 0.0, 10.0),
			still(ParticleKind::Nucleus, std::f64::consts::PI, 0.0),
		]);
		let scene = CloudScene::with_store(SurfaceGeometry::measure(100.0, 50.0, 2.0), store);
		let recorder = Recorder::default();

		render(&scene, &recorder, &CloudConfig::default());

		let ops = recorder.ops.borrow();
		assert_eq!(ops.len(), 4);
		assert_eq!(ops[0], Op::Clear(0.0, 0.0, 100.0, 50.0));
		assert_eq!(ops[1], Op::Fill("#000".to_string()));
		assert_eq!(ops[2], Op::Rect(60.0, 25.0, 1.0, 1.0));
		match ops[3] {
			Op::Rect(x, y, w, h) => {
				assert!((x - 50.0).abs() < 1e-9 && (y - 25.0).abs() < 1e-9);
				assert_eq!((w, h), (1.4, 1.4));
			}
			ref other => panic!("expected a rect, got {other:?}"),
		}
	}

	#[test]
	fn empty_scene_only_clears() {
		let scene = CloudScene::with_store(
			SurfaceGeometry::measure(10.0, 10.0, 1.0),
			ParticleStore::default(),
		);
		let recorder = Recorder::default();
		render(&scene, &recorder, &CloudConfig::default());
		assert_eq!(recorder.ops.borrow()[0], Op::Clear(0.0, 0.0, 10.0, 10.0));
		assert!(
			!recorder
				.ops
				.borrow()
				.iter()
				.any(|op| matches!(op, Op::Rect(..)))
		);
	}
}
