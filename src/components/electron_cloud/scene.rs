//! One layout generation of the cloud.

use rand::Rng;

use super::config::CloudConfig;
use super::layout::SurfaceGeometry;
use super::particles::{Particle, ParticleStore};
use super::simulation;

/// Surface geometry together with the particles scattered over it.
///
/// Built once per layout pass. A resize throws the whole scene away and
/// builds a new one; particles never carry over.
#[derive(Clone, Debug)]
pub struct CloudScene {
	geometry: SurfaceGeometry,
	store: ParticleStore,
}

impl CloudScene {
	/// Scatter a fresh cloud over `geometry`.
	pub fn new<R: Rng + ?Sized>(
		geometry: SurfaceGeometry,
		config: &CloudConfig,
		rng: &mut R,
	) -> Self {
		let store = ParticleStore::populate(geometry.width, geometry.height, config, rng);
		Self { geometry, store }
	}

	/// Scene over an existing store.
	pub fn with_store(geometry: SurfaceGeometry, store: ParticleStore) -> Self {
		Self { geometry, store }
	}

	/// Surface geometry this scene was laid out for.
	pub fn geometry(&self) -> &SurfaceGeometry {
		&self.geometry
	}

	/// Particles in store order.
	pub fn particles(&self) -> &[Particle] {
		self.store.particles()
	}

	/// Advance the cloud by `dt` seconds to simulation time `time`.
	pub fn step(&mut self, dt: f64, time: f64) {
		simulation::step(self.store.particles_mut(), dt, time);
	}
}
