//! Electron particles and the store that holds one layout's worth of them.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::CloudConfig;
use super::sampler;

/// Which population a particle was generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Member of the wide orbiting ring.
	Outer,
	/// Member of the dense central cluster.
	Nucleus,
}

/// Motion parameters fixed when a particle is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
	/// Signed angular velocity in rad/s. Positive turns clockwise on screen.
	pub angular_velocity: f64,
	/// Phase offset of the radial oscillation, in radians.
	pub jitter_phase: f64,
	/// Frequency of the radial oscillation.
	pub jitter_speed: f64,
	/// Amplitude of the radial oscillation, in logical pixels.
	pub jitter_amount: f64,
}

/// A single electron orbiting a fixed center.
///
/// Only `angle` and `radius` change after construction, and only through
/// [`Particle::advance`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	kind: ParticleKind,
	center: (f64, f64),
	angle: f64,
	base_radius: f64,
	radius: f64,
	orbit: Orbit,
}

impl Particle {
	/// Particle at `angle` and `base_radius` around `center`, radius unjittered.
	pub fn new(
		kind: ParticleKind,
		center: (f64, f64),
		angle: f64,
		base_radius: f64,
		orbit: Orbit,
	) -> Self {
		Self {
			kind,
			center,
			angle,
			base_radius,
			radius: base_radius,
			orbit,
		}
	}

	/// Population this particle belongs to.
	pub fn kind(&self) -> ParticleKind {
		self.kind
	}

	/// Center of the orbit in logical pixels.
	pub fn center(&self) -> (f64, f64) {
		self.center
	}

	/// Accumulated angle in radians. Never wrapped.
	pub fn angle(&self) -> f64 {
		self.angle
	}

	/// Radius without jitter, fixed at creation.
	pub fn base_radius(&self) -> f64 {
		self.base_radius
	}

	/// Radius at the last step, base radius plus jitter.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Fixed motion parameters.
	pub fn orbit(&self) -> &Orbit {
		&self.orbit
	}

	/// Rotate by `dt` seconds and resample the jitter at simulation time `time`.
	pub fn advance(&mut self, dt: f64, time: f64) {
		self.angle += self.orbit.angular_velocity * dt;
		let jitter = (TAU * self.orbit.jitter_speed * time + self.orbit.jitter_phase).sin()
			* self.orbit.jitter_amount;
		self.radius = self.base_radius + jitter;
	}

	/// Cartesian position in logical pixels.
	pub fn position(&self) -> (f64, f64) {
		let (cx, cy) = self.center;
		(
			cx + self.radius * self.angle.cos(),
			cy + self.radius * self.angle.sin(),
		)
	}
}

/// Ordered particles for one layout: the outer ring first, then the nucleus.
///
/// A store is never resized or patched. A new layout builds a new store.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
	particles: Vec<Particle>,
}

impl ParticleStore {
	/// Scatter a fresh cloud over a surface of the given logical size.
	pub fn populate<R: Rng + ?Sized>(
		width: f64,
		height: f64,
		config: &CloudConfig,
		rng: &mut R,
	) -> Self {
		let center = (width / 2.0, height / 2.0);
		let mut particles = Vec::with_capacity(config.particle_count());

		let outer = &config.outer;
		let ring_radius = width * outer.radius_ratio;
		let ring_spread = width * outer.spread_ratio;
		for _ in 0..outer.count {
			let angle = sampler::angle(rng);
			let base_radius = ring_radius + sampler::normal(rng, 0.0, ring_spread);
			let speed = sampler::uniform(rng, outer.speed.min, outer.speed.max);
			let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
			let orbit = Orbit {
				angular_velocity: speed * direction,
				jitter_phase: sampler::angle(rng),
				jitter_speed: sampler::uniform(rng, outer.jitter_speed.min, outer.jitter_speed.max),
				jitter_amount: ring_spread * outer.jitter_ratio,
			};
			particles.push(Particle::new(
				ParticleKind::Outer,
				center,
				angle,
				base_radius,
				orbit,
			));
		}

		let nucleus = &config.nucleus;
		let nucleus_radius = width * nucleus.radius_ratio;
		for _ in 0..nucleus.count {
			let angle = sampler::angle(rng);
			let spread = nucleus_radius * nucleus.spread_factor;
			let base_radius = sampler::normal(rng, 0.0, spread).abs();
			let orbit = Orbit {
				angular_velocity: sampler::uniform(rng, nucleus.speed.min, nucleus.speed.max),
				jitter_phase: sampler::angle(rng),
				jitter_speed: sampler::uniform(
					rng,
					nucleus.jitter_speed.min,
					nucleus.jitter_speed.max,
				),
				jitter_amount: nucleus_radius * nucleus.jitter_ratio,
			};
			particles.push(Particle::new(
				ParticleKind::Nucleus,
				center,
				angle,
				base_radius,
				orbit,
			));
		}

		Self { particles }
	}

	/// Build a store from already-constructed particles.
	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	/// Particles in store order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable view for stepping; the store itself cannot grow or shrink.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the store holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
