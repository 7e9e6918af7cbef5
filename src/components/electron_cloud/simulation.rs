//! Per-frame motion of the cloud.

use super::particles::Particle;

/// Advance every particle by `dt` seconds, with jitter sampled at simulation
/// time `time`.
///
/// Each particle's update reads only that particle.
pub fn step(particles: &mut [Particle], dt: f64, time: f64) {
	for p in particles {
		p.advance(dt, time);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::electron_cloud::config::CloudConfig;
	use crate::components::electron_cloud::particles::ParticleStore;

	fn cloud(seed: u64) -> ParticleStore {
		let mut rng = StdRng::seed_from_u64(seed);
		ParticleStore::populate(100.0, 100.0, &CloudConfig::default(), &mut rng)
	}

	#[test]
	fn empty_store_is_a_no_op() {
		step(&mut [], 0.5, 1.0);
	}

	#[test]
	fn angle_accumulates_velocity_times_elapsed() {
		let mut store = cloud(21);
		let start: Vec<(f64, f64)> = store
			.particles()
			.iter()
			.map(|p| (p.angle(), p.orbit().angular_velocity))
			.collect();

		let dts = [0.016, 0.017, 0.0, 0.5, 0.033, 2.0];
		let mut time = 0.0;
		for dt in dts {
			time += dt;
			step(store.particles_mut(), dt, time);
		}

		let total: f64 = dts.iter().sum();
		for (p, (angle0, velocity)) in store.particles().iter().zip(start) {
			assert!((p.angle() - (angle0 + velocity * total)).abs() < 1e-9);
		}
	}

	#[test]
	fn particles_step_independently() {
		let mut together = cloud(22);
		step(together.particles_mut(), 0.25, 3.0);

		let mut alone = cloud(22);
		for p in alone.particles_mut().iter_mut().rev() {
			step(std::slice::from_mut(p), 0.25, 3.0);
		}

		assert_eq!(together.particles(), alone.particles());
	}

	#[test]
	fn radius_stays_within_jitter_band() {
		let mut store = cloud(23);
		for frame in 0..120 {
			step(store.particles_mut(), 1.0 / 60.0, frame as f64 / 60.0);
			for p in store.particles() {
				let amount = p.orbit().jitter_amount;
				assert!((p.radius() - p.base_radius()).abs() <= amount + 1e-12);
			}
		}
	}
}
