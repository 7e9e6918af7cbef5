//! Random draws used to scatter particles.
//!
//! Everything here takes the generator as an argument so the cloud can be
//! reproduced from a seed. The component hands in an entropy-seeded
//! [`rand::rngs::StdRng`].

use std::f64::consts::TAU;

use rand::Rng;

/// Uniform draw in `[0, 1)` that is never exactly zero.
fn nonzero_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	loop {
		let u: f64 = rng.r#gen();
		if u != 0.0 {
			return u;
		}
	}
}

/// Sample a normal distribution with the given mean and standard deviation.
///
/// Box–Muller, cosine branch: `sqrt(-2 ln u1) * cos(2π u2)`. Both uniforms are
/// redrawn while they land on zero so the logarithm stays finite.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
	let u1 = nonzero_unit(rng);
	let u2 = nonzero_unit(rng);
	let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
	z * std_dev + mean
}

/// Sample the standard normal distribution (mean 0, standard deviation 1).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	normal(rng, 0.0, 1.0)
}

/// Uniform draw in `[low, high)`.
///
/// Unlike `gen_range` this accepts an empty or inverted range and simply
/// scales the unit draw, so user-supplied config can never panic here.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	low + rng.r#gen::<f64>() * (high - low)
}

/// Uniform angle in `[0, 2π)`.
pub fn angle<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.r#gen::<f64>() * TAU
}
