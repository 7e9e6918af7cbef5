//! Tunable parameters for the cloud.
//!
//! Ratios are fractions of the anchor's logical width, so the cloud keeps its
//! proportions at any font size. Every struct deserializes with defaults for
//! missing fields, which lets a page override a single value in JSON.

use serde::Deserialize;

/// Half-open uniform range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Span {
	/// Range from `min` up to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}
}

/// The wide ring of electrons orbiting the glyph.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OuterBand {
	/// Number of particles in the ring.
	pub count: usize,
	/// Ring radius as a fraction of width.
	pub radius_ratio: f64,
	/// Standard deviation of the ring radius as a fraction of width.
	pub spread_ratio: f64,
	/// Angular speed magnitude in rad/s; direction is picked per particle.
	pub speed: Span,
	/// Jitter oscillation frequency.
	pub jitter_speed: Span,
	/// Jitter amplitude as a fraction of the spread.
	pub jitter_ratio: f64,
	/// Side of the painted square in logical pixels.
	pub size: f64,
}

impl Default for OuterBand {
	fn default() -> Self {
		Self {
			count: 220,
			radius_ratio: 0.32,
			spread_ratio: 0.06,
			speed: Span::new(0.4, 1.2),
			jitter_speed: Span::new(0.5, 2.5),
			jitter_ratio: 0.35,
			size: 1.0,
		}
	}
}

/// The dense cluster at the center of the glyph.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NucleusCluster {
	/// Number of particles in the nucleus.
	pub count: usize,
	/// Nucleus radius as a fraction of width.
	pub radius_ratio: f64,
	/// Standard deviation of the radius as a fraction of the nucleus radius.
	pub spread_factor: f64,
	/// Signed angular speed in rad/s.
	pub speed: Span,
	/// Jitter oscillation frequency.
	pub jitter_speed: Span,
	/// Jitter amplitude as a fraction of the nucleus radius.
	pub jitter_ratio: f64,
	/// Side of the painted square in logical pixels.
	pub size: f64,
}

impl Default for NucleusCluster {
	fn default() -> Self {
		Self {
			count: 80,
			radius_ratio: 0.06,
			spread_factor: 0.7,
			speed: Span::new(-0.5, 0.5),
			jitter_speed: Span::new(1.0, 3.0),
			jitter_ratio: 0.3,
			size: 1.4,
		}
	}
}

/// Complete cloud configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
	/// `id` given to the rendered canvas element.
	pub canvas_id: String,
	/// CSS selector of the element whose box the cloud fills.
	pub anchor_selector: String,
	/// CSS fill colour for particles.
	pub fill: String,
	/// Orbiting ring parameters.
	pub outer: OuterBand,
	/// Central cluster parameters.
	pub nucleus: NucleusCluster,
}

impl Default for CloudConfig {
	fn default() -> Self {
		Self {
			canvas_id: "electronCanvas".to_string(),
			anchor_selector: ".electron-o".to_string(),
			fill: "#000".to_string(),
			outer: OuterBand::default(),
			nucleus: NucleusCluster::default(),
		}
	}
}

impl CloudConfig {
	/// Total number of particles a store built from this config holds.
	pub fn particle_count(&self) -> usize {
		self.outer.count + self.nucleus.count
	}
}
