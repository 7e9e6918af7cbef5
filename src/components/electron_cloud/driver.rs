//! Frame pacing for the cloud.
//!
//! The driver turns host frame timestamps into step sizes and owns the
//! simulation clock the jitter is sampled against. It never schedules
//! anything itself: the caller asks for the next frame when [`FrameDriver::frame`]
//! returns `true`, which keeps it steppable from tests.

use super::config::CloudConfig;
use super::render;
use super::scene::CloudScene;
use super::surface::Surface;

/// Start/stop frame driver with a simulation clock in seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameDriver {
	running: bool,
	last_timestamp: Option<f64>,
	elapsed: f64,
}

impl FrameDriver {
	/// A stopped driver with its clock at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Begin running. The next frame sets a fresh baseline with a zero step.
	pub fn start(&mut self) {
		self.running = true;
		self.last_timestamp = None;
	}

	/// Stop running; later frames are ignored until [`FrameDriver::start`].
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Whether frames are currently being processed.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Simulation time in seconds, the sum of every step so far.
	pub fn elapsed(&self) -> f64 {
		self.elapsed
	}

	/// Record a frame timestamp in milliseconds and return the step in seconds.
	pub fn advance(&mut self, timestamp_ms: f64) -> f64 {
		let dt = match self.last_timestamp {
			Some(last) => (timestamp_ms - last) / 1000.0,
			None => 0.0,
		};
		self.last_timestamp = Some(timestamp_ms);
		self.elapsed += dt;
		dt
	}

	/// Run one frame: step the scene, then render it.
	///
	/// Returns whether another frame should be scheduled. A stopped driver
	/// leaves the scene and surface untouched.
	pub fn frame<S: Surface + ?Sized>(
		&mut self,
		timestamp_ms: f64,
		scene: &mut CloudScene,
		surface: &S,
		config: &CloudConfig,
	) -> bool {
		if !self.running {
			return false;
		}
		let dt = self.advance(timestamp_ms);
		scene.step(dt, self.elapsed);
		render::render(scene, surface, config);
		true
	}
}
