//! Electron-cloud particle effect.
//!
//! Draws a swirling cloud of dots over a glyph on the page:
//! - An outer ring of electrons orbiting in both directions
//! - A dense nucleus turning slowly at the center
//! - Per-particle radial jitter for a vibrating look
//!
//! The canvas tracks the bounding box of an anchor element at device pixel
//! ratio and rebuilds the whole cloud on every window resize.
//!
//! # Example
//!
//! ```ignore
//! use electron_cloud::{CloudConfig, ElectronCloudCanvas};
//!
//! view! {
//!     <h1>"electr"<span class="electron-o">"o"</span>"n"</h1>
//!     <ElectronCloudCanvas config=CloudConfig::default() />
//! }
//! ```

mod component;
pub mod config;
pub mod driver;
mod error;
pub mod layout;
pub mod particles;
mod render;
pub mod sampler;
mod scene;
mod simulation;
mod surface;

pub use component::ElectronCloudCanvas;
pub use config::CloudConfig;
pub use driver::FrameDriver;
pub use error::CloudError;
pub use layout::SurfaceGeometry;
pub use particles::{Particle, ParticleKind, ParticleStore};
pub use render::render;
pub use scene::CloudScene;
pub use simulation::step;
pub use surface::{CanvasSurface, Surface};
