//! CRT display post-processing filter.
//!
//! Turns a rendered image into a stylised CRT picture: barrel curvature,
//! scanlines, cheap bloom, vignette, chromatic fringing, brightness,
//! contrast and saturation, plus a time-driven flicker. The per-pixel
//! function lives in [`filter`]; [`post_processor`] runs it over a whole
//! frame in parallel.

pub mod config;
pub mod error;
pub mod filter;
pub mod params;
pub mod post_processor;
pub mod texture2d;

pub use config::{CrtConfig, SamplerConfig};
pub use error::{CrtError, CrtResult};
pub use filter::crt_pixel;
pub use params::CrtParams;
pub use post_processor::PostProcessor;
pub use texture2d::{SampleFilter, Sampler, Texture2D};
