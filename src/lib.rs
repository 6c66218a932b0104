//! Options gamma exposure analyzer.
//!
//! An uploaded options chain (`.xlsx`) goes through
//! [`ingest`] -> [`validate`] -> [`transform`] -> [`configure`], chained by
//! [`pipeline::run`], and is drawn by [`render`] as a Plotly bubble scatter
//! sized by normalized absolute gamma.

pub mod analyze;
pub mod config;
pub mod configure;
pub mod error;
pub mod format_help;
pub mod ingest;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod transform;
pub mod validate;

#[cfg(feature = "full")]
pub mod api;
#[cfg(feature = "full")]
pub mod telemetry;

pub use error::{PipelineError, PipelineResult};
