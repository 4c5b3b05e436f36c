//! linegraph-rs: renderer-agnostic 2D line graph engine.
//!
//! This crate maps graph-space data to screen space, lays out plot geometry
//! from view bounds and margins, and emits backend-neutral render primitives.
//! Hosts supply data through [`api::GraphDataSource`] and drive passes through
//! [`api::GraphEngine`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GraphEngine, GraphEngineConfig};
pub use error::{GraphError, GraphResult};
