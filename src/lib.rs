//! carbon-charts: deterministic chart geometry for blue-carbon registry
//! dashboards.
//!
//! `core` turns heterogeneous dashboard records into bar and pie descriptors
//! as pure functions. `render` and `api` are a thin presentation layer on top.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
