//! Core conversion modules
//!
//! - `scan`: brace-aware scanning primitives shared by every stage
//! - `context`: conversion options and the per-call stage context
//! - `pipeline`: the `Stage` trait and the ordered pipeline
//! - `stages`: the rewrite stages

pub mod context;
pub mod pipeline;
pub mod scan;
pub mod stages;

pub use context::{ConvertOptions, StageContext};
pub use pipeline::{Pipeline, Stage, StageTrace, STANDARD_PIPELINE};
