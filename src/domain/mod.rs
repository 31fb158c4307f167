//! Experiment domain types consumed by the view layer
//!
//! The view layer only ever reads these types through [`ExperimentSource`]
//! and [`BucketSource`]; it never mutates them.
//!
//! ```text
//! Experiment (1) ──< Bucket (N)
//! ```

mod bucket;
mod experiment;
mod id;

pub use bucket::{Bucket, BucketSource};
pub use experiment::{Experiment, ExperimentBuilder, ExperimentSource, ExperimentState};
pub use id::{ApplicationName, BucketLabel, ExperimentId, ExperimentLabel};
