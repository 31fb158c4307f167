//! Card view models for experiments
//!
//! These types carry data the domain types lack: favorite flag, total user
//! count and per-bucket statistics. The statistics are computed elsewhere and
//! supplied by the caller.
//!
//! ```text
//! ExperimentView (1) ──< BucketView (N)   [owned, ordered]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use experiment_views::domain::{Bucket, ExperimentState};
//! use experiment_views::view::ExperimentView;
//!
//! let mut view = ExperimentView::new(
//!     "exp1",
//!     ExperimentState::Running,
//!     Some("Checkout Test".into()),
//!     "app1",
//!     None,
//! )?;
//!
//! let buckets = vec![
//!     Bucket::new("exp1", "A", 0.5, true),
//!     Bucket::new("exp1", "B", 0.5, false),
//! ];
//! view.add_buckets(&buckets)?;
//! view.set_total_number_users(1000)?;
//!
//! assert_eq!(view.buckets().map(<[_]>::len), Some(2));
//! # Ok::<(), experiment_views::Error>(())
//! ```

mod bucket_view;
mod experiment_view;
mod validate;

pub use bucket_view::BucketView;
pub use experiment_view::{ExperimentView, ExperimentViewBuilder};
