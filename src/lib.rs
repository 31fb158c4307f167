//! # Experiment Views: validated card view models for A/B experiments
//!
//! A UI that lists experiments as cards needs more than the stored
//! experiment: whether the user favorited it, how many users it has, and
//! per-bucket action rates with confidence bounds. This crate holds that
//! data in [`view::ExperimentView`] and [`view::BucketView`] and guarantees
//! a required field is never observed in an invalid state.
//!
//! ## Guarantees
//!
//! - Constructors validate before any field is assigned
//! - Validating setters leave the old value in place on error
//! - `add_buckets` replaces the bucket list all-or-nothing
//! - Deserialization runs the same validation as construction
//!
//! Computed statistics (action rate, bounds) are stored unchecked.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod domain;
pub mod error;
pub mod view;

pub use error::{Error, Result};
pub use view::{BucketView, ExperimentView};
