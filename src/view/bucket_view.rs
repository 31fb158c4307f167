//! Bucket View - per-bucket statistics for an experiment card

use serde::{Deserialize, Serialize};

use super::validate;
use crate::domain::{BucketLabel, BucketSource};
use crate::{Error, Result};

/// Display and statistics data for one bucket of an [`ExperimentView`].
///
/// Label, allocation and user count are validated on every write. Action
/// rate and the confidence bounds are computed elsewhere and stored as
/// given, so they accept any value including NaN and negatives.
///
/// [`ExperimentView`]: super::ExperimentView
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "BucketViewWire")]
pub struct BucketView {
    label: BucketLabel,
    is_control: bool,
    allocation_percent: f64,
    action_rate: f64,
    lower_bound: f64,
    upper_bound: f64,
    user_count: i64,
}

impl BucketView {
    /// Create a bucket view with the data every bucket has.
    ///
    /// Statistics start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `label` is empty or
    /// `allocation_percent` is below zero (or NaN).
    pub fn new(
        label: impl Into<BucketLabel>,
        is_control: bool,
        allocation_percent: f64,
    ) -> Result<Self> {
        let label = label.into();
        validate::non_empty("bucket label", label.as_ref())?;
        validate::non_negative_fraction("allocationPercent", allocation_percent)?;
        Ok(Self {
            label,
            is_control,
            allocation_percent,
            action_rate: 0.0,
            lower_bound: 0.0,
            upper_bound: 0.0,
            user_count: 0,
        })
    }

    /// Create a bucket view from a domain bucket.
    ///
    /// # Errors
    ///
    /// Same as [`BucketView::new`].
    pub fn from_bucket<B: BucketSource + ?Sized>(bucket: &B) -> Result<Self> {
        Self::new(bucket.label().clone(), bucket.is_control(), bucket.allocation_percent())
    }

    /// Get the bucket label.
    #[must_use]
    pub const fn label(&self) -> &BucketLabel {
        &self.label
    }

    /// Whether this is the control bucket.
    #[must_use]
    pub const fn is_control(&self) -> bool {
        self.is_control
    }

    /// Get the allocation fraction.
    #[must_use]
    pub const fn allocation_percent(&self) -> f64 {
        self.allocation_percent
    }

    /// Get the action rate.
    #[must_use]
    pub const fn action_rate(&self) -> f64 {
        self.action_rate
    }

    /// Get the lower confidence bound.
    #[must_use]
    pub const fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Get the upper confidence bound.
    #[must_use]
    pub const fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Get the number of users assigned to this bucket.
    #[must_use]
    pub const fn user_count(&self) -> i64 {
        self.user_count
    }

    /// Replace the label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `label` is empty; the old label is kept.
    pub fn set_label(&mut self, label: impl Into<BucketLabel>) -> Result<()> {
        let label = label.into();
        validate::non_empty("bucket label", label.as_ref())?;
        self.label = label;
        Ok(())
    }

    /// Mark or unmark this bucket as control.
    pub fn set_control(&mut self, is_control: bool) {
        self.is_control = is_control;
    }

    /// Replace the allocation fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `allocation_percent` is below
    /// zero or NaN; the old value is kept.
    pub fn set_allocation_percent(&mut self, allocation_percent: f64) -> Result<()> {
        validate::non_negative_fraction("allocationPercent", allocation_percent)?;
        self.allocation_percent = allocation_percent;
        Ok(())
    }

    /// Set the action rate.
    pub fn set_action_rate(&mut self, action_rate: f64) {
        self.action_rate = action_rate;
    }

    /// Set the lower confidence bound.
    pub fn set_lower_bound(&mut self, lower_bound: f64) {
        self.lower_bound = lower_bound;
    }

    /// Set the upper confidence bound.
    pub fn set_upper_bound(&mut self, upper_bound: f64) {
        self.upper_bound = upper_bound;
    }

    /// Replace the user count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `user_count` is negative; the
    /// old value is kept.
    pub fn set_user_count(&mut self, user_count: i64) -> Result<()> {
        validate::non_negative_count("userCount", user_count)?;
        self.user_count = user_count;
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BucketViewWire {
    label: BucketLabel,
    is_control: bool,
    #[serde(default)]
    allocation_percent: f64,
    #[serde(default)]
    action_rate: f64,
    #[serde(default)]
    lower_bound: f64,
    #[serde(default)]
    upper_bound: f64,
    #[serde(default)]
    user_count: i64,
}

impl TryFrom<BucketViewWire> for BucketView {
    type Error = Error;

    fn try_from(wire: BucketViewWire) -> Result<Self> {
        let mut view = Self::new(wire.label, wire.is_control, wire.allocation_percent)?;
        view.set_user_count(wire.user_count)?;
        view.action_rate = wire.action_rate;
        view.lower_bound = wire.lower_bound;
        view.upper_bound = wire.upper_bound;
        Ok(view)
    }
}
