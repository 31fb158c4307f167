//! Bucket - one arm of an experiment

use serde::{Deserialize, Serialize};

use super::{BucketLabel, ExperimentId};

/// Read-only access to the bucket fields a view needs.
pub trait BucketSource {
    /// Bucket label.
    fn label(&self) -> &BucketLabel;
    /// Whether this bucket is the control arm.
    fn is_control(&self) -> bool;
    /// Fraction of traffic assigned to this bucket.
    fn allocation_percent(&self) -> f64;
}

/// A bucket as stored alongside its experiment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    experiment_id: ExperimentId,
    label: BucketLabel,
    allocation_percent: f64,
    is_control: bool,
    description: Option<String>,
}

impl Bucket {
    /// Create a new bucket.
    ///
    /// # Arguments
    ///
    /// * `experiment_id` - ID of the parent experiment
    /// * `label` - Bucket label (e.g., "control", "variant-a")
    /// * `allocation_percent` - Share of traffic, as a fraction
    /// * `is_control` - Whether this is the control arm
    #[must_use]
    pub fn new(
        experiment_id: impl Into<ExperimentId>,
        label: impl Into<BucketLabel>,
        allocation_percent: f64,
        is_control: bool,
    ) -> Self {
        Self {
            experiment_id: experiment_id.into(),
            label: label.into(),
            allocation_percent,
            is_control,
            description: None,
        }
    }

    /// Attach a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the parent experiment ID.
    #[must_use]
    pub const fn experiment_id(&self) -> &ExperimentId {
        &self.experiment_id
    }

    /// Get the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl BucketSource for Bucket {
    fn label(&self) -> &BucketLabel {
        &self.label
    }

    fn is_control(&self) -> bool {
        self.is_control
    }

    fn allocation_percent(&self) -> f64 {
        self.allocation_percent
    }
}
