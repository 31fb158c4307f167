//! Experiment - the entity under test, as seen by the view layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApplicationName, ExperimentId, ExperimentLabel};

/// Lifecycle state of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperimentState {
    /// Experiment is being set up and assigns no users.
    Draft,
    /// Experiment is live and assigning users.
    Running,
    /// Experiment is temporarily not assigning new users.
    Paused,
    /// Experiment has ended.
    Terminated,
    /// Experiment was removed.
    Deleted,
}

/// Read-only access to the experiment fields a view needs.
///
/// Implemented by [`Experiment`]; storage layers can implement it for their
/// own experiment types to feed [`ExperimentView::from_experiment`].
///
/// [`ExperimentView::from_experiment`]: crate::view::ExperimentView::from_experiment
pub trait ExperimentSource {
    /// Unique identifier.
    fn id(&self) -> &ExperimentId;
    /// Current lifecycle state.
    fn state(&self) -> ExperimentState;
    /// Display name, if any.
    fn label(&self) -> Option<&ExperimentLabel>;
    /// Owning application.
    fn application_name(&self) -> &ApplicationName;
    /// Last modification, if known.
    fn modification_time(&self) -> Option<DateTime<Utc>>;
}

/// A tracked experiment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    id: ExperimentId,
    state: ExperimentState,
    label: Option<ExperimentLabel>,
    application_name: ApplicationName,
    creation_time: DateTime<Utc>,
    modification_time: Option<DateTime<Utc>>,
}

impl Experiment {
    /// Create a new experiment in Draft state.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the experiment
    /// * `application_name` - Application the experiment runs in
    #[must_use]
    pub fn new(id: impl Into<ExperimentId>, application_name: impl Into<ApplicationName>) -> Self {
        ExperimentBuilder::new(id, application_name).build()
    }

    /// Create a builder for constructing an experiment with optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<ExperimentId>,
        application_name: impl Into<ApplicationName>,
    ) -> ExperimentBuilder {
        ExperimentBuilder::new(id, application_name)
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    /// Move the experiment to a new state, stamping the modification time.
    pub fn transition(&mut self, state: ExperimentState) {
        self.state = state;
        self.modification_time = Some(Utc::now());
    }
}

impl ExperimentSource for Experiment {
    fn id(&self) -> &ExperimentId {
        &self.id
    }

    fn state(&self) -> ExperimentState {
        self.state
    }

    fn label(&self) -> Option<&ExperimentLabel> {
        self.label.as_ref()
    }

    fn application_name(&self) -> &ApplicationName {
        &self.application_name
    }

    fn modification_time(&self) -> Option<DateTime<Utc>> {
        self.modification_time
    }
}

/// Builder for `Experiment`.
#[derive(Debug)]
pub struct ExperimentBuilder {
    id: ExperimentId,
    state: ExperimentState,
    label: Option<ExperimentLabel>,
    application_name: ApplicationName,
    creation_time: DateTime<Utc>,
    modification_time: Option<DateTime<Utc>>,
}

impl ExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: impl Into<ExperimentId>, application_name: impl Into<ApplicationName>) -> Self {
        Self {
            id: id.into(),
            state: ExperimentState::Draft,
            label: None,
            application_name: application_name.into(),
            creation_time: Utc::now(),
            modification_time: None,
        }
    }

    /// Set the lifecycle state.
    #[must_use]
    pub const fn state(mut self, state: ExperimentState) -> Self {
        self.state = state;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn label(mut self, label: impl Into<ExperimentLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = creation_time;
        self
    }

    /// Set the last modification timestamp.
    #[must_use]
    pub const fn modification_time(mut self, modification_time: DateTime<Utc>) -> Self {
        self.modification_time = Some(modification_time);
        self
    }

    /// Build the `Experiment`.
    #[must_use]
    pub fn build(self) -> Experiment {
        Experiment {
            id: self.id,
            state: self.state,
            label: self.label,
            application_name: self.application_name,
            creation_time: self.creation_time,
            modification_time: self.modification_time,
        }
    }
}
