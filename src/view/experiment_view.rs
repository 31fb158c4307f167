//! Experiment View - card view summary of an experiment and its buckets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{validate, BucketView};
use crate::domain::{
    ApplicationName, BucketSource, ExperimentId, ExperimentLabel, ExperimentSource,
    ExperimentState,
};
use crate::{Error, Result};

/// Experiment View wraps the basics of an experiment with the data a card
/// view needs on top: favorite flag, total user count and per-bucket
/// statistics.
///
/// `id`, `state` and `appName` are fixed at construction. The label may be
/// empty, unlike the identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "ExperimentViewWire")]
pub struct ExperimentView {
    id: ExperimentId,
    state: ExperimentState,
    label: Option<ExperimentLabel>,
    app_name: ApplicationName,
    modification_time: Option<DateTime<Utc>>,
    is_favorite: bool,
    buckets: Option<Vec<BucketView>>,
    total_number_users: i64,
}

impl ExperimentView {
    /// Create an experiment view with explicit values.
    ///
    /// # Arguments
    ///
    /// * `id` - ID of the experiment
    /// * `state` - Current lifecycle state
    /// * `label` - Experiment display name, stored unchecked
    /// * `app_name` - Application the experiment belongs to
    /// * `modification_time` - Last modification, stored unchecked
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `id` or `app_name` is empty.
    pub fn new(
        id: impl Into<ExperimentId>,
        state: ExperimentState,
        label: Option<ExperimentLabel>,
        app_name: impl Into<ApplicationName>,
        modification_time: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let id = id.into();
        validate::non_empty("experiment id", id.as_ref())?;
        let app_name = app_name.into();
        validate::non_empty("application name", app_name.as_ref())?;
        Ok(Self {
            id,
            state,
            label,
            app_name,
            modification_time,
            is_favorite: false,
            buckets: None,
            total_number_users: 0,
        })
    }

    /// Create an experiment view from a domain experiment.
    ///
    /// # Errors
    ///
    /// Same as [`ExperimentView::new`].
    pub fn from_experiment<E: ExperimentSource + ?Sized>(experiment: &E) -> Result<Self> {
        Self::new(
            experiment.id().clone(),
            experiment.state(),
            experiment.label().cloned(),
            experiment.application_name().clone(),
            experiment.modification_time(),
        )
    }

    /// Create a builder that tolerates missing required fields until `build`.
    #[must_use]
    pub fn builder() -> ExperimentViewBuilder {
        ExperimentViewBuilder::default()
    }

    /// Get the experiment ID.
    #[must_use]
    pub const fn id(&self) -> &ExperimentId {
        &self.id
    }

    /// Get the experiment state.
    #[must_use]
    pub const fn state(&self) -> ExperimentState {
        self.state
    }

    /// Get the experiment label, if any.
    #[must_use]
    pub const fn label(&self) -> Option<&ExperimentLabel> {
        self.label.as_ref()
    }

    /// Get the application name.
    #[must_use]
    pub const fn app_name(&self) -> &ApplicationName {
        &self.app_name
    }

    /// Get the last modification time, if known.
    #[must_use]
    pub const fn modification_time(&self) -> Option<DateTime<Utc>> {
        self.modification_time
    }

    /// Whether the current user marked this experiment as favorite.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Get the bucket views, if buckets were added.
    #[must_use]
    pub fn buckets(&self) -> Option<&[BucketView]> {
        self.buckets.as_deref()
    }

    /// Get mutable access to the bucket views for filling in statistics.
    pub fn buckets_mut(&mut self) -> Option<&mut [BucketView]> {
        self.buckets.as_deref_mut()
    }

    /// Find a bucket view by label.
    pub fn bucket_mut(&mut self, label: &str) -> Option<&mut BucketView> {
        self.buckets
            .as_mut()?
            .iter_mut()
            .find(|bucket| bucket.label().as_ref() == label)
    }

    /// Get the total number of users in the experiment.
    #[must_use]
    pub const fn total_number_users(&self) -> i64 {
        self.total_number_users
    }

    /// Mark or unmark the experiment as favorite.
    pub fn set_favorite(&mut self, is_favorite: bool) {
        self.is_favorite = is_favorite;
    }

    /// Set the last modification time.
    pub fn set_modification_time(&mut self, modification_time: Option<DateTime<Utc>>) {
        self.modification_time = modification_time;
    }

    /// Replace the total number of users.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `total_number_users` is negative;
    /// the old value is kept.
    pub fn set_total_number_users(&mut self, total_number_users: i64) -> Result<()> {
        validate::non_negative_count("totalNumberUsers", total_number_users)?;
        self.total_number_users = total_number_users;
        Ok(())
    }

    /// Convert domain buckets to bucket views, in order.
    ///
    /// Replaces any previously added buckets rather than appending to them.
    /// If any bucket fails conversion, the current buckets are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for the first bucket with an empty
    /// label or a negative allocation.
    pub fn add_buckets<'a, B, I>(&mut self, buckets: I) -> Result<()>
    where
        B: BucketSource + 'a,
        I: IntoIterator<Item = &'a B>,
    {
        let views = buckets
            .into_iter()
            .map(BucketView::from_bucket)
            .collect::<Result<Vec<_>>>()?;
        trace!(experiment = %self.id, count = views.len(), "installed bucket views");
        self.buckets = Some(views);
        Ok(())
    }
}

/// Builder for `ExperimentView`.
///
/// Unlike [`ExperimentView::new`], required fields may be left unset here;
/// [`ExperimentViewBuilder::build`] reports which one is missing.
#[derive(Debug, Default)]
pub struct ExperimentViewBuilder {
    id: Option<ExperimentId>,
    state: Option<ExperimentState>,
    label: Option<ExperimentLabel>,
    app_name: Option<ApplicationName>,
    modification_time: Option<DateTime<Utc>>,
    is_favorite: bool,
    total_number_users: i64,
}

impl ExperimentViewBuilder {
    /// Set the experiment ID.
    #[must_use]
    pub fn id(mut self, id: impl Into<ExperimentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the experiment state.
    #[must_use]
    pub const fn state(mut self, state: ExperimentState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the experiment label.
    #[must_use]
    pub fn label(mut self, label: impl Into<ExperimentLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the application name.
    #[must_use]
    pub fn app_name(mut self, app_name: impl Into<ApplicationName>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Set the last modification time.
    #[must_use]
    pub const fn modification_time(mut self, modification_time: DateTime<Utc>) -> Self {
        self.modification_time = Some(modification_time);
        self
    }

    /// Set the favorite flag.
    #[must_use]
    pub const fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Set the total number of users; validated in `build`.
    #[must_use]
    pub const fn total_number_users(mut self, total_number_users: i64) -> Self {
        self.total_number_users = total_number_users;
        self
    }

    /// Build the `ExperimentView`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `id`, `state` or `app_name` is
    /// missing or empty, or if the total number of users is negative.
    pub fn build(self) -> Result<ExperimentView> {
        let id = validate::required("experiment id", self.id)?;
        let state = validate::required("experiment state", self.state)?;
        let app_name = validate::required("application name", self.app_name)?;
        let mut view =
            ExperimentView::new(id, state, self.label, app_name, self.modification_time)?;
        view.set_total_number_users(self.total_number_users)?;
        view.set_favorite(self.is_favorite);
        Ok(view)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExperimentViewWire {
    id: Option<ExperimentId>,
    state: Option<ExperimentState>,
    #[serde(default)]
    label: Option<ExperimentLabel>,
    app_name: Option<ApplicationName>,
    #[serde(default)]
    modification_time: Option<DateTime<Utc>>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    buckets: Option<Vec<BucketView>>,
    #[serde(default)]
    total_number_users: i64,
}

impl TryFrom<ExperimentViewWire> for ExperimentView {
    type Error = Error;

    fn try_from(wire: ExperimentViewWire) -> Result<Self> {
        let mut builder = Self::builder()
            .favorite(wire.is_favorite)
            .total_number_users(wire.total_number_users);
        builder.id = wire.id;
        builder.state = wire.state;
        builder.label = wire.label;
        builder.app_name = wire.app_name;
        builder.modification_time = wire.modification_time;
        let mut view = builder.build()?;
        view.buckets = wire.buckets;
        Ok(view)
    }
}
