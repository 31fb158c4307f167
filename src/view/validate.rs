//! Field predicates shared by constructors and setters

use tracing::debug;

use crate::{Error, Result};

/// Reject an empty string form.
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        debug!(field, "rejected empty value");
        return Err(Error::invalid(format!("{field} can not be empty")));
    }
    Ok(())
}

/// Reject an absent required field.
pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        debug!(field, "rejected missing value");
        Error::invalid(format!("{field} is required"))
    })
}

/// Accept only `value >= 0.0`, so NaN is rejected too.
pub(crate) fn non_negative_fraction(field: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        debug!(field, value, "rejected negative fraction");
        Err(Error::invalid(format!("{field} can not be smaller than 0, got {value}")))
    }
}

/// Reject counts below zero.
pub(crate) fn non_negative_count(field: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        debug!(field, value, "rejected negative count");
        return Err(Error::invalid(format!("{field} can not be smaller than 0, got {value}")));
    }
    Ok(())
}
