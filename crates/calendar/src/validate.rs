//! Accumulated validation for reference tables.
//!
//! Provides [`ValidationCollector`] for gathering multiple consistency
//! problems into a single [`CalendarError::Validation`].

use crate::error::CalendarError;

/// Accumulates validation errors and converts them into a single
/// [`CalendarError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(CalendarError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), CalendarError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CalendarError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}
