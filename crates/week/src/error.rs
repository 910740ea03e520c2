//! Error types for the firstday-week crate.

/// Error type for all fallible operations in the firstday-week crate.
///
/// There is a single kind of failure: the date argument was missing, could
/// not be understood as a calendar instant, or has no representable week
/// start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Returned when the date argument is missing or is not a calendar instant.
    #[error(
        "a date argument is required and must be a date, date-time, or timestamp: {reason}"
    )]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: String,
    },
}

impl WeekError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
