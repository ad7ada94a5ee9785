use std::fmt;

/// A gradient descriptor violated the stop-count contract.
///
/// The primary gradient carries exactly [`PRIMARY_STOP_COUNT`] stops and the
/// overlay exactly [`OVERLAY_STOP_COUNT`]; anything else is a caller bug and
/// is rejected rather than truncated or padded.
///
/// [`PRIMARY_STOP_COUNT`]: crate::gradient::PRIMARY_STOP_COUNT
/// [`OVERLAY_STOP_COUNT`]: crate::gradient::OVERLAY_STOP_COUNT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Which gradient failed: `"primary"` or `"overlay"`.
    pub gradient: &'static str,
    pub expected: usize,
    pub actual: usize,
}

impl ValidationError {
    pub(crate) fn stop_count(gradient: &'static str, expected: usize, actual: usize) -> Self {
        Self { gradient, expected, actual }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} gradient requires exactly {} color stops, got {}",
            self.gradient, self.expected, self.actual
        )
    }
}

impl std::error::Error for ValidationError {}
