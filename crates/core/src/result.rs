//! Result alias and the reporting combinators used at failure boundaries.
//!
//! A boundary is a place where an error stops propagating: the driver's export
//! step reports a failed write and carries on instead of aborting the run.

use std::fmt::Display;

use crate::error::Error;

/// The standard Result type for arcgraph operations.
///
/// # Examples
///
/// ```
/// use arcgraph_core::{Error, Result};
///
/// fn require_positive(n: usize) -> Result<usize> {
///     if n == 0 {
///         return Err(Error::invalid_config("node count must be positive"));
///     }
///     Ok(n)
/// }
///
/// assert!(require_positive(3).is_ok());
/// assert!(require_positive(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Reporting combinators for any `Result` whose error can be displayed.
pub trait ResultExt<T, E> {
    /// Stop the error here: log it under `operation` and keep only the value.
    ///
    /// ```
    /// use arcgraph_core::ResultExt;
    ///
    /// let written: Result<usize, String> = Err("disk full".to_string());
    /// assert_eq!(written.report("export"), None);
    /// ```
    fn report(self, operation: &str) -> Option<T>;
}

impl<T, E: Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn report(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(operation, error = %e, "operation failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_value() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.report("parse"), Some(42));
    }

    #[test]
    fn test_report_drops_error() {
        let result: Result<i32> = Err(Error::invalid_config("arc_probability"));
        assert_eq!(result.report("load config"), None);
    }

    #[test]
    fn test_report_passes_std_errors_through_inspect_err() {
        let mut seen = Vec::new();
        let failed: std::result::Result<i32, &str> = Err("closed");

        let kept = failed
            .inspect_err(|e| seen.push((*e).to_string()))
            .report("write");

        assert_eq!(kept, None);
        assert_eq!(seen, vec!["closed".to_string()]);
    }
}
