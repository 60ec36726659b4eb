//! Error types for the court-date workspace.
//!
//! Every failure the engine can report falls into one of three families that
//! callers must be able to tell apart: bad user input, gaps in the reference
//! tables, and bounded searches that ran out of candidates.  The `ensure!`
//! and `fail!` macros defined here build those errors in place.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller supplied input that must be corrected before any
    /// computation can start (missing surname initial, lookahead out of
    /// range, no city selected).
    #[error("invalid input: {0}")]
    InputValidation(String),

    /// The reference tables have no usable entry for the request, e.g. no
    /// court policy for a `(city, case type)` pair or surname rules with a
    /// hole in their letter coverage.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A bounded search found no valid candidate.
    #[error("no {search} found: {detail}")]
    Resolution {
        /// Which search was exhausted (e.g. `"flexible court day"`).
        search: String,
        /// The bound or table that was consulted.
        detail: String,
    },

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// External reference data could not be parsed.
    #[error("reference data error: {0}")]
    ReferenceData(String),
}

impl Error {
    /// Build a [`Error::Resolution`].
    pub fn resolution(search: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Resolution {
            search: search.into(),
            detail: detail.into(),
        }
    }

    /// Return `true` if the user can fix this error by changing the request.
    ///
    /// Everything else points at the reference tables (missing policy,
    /// stale rotation table) or at a bug.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Error::InputValidation(_))
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::$variant(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cd_core::{ensure, errors::Error};
/// fn weeks(n: u32) -> cd_core::errors::Result<u32> {
///     ensure!((1..=52).contains(&n), InputValidation, "weeks out must be 1-52, got {n}");
///     Ok(n)
/// }
/// assert!(weeks(6).is_ok());
/// assert_eq!(
///     weeks(60),
///     Err(Error::InputValidation("weeks out must be 1-52, got 60".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$variant(...))` immediately.
///
/// # Example
/// ```
/// use cd_core::{fail, errors::Error};
/// fn lookup() -> cd_core::errors::Result<()> {
///     fail!(Configuration, "no court policy for {}", "surrey/youth");
/// }
/// assert!(matches!(lookup(), Err(Error::Configuration(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_input_errors_are_user_fixable() {
        assert!(Error::InputValidation("x".into()).is_user_fixable());
        assert!(!Error::Configuration("x".into()).is_user_fixable());
        assert!(!Error::resolution("court date", "table exhausted").is_user_fixable());
        assert!(!Error::Date("x".into()).is_user_fixable());
    }

    #[test]
    fn resolution_message_names_search_and_detail() {
        let err = Error::resolution("flexible court day", "14-day lookahead exhausted");
        assert_eq!(
            err.to_string(),
            "no flexible court day found: 14-day lookahead exhausted"
        );
    }
}
