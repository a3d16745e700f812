//! Failure signals derived from failed network calls.
//!
//! A [`FailureSignal`] normalizes the outcome of a request into the numeric
//! code the classifier works with. Signals are transient values built per
//! failure; a request that succeeded maps to [`FailureSignal::None`] and is
//! ignored by the rest of the pipeline.

/// Well-known numeric codes recognized by the built-in classification table.
///
/// Negative values are platform transport-error codes; positive values are
/// HTTP status codes plus the API-specific codes the backend reserves.
pub mod codes {
    /// A failure that produced no status code at all.
    pub const NO_STATUS: i64 = 0;

    /// The device has no route to the internet.
    pub const NOT_CONNECTED: i64 = -1009;

    /// An established connection was dropped mid-request.
    pub const CONNECTION_LOST: i64 = -1005;

    /// The client gave up waiting for a response.
    pub const TIMED_OUT: i64 = -1001;

    /// HTTP 401.
    pub const UNAUTHORIZED: i64 = 401;

    /// HTTP 403.
    pub const FORBIDDEN: i64 = 403;

    /// Backend-reserved code for a rejected third-party token.
    pub const INVALID_THIRD_PARTY_TOKEN: i64 = 444;

    /// Legacy backend code for "no connection" reported in-band.
    pub const NO_CONNECTION: i64 = 4096;
}

/// Normalized outcome of a network call, as seen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSignal {
    /// The request succeeded; nothing to present.
    None,
    /// The request failed with the given code.
    Failed {
        /// HTTP status code or platform error code.
        code: i64,
        /// Set when the failure is known to be connectivity-related even
        /// though the code alone would not say so (e.g. a connect error
        /// that never reached the server).
        connectivity_hint: bool,
    },
}

impl FailureSignal {
    /// The designated no-failure signal.
    pub fn none() -> Self {
        Self::None
    }

    /// A failure identified by a status or platform error code.
    pub fn failed(code: i64) -> Self {
        Self::Failed {
            code,
            connectivity_hint: false,
        }
    }

    /// A failure known to be connectivity-related regardless of its code.
    pub fn connectivity(code: i64) -> Self {
        Self::Failed {
            code,
            connectivity_hint: true,
        }
    }

    /// A failure carrying an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        Self::failed(i64::from(status))
    }

    /// The numeric code, if this signal represents a failure.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::None => None,
            Self::Failed { code, .. } => Some(*code),
        }
    }

    /// Returns true if this signal represents a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns true if the failure carries the connectivity hint.
    pub fn is_connectivity_related(&self) -> bool {
        matches!(
            self,
            Self::Failed {
                connectivity_hint: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_signal_has_no_code() {
        let signal = FailureSignal::none();
        assert!(!signal.is_failure());
        assert_eq!(signal.code(), None);
    }

    #[test]
    fn test_failed_signal_carries_code() {
        let signal = FailureSignal::failed(500);
        assert!(signal.is_failure());
        assert_eq!(signal.code(), Some(500));
        assert!(!signal.is_connectivity_related());
    }

    #[test]
    fn test_from_status_widens_to_i64() {
        let signal = FailureSignal::from_status(404);
        assert_eq!(signal.code(), Some(404));
    }

    #[test]
    fn test_connectivity_constructor_sets_hint() {
        let signal = FailureSignal::connectivity(codes::CONNECTION_LOST);
        assert!(signal.is_connectivity_related());
        assert_eq!(signal.code(), Some(codes::CONNECTION_LOST));
    }

    #[test]
    fn test_signal_equality() {
        assert_eq!(FailureSignal::failed(401), FailureSignal::from_status(401));
        assert_ne!(FailureSignal::failed(401), FailureSignal::connectivity(401));
        assert_ne!(FailureSignal::failed(401), FailureSignal::none());
    }
}
