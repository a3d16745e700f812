//! Conversions from the HTTP client layer into failure signals.
//!
//! The classifier works on numeric codes; this module is the seam where
//! `reqwest` failures become [`FailureSignal`]s and where status codes are
//! resolved to their canonical reason phrases for unknown-error alerts.

use crate::signal::{codes, FailureSignal};

impl From<&reqwest::Error> for FailureSignal {
    fn from(error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return FailureSignal::from_status(status.as_u16());
        }
        if error.is_timeout() {
            return FailureSignal::connectivity(codes::TIMED_OUT);
        }
        if error.is_connect() {
            return FailureSignal::connectivity(codes::CONNECTION_LOST);
        }
        // No status and no transport diagnosis; the zero code classifies as
        // a connection problem, which is the safest surface for it.
        FailureSignal::failed(codes::NO_STATUS)
    }
}

impl From<reqwest::StatusCode> for FailureSignal {
    fn from(status: reqwest::StatusCode) -> Self {
        FailureSignal::from_status(status.as_u16())
    }
}

/// Canonical reason phrase for an HTTP status code, when it has one.
///
/// Platform error codes (negative) and out-of-range values return `None`.
pub fn reason_phrase(code: i64) -> Option<&'static str> {
    u16::try_from(code)
        .ok()
        .and_then(|status| reqwest::StatusCode::from_u16(status).ok())
        .and_then(|status| status.canonical_reason())
}
