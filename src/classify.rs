//! Classification of failure signals into presentation categories.
//!
//! Classification is a pure lookup: a host-declared override table is
//! consulted first, then a fixed built-in table. Unrecognized codes fall
//! through to [`ErrorCategory::Unknown`]; classification itself never fails.

use std::collections::HashMap;

use serde::Deserialize;

use crate::signal::{codes, FailureSignal};

/// The presentation bucket a failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Connectivity problem; shown as a transient overlay banner.
    Connection,
    /// The session token is missing, expired, or rejected; shown as a
    /// blocking alert.
    Token,
    /// Anything the tables do not recognize; shown as a blocking alert
    /// with a generic message.
    Unknown,
    /// Not a failure; nothing is presented.
    None,
}

/// Maps failure signals to categories.
///
/// Override entries take precedence over the built-in table. They exist for
/// APIs that reserve global status codes (say, 441 for an expired token on
/// every endpoint); endpoint-specific codes should be handled before the
/// response ever reaches this crate.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    overrides: HashMap<i64, ErrorCategory>,
}

impl Classifier {
    /// Creates a classifier with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with the given override table.
    pub fn with_overrides(overrides: HashMap<i64, ErrorCategory>) -> Self {
        Self { overrides }
    }

    /// Adds or replaces a single override entry.
    pub fn add_override(&mut self, code: i64, category: ErrorCategory) {
        self.overrides.insert(code, category);
    }

    /// Returns the number of override entries.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Classifies a failure signal.
    ///
    /// Resolution order: the no-failure signal, the override table, the
    /// connectivity hint, then the built-in code table.
    pub fn classify(&self, signal: FailureSignal) -> ErrorCategory {
        let FailureSignal::Failed {
            code,
            connectivity_hint,
        } = signal
        else {
            return ErrorCategory::None;
        };

        if let Some(&category) = self.overrides.get(&code) {
            return category;
        }

        // Transport failures that never produced a status code carry the
        // hint instead of a recognizable code.
        if connectivity_hint {
            return ErrorCategory::Connection;
        }

        match code {
            codes::UNAUTHORIZED | codes::FORBIDDEN => ErrorCategory::Token,
            codes::NO_STATUS
            | codes::NOT_CONNECTED
            | codes::CONNECTION_LOST
            | codes::TIMED_OUT
            | codes::INVALID_THIRD_PARTY_TOKEN
            | codes::NO_CONNECTION => ErrorCategory::Connection,
            _ => ErrorCategory::Unknown,
        }
    }
}
