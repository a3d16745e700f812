//! Presentation policy: turning a category into something to show.
//!
//! The policy owns the host-configured descriptor hooks. The session-expired
//! hook is required and its absence is a construction-time error; the other
//! two slots fall back to built-in text and log a one-time warning the first
//! time the fallback is used.

use std::fmt;
use std::sync::Once;

use thiserror::Error;
use tracing::warn;

use crate::classify::ErrorCategory;
use crate::http;

const FALLBACK_CONNECTION_MESSAGE: &str =
    "Something went wrong. Please check your connection and try again";
const FALLBACK_UNKNOWN_TITLE: &str = "An error occurred";
const FALLBACK_ACKNOWLEDGE: &str = "OK";

/// A single choice offered on a blocking alert.
///
/// The handler, when present, runs at most once, after the alert has been
/// dismissed.
pub struct AlertAction {
    /// Button label shown by the host.
    pub title: String,
    /// Callback fired when the user selects this action.
    pub handler: Option<Box<dyn FnOnce()>>,
}

impl AlertAction {
    /// An action that runs the given callback on selection.
    pub fn new(title: impl Into<String>, handler: impl FnOnce() + 'static) -> Self {
        Self {
            title: title.into(),
            handler: Some(Box::new(handler)),
        }
    }

    /// A plain acknowledgement action with no callback.
    pub fn acknowledge(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            handler: None,
        }
    }
}

impl fmt::Debug for AlertAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertAction")
            .field("title", &self.title)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// How a descriptor is presented.
#[derive(Debug)]
pub enum Style {
    /// Non-blocking transient banner; the title is all the user sees.
    Overlay,
    /// Blocking modal requiring the user to pick an action.
    Alert {
        /// Optional body text under the title.
        message: Option<String>,
        /// Choices offered to the user, in display order.
        actions: Vec<AlertAction>,
    },
}

/// Everything the coordinator needs to present one failure.
///
/// Built by the policy, consumed once, discarded.
#[derive(Debug)]
pub struct Descriptor {
    /// Headline text.
    pub title: String,
    /// Presentation style.
    pub style: Style,
}

impl Descriptor {
    /// A banner descriptor.
    pub fn overlay(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: Style::Overlay,
        }
    }

    /// An alert descriptor.
    pub fn alert(
        title: impl Into<String>,
        message: Option<String>,
        actions: Vec<AlertAction>,
    ) -> Self {
        Self {
            title: title.into(),
            style: Style::Alert { message, actions },
        }
    }
}

/// Errors surfaced while assembling a [`PresentationPolicy`].
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The session-expired descriptor was never configured. Session-expiry
    /// UX must not be guessed, so this aborts construction.
    #[error("session-expired descriptor is not configured")]
    MissingSessionExpired,
}

type SessionExpiredHook = Box<dyn Fn() -> Descriptor>;
type ConnectionHook = Box<dyn Fn(i64) -> Descriptor>;
type UnknownHook = Box<dyn Fn(i64, &str) -> Descriptor>;

/// Maps an [`ErrorCategory`] to a presentation descriptor.
pub struct PresentationPolicy {
    session_expired: SessionExpiredHook,
    connection_error: Option<ConnectionHook>,
    unknown_error: Option<UnknownHook>,
    connection_fallback_warned: Once,
    unknown_fallback_warned: Once,
}

impl PresentationPolicy {
    /// Starts building a policy.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Builds a policy from configured message text.
    ///
    /// The session-expired message is required, mirroring the builder's
    /// validation of the session-expired hook.
    pub fn from_messages(messages: &crate::config::Messages) -> Result<Self, PolicyError> {
        let session = messages
            .session_expired
            .clone()
            .ok_or(PolicyError::MissingSessionExpired)?;

        let mut builder = Self::builder().session_expired(move || {
            Descriptor::alert(
                session.title.clone(),
                session.message.clone(),
                vec![AlertAction::acknowledge(session.action.clone())],
            )
        });

        if let Some(connection) = messages.connection.clone() {
            builder = builder.connection_error(move |_code| Descriptor::overlay(connection.clone()));
        }

        if let Some(title) = messages.unknown_title.clone() {
            let acknowledge = messages.acknowledge.clone();
            builder = builder.unknown_error(move |code, reason| {
                Descriptor::alert(
                    title.clone(),
                    Some(format!("({} {})", code, reason)),
                    vec![AlertAction::acknowledge(acknowledge.clone())],
                )
            });
        }

        builder.build()
    }

    /// Chooses what to present for a classified failure.
    ///
    /// Returns `None` for [`ErrorCategory::None`]; the caller must present
    /// nothing. The code feeds the connection and unknown hooks.
    pub fn describe(&self, category: ErrorCategory, code: i64) -> Option<Descriptor> {
        match category {
            ErrorCategory::None => None,
            ErrorCategory::Token => Some((self.session_expired)()),
            ErrorCategory::Connection => Some(match &self.connection_error {
                Some(hook) => hook(code),
                None => {
                    self.connection_fallback_warned.call_once(|| {
                        warn!("connection-error descriptor is not configured; using built-in text");
                    });
                    Descriptor::overlay(FALLBACK_CONNECTION_MESSAGE)
                }
            }),
            ErrorCategory::Unknown => {
                let reason = http::reason_phrase(code).unwrap_or("Unknown error");
                Some(match &self.unknown_error {
                    Some(hook) => hook(code, reason),
                    None => {
                        self.unknown_fallback_warned.call_once(|| {
                            warn!(
                                "unknown-error descriptor is not configured; using built-in text"
                            );
                        });
                        Descriptor::alert(
                            FALLBACK_UNKNOWN_TITLE,
                            Some(format!("({} {})", code, reason)),
                            vec![AlertAction::acknowledge(FALLBACK_ACKNOWLEDGE)],
                        )
                    }
                })
            }
        }
    }
}

/// Builder collecting descriptor hooks before validation.
#[derive(Default)]
pub struct PolicyBuilder {
    session_expired: Option<SessionExpiredHook>,
    connection_error: Option<ConnectionHook>,
    unknown_error: Option<UnknownHook>,
}

impl PolicyBuilder {
    /// Sets the required session-expired descriptor hook.
    pub fn session_expired(mut self, hook: impl Fn() -> Descriptor + 'static) -> Self {
        self.session_expired = Some(Box::new(hook));
        self
    }

    /// Sets the connection-error descriptor hook. The hook receives the
    /// failure code and should return an overlay-style descriptor.
    pub fn connection_error(mut self, hook: impl Fn(i64) -> Descriptor + 'static) -> Self {
        self.connection_error = Some(Box::new(hook));
        self
    }

    /// Sets the unknown-error descriptor hook. The hook receives the
    /// failure code and its canonical reason phrase.
    pub fn unknown_error(mut self, hook: impl Fn(i64, &str) -> Descriptor + 'static) -> Self {
        self.unknown_error = Some(Box::new(hook));
        self
    }

    /// Validates the hooks and builds the policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MissingSessionExpired`] when the session-expired
    /// hook was never set.
    pub fn build(self) -> Result<PresentationPolicy, PolicyError> {
        let session_expired = self
            .session_expired
            .ok_or(PolicyError::MissingSessionExpired)?;

        Ok(PresentationPolicy {
            session_expired,
            connection_error: self.connection_error,
            unknown_error: self.unknown_error,
            connection_fallback_warned: Once::new(),
            unknown_fallback_warned: Once::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_policy() -> PresentationPolicy {
        PresentationPolicy::builder()
            .session_expired(|| Descriptor::alert("Session expired", None, vec![]))
            .build()
            .expect("session-expired hook is set")
    }

    #[test]
    fn test_build_without_session_expired_fails() {
        let result = PresentationPolicy::builder().build();
        assert!(matches!(result, Err(PolicyError::MissingSessionExpired)));
    }

    #[test]
    fn test_describe_none_returns_nothing() {
        assert!(minimal_policy().describe(ErrorCategory::None, 0).is_none());
    }

    #[test]
    fn test_describe_token_returns_hook_result() {
        let policy = PresentationPolicy::builder()
            .session_expired(|| {
                Descriptor::alert(
                    "Your session has expired. Please log in again",
                    None,
                    vec![AlertAction::acknowledge("OK")],
                )
            })
            .build()
            .unwrap();

        let descriptor = policy.describe(ErrorCategory::Token, 401).unwrap();
        assert_eq!(descriptor.title, "Your session has expired. Please log in again");
        assert!(matches!(descriptor.style, Style::Alert { .. }));
    }

    #[test]
    fn test_describe_connection_uses_configured_hook() {
        let policy = PresentationPolicy::builder()
            .session_expired(|| Descriptor::alert("expired", None, vec![]))
            .connection_error(|code| Descriptor::overlay(format!("offline ({})", code)))
            .build()
            .unwrap();

        let descriptor = policy.describe(ErrorCategory::Connection, -1009).unwrap();
        assert_eq!(descriptor.title, "offline (-1009)");
        assert!(matches!(descriptor.style, Style::Overlay));
    }

    #[test]
    fn test_describe_connection_falls_back_to_builtin_text() {
        let policy = minimal_policy();

        // Called twice; the warning is emitted once, the text every time.
        for _ in 0..2 {
            let descriptor = policy.describe(ErrorCategory::Connection, 0).unwrap();
            assert_eq!(descriptor.title, FALLBACK_CONNECTION_MESSAGE);
            assert!(matches!(descriptor.style, Style::Overlay));
        }
    }

    #[test]
    fn test_describe_unknown_combines_code_and_reason() {
        let policy = PresentationPolicy::builder()
            .session_expired(|| Descriptor::alert("expired", None, vec![]))
            .unknown_error(|code, reason| {
                Descriptor::alert("Oops", Some(format!("{}: {}", code, reason)), vec![])
            })
            .build()
            .unwrap();

        let descriptor = policy.describe(ErrorCategory::Unknown, 404).unwrap();
        match descriptor.style {
            Style::Alert { message, .. } => {
                assert_eq!(message.as_deref(), Some("404: Not Found"));
            }
            Style::Overlay => panic!("unknown failures present as alerts"),
        }
    }

    #[test]
    fn test_describe_unknown_fallback_has_acknowledgement_action() {
        let policy = minimal_policy();

        let descriptor = policy.describe(ErrorCategory::Unknown, 999).unwrap();
        assert_eq!(descriptor.title, FALLBACK_UNKNOWN_TITLE);
        match descriptor.style {
            Style::Alert { message, actions } => {
                // 999 has no canonical reason phrase.
                assert_eq!(message.as_deref(), Some("(999 Unknown error)"));
                assert_eq!(actions.len(), 1);
                assert_eq!(actions[0].title, FALLBACK_ACKNOWLEDGE);
                assert!(actions[0].handler.is_none());
            }
            Style::Overlay => panic!("unknown failures present as alerts"),
        }
    }

    #[test]
    fn test_alert_action_debug_does_not_require_handler_debug() {
        let action = AlertAction::new("Retry", || {});
        let rendered = format!("{:?}", action);
        assert!(rendered.contains("Retry"));
        assert!(rendered.contains("has_handler: true"));
    }
}
