//! Composition facade tying classification, policy, and coordination
//! together.
//!
//! A [`Presenter`] is built once at the application's composition root and
//! owned by the UI layer. Everything it touches takes `&mut self`; there is
//! no global instance.

use tracing::debug;

use crate::classify::Classifier;
use crate::config::PresenterConfig;
use crate::coordinator::{OverlayCoordinator, Surface};
use crate::dispatch::UiEventSender;
use crate::policy::{PolicyError, PresentationPolicy};
use crate::signal::FailureSignal;

/// Entry point for failed requests: classify, describe, present.
pub struct Presenter<S: Surface> {
    classifier: Classifier,
    policy: PresentationPolicy,
    coordinator: OverlayCoordinator<S>,
}

impl<S: Surface> Presenter<S> {
    /// Assembles a presenter from its parts.
    pub fn new(classifier: Classifier, policy: PresentationPolicy, surface: S) -> Self {
        Self {
            classifier,
            policy,
            coordinator: OverlayCoordinator::new(surface),
        }
    }

    /// Assembles a presenter from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MissingSessionExpired`] when the configuration
    /// carries no session-expired message.
    pub fn from_config(config: &PresenterConfig, surface: S) -> Result<Self, PolicyError> {
        Ok(Self::new(
            config.classifier(),
            PresentationPolicy::from_messages(&config.messages)?,
            surface,
        ))
    }

    /// Consumes a failure from the HTTP layer and presents it.
    ///
    /// The no-failure signal and [`ErrorCategory::None`] overrides present
    /// nothing. Must be called on the UI thread.
    ///
    /// [`ErrorCategory::None`]: crate::classify::ErrorCategory::None
    pub fn handle(&mut self, signal: FailureSignal) {
        let category = self.classifier.classify(signal);
        debug!(?category, code = ?signal.code(), "classified failure");

        let code = signal.code().unwrap_or(0);
        if let Some(descriptor) = self.policy.describe(category, code) {
            self.coordinator.present(descriptor);
        }
    }

    /// A handle for posting events from background threads.
    pub fn ui_events(&self) -> UiEventSender {
        self.coordinator.ui_events()
    }

    /// Drains externally posted events. Call from the UI loop.
    pub fn pump(&mut self) {
        self.coordinator.pump();
    }

    /// Dismisses the overlay banner.
    pub fn dismiss(&mut self, animated: bool) {
        self.coordinator.dismiss(animated);
    }

    /// Reports the user's alert choice back to the coordinator.
    pub fn alert_action_selected(&mut self, index: usize) {
        self.coordinator.alert_action_selected(index);
    }

    /// The coordinator, for state inspection.
    pub fn coordinator(&self) -> &OverlayCoordinator<S> {
        &self.coordinator
    }
}
