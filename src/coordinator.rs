//! Show/hide coordination over a host-supplied rendering surface.
//!
//! The coordinator never draws. It tracks which surface is up, routes
//! descriptors to the [`Surface`] callbacks, and drains externally posted
//! [`UiEvent`]s. It is an owned value: every transition takes `&mut self`,
//! so the single-writer rule of the UI thread is enforced by ownership
//! rather than by a lock.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::dispatch::{self, UiEvent, UiEventSender};
use crate::policy::{AlertAction, Descriptor, Style};

/// Surface acknowledgement for a hide request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideAck {
    /// The overlay is gone; the coordinator records it hidden now.
    Hidden,
    /// An exit animation is running; the host posts
    /// [`UiEvent::OverlayExitFinished`] when it completes.
    Animating,
}

/// Rendering callbacks supplied by the host application.
///
/// Implementations draw; they do not decide. All methods are invoked on the
/// UI thread by whoever owns the coordinator.
pub trait Surface {
    /// Brings the overlay banner in with its enter animation.
    fn show_overlay(&mut self, title: &str);

    /// Swaps the text of an already-visible banner without re-animating.
    fn update_overlay(&mut self, title: &str);

    /// Takes the banner down. For `animated == false` the surface must hide
    /// immediately and the returned acknowledgement is ignored.
    fn hide_overlay(&mut self, animated: bool) -> HideAck;

    /// Presents a blocking alert. `actions` holds the button titles in
    /// display order; the host reports the selection back through
    /// [`OverlayCoordinator::alert_action_selected`].
    fn show_alert(&mut self, title: &str, message: Option<&str>, actions: &[String]);
}

/// Visibility of the overlay banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Nothing is on screen.
    #[default]
    Hidden,
    /// The banner is up.
    Visible,
    /// An animated dismissal is in flight; still on screen until the host
    /// reports the exit animation finished.
    Leaving,
}

struct PendingAlert {
    handlers: Vec<Option<Box<dyn FnOnce()>>>,
}

/// Owns overlay/alert visibility and the surface callbacks.
pub struct OverlayCoordinator<S: Surface> {
    surface: S,
    overlay: OverlayState,
    pending_alert: Option<PendingAlert>,
    events: mpsc::UnboundedReceiver<UiEvent>,
    sender: UiEventSender,
}

impl<S: Surface> OverlayCoordinator<S> {
    /// Creates a coordinator over the given surface.
    pub fn new(surface: S) -> Self {
        let (sender, events) = dispatch::channel();
        Self {
            surface,
            overlay: OverlayState::Hidden,
            pending_alert: None,
            events,
            sender,
        }
    }

    /// A handle for posting events from background threads.
    pub fn ui_events(&self) -> UiEventSender {
        self.sender.clone()
    }

    /// Current overlay visibility.
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay
    }

    /// Returns true while an alert is waiting for the user's choice.
    pub fn alert_pending(&self) -> bool {
        self.pending_alert.is_some()
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Presents a descriptor. Never fails; duplicate alerts are dropped.
    pub fn present(&mut self, descriptor: Descriptor) {
        let Descriptor { title, style } = descriptor;
        match style {
            Style::Overlay => self.present_overlay(&title),
            Style::Alert { message, actions } => {
                self.present_alert(&title, message.as_deref(), actions);
            }
        }
    }

    fn present_overlay(&mut self, title: &str) {
        match self.overlay {
            OverlayState::Hidden => {
                self.surface.show_overlay(title);
                self.overlay = OverlayState::Visible;
            }
            // Already on screen (or mid-exit): swap the text in place. The
            // host cancels a running exit animation on update.
            OverlayState::Visible | OverlayState::Leaving => {
                self.surface.update_overlay(title);
                self.overlay = OverlayState::Visible;
            }
        }
    }

    fn present_alert(&mut self, title: &str, message: Option<&str>, actions: Vec<AlertAction>) {
        if self.pending_alert.is_some() {
            warn!(title, "alert already on screen; dropping new alert");
            return;
        }

        // The alert presents over a visible overlay; the overlay keeps its
        // own lifecycle underneath the modal.
        let titles: Vec<String> = actions.iter().map(|action| action.title.clone()).collect();
        let handlers = actions.into_iter().map(|action| action.handler).collect();
        self.surface.show_alert(title, message, &titles);
        self.pending_alert = Some(PendingAlert { handlers });
    }

    /// Reports that the user selected an alert action.
    ///
    /// The alert is dismissed first; the action's handler (if any) then runs
    /// exactly once. Out-of-range indices and calls with no pending alert
    /// are ignored.
    pub fn alert_action_selected(&mut self, index: usize) {
        let Some(mut alert) = self.pending_alert.take() else {
            debug!(index, "alert selection with no alert pending");
            return;
        };

        match alert.handlers.get_mut(index) {
            Some(slot) => {
                if let Some(handler) = slot.take() {
                    handler();
                }
            }
            None => warn!(index, "alert selection index out of range"),
        }
    }

    /// Dismisses the overlay banner. Alerts are not affected.
    ///
    /// A no-op while hidden. With `animated == true` the surface may keep
    /// the banner on screen until its exit animation finishes, reported via
    /// [`UiEvent::OverlayExitFinished`].
    pub fn dismiss(&mut self, animated: bool) {
        match self.overlay {
            OverlayState::Hidden => {}
            OverlayState::Visible => {
                if animated {
                    self.overlay = match self.surface.hide_overlay(true) {
                        HideAck::Hidden => OverlayState::Hidden,
                        HideAck::Animating => OverlayState::Leaving,
                    };
                } else {
                    let _ = self.surface.hide_overlay(false);
                    self.overlay = OverlayState::Hidden;
                }
            }
            OverlayState::Leaving => {
                // Already animating out; only a hard dismiss changes anything.
                if !animated {
                    let _ = self.surface.hide_overlay(false);
                    self.overlay = OverlayState::Hidden;
                }
            }
        }
    }

    /// Handles a connectivity-restored notification on the UI thread.
    ///
    /// Dismisses the overlay surface only; a blocking alert stays until the
    /// user acts on it.
    pub fn connectivity_restored(&mut self) {
        if self.overlay == OverlayState::Visible {
            debug!("connectivity restored; dismissing overlay");
            self.dismiss(true);
        }
    }

    /// Drains externally posted events. Call from the UI loop.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                UiEvent::ConnectivityRestored => self.connectivity_restored(),
                UiEvent::OverlayExitFinished => {
                    if self.overlay == OverlayState::Leaving {
                        self.overlay = OverlayState::Hidden;
                    }
                }
            }
        }
    }
}
