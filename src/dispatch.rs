//! Background-to-UI-thread event handoff.
//!
//! Coordinator state is single-writer: only the UI thread mutates it.
//! Anything arriving off-thread (a reachability callback, an animation
//! completion) is posted as a [`UiEvent`] through a cloned
//! [`UiEventSender`] and drained on the UI thread by the coordinator's
//! `pump`.

use tokio::sync::mpsc;

/// Events posted to the coordinator from outside the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The network became reachable again; the overlay (and only the
    /// overlay) should dismiss itself.
    ConnectivityRestored,
    /// The host finished the overlay's exit animation.
    OverlayExitFinished,
}

/// Cloneable, thread-safe handle for posting [`UiEvent`]s.
#[derive(Debug, Clone)]
pub struct UiEventSender {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl UiEventSender {
    /// Posts an event. If the coordinator is gone the event is discarded;
    /// there is nothing left to present to.
    pub fn send(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    /// Posts [`UiEvent::ConnectivityRestored`].
    pub fn connectivity_restored(&self) {
        self.send(UiEvent::ConnectivityRestored);
    }

    /// Posts [`UiEvent::OverlayExitFinished`].
    pub fn overlay_exit_finished(&self) {
        self.send(UiEvent::OverlayExitFinished);
    }
}

/// Creates the sender/receiver pair a coordinator is built around.
pub(crate) fn channel() -> (UiEventSender, mpsc::UnboundedReceiver<UiEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiEventSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sender, mut rx) = channel();
        sender.connectivity_restored();
        sender.overlay_exit_finished();

        assert_eq!(rx.try_recv(), Ok(UiEvent::ConnectivityRestored));
        assert_eq!(rx.try_recv(), Ok(UiEvent::OverlayExitFinished));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (sender, rx) = channel();
        drop(rx);
        // Must not panic.
        sender.connectivity_restored();
    }

    #[test]
    fn test_sender_clones_share_the_channel() {
        let (sender, mut rx) = channel();
        let background = sender.clone();
        std::thread::spawn(move || background.connectivity_restored())
            .join()
            .expect("sender thread should not panic");

        assert_eq!(rx.try_recv(), Ok(UiEvent::ConnectivityRestored));
    }
}
