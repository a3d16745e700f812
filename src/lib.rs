//! Marquee - network-failure classification and presentation coordination.
//!
//! When a request fails, something has to decide what the user sees: a
//! transient "no connection" banner, a blocking "session expired" alert, or
//! nothing at all. Marquee owns that decision and its bookkeeping while the
//! host application keeps full control of the pixels:
//!
//! - [`Classifier`] maps a [`FailureSignal`] to an [`ErrorCategory`],
//!   consulting a host-declared override table before the built-in code
//!   table.
//! - [`PresentationPolicy`] turns a category into a [`Descriptor`], built
//!   from host-configured hooks with validated required slots.
//! - [`OverlayCoordinator`] tracks what is on screen, routes descriptors to
//!   the host's [`Surface`] callbacks, and auto-dismisses the banner when
//!   connectivity returns.
//!
//! ```
//! use marquee::{
//!     Classifier, Descriptor, FailureSignal, HideAck, PresentationPolicy, Presenter, Surface,
//! };
//!
//! struct StatusBar;
//!
//! impl Surface for StatusBar {
//!     fn show_overlay(&mut self, title: &str) {
//!         println!("banner in: {title}");
//!     }
//!     fn update_overlay(&mut self, title: &str) {
//!         println!("banner text: {title}");
//!     }
//!     fn hide_overlay(&mut self, _animated: bool) -> HideAck {
//!         HideAck::Hidden
//!     }
//!     fn show_alert(&mut self, title: &str, _message: Option<&str>, _actions: &[String]) {
//!         println!("alert: {title}");
//!     }
//! }
//!
//! # fn main() -> Result<(), marquee::PolicyError> {
//! let policy = PresentationPolicy::builder()
//!     .session_expired(|| Descriptor::alert("Session expired", None, vec![]))
//!     .build()?;
//!
//! let mut presenter = Presenter::new(Classifier::new(), policy, StatusBar);
//! presenter.handle(FailureSignal::from_status(401));
//! # Ok(())
//! # }
//! ```
//!
//! All presenter and coordinator methods must run on the UI thread; code on
//! other threads talks to them only through [`UiEventSender`].

pub mod classify;
pub mod config;
pub mod coordinator;
pub mod dispatch;
pub mod http;
pub mod logging;
pub mod policy;
pub mod presenter;
pub mod signal;

pub use classify::{Classifier, ErrorCategory};
pub use coordinator::{HideAck, OverlayCoordinator, OverlayState, Surface};
pub use dispatch::{UiEvent, UiEventSender};
pub use policy::{AlertAction, Descriptor, PolicyBuilder, PolicyError, PresentationPolicy, Style};
pub use presenter::Presenter;
pub use signal::FailureSignal;
