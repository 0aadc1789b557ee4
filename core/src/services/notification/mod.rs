//! Transactional email notifications
//!
//! Messages are composed here and handed to an [`EmailSender`]. Delivery is
//! best effort: failures are logged and never reach the caller.

mod service;
mod templates;
mod traits;

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(test)]
mod tests;

pub use service::{DeliveryMode, Notifier, NotifierConfig};
pub use traits::{EmailMessage, EmailSender};

#[cfg(any(test, feature = "mock"))]
pub use mock::RecordingEmailSender;
