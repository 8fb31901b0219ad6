//! Notification dispatch seam.

use async_trait::async_trait;

/// Capability for delivering out-of-band alerts.
///
/// The engine invokes this synchronously once per error-class outcome;
/// the delivery transport (chat webhook, log sink) is the implementor's
/// concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a single alert message.
    async fn notify(&self, message: &str) -> common::Result<()>;
}
