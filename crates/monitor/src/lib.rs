//! Configuration and delivery plumbing for the appwatch daemon.
//!
//! The probing engine itself lives in the `probe` crate; this crate
//! supplies what surrounds it: the JSON configuration file, the
//! notification transports and the binary entry point.

pub mod config;
pub mod notifier;

pub use config::{Config, ConfigError, LoggingSettings};
pub use notifier::{LogNotifier, WebhookNotifier};
