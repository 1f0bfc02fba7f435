//! Unbounced - clears the Sendinblue transactional suppression list.
//!
//! Lists the provider's blocked (bounced) contacts, unblocks each address in
//! turn, and repeats until the provider reports none left.
//!
//! # Architecture
//!
//! - **models**: Wire shapes of the blocked-contacts endpoint and local bounce records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Sendinblue API
//! - **repositories**: Suppression-list abstraction over the client
//! - **services**: The reconciliation loop
//! - **metrics**: Request and unblock counters

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use client::SendinblueClient;
pub use config::Config;
pub use error::{ConfigError, ReconcileError, SendinblueApiError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{BlockedContact, BlockedContactsResponse, BouncedEmail};
pub use repositories::{BlockedContactRepository, SendinblueBlockedContactRepository};
pub use services::{BounceService, ReconcileOptions, RunSummary};
