//! Bounce reconciliation service.
//!
//! Repeatedly lists the provider's blocked contacts and unblocks each one
//! until a pass finds the list empty.

use crate::config::Config;
use crate::error::{ReconcileError, ReconcileResult};
use crate::repositories::BlockedContactRepository;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Limits applied to a single `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Passes allowed before the run gives up on reaching an empty list
    pub max_passes: usize,

    /// Pause between a non-empty pass and the next one
    pub pass_cooldown: Duration,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReconcileOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_passes: config.max_passes,
            pass_cooldown: Duration::from_millis(config.pass_cooldown_ms),
        }
    }
}

/// Outcome of a run that reached an empty suppression list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Passes executed, including the final empty one
    pub passes: usize,

    /// Addresses unblocked across all passes
    pub unblocked: usize,
}

/// Drives the fetch / unblock-each / repeat cycle against a repository.
pub struct BounceService {
    repository: Arc<dyn BlockedContactRepository>,
    options: ReconcileOptions,
}

impl BounceService {
    /// Create a new bounce service.
    pub fn new(repository: Arc<dyn BlockedContactRepository>, options: ReconcileOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// Run a single pass: unblock every listed address in order.
    ///
    /// Stops at the first failed unblock; addresses after it are left untouched.
    /// Entries without an address are skipped, as unblocking them would target
    /// the whole collection. Returns the number of addresses unblocked.
    pub fn reconcile_once(&self) -> ReconcileResult<usize> {
        let bounced = self.repository.list_bounced()?;
        tracing::debug!("Provider listed {} blocked contacts", bounced.len());

        let mut unblocked = 0;
        for entry in &bounced {
            if entry.email.trim().is_empty() {
                tracing::warn!(
                    "Skipping blocked contact without address (message {})",
                    entry.message_id
                );
                continue;
            }

            tracing::debug!("Unblocking {} (message {})", entry.email, entry.message_id);
            self.repository.unblock(&entry.email)?;
            unblocked += 1;
        }

        Ok(unblocked)
    }

    /// Run passes until one finds nothing to unblock.
    ///
    /// Every pass result is reported on stdout. A failed pass ends the run
    /// with its error, and so does exceeding `max_passes`.
    pub fn run(&self) -> ReconcileResult<RunSummary> {
        let mut summary = RunSummary::default();

        loop {
            summary.passes += 1;

            let count = match self.reconcile_once() {
                Ok(count) => count,
                Err(e) => return Err(report_failure(e)),
            };

            println!("Bounced emails processed successfully.");
            summary.unblocked += count;
            tracing::info!("Pass {} unblocked {} contacts", summary.passes, count);

            if count == 0 {
                return Ok(summary);
            }

            if summary.passes >= self.options.max_passes {
                return Err(report_failure(ReconcileError::PassLimitReached {
                    passes: summary.passes,
                }));
            }

            if !self.options.pass_cooldown.is_zero() {
                thread::sleep(self.options.pass_cooldown);
            }
        }
    }
}

fn report_failure(error: ReconcileError) -> ReconcileError {
    println!("Error: {}", error);
    tracing::error!("Reconciliation stopped: {}", error);
    error
}
