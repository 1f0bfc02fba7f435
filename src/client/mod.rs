//! HTTP client for the Sendinblue transactional blocked-contacts API.
//!
//! The client is synchronous (`ureq`) and handles authentication, error mapping,
//! and decoding for the two suppression-list endpoints.

use crate::config::Config;
use crate::error::{SendinblueApiError, SendinblueApiResult};
use crate::metrics::Metrics;
use crate::models::{BlockedContact, BlockedContactsResponse, BouncedEmail};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path of the blocked-contacts collection, relative to the API root.
const BLOCKED_CONTACTS_PATH: &str = "smtp/blockedContacts";

/// HTTP client for the Sendinblue API.
#[derive(Clone)]
pub struct SendinblueClient {
    /// Base URL for the Sendinblue API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// Accept non-2xx answers to unblock calls
    ignore_unblock_status: bool,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SendinblueClient {
    /// Create a new SendinblueClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            ignore_unblock_status: config.ignore_unblock_status,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a SendinblueClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            ignore_unblock_status: false,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Accept any HTTP status from unblock calls, only transport failures surface.
    pub fn ignoring_unblock_status(mut self, ignore: bool) -> Self {
        self.ignore_unblock_status = ignore;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, SendinblueApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("api-key", &self.api_key)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        self.record(&url, "GET", start.elapsed(), &result, false);
        result
    }

    /// Execute a DELETE request with authentication.
    ///
    /// With `accept_any_status`, a non-2xx answer is left for the caller to report.
    fn delete(
        &self,
        path: &str,
        accept_any_status: bool,
    ) -> Result<ureq::Response, SendinblueApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("DELETE {}", url);

        let result = self
            .agent
            .delete(&url)
            .set("api-key", &self.api_key)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        self.record(&url, "DELETE", start.elapsed(), &result, accept_any_status);
        result
    }

    fn record(
        &self,
        url: &str,
        method: &str,
        duration: Duration,
        result: &Result<ureq::Response, SendinblueApiError>,
        accept_any_status: bool,
    ) {
        match result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
            }
            Err(e) if accept_any_status && e.status().is_some() => {
                tracing::debug!("{} {} - Accepted (status: {:?})", method, url, e.status());
            }
            Err(e) => {
                tracing::error!("{} {} - Error: {}", method, url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);
    }

    /// Map a ureq error to a SendinblueApiError.
    fn map_error(&self, error: ureq::Error) -> SendinblueApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => SendinblueApiError::Unauthorized,
                    404 => SendinblueApiError::NotFound(message),
                    429 => SendinblueApiError::RateLimitExceeded,
                    _ => SendinblueApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SendinblueApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SendinblueApiError::Timeout
                } else {
                    SendinblueApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Get the provider's current blocked contacts, newest first.
    pub fn get_blocked_contacts(&self) -> SendinblueApiResult<Vec<BlockedContact>> {
        let path = format!("{}?sort=desc", BLOCKED_CONTACTS_PATH);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| SendinblueApiError::HttpError(e.to_string()))?;

        let blocked: BlockedContactsResponse =
            serde_json::from_str(&body).map_err(SendinblueApiError::JsonError)?;

        self.metrics.record_contacts_fetched(blocked.contacts.len());
        Ok(blocked.contacts)
    }

    /// Get the blocked contacts as local bounce records, in provider order.
    pub fn get_bounced_emails(&self) -> SendinblueApiResult<Vec<BouncedEmail>> {
        let contacts = self.get_blocked_contacts()?;
        Ok(contacts.into_iter().map(BouncedEmail::from).collect())
    }

    /// Remove an address from the suppression list.
    ///
    /// The address is echoed to stdout before the request is sent.
    pub fn unblock_email(&self, email: &str) -> SendinblueApiResult<()> {
        println!("{}", email);

        match self.delete(&unblock_path(email), self.ignore_unblock_status) {
            Ok(_) => {}
            Err(e) if self.ignore_unblock_status && e.status().is_some() => {
                tracing::warn!("Ignoring failed unblock of {}: {}", email, e);
            }
            Err(e) => return Err(e),
        }

        self.metrics.record_contact_unblocked();
        Ok(())
    }
}

/// Path of a single blocked contact. The address is one percent-encoded segment.
fn unblock_path(email: &str) -> String {
    format!("{}/{}", BLOCKED_CONTACTS_PATH, urlencoding::encode(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = SendinblueClient::with_base_url(
            "https://api.example.com/v3".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client.build_url("/smtp/blockedContacts"),
            "https://api.example.com/v3/smtp/blockedContacts"
        );

        let client_with_slash = SendinblueClient::with_base_url(
            "https://api.example.com/v3/".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("smtp/blockedContacts?sort=desc"),
            "https://api.example.com/v3/smtp/blockedContacts?sort=desc"
        );
    }

    #[test]
    fn test_unblock_path_encodes_address() {
        assert_eq!(
            unblock_path("a@example.com"),
            "smtp/blockedContacts/a%40example.com"
        );
        assert_eq!(
            unblock_path("first+tag/x@example.com"),
            "smtp/blockedContacts/first%2Btag%2Fx%40example.com"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_base_url: "https://api.sendinblue.com/v3/".to_string(),
            api_key: "xkeysib-123".to_string(),
            ignore_unblock_status: true,
            ..Config::default()
        };

        let client = SendinblueClient::new(&config);
        assert_eq!(client.base_url, "https://api.sendinblue.com/v3/");
        assert_eq!(client.api_key, "xkeysib-123");
        assert!(client.ignore_unblock_status);
    }
}
