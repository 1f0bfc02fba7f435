use crate::error::SendinblueApiResult;
use crate::models::BouncedEmail;

/// Repository over the provider's suppression list.
///
/// Provides abstraction over listing and unblocking bounced addresses,
/// enabling different implementations (API client, mock).
pub trait BlockedContactRepository: Send + Sync {
    /// List the currently blocked addresses in provider order.
    fn list_bounced(&self) -> SendinblueApiResult<Vec<BouncedEmail>>;

    /// Remove one address from the suppression list.
    fn unblock(&self, email: &str) -> SendinblueApiResult<()>;
}
