use crate::client::SendinblueClient;
use crate::error::SendinblueApiResult;
use crate::models::BouncedEmail;
use crate::repositories::traits::BlockedContactRepository;
use std::sync::Arc;

/// Blocked contact repository backed by the Sendinblue API client.
pub struct SendinblueBlockedContactRepository {
    client: Arc<SendinblueClient>,
}

impl SendinblueBlockedContactRepository {
    /// Create a new repository with the given client.
    pub fn new(client: Arc<SendinblueClient>) -> Self {
        Self { client }
    }
}

impl BlockedContactRepository for SendinblueBlockedContactRepository {
    fn list_bounced(&self) -> SendinblueApiResult<Vec<BouncedEmail>> {
        self.client.get_bounced_emails()
    }

    fn unblock(&self, email: &str) -> SendinblueApiResult<()> {
        self.client.unblock_email(email)
    }
}
