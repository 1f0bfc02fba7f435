use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use unbounced::error::{SendinblueApiError, SendinblueApiResult};
use unbounced::models::BouncedEmail;
use unbounced::repositories::BlockedContactRepository;

/// Mock blocked contact repository for testing.
///
/// Each call to `list_bounced` pops the next scripted pass; once the script
/// is exhausted the list is empty. Every call is recorded in order.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBlockedContactRepository {
    passes: Arc<Mutex<VecDeque<Vec<BouncedEmail>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    fail_list: Arc<Mutex<bool>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockBlockedContactRepository {
    /// Create a new repository with an empty suppression list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the addresses returned by the next unserved `list_bounced` call.
    pub fn push_pass(&self, emails: &[&str]) {
        let pass = emails
            .iter()
            .enumerate()
            .map(|(i, email)| BouncedEmail {
                message_id: format!("<msg-{}@example.com>", i),
                email: email.to_string(),
            })
            .collect();
        self.passes.lock().unwrap().push_back(pass);
    }

    /// Keep returning the same addresses forever.
    pub fn never_converge(&self, emails: &[&str], passes: usize) {
        for _ in 0..passes {
            self.push_pass(emails);
        }
    }

    /// Make `unblock` fail for this address.
    pub fn fail_unblock(&self, email: &str) {
        self.failing.lock().unwrap().insert(email.to_string());
    }

    /// Make `list_bounced` fail.
    pub fn fail_list(&self) {
        *self.fail_list.lock().unwrap() = true;
    }

    /// All calls so far, as `list` or `unblock:<email>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Addresses passed to `unblock`, in call order.
    pub fn unblocked(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix("unblock:").map(str::to_string))
            .collect()
    }

    /// Number of `list_bounced` calls.
    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|call| *call == "list").count()
    }

    fn track_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl BlockedContactRepository for MockBlockedContactRepository {
    fn list_bounced(&self) -> SendinblueApiResult<Vec<BouncedEmail>> {
        self.track_call("list".to_string());

        if *self.fail_list.lock().unwrap() {
            return Err(SendinblueApiError::HttpError("Connection failed".to_string()));
        }

        Ok(self.passes.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn unblock(&self, email: &str) -> SendinblueApiResult<()> {
        self.track_call(format!("unblock:{}", email));

        if self.failing.lock().unwrap().contains(email) {
            return Err(SendinblueApiError::ApiError {
                status: 400,
                message: format!("{} could not be unblocked", email),
            });
        }

        Ok(())
    }
}
