//! Blocked contact models for the `smtp/blockedContacts` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer reading an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single entry of the provider's blocked-contacts list.
///
/// Decoding is lenient: absent or `null` fields become empty strings and
/// unknown fields (`senderEmail`, `reason`, `blockedAt`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockedContact {
    /// Blocked email address
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    /// ID of the message whose delivery failure caused the block
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: String,
}

/// Response body of `GET smtp/blockedContacts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BlockedContactsResponse {
    /// Blocked contacts in the order the provider listed them
    #[serde(default, deserialize_with = "null_as_default")]
    pub contacts: Vec<BlockedContact>,
}

/// A bounced address scheduled for unblocking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BouncedEmail {
    /// ID of the message that bounced
    pub message_id: String,

    /// Address to unblock
    pub email: String,
}

impl From<BlockedContact> for BouncedEmail {
    fn from(contact: BlockedContact) -> Self {
        Self {
            message_id: contact.message_id,
            email: contact.email,
        }
    }
}

impl From<BlockedContactsResponse> for Vec<BouncedEmail> {
    fn from(response: BlockedContactsResponse) -> Self {
        response.contacts.into_iter().map(BouncedEmail::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_contact() {
        let json = r#"{"contacts":[{"email":"a@example.com","messageId":"m1"}]}"#;
        let response: BlockedContactsResponse = serde_json::from_str(json).unwrap();
        let bounced: Vec<BouncedEmail> = response.into();

        assert_eq!(
            bounced,
            vec![BouncedEmail {
                message_id: "m1".to_string(),
                email: "a@example.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_keeps_provider_order() {
        let json = r#"{
            "contacts": [
                {"email": "c@example.com", "messageId": "m3"},
                {"email": "a@example.com", "messageId": "m1"},
                {"email": "b@example.com", "messageId": "m2"}
            ],
            "count": 3
        }"#;
        let response: BlockedContactsResponse = serde_json::from_str(json).unwrap();
        let emails: Vec<&str> = response.contacts.iter().map(|c| c.email.as_str()).collect();

        assert_eq!(emails, ["c@example.com", "a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_decode_lenient_missing_fields() {
        let json = r#"{"contacts":[{"email":"a@example.com","senderEmail":"noreply@example.com"},{}]}"#;
        let response: BlockedContactsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.contacts.len(), 2);
        assert_eq!(response.contacts[0].email, "a@example.com");
        assert_eq!(response.contacts[0].message_id, "");
        assert_eq!(response.contacts[1], BlockedContact::default());
    }

    #[test]
    fn test_decode_missing_contacts_is_empty() {
        let response: BlockedContactsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.contacts.is_empty());
    }

    #[test]
    fn test_decode_null_contacts_is_empty() {
        let response: BlockedContactsResponse =
            serde_json::from_str(r#"{"contacts":null}"#).unwrap();
        assert!(response.contacts.is_empty());
    }

    #[test]
    fn test_decode_null_fields_are_empty() {
        let json = r#"{"contacts":[{"email":"a@example.com","messageId":null},{"email":null}]}"#;
        let response: BlockedContactsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.contacts.len(), 2);
        assert_eq!(response.contacts[0].email, "a@example.com");
        assert_eq!(response.contacts[0].message_id, "");
        assert_eq!(response.contacts[1].email, "");
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        assert!(serde_json::from_str::<BlockedContactsResponse>(r#"{"contacts":"none"}"#).is_err());
        assert!(serde_json::from_str::<BlockedContactsResponse>("not json").is_err());
    }
}
