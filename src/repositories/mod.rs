mod sendinblue_blocked_contact_repository;
mod traits;

pub use sendinblue_blocked_contact_repository::SendinblueBlockedContactRepository;
pub use traits::BlockedContactRepository;
