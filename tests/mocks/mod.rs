mod mock_blocked_contact_repository;

pub use mock_blocked_contact_repository::MockBlockedContactRepository;
