pub mod conversation_repository;

pub use conversation_repository::PostgresConversationRepository;
