use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{
        entities::Conversation,
        value_objects::{
            ChatInput, ChatMessage, ChatReply, DietaryUsers, SimulationInput, SimulationReport,
        },
    },
};

/// Repository trait for persisted conversations
pub trait ConversationRepository: Send + Sync {
    fn create(
        &self,
        conversation: Conversation,
    ) -> impl Future<Output = Result<Conversation, CoreError>> + Send;

    /// All conversations, oldest first.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Conversation>, CoreError>> + Send;

    /// Returns the number of removed rows.
    fn delete_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

/// LLM Client trait for chat-completion models
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the favorite-foods chat
pub trait ConversationService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn get_dietary_users(&self) -> impl Future<Output = Result<DietaryUsers, CoreError>> + Send;

    fn simulate_conversations(
        &self,
        input: SimulationInput,
    ) -> impl Future<Output = Result<SimulationReport, CoreError>> + Send;
}
