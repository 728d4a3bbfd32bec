use crate::domain::conversation::{
    ports::{ConversationRepository, LLMClient},
    value_objects::ChatSettings,
};

/// Application service wiring the conversation store and the LLM gateway.
#[derive(Clone)]
pub struct Service<CR, LLM>
where
    CR: ConversationRepository,
    LLM: LLMClient,
{
    pub(crate) conversation_repository: CR,
    pub(crate) llm_client: LLM,
    pub(crate) settings: ChatSettings,
}

impl<CR, LLM> Service<CR, LLM>
where
    CR: ConversationRepository,
    LLM: LLMClient,
{
    pub fn new(conversation_repository: CR, llm_client: LLM, settings: ChatSettings) -> Self {
        Self {
            conversation_repository,
            llm_client,
            settings,
        }
    }
}
