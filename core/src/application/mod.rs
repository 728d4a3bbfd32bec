use crate::{
    domain::{
        common::{FoodChatConfig, services::Service},
        conversation::value_objects::ChatSettings,
    },
    infrastructure::{
        conversation::PostgresConversationRepository,
        db::postgres::{Postgres, PostgresConfig},
        llm::OpenAILLMClient,
    },
};

pub type FoodChatService = Service<PostgresConversationRepository, OpenAILLMClient>;

pub async fn create_service(config: FoodChatConfig) -> Result<FoodChatService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.ensure_schema().await?;

    let conversation_repository = PostgresConversationRepository::new(postgres.get_db());
    let llm_client = OpenAILLMClient::from(config.llm);

    Ok(Service::new(
        conversation_repository,
        llm_client,
        ChatSettings::default(),
    ))
}
