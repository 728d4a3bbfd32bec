use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        conversation::{entities::Conversation, ports::ConversationRepository},
    },
    entity::conversations::{
        ActiveModel as ConversationActiveModel, Column as ConversationColumn,
        Entity as ConversationEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresConversationRepository {
    pub db: DatabaseConnection,
}

impl PostgresConversationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ConversationRepository for PostgresConversationRepository {
    async fn create(&self, conversation: Conversation) -> Result<Conversation, CoreError> {
        let created = ConversationEntity::insert(ConversationActiveModel::from(&conversation))
            .exec_with_returning(&self.db)
            .await
            .map(Conversation::from)
            .map_err(|e| {
                error!("Failed to create conversation: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created)
    }

    async fn fetch_all(&self) -> Result<Vec<Conversation>, CoreError> {
        let conversations = ConversationEntity::find()
            .order_by_asc(ConversationColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch conversations: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Conversation::from)
            .collect();

        Ok(conversations)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let result = ConversationEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete conversations: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
