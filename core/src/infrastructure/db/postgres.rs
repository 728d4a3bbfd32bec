use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::entity::conversations;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Creates the `conversations` table from its entity definition when it
    /// does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), anyhow::Error> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);

        let mut statement = schema.create_table_from_entity(conversations::Entity);
        statement.if_not_exists();

        self.db.execute(backend.build(&statement)).await?;
        info!("Conversations table is ready");

        Ok(())
    }
}
