use entity::{bio, event, session, session_speakers, speaker};
use sea_orm::EntityTrait;
use sea_orm_migration::{prelude::*, sea_orm::Schema};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_database_backend();
        let schema = Schema::new(db);

        // Parents first, the foreign keys are declared inline on SQLite.
        create_entity_table(manager, &schema, event::Entity).await?;
        create_entity_table(manager, &schema, session::Entity).await?;
        create_entity_table(manager, &schema, speaker::Entity).await?;
        create_entity_table(manager, &schema, bio::Entity).await?;
        create_entity_table(manager, &schema, session_speakers::Entity).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_entity_table(manager, session_speakers::Entity).await?;
        drop_entity_table(manager, bio::Entity).await?;
        drop_entity_table(manager, speaker::Entity).await?;
        drop_entity_table(manager, session::Entity).await?;
        drop_entity_table(manager, event::Entity).await?;

        Ok(())
    }
}

async fn create_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

async fn drop_entity_table<'a, E: EntityTrait>(
    manager: &'a SchemaManager<'a>,
    entity: E,
) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(entity).take()).await
}
