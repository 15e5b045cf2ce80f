use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CacheEntry::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CacheEntry::Category).string().not_null())
                    .col(ColumnDef::new(CacheEntry::Subject).string().not_null())
                    .col(ColumnDef::new(CacheEntry::Payload).string().not_null())
                    .col(ColumnDef::new(CacheEntry::CreatedAt).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(CacheEntry::Category)
                            .col(CacheEntry::Subject),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CacheEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CacheEntry {
    #[sea_orm(iden = "cache_entries")]
    Table,
    Category,
    Subject,
    Payload,
    CreatedAt,
}
