use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FunnelPages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FunnelPages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FunnelPages::FunnelId).uuid().not_null())
                    .col(ColumnDef::new(FunnelPages::Name).string().not_null())
                    .col(ColumnDef::new(FunnelPages::PathName).string().not_null())
                    .col(
                        ColumnDef::new(FunnelPages::Visits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FunnelPages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(FunnelPages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FunnelPages::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_funnel_pages_funnel_id")
                    .from(FunnelPages::Table, FunnelPages::FunnelId)
                    .to(Funnels::Table, Funnels::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_funnel_pages_funnel_id")
                    .table(FunnelPages::Table)
                    .col(FunnelPages::FunnelId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FunnelPages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FunnelPages {
    Table,
    Id,
    FunnelId,
    Name,
    PathName,
    Visits,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Funnels {
    Table,
    Id,
}
