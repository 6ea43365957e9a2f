use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Funnels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Funnels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Funnels::SubaccountId).uuid().not_null())
                    .col(ColumnDef::new(Funnels::Name).string().not_null())
                    .col(
                        ColumnDef::new(Funnels::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Funnels::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Funnels::UpdatedAt)
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
                    .name("fk_funnels_subaccount_id")
                    .from(Funnels::Table, Funnels::SubaccountId)
                    .to(Subaccounts::Table, Subaccounts::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_funnels_subaccount_id")
                    .table(Funnels::Table)
                    .col(Funnels::SubaccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Funnels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Funnels {
    Table,
    Id,
    SubaccountId,
    Name,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subaccounts {
    Table,
    Id,
}
