use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agencies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Agencies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Agencies::Name).string().not_null())
                    // Stripe Connect アカウントID（未連携の場合はNULL）
                    .col(ColumnDef::new(Agencies::ConnectAccountId).string().null())
                    .col(
                        ColumnDef::new(Agencies::Goal)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(Agencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Agencies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agencies_connect_account_id")
                    .table(Agencies::Table)
                    .col(Agencies::ConnectAccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agencies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agencies {
    Table,
    Id,
    Name,
    ConnectAccountId,
    Goal,
    CreatedAt,
    UpdatedAt,
}
