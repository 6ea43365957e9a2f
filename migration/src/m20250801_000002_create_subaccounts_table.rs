use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subaccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subaccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subaccounts::AgencyId).uuid().not_null())
                    .col(ColumnDef::new(Subaccounts::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subaccounts::ConnectAccountId)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Subaccounts::Goal)
                            .integer()
                            .not_null()
                            .default(5),
                    )
                    .col(
                        ColumnDef::new(Subaccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Subaccounts::UpdatedAt)
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
                    .name("fk_subaccounts_agency_id")
                    .from(Subaccounts::Table, Subaccounts::AgencyId)
                    .to(Agencies::Table, Agencies::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subaccounts_agency_id")
                    .table(Subaccounts::Table)
                    .col(Subaccounts::AgencyId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subaccounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Subaccounts {
    Table,
    Id,
    AgencyId,
    Name,
    ConnectAccountId,
    Goal,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Agencies {
    Table,
    Id,
}
