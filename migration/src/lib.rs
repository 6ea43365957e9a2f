// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// テナント関連マイグレーション
mod m20250801_000001_create_agencies_table;
mod m20250801_000002_create_subaccounts_table;

// ファネル関連マイグレーション
mod m20250801_000003_create_funnels_table;
mod m20250801_000004_create_funnel_pages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. エージェンシー（依存関係なし）
            Box::new(m20250801_000001_create_agencies_table::Migration),
            // 2. サブアカウント（agenciesに依存）
            Box::new(m20250801_000002_create_subaccounts_table::Migration),
            // 3. ファネルとページ（subaccountsに依存）
            Box::new(m20250801_000003_create_funnels_table::Migration),
            Box::new(m20250801_000004_create_funnel_pages_table::Migration),
        ]
    }
}
