pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_group_table;
mod m20260301_000003_create_post_table;
mod m20260301_000004_create_comment_table;
mod m20260301_000005_create_follow_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_group_table::Migration),
            Box::new(m20260301_000003_create_post_table::Migration),
            Box::new(m20260301_000004_create_comment_table::Migration),
            Box::new(m20260301_000005_create_follow_table::Migration),
        ]
    }
}
