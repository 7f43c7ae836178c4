pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_auth_token_table;
mod m20260301_000003_create_follow_table;
mod m20260302_000004_create_post_table;
mod m20260302_000005_create_tag_table;
mod m20260302_000006_create_post_tag_table;
mod m20260303_000007_create_comment_table;
mod m20260303_000008_create_post_like_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_auth_token_table::Migration),
            Box::new(m20260301_000003_create_follow_table::Migration),
            Box::new(m20260302_000004_create_post_table::Migration),
            Box::new(m20260302_000005_create_tag_table::Migration),
            Box::new(m20260302_000006_create_post_tag_table::Migration),
            Box::new(m20260303_000007_create_comment_table::Migration),
            Box::new(m20260303_000008_create_post_like_table::Migration),
        ]
    }
}
