use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Follow::Table)
                    .if_not_exists()
                    .col(pk_auto(Follow::Id))
                    .col(integer(Follow::UserId))
                    .col(integer(Follow::FollowingId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_user_id")
                            .from(Follow::Table, Follow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_following_id")
                            .from(Follow::Table, Follow::FollowingId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One edge per (follower, followed) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_user_following")
                    .table(Follow::Table)
                    .col(Follow::UserId)
                    .col(Follow::FollowingId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Follow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Follow {
    Table,
    Id,
    UserId,
    FollowingId,
}
