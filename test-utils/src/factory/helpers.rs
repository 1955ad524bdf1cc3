//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a post together with its author.
///
/// The post has no group. Use the individual factories if you need to
/// customize specific entities.
///
/// # Returns
/// - `Ok((author, post))` - Created user and post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, author.id).await?;

    Ok((author, post))
}

/// Creates a comment together with its post and both authors.
///
/// The post author and the comment author are distinct users.
///
/// # Returns
/// - `Ok((post_author, post, comment_author, comment))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::user::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (post_author, post) = create_post_with_dependencies(db).await?;
    let comment_author = crate::factory::user::create_user(db).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, comment_author.id).await?;

    Ok((post_author, post, comment_author, comment))
}
