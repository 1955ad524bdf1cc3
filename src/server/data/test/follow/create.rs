use super::*;

/// Tests creating an edge and detecting it as existing.
///
/// Expected: Ok(Model) and exists() true only in the followed direction
#[tokio::test]
async fn creates_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let author = factory::user::create_user(db).await?;

    let repo = FollowRepository::new(db);
    let edge = repo.create(follower.id, author.id).await?;

    assert_eq!(edge.user_id, follower.id);
    assert_eq!(edge.following_id, author.id);
    assert!(repo.exists(follower.id, author.id).await?);
    assert!(!repo.exists(author.id, follower.id).await?);

    Ok(())
}
