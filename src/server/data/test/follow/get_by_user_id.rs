use super::*;

/// Tests that only edges owned by the follower are returned.
///
/// Expected: Ok(Vec) with the follower's two edges ordered by id
#[tokio::test]
async fn returns_only_edges_of_follower() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let author1 = factory::user::create_user(db).await?;
    let author2 = factory::user::create_user(db).await?;

    let first = factory::follow::create_follow(db, follower.id, author1.id).await?;
    let second = factory::follow::create_follow(db, follower.id, author2.id).await?;
    factory::follow::create_follow(db, author1.id, follower.id).await?;

    let repo = FollowRepository::new(db);
    let follows = repo.get_by_user_id(follower.id, None).await?;

    assert_eq!(follows, vec![first, second]);

    Ok(())
}

/// Tests narrowing the edges to one followed user.
///
/// Expected: Ok(Vec) with the single matching edge
#[tokio::test]
async fn filters_by_following() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let author1 = factory::user::create_user(db).await?;
    let author2 = factory::user::create_user(db).await?;

    factory::follow::create_follow(db, follower.id, author1.id).await?;
    let edge = factory::follow::create_follow(db, follower.id, author2.id).await?;

    let repo = FollowRepository::new(db);
    let follows = repo.get_by_user_id(follower.id, Some(author2.id)).await?;

    assert_eq!(follows, vec![edge]);

    Ok(())
}
