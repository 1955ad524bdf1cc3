use super::*;

/// Tests that an edge is only visible to its follower.
///
/// Expected: Ok(Some) for the follower, Ok(None) for anyone else
#[tokio::test]
async fn scopes_lookup_to_follower() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let author = factory::user::create_user(db).await?;
    let edge = factory::follow::create_follow(db, follower.id, author.id).await?;

    let repo = FollowRepository::new(db);

    assert_eq!(repo.get_by_id(follower.id, edge.id).await?, Some(edge.clone()));
    assert_eq!(repo.get_by_id(author.id, edge.id).await?, None);

    repo.delete(edge.id).await?;
    assert_eq!(repo.get_by_id(follower.id, edge.id).await?, None);

    Ok(())
}
