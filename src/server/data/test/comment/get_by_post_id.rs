use super::*;

/// Tests that only comments of the requested post are returned, ordered by id.
///
/// Expected: Ok(Vec) with the two comments of the first post
#[tokio::test]
async fn returns_only_comments_of_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let post = factory::post::create_post(db, author.id).await?;
    let other_post = factory::post::create_post(db, author.id).await?;

    let first = factory::comment::create_comment(db, post.id, author.id).await?;
    factory::comment::create_comment(db, other_post.id, author.id).await?;
    let second = factory::comment::create_comment(db, post.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.get_by_post_id(post.id).await?;

    assert_eq!(
        comments.iter().map(|(c, _)| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert!(comments.iter().all(|(_, a)| a.is_some()));

    Ok(())
}

/// Tests that a missing post simply has no comments.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_post_id(999).await?.is_empty());

    Ok(())
}
