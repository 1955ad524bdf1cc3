use super::*;

/// Tests creating a post with a group.
///
/// Verifies that the author, group and content are stored and a creation
/// timestamp is set.
///
/// Expected: Ok(Model) with the provided fields
#[tokio::test]
async fn creates_post_with_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let group = factory::group::create_group(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            author_id: author.id,
            group_id: Some(group.id),
            content: "First post".to_string(),
        })
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.group_id, Some(group.id));
    assert_eq!(post.content, "First post");
    assert!(post.created <= Utc::now());

    Ok(())
}

/// Tests that a post referencing a missing author is rejected by the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo
        .create(CreatePostParams {
            author_id: 999,
            group_id: None,
            content: "Orphan".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
