use super::*;

/// Tests creating a post returns it with the author's username.
///
/// Expected: Ok(Post) with author set to the creator's username
#[tokio::test]
async fn creates_post_with_author_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user_with_username(db, "leo").await?;

    let service = PostService::new(db);
    let post = service
        .create(CreatePostParams {
            author_id: author.id,
            group_id: None,
            content: "Hello".to_string(),
        })
        .await?;

    assert_eq!(post.author, "leo");
    assert_eq!(post.author_id, author.id);
    assert_eq!(post.content, "Hello");
    assert_eq!(post.group_id, None);

    Ok(())
}

/// Tests that blank content is rejected.
///
/// Expected: Err(AppError::ValidationFailed) and no post stored
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let service = PostService::new(db);
    let result = service
        .create(CreatePostParams {
            author_id: author.id,
            group_id: None,
            content: "   ".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationFailed(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a reference to a missing group is rejected.
///
/// Expected: Err(AppError::ValidationFailed)
#[tokio::test]
async fn rejects_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;

    let service = PostService::new(db);
    let result = service
        .create(CreatePostParams {
            author_id: author.id,
            group_id: Some(999),
            content: "Hello".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationFailed(_))));

    Ok(())
}
