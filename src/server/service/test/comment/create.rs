use super::*;

/// Tests creating a comment on an existing post.
///
/// Expected: Ok(Comment) carrying the post id and the author's username
#[tokio::test]
async fn creates_comment_on_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_dependencies(db).await?;
    let commenter = factory::user::create_user_with_username(db, "mia").await?;

    let service = CommentService::new(db);
    let comment = service
        .create(CreateCommentParams {
            post_id: post.id,
            author_id: commenter.id,
            content: "Great".to_string(),
        })
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author, "mia");

    let listed = service.get_by_post_id(post.id).await?;
    assert_eq!(listed, vec![comment]);

    Ok(())
}

/// Tests commenting on a post that does not exist.
///
/// Expected: Err(AppError::NotFound) and no comment stored
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let commenter = factory::user::create_user(db).await?;

    let service = CommentService::new(db);
    let result = service
        .create(CreateCommentParams {
            post_id: 999,
            author_id: commenter.id,
            content: "Hello?".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests that blank content is reported before the missing post.
///
/// Expected: Err(AppError::ValidationFailed)
#[tokio::test]
async fn validates_content_before_resolving_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let commenter = factory::user::create_user(db).await?;

    let service = CommentService::new(db);
    let result = service
        .create(CreateCommentParams {
            post_id: 999,
            author_id: commenter.id,
            content: String::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationFailed(_))));

    Ok(())
}
