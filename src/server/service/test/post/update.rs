use super::*;

/// Tests updating and deleting through the service.
///
/// Expected: update returns the new content, delete returns true then false
#[tokio::test]
async fn updates_then_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let service = PostService::new(db);

    let updated = service
        .update(UpdatePostParams {
            id: post.id,
            content: Some("Edited".to_string()),
            group_id: None,
        })
        .await?;
    assert_eq!(updated.map(|p| p.content), Some("Edited".to_string()));

    assert!(service.delete(post.id).await?);
    assert!(!service.delete(post.id).await?);

    Ok(())
}

/// Tests that updating a missing post yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PostService::new(db);
    let result = service
        .update(UpdatePostParams {
            id: 999,
            content: Some("Edited".to_string()),
            group_id: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that an update with blank content is rejected and leaves the post unchanged.
///
/// Expected: Err(AppError::ValidationFailed) and original content kept
#[tokio::test]
async fn rejects_blank_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let service = PostService::new(db);
    let result = service
        .update(UpdatePostParams {
            id: post.id,
            content: Some(String::new()),
            group_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationFailed(_))));

    let stored = service.get_by_id(post.id).await?;
    assert_eq!(stored.map(|p| p.content), Some(post.content));

    Ok(())
}
