use super::*;

/// Tests that subscriptions match a case-insensitive substring.
///
/// Expected: `ali` matches `Alice` and `alice2` but not `bob`
#[tokio::test]
async fn matches_case_insensitive_substring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower_id = create_follower_of_alices(db).await?;

    let service = FollowService::new(db);

    let follows = service.subscriptions(follower_id, Some("ali")).await?;
    assert_eq!(following(&follows), vec!["Alice", "alice2"]);

    let upper = service.subscriptions(follower_id, Some("ALICE")).await?;
    assert_eq!(following(&upper), vec!["Alice", "alice2"]);

    Ok(())
}

/// Tests that the same term differs between list search and subscriptions.
///
/// Expected: list search `alice` is empty, subscriptions `alice` has two edges
#[tokio::test]
async fn differs_from_list_search() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower_id = create_follower_of_alices(db).await?;

    let service = FollowService::new(db);

    let listed = service.get_by_user_id(follower_id, Some("alice")).await?;
    let subscribed = service.subscriptions(follower_id, Some("alice")).await?;

    assert!(listed.is_empty());
    assert_eq!(following(&subscribed), vec!["Alice", "alice2"]);

    Ok(())
}

/// Tests that an empty search returns every subscription.
///
/// Expected: all three edges
#[tokio::test]
async fn empty_search_returns_all() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower_id = create_follower_of_alices(db).await?;

    let service = FollowService::new(db);

    assert_eq!(service.subscriptions(follower_id, Some("")).await?.len(), 3);
    assert_eq!(service.subscriptions(follower_id, None).await?.len(), 3);

    Ok(())
}
