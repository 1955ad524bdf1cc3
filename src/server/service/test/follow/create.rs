use super::*;

/// Tests following another user by username.
///
/// Expected: Ok(Follow) with both usernames
#[tokio::test]
async fn follows_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user_with_username(db, "reader").await?;
    factory::user::create_user_with_username(db, "writer").await?;

    let service = FollowService::new(db);
    let follow = service
        .create(CreateFollowParams {
            user_id: follower.id,
            following: "writer".to_string(),
        })
        .await?;

    assert_eq!(follow.user, "reader");
    assert_eq!(follow.following, "writer");

    let fetched = service.get_by_id(follower.id, follow.id).await?;
    assert_eq!(fetched, Some(follow));

    Ok(())
}

/// Tests the follow validation rules.
///
/// Verifies that following an unknown user, oneself, or an already followed
/// user is rejected.
///
/// Expected: Err(AppError::ValidationFailed) for each case, one stored edge
#[tokio::test]
async fn rejects_invalid_targets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user_with_username(db, "reader").await?;
    let writer = factory::user::create_user_with_username(db, "writer").await?;
    factory::follow::create_follow(db, follower.id, writer.id).await?;

    let service = FollowService::new(db);

    for target in ["ghost", "reader", "writer"] {
        let result = service
            .create(CreateFollowParams {
                user_id: follower.id,
                following: target.to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(AppError::ValidationFailed(_))),
            "expected ValidationFailed for {}",
            target
        );
    }

    assert_eq!(service.get_by_user_id(follower.id, None).await?.len(), 1);

    Ok(())
}

/// Tests that unfollowing only works on the actor's own edges.
///
/// Expected: false for another user, true for the follower
#[tokio::test]
async fn deletes_only_own_edges() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::user::create_user(db).await?;
    let writer = factory::user::create_user(db).await?;
    let edge = factory::follow::create_follow(db, follower.id, writer.id).await?;

    let service = FollowService::new(db);

    assert!(!service.delete(writer.id, edge.id).await?);
    assert!(service.delete(follower.id, edge.id).await?);
    assert!(service.get_by_id(follower.id, edge.id).await?.is_none());

    Ok(())
}

/// Tests that an edge rejected by the unique follow index surfaces as a validation failure.
///
/// Inserts the edge, then inserts it again through the repository, bypassing the
/// existence check as a concurrent request would.
///
/// Expected: ValidationFailed for the unique violation, DbErr for other failures
#[tokio::test]
async fn maps_unique_violation_to_validation_failure() -> Result<(), AppError> {
    use crate::server::{data::follow::FollowRepository, service::follow::map_create_err};
    use sea_orm::{ConnectionTrait, DbErr};

    let test = TestBuilder::new()
        .with_blog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE UNIQUE INDEX idx_follow_user_following ON follow (user_id, following_id)",
    )
    .await?;

    let follower = factory::user::create_user_with_username(db, "reader").await?;
    let writer = factory::user::create_user_with_username(db, "writer").await?;
    factory::follow::create_follow(db, follower.id, writer.id).await?;

    let err = FollowRepository::new(db)
        .create(follower.id, writer.id)
        .await
        .unwrap_err();

    assert!(matches!(
        map_create_err(err, "writer"),
        AppError::ValidationFailed(msg) if msg.contains("already follow writer")
    ));
    assert!(matches!(
        map_create_err(DbErr::Custom("disk full".to_string()), "writer"),
        AppError::DbErr(_)
    ));

    Ok(())
}
