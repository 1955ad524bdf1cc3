use super::*;

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with matching username
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_username(db, "alice").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(user.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "alice");

    Ok(())
}

/// Tests that an unknown id yields None rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
