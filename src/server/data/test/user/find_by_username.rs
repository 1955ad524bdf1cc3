use super::*;

/// Tests that username lookup is exact and case-sensitive.
///
/// Verifies that `Alice` and `alice2` are not matched by `alice`, while
/// `Alice` is matched by its exact spelling.
///
/// Expected: Ok(None) for `alice`, Ok(Some) for `Alice`
#[tokio::test]
async fn matches_exact_case_sensitive_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_username(db, "Alice").await?;
    factory::user::create_user_with_username(db, "alice2").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_username("alice").await?.is_none());

    let found = repo.find_by_username("Alice").await?;
    assert_eq!(found.map(|u| u.username), Some("Alice".to_string()));

    Ok(())
}
