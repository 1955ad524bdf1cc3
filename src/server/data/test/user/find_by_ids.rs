use super::*;

/// Tests fetching several users at once, skipping unknown ids.
///
/// Expected: Ok(Vec) containing only the existing users
#[tokio::test]
async fn returns_existing_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user1 = factory::user::create_user(db).await?;
    let user2 = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut ids: Vec<i32> = repo
        .find_by_ids(&[user1.id, user2.id, 999])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![user1.id, user2.id]);

    Ok(())
}

/// Tests that an empty id list short-circuits to an empty result.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
