use super::*;

/// Tests getting a group by id and checking existence.
///
/// Expected: Ok(Some(Group)) and exists() true for a stored group,
/// Ok(None) and exists() false otherwise
#[tokio::test]
async fn gets_group_and_checks_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db)
        .title("Cats")
        .slug("cats")
        .build()
        .await?;

    let repo = GroupRepository::new(db);

    let found = repo.get_by_id(group.id).await?;
    assert_eq!(found.map(|g| g.title), Some("Cats".to_string()));
    assert!(repo.exists(group.id).await?);

    assert!(repo.get_by_id(group.id + 1).await?.is_none());
    assert!(!repo.exists(group.id + 1).await?);

    Ok(())
}
