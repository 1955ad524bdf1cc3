use super::*;

/// Tests that all groups are returned ordered by id.
///
/// Expected: Ok(Vec<Group>) in insertion order
#[tokio::test]
async fn returns_groups_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::group::create_group(db).await?;
    let second = factory::group::create_group(db).await?;

    let repo = GroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert_eq!(
        groups.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(groups[0].slug, first.slug);

    Ok(())
}
