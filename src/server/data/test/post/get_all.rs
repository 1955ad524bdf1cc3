use super::*;

/// Tests that posts come newest first with their authors.
///
/// Verifies ordering by creation time descending and that the author entity
/// is loaded alongside each post.
///
/// Expected: Ok(Vec) ordered newest to oldest, each with Some(author)
#[tokio::test]
async fn returns_posts_newest_first_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let now = Utc::now();

    let old = factory::post::PostFactory::new(db, author.id)
        .created(now - Duration::hours(2))
        .build()
        .await?;
    let new = factory::post::PostFactory::new(db, author.id)
        .created(now)
        .build()
        .await?;
    let middle = factory::post::PostFactory::new(db, author.id)
        .created(now - Duration::hours(1))
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_all().await?;

    assert_eq!(
        posts.iter().map(|(p, _)| p.id).collect::<Vec<_>>(),
        vec![new.id, middle.id, old.id]
    );
    assert!(posts
        .iter()
        .all(|(_, a)| a.as_ref().map(|a| a.id) == Some(author.id)));

    Ok(())
}

/// Tests that posts with identical timestamps fall back to id ordering.
///
/// Expected: Ok(Vec) with the higher id first
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let created = Utc::now();

    let first = factory::post::PostFactory::new(db, author.id)
        .created(created)
        .build()
        .await?;
    let second = factory::post::PostFactory::new(db, author.id)
        .created(created)
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let posts = repo.get_all().await?;

    assert_eq!(
        posts.iter().map(|(p, _)| p.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    Ok(())
}
