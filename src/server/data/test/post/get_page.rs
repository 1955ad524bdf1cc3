use super::*;

/// Tests that a page is the matching slice of the full ordering.
///
/// Creates five posts and requests offset 1, limit 2.
///
/// Expected: Ok((posts at positions 1..3, total 5))
#[tokio::test]
async fn returns_slice_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let now = Utc::now();
    for i in 0..5 {
        factory::post::PostFactory::new(db, author.id)
            .created(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = PostRepository::new(db);
    let all: Vec<i32> = repo.get_all().await?.into_iter().map(|(p, _)| p.id).collect();

    let (page, total) = repo.get_page(1, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(
        page.into_iter().map(|(p, _)| p.id).collect::<Vec<_>>(),
        all[1..3].to_vec()
    );

    Ok(())
}

/// Tests that an offset past the end yields an empty page with the full count.
///
/// Expected: Ok((empty Vec, total 2))
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::post::create_post(db, author.id).await?;
    factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let (page, total) = repo.get_page(10, 5).await?;

    assert!(page.is_empty());
    assert_eq!(total, 2);

    Ok(())
}
