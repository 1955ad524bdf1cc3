use super::*;

/// Tests getting a post by id with its author.
///
/// Expected: Ok(Some((post, Some(author)))) for a stored post, Ok(None) otherwise
#[tokio::test]
async fn gets_post_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_dependencies(db).await?;

    let repo = PostRepository::new(db);

    let found = repo.get_by_id(post.id).await?;
    assert!(found.is_some());
    let (found_post, found_author) = found.unwrap();
    assert_eq!(found_post, post);
    assert_eq!(found_author.map(|a| a.username), Some(author.username));

    assert!(repo.get_by_id(post.id + 1).await?.is_none());
    assert!(repo.exists(post.id).await?);
    assert!(!repo.exists(post.id + 1).await?);

    Ok(())
}
