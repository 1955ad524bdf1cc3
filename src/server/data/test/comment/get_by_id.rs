use super::*;

/// Tests that a comment is only found under the post it belongs to.
///
/// Expected: Ok(Some) under its own post, Ok(None) under another post
#[tokio::test]
async fn scopes_lookup_to_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_post_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post, comment_author, comment) =
        factory::helpers::create_comment_with_dependencies(db).await?;
    let other_post = factory::post::create_post(db, comment_author.id).await?;

    let repo = CommentRepository::new(db);

    let found = repo.get_by_id(post.id, comment.id).await?;
    assert!(found.is_some());
    let (found_comment, found_author) = found.unwrap();
    assert_eq!(found_comment.id, comment.id);
    assert_eq!(found_author.map(|a| a.id), Some(comment_author.id));

    assert!(repo.get_by_id(other_post.id, comment.id).await?.is_none());

    Ok(())
}
