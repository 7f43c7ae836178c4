use super::*;

/// Expected: 1 row removed, then the comment is gone
#[tokio::test]
async fn deletes_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::comment::create_comment(db, post.id, author.id).await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.delete(comment.id).await?, 1);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}
