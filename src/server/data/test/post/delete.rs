use super::*;

/// Tests deleting a post with comments and likes.
///
/// Expected: post removed together with its comments and likes
#[tokio::test]
async fn deletes_post_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::comment::create_comment(db, post.id, author.id).await?;
    factory::post_like::create_like(db, post.id, author.id).await?;

    let repo = PostRepository::new(db);

    assert_eq!(repo.delete(post.id).await?, 1);
    assert!(repo.find_by_id(post.id).await?.is_none());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 0);
    assert_eq!(repo.delete(post.id).await?, 0);

    Ok(())
}
