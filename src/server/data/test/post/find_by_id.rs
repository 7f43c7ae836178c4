use super::*;

/// Tests that counters reflect stored likes and comments.
///
/// Expected: Ok(Some) with like and comment counts
#[tokio::test]
async fn hydrates_counters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;
    factory::post_like::create_like(db, post.id, author.id).await?;
    factory::post_like::create_like(db, post.id, reader.id).await?;
    factory::comment::create_comment(db, post.id, reader.id).await?;

    let repo = PostRepository::new(db);
    let found = repo.find_by_id(post.id).await?.unwrap();

    assert_eq!(found.likes_count, 2);
    assert_eq!(found.comments_count, 1);
    assert_eq!(found.author_username, author.username);

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}
