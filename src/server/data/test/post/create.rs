use super::*;

/// Tests creating a post with tags.
///
/// Verifies that missing tags are created, the returned post is hydrated with the
/// author's username and tag names, and counters start at zero.
///
/// Expected: Ok with hydrated post
#[tokio::test]
async fn creates_post_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::UserFactory::new(db)
        .username("writer")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let post = repo.create(create_params(author.id, &["web", "axum"])).await?;

    assert_eq!(post.name, "Hello");
    assert_eq!(post.author_id, author.id);
    assert_eq!(post.author_username, "writer");
    assert_eq!(post.tags, vec!["axum".to_string(), "web".to_string()]);
    assert_eq!(post.likes_count, 0);
    assert_eq!(post.comments_count, 0);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests that existing tags are reused regardless of case.
///
/// Expected: no new tag row, post carries the stored spelling
#[tokio::test]
async fn reuses_existing_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    factory::tag::create_tag(db, "Rust").await?;

    let repo = PostRepository::new(db);
    let post = repo.create(create_params(author.id, &["rust"])).await?;

    assert_eq!(post.tags, vec!["Rust".to_string()]);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}
