use super::*;

/// Tests listing a post's comments.
///
/// Expected: oldest comment first, comments on other posts excluded
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::post::create_post(db, author.id).await?;

    let newer = factory::comment::create_comment(db, post.id, author.id).await?;
    let older = factory::comment::CommentFactory::new(db, post.id, author.id)
        .created_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    factory::comment::create_comment(db, other_post.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let ids: Vec<_> = repo
        .get_by_post(post.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}
