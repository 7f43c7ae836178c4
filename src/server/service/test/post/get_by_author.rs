use super::*;

/// Tests the per-user post listings.
///
/// Expected: authored, liked and following lists contain the right posts
#[tokio::test]
async fn lists_user_posts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let reader = User::from_entity(factory::user::create_user(db).await?);
    factory::post_like::create_like(db, post.id, reader.id).await?;
    factory::follow::create_follow(db, reader.id, author.id).await?;

    let service = PostService::new(db, &notifier);

    let authored = service.get_by_author(author.id).await?;
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].id, post.id);

    let liked = service.get_liked_by(reader.id).await?;
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].id, post.id);

    let feed = service.get_following_feed(&reader).await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, post.id);

    assert!(service.get_by_author(reader.id).await?.is_empty());

    Ok(())
}

/// Expected: Err(NotFound) for an unknown user
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let service = PostService::new(db, &notifier);

    assert!(matches!(
        service.get_by_author(9999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_liked_by(9999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
