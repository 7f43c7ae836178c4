use super::*;

/// Tests liking and then unliking another user's post.
///
/// Expected: Created then Removed, one notification to the author
#[tokio::test]
async fn likes_then_unlikes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let author = factory::user::UserFactory::new(db)
        .email("author@example.com")
        .build()
        .await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .name("Hello")
        .build()
        .await?;
    let reader = User::from_entity(
        factory::user::UserFactory::new(db)
            .username("reader")
            .build()
            .await?,
    );

    let service = LikeService::new(db, &notifier);

    assert_eq!(service.toggle(&reader, post.id).await?, ToggleOutcome::Created);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 1);

    assert_eq!(service.toggle(&reader, post.id).await?, ToggleOutcome::Removed);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 0);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["author@example.com".to_string()]);
    assert_eq!(sent[0].body, "reader liked your post \"Hello\".");

    Ok(())
}

/// Tests liking one's own post.
///
/// Expected: like stored and no email sent
#[tokio::test]
async fn self_like_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);

    let service = LikeService::new(db, &notifier);

    assert_eq!(service.toggle(&author, post.id).await?, ToggleOutcome::Created);
    assert!(PostLikeRepository::new(db).exists(post.id, author.id).await?);
    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Expected: Err(NotFound) for an unknown post
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let user = User::from_entity(factory::user::create_user(db).await?);

    let service = LikeService::new(db, &notifier);
    let result = service.toggle(&user, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Post not found."));

    Ok(())
}

/// Tests a like written by another request between the check and the insert.
///
/// The competing like is stored on the same transaction before the insert runs.
///
/// Expected: Err(AppError::Conflict) answering 409, one like stored
#[tokio::test]
async fn concurrent_like_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, post) = factory::helpers::create_post_with_author(db).await?;
    let reader = factory::user::create_user(db).await?;

    let txn = db.begin().await?;
    assert!(PostLikeRepository::new(&txn).create(post.id, reader.id).await?);

    let result = add_like(&txn, post.id, reader.id).await;
    txn.commit().await?;

    let err = result.unwrap_err();
    assert!(matches!(
        &err,
        AppError::Conflict(msg) if msg == "You have already liked this post."
    ));
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    assert_eq!(entity::prelude::PostLike::find().count(db).await?, 1);

    Ok(())
}
