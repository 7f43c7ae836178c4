use super::*;

/// Tests commenting on another user's post.
///
/// Expected: Ok and one email to the post author including the comment text
#[tokio::test]
async fn notifies_post_author() -> Result<(), AppError> {
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

    let service = CommentService::new(db, &notifier);
    let comment = service
        .create(&reader, post.id, "Nice post".to_string())
        .await?;

    assert_eq!(comment.author_username, "reader");
    assert_eq!(service.get_by_post(post.id).await?.len(), 1);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["author@example.com".to_string()]);
    assert_eq!(sent[0].subject, "reader commented on your post");
    assert_eq!(
        sent[0].body,
        "reader commented on your post \"Hello\".\n\nComment:\n\"Nice post\""
    );

    Ok(())
}

/// Expected: Ok and no email when authors comment on their own post
#[tokio::test]
async fn own_post_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let author = User::from_entity(author);

    let service = CommentService::new(db, &notifier);
    service
        .create(&author, post.id, "Thanks all".to_string())
        .await?;

    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Expected: Err(NotFound) when commenting on or listing an unknown post
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let user = User::from_entity(factory::user::create_user(db).await?);

    let service = CommentService::new(db, &notifier);

    assert!(matches!(
        service.create(&user, 9999, "Hi".to_string()).await,
        Err(AppError::NotFound(msg)) if msg == "Post not found."
    ));
    assert!(matches!(
        service.get_by_post(9999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
