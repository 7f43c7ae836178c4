use super::*;

/// Tests publishing a post with followers.
///
/// Verifies that every follower with an email gets their own message and followers
/// without an email are skipped.
///
/// Expected: Ok with one email per reachable follower
#[tokio::test]
async fn emails_each_follower() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let author = User::from_entity(
        factory::user::UserFactory::new(db)
            .username("writer")
            .display_name("The Writer")
            .build()
            .await?,
    );
    let first = factory::user::UserFactory::new(db)
        .email("first@example.com")
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .email("second@example.com")
        .build()
        .await?;
    let silent = factory::user::UserFactory::new(db).email("").build().await?;
    for follower in [&first, &second, &silent] {
        factory::follow::create_follow(db, follower.id, author.id).await?;
    }

    let service = PostService::new(db, &notifier);
    let post = service.create(&author, create_params(author.id)).await?;

    assert_eq!(post.author_username, "writer");
    assert_eq!(post.tags, vec!["rust".to_string()]);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|email| email.to.len() == 1));
    assert_eq!(sent[0].subject, "The Writer published a new post");
    assert_eq!(
        sent[0].body,
        "The Writer published a new post: \"Hello\".\n\nPost content:\n\"Body text\""
    );

    Ok(())
}

/// Expected: Ok and no email when the author has no followers
#[tokio::test]
async fn no_followers_no_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let author = User::from_entity(factory::user::create_user(db).await?);

    let service = PostService::new(db, &notifier);
    service.create(&author, create_params(author.id)).await?;

    assert!(mailer.sent().is_empty());

    Ok(())
}

/// Tests publishing when the follower lookup fails after the post is stored.
///
/// Built without the follow table so loading recipients errors after commit.
///
/// Expected: Ok with the post persisted and no email sent
#[tokio::test]
async fn follower_lookup_failure_still_publishes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::AuthToken)
        .with_table(entity::prelude::Post)
        .with_table(entity::prelude::Tag)
        .with_table(entity::prelude::PostTag)
        .with_table(entity::prelude::Comment)
        .with_table(entity::prelude::PostLike)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mailer) = memory_notifier();

    let author = User::from_entity(factory::user::create_user(db).await?);

    let service = PostService::new(db, &notifier);
    let post = service.create(&author, create_params(author.id)).await?;

    assert_eq!(service.get_by_id(post.id).await?.name, "Hello");
    assert!(mailer.sent().is_empty());

    Ok(())
}
