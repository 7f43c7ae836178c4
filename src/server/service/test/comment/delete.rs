use super::*;

/// Tests deleting comments as owner and as another user.
///
/// Expected: Forbidden for the other user, then the owner's delete removes it
#[tokio::test]
async fn only_owner_can_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, _) = memory_notifier();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::comment::create_comment(db, post.id, author.id).await?;
    let author = User::from_entity(author);
    let intruder = User::from_entity(factory::user::create_user(db).await?);

    let service = CommentService::new(db, &notifier);

    assert!(matches!(
        service.delete(&intruder, comment.id).await,
        Err(AppError::Forbidden(msg)) if msg == "Only the owner can delete this comment."
    ));

    service.delete(&author, comment.id).await?;
    assert!(matches!(
        service.get_by_id(comment.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
