use super::*;

/// Tests a partial post update.
///
/// Verifies that omitted fields and tags are kept and `updated_at` moves forward.
///
/// Expected: Ok(Some) with only the name changed
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let repo = PostRepository::new(db);
    let post = repo.create(create_params(author.id, &["web"])).await?;

    let updated = repo
        .update(
            post.id,
            UpdatePostParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.content, "First post");
    assert_eq!(updated.category, "News");
    assert_eq!(updated.tags, vec!["web".to_string()]);
    assert!(updated.updated_at >= post.updated_at);

    Ok(())
}

/// Tests replacing a post's tag set.
///
/// Expected: old tag links removed, new tags attached
#[tokio::test]
async fn replaces_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let repo = PostRepository::new(db);
    let post = repo.create(create_params(author.id, &["web", "axum"])).await?;

    let updated = repo
        .update(
            post.id,
            UpdatePostParams {
                tag_names: Some(vec!["rust".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tags, vec!["rust".to_string()]);
    assert_eq!(entity::prelude::PostTag::find().count(db).await?, 1);

    let cleared = repo
        .update(
            post.id,
            UpdatePostParams {
                tag_names: Some(vec![]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(cleared.tags.is_empty());

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);

    assert!(repo.update(9999, UpdatePostParams::default()).await?.is_none());

    Ok(())
}
