use super::*;

/// Tests default ordering of the post list.
///
/// Expected: newest post first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let older = factory::post::PostFactory::new(db, author.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::post::create_post(db, author.id).await?;

    let repo = PostRepository::new(db);
    let ids: Vec<_> = repo
        .get_all(&PostFilter::default())
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests searching content and tag names.
///
/// A post matching through both content and several tags appears once.
///
/// Expected: posts matching content or a tag, case-insensitively, without duplicates
#[tokio::test]
async fn searches_content_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let by_content = factory::post::PostFactory::new(db, author.id)
        .content("Learning RUST this week")
        .build()
        .await?;
    let by_tag = factory::post::PostFactory::new(db, author.id)
        .content("Unrelated")
        .build()
        .await?;
    let both = factory::post::PostFactory::new(db, author.id)
        .content("rust everywhere")
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .content("Nothing here")
        .build()
        .await?;

    let rust = factory::tag::create_tag(db, "Rust").await?;
    let rustacean = factory::tag::create_tag(db, "rustacean").await?;
    factory::tag::tag_post(db, by_tag.id, rust.id).await?;
    factory::tag::tag_post(db, both.id, rust.id).await?;
    factory::tag::tag_post(db, both.id, rustacean.id).await?;

    let repo = PostRepository::new(db);
    let mut ids: Vec<_> = repo
        .get_all(&PostFilter {
            search: Some("rust".to_string()),
            category: None,
        })
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    ids.sort();

    let mut expected = vec![by_content.id, by_tag.id, both.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that LIKE wildcards in the search term match literally.
///
/// Expected: only the post containing a literal `%`
#[tokio::test]
async fn escapes_wildcards_in_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let literal = factory::post::PostFactory::new(db, author.id)
        .content("100% done")
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .content("100 done")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let posts = repo
        .get_all(&PostFilter {
            search: Some("0%".to_string()),
            category: None,
        })
        .await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, literal.id);

    Ok(())
}

/// Tests exact, case-insensitive category filtering.
///
/// Expected: only posts whose category equals the filter ignoring case
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::user::create_user(db).await?;
    let news = factory::post::PostFactory::new(db, author.id)
        .category("News")
        .build()
        .await?;
    factory::post::PostFactory::new(db, author.id)
        .category("Newsletter")
        .build()
        .await?;

    let repo = PostRepository::new(db);
    let posts = repo
        .get_all(&PostFilter {
            search: None,
            category: Some("news".to_string()),
        })
        .await?;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, news.id);

    Ok(())
}
