use super::*;

/// Tests creating a tag that does not exist yet.
///
/// Expected: Ok with the given spelling stored
#[tokio::test]
async fn creates_missing_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo.get_or_create("Rust").await?;

    assert_eq!(tag.name, "Rust");
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}

/// Tests that lookups ignore case.
///
/// Expected: existing tag returned with its original spelling, no new row
#[tokio::test]
async fn reuses_tag_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::tag::create_tag(db, "Rust").await?;

    let repo = TagRepository::new(db);
    let tag = repo.get_or_create("rUST").await?;

    assert_eq!(tag.id, existing.id);
    assert_eq!(tag.name, "Rust");
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 1);

    Ok(())
}

/// Tests that non-ASCII names are folded consistently on insert and lookup.
///
/// Expected: "émile" resolves to the "Émile" tag created first, leaving one row
#[tokio::test]
async fn reuses_non_ascii_tag_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let created = repo.get_or_create("Émile").await?;
    let reused = repo.get_or_create("émile").await?;

    assert_eq!(created.name, "Émile");
    assert_eq!(reused.id, created.id);
    assert_eq!(reused.name, "Émile");

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Émile".to_string()]);

    Ok(())
}
