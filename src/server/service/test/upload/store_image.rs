use super::*;

/// Tests storing a valid image.
///
/// Verifies the random stored name keeps the allowed extension and the returned URL
/// points under the media prefix.
///
/// Expected: Ok with URL and file written to the uploads directory
#[tokio::test]
async fn stores_image_under_random_name() -> Result<(), AppError> {
    let (storage, root) = temp_storage();
    let service = UploadService::new(&storage);

    let url = service
        .store_image(Some(&image("photo.PNG", "image/png", vec![1, 2, 3])))
        .await?;

    let name = url
        .strip_prefix("http://localhost:8080/media/uploads/")
        .unwrap();
    assert!(name.ends_with(".png"));
    assert_eq!(name.len(), 18 + ".png".len());

    let written = tokio::fs::read(root.join("uploads").join(name)).await?;
    assert_eq!(written, vec![1, 2, 3]);

    tokio::fs::remove_dir_all(&root).await?;

    Ok(())
}

/// Tests that unknown extensions are stored as `.jpg`.
///
/// Expected: Ok with a `.jpg` URL
#[tokio::test]
async fn replaces_unknown_extension() -> Result<(), AppError> {
    let (storage, root) = temp_storage();
    let service = UploadService::new(&storage);

    let url = service
        .store_image(Some(&image("photo.bmp", "image/bmp", vec![0])))
        .await?;

    assert!(url.ends_with(".jpg"));

    tokio::fs::remove_dir_all(&root).await?;

    Ok(())
}

/// Tests that the content type is matched without regard to case.
///
/// Expected: Ok for an `IMAGE/PNG` upload
#[tokio::test]
async fn accepts_uppercase_content_type() -> Result<(), AppError> {
    let (storage, root) = temp_storage();
    let service = UploadService::new(&storage);

    let url = service
        .store_image(Some(&image("photo.png", "IMAGE/PNG", vec![7])))
        .await?;

    assert!(url.ends_with(".png"));

    tokio::fs::remove_dir_all(&root).await?;

    Ok(())
}

/// Tests the rejection rules.
///
/// Expected: field errors for a missing file, a non-image and an oversized image
#[tokio::test]
async fn rejects_invalid_uploads() {
    let (storage, _) = temp_storage();
    let service = UploadService::new(&storage);

    assert_eq!(
        file_error(service.store_image(None).await),
        "No file provided."
    );
    assert_eq!(
        file_error(
            service
                .store_image(Some(&image("notes.txt", "text/plain", vec![0])))
                .await
        ),
        "Only image files allowed."
    );
    assert_eq!(
        file_error(
            service
                .store_image(Some(&image(
                    "big.png",
                    "image/png",
                    vec![0; MAX_IMAGE_SIZE + 1]
                )))
                .await
        ),
        "Image must be under 5MB."
    );
}
