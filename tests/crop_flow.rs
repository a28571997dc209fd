// tests/crop_flow.rs
use caderno_core::application::{controllers::CropStage, error::ApplicationError};
use caderno_core::domain::media::{Point, Size};
use image::GenericImageView;

mod support;
use support::{STORAGE_BASE, TestApp, png_bytes};

fn open(app: &TestApp, cover: Option<&str>) -> caderno_core::application::controllers::CropSession {
    let mut session = app.services.crop_session(cover.map(str::to_string));
    session.select_file(png_bytes(1600, 900), "image/png").unwrap();
    session
        .open_cropper(Size::new(800.0, 450.0), Size::new(800.0, 600.0))
        .unwrap();
    session
}

#[tokio::test]
async fn zoomed_crop_is_uploaded_as_a_jpeg_cover() {
    let app = TestApp::new();
    let mut session = open(&app, None);
    session.set_zoom(2.0).unwrap();

    let url = session.confirm(&app.admin()).await.unwrap();
    assert!(url.starts_with(&format!("{STORAGE_BASE}/covers/")));
    assert_eq!(session.result(), Some(url.as_str()));
    assert!(matches!(session.stage(), CropStage::Idle));

    let objects = app.storage.objects();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].bucket, "covers");
    assert_eq!(objects[0].content_type, "image/jpeg");

    let stored = image::load_from_memory(&objects[0].body).unwrap();
    assert_eq!(stored.dimensions(), (800, 450));
}

#[tokio::test]
async fn pan_is_clamped_inside_the_zoomed_image() {
    let app = TestApp::new();
    let mut session = open(&app, None);
    session.set_zoom(2.0).unwrap();
    session.set_crop(Point { x: 5000.0, y: -5000.0 }).unwrap();

    let view = session.view().unwrap();
    assert_eq!(view.crop, Point { x: 400.0, y: -225.0 });
}

#[tokio::test]
async fn failed_upload_returns_to_cropping_with_selection() {
    let app = TestApp::new();
    app.storage.fail_uploads(true);
    let mut session = open(&app, Some("https://media.test/storage/covers/old.jpg"));
    session.set_zoom(1.5).unwrap();

    assert!(session.confirm(&app.admin()).await.is_err());
    assert!(matches!(session.stage(), CropStage::Cropping { .. }));
    assert!(session.last_error().is_some());
    assert_eq!(session.view().unwrap().zoom, 1.5);
    assert_eq!(
        session.result(),
        Some("https://media.test/storage/covers/old.jpg")
    );

    app.storage.fail_uploads(false);
    session.confirm(&app.admin()).await.unwrap();
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn cancel_keeps_the_current_cover() {
    let app = TestApp::new();
    let mut session = open(&app, Some("/media/covers/atual.jpg"));
    session.cancel();
    assert!(matches!(session.stage(), CropStage::Idle));
    assert_eq!(session.result(), Some("/media/covers/atual.jpg"));
    assert!(app.storage.objects().is_empty());

    session.clear_cover();
    assert_eq!(session.result(), None);
}

#[tokio::test]
async fn confirm_without_an_open_cropper_is_a_conflict() {
    let app = TestApp::new();
    let mut session = app.services.crop_session(None);
    assert!(matches!(
        session.confirm(&app.admin()).await,
        Err(ApplicationError::Conflict(_))
    ));
    assert!(matches!(session.set_zoom(2.0), Err(ApplicationError::Conflict(_))));
}

#[test]
fn oversized_and_unsupported_files_are_rejected() {
    let app = TestApp::new();
    let mut session = app.services.crop_session(None);
    let huge = vec![0u8; 10 * 1024 * 1024 + 1];
    assert!(session.select_file(huge, "image/png").is_err());
    assert!(session.select_file(png_bytes(4, 4), "application/pdf").is_err());
    assert!(matches!(session.stage(), CropStage::Idle));
}
