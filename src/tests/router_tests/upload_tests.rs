use crate::db::drafts::load_draft_images;
use crate::tests::utils::{body_text, TestApp};
use astra::{Body, Response};
use http::Method;

const BOUNDARY: &str = "rentalsBoundary42";

fn multipart(files: &[&str]) -> Body {
    let mut out = Vec::new();
    for name in files {
        out.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        out.extend_from_slice(b"\xff\xd8\xff\xe0fake-jpeg");
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Body::from(out)
}

fn upload(app: &TestApp, cookie: &str, files: &[&str], htmx: bool) -> Response {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    let mut headers = vec![("Content-Type", content_type.as_str())];
    if htmx {
        headers.push(("HX-Request", "true"));
    }
    app.send(
        Method::POST,
        "/admin/listings/images",
        Some(cookie),
        &headers,
        multipart(files),
    )
}

fn draft_paths(app: &TestApp) -> Vec<String> {
    app.state
        .db
        .with_conn(|conn| load_draft_images(conn, "admin-1"))
        .unwrap()
        .into_iter()
        .map(|i| i.path)
        .collect()
}

#[test]
fn htmx_upload_returns_uploader_fragment() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let resp = upload(&app, &cookie, &["living.jpg", "kitchen.jpg"], true);
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(!body.contains("<html"));
    assert!(body.contains(r#"id="image-uploader""#));
    assert!(body.contains("2 / 10 images"));
    assert!(body.contains("Uploaded 2 of 2"));
    // thumbnails go through the image proxy
    assert!(body.contains("https://img.test/insecure/rs:fit:cover:300:300:80/plain/"));

    assert_eq!(draft_paths(&app), app.storage.objects());
}

#[test]
fn plain_upload_renders_full_page() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let body = body_text(upload(&app, &cookie, &["a.jpg"], false));
    assert!(body.contains("<html"));
    assert!(body.contains("Create New Listing"));
    assert!(body.contains("1 / 10 images"));
}

#[test]
fn over_limit_upload_stores_nothing() {
    let app = TestApp::with_max_images(2);
    let cookie = app.sign_in();

    upload(&app, &cookie, &["a.jpg"], true);
    let body = body_text(upload(&app, &cookie, &["b.jpg", "c.jpg"], true));

    assert!(body.contains("You can only upload a maximum of 2 images."));
    assert_eq!(app.storage.upload_attempts(), 1);
    assert_eq!(draft_paths(&app).len(), 1);
}

#[test]
fn partial_failure_keeps_earlier_images() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    app.storage.fail_upload_at(1);

    let body = body_text(upload(&app, &cookie, &["a.jpg", "b.jpg", "c.jpg"], true));

    assert!(body.contains("Failed to upload images. Please try again."));
    assert!(body.contains("Uploaded 1 of 3"));
    assert_eq!(draft_paths(&app).len(), 1);
}

#[test]
fn draft_survives_between_requests() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    upload(&app, &cookie, &["a.jpg"], true);

    let body = body_text(app.get("/admin/listings/new", Some(&cookie)));
    assert!(body.contains("1 / 10 images"));
}

#[test]
fn remove_deletes_from_storage_and_draft() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    upload(&app, &cookie, &["a.jpg", "b.jpg"], true);
    let paths = draft_paths(&app);

    let resp = app.send(
        Method::POST,
        "/admin/listings/images/delete",
        Some(&cookie),
        &[
            ("Content-Type", "application/x-www-form-urlencoded"),
            ("HX-Request", "true"),
        ],
        Body::from(format!("path={}", paths[0]).into_bytes()),
    );
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).contains("1 / 10 images"));

    assert_eq!(app.storage.removed(), vec![paths[0].clone()]);
    assert_eq!(draft_paths(&app), vec![paths[1].clone()]);
}

#[test]
fn failed_remove_keeps_draft() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    upload(&app, &cookie, &["a.jpg"], true);
    let paths = draft_paths(&app);
    app.storage.fail_removes(true);

    let body = body_text(app.post_form(
        "/admin/listings/images/delete",
        Some(&cookie),
        &format!("path={}", paths[0]),
    ));

    assert!(body.contains("Failed to remove image. Please try again."));
    assert_eq!(draft_paths(&app), paths);
}

#[test]
fn creating_listing_clears_draft() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    upload(&app, &cookie, &["a.jpg"], true);

    let form = "title=Sunny+1BR+in+Astoria&description=Bright+one+bedroom+near+the+trains.\
        &neighborhood=Astoria&borough=Queens&address=31-10+Ditmars+Blvd&zipCode=11105\
        &propertyType=Apartment&bedrooms=1&bathrooms=1&squareFeet=700&price=2400\
        &leaseLength=12&availableFrom=2025-05-01&status=available";
    let resp = app.post_form("/admin/listings", Some(&cookie), form);
    assert_eq!(resp.status(), 302);

    assert!(draft_paths(&app).is_empty());
    // storage objects are left in place
    assert_eq!(app.storage.objects().len(), 1);
}

#[test]
fn upload_requires_multipart() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    let resp = app.post_form("/admin/listings/images", Some(&cookie), "images=a.jpg");
    assert_eq!(resp.status(), 400);
}
