use crate::tests::utils::{body_text, TestApp};

#[test]
fn contact_page_renders_form() {
    let app = TestApp::new();
    let body = body_text(app.get("/contact", None));
    assert!(body.contains("Contact Us"));
    assert!(body.contains(r#"action="/contact""#));
}

#[test]
fn invalid_contact_rerenders_with_field_errors() {
    let app = TestApp::new();
    let resp = app.post_form("/contact", None, "name=&email=nope&message=short");
    assert_eq!(resp.status(), 422);

    let body = body_text(resp);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Message must be at least 10 characters"));
    // typed values survive the round trip
    assert!(body.contains(r#"value="nope""#));
}

#[test]
fn valid_contact_shows_thank_you() {
    let app = TestApp::new();
    let resp = app.post_form(
        "/contact",
        None,
        "name=Jane+Doe&email=jane%40example.com&phone=&message=Looking+for+a+2BR+in+Chelsea",
    );
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Thank you for contacting us!"));
    assert!(body.contains("Send another message"));
}

#[test]
fn inquiry_requires_name_and_email() {
    let app = TestApp::new();
    let resp = app.post_form("/listings/2/inquiries", None, "name=&email=&message=Hello");
    assert_eq!(resp.status(), 422);

    let body = body_text(resp);
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(!body.contains("Message is required"));
}

#[test]
fn valid_inquiry_shows_confirmation() {
    let app = TestApp::new();
    let resp = app.post_form(
        "/listings/2/inquiries",
        None,
        "name=Sam&email=sam%40example.com&message=Is+it+still+available%3F",
    );
    assert_eq!(resp.status(), 200);
    assert!(body_text(resp).contains("Thank you for your inquiry!"));
}

#[test]
fn inquiry_for_unknown_listing_is_not_found() {
    let app = TestApp::new();
    let resp = app.post_form("/listings/42/inquiries", None, "name=Sam");
    assert_eq!(resp.status(), 404);
}
