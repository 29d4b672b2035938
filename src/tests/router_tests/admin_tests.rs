use crate::tests::utils::{body_text, header, TestApp};

#[test]
fn admin_routes_redirect_to_login_without_session() {
    let app = TestApp::new();
    for uri in ["/admin", "/admin/dashboard", "/admin/listings/new", "/admin/anything"] {
        let resp = app.get(uri, None);
        assert_eq!(resp.status(), 302, "{uri}");
        assert_eq!(header(&resp, "Location"), Some("/admin/login"), "{uri}");
    }

    let resp = app.post_form("/admin/listings", None, "title=Sneaky");
    assert_eq!(header(&resp, "Location"), Some("/admin/login"));
}

#[test]
fn garbage_cookie_is_treated_as_signed_out() {
    let app = TestApp::new();
    let resp = app.get("/admin/dashboard", Some("session=not-a-real-token"));
    assert_eq!(header(&resp, "Location"), Some("/admin/login"));
}

#[test]
fn admin_root_goes_to_dashboard() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    let resp = app.get("/admin", Some(&cookie));
    assert_eq!(header(&resp, "Location"), Some("/admin/dashboard"));
}

#[test]
fn dashboard_overview_shows_mock_stats() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let resp = app.get("/admin/dashboard", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Total Listings"));
    assert!(body.contains("Recent Inquiries"));
    assert!(body.contains("John Smith"));
    assert!(body.contains("View Site"));
    assert!(body.contains(r#"action="/auth/sign-out""#));
}

#[test]
fn dashboard_tabs_switch_content() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let body = body_text(app.get("/admin/dashboard?tab=inquiries", Some(&cookie)));
    assert!(body.contains("All Inquiries"));
    assert!(!body.contains("Total Listings"));
    assert!(body.contains(r#"id="inquiry-1""#));
    assert!(body.contains("(212) 555-0147"));
    assert!(body.contains("<th>Message</th>"));

    let body = body_text(app.get("/admin/dashboard?tab=settings", Some(&cookie)));
    assert!(body.contains("property-images"));

    // unknown tab falls back to the overview
    let body = body_text(app.get("/admin/dashboard?tab=bogus", Some(&cookie)));
    assert!(body.contains("Total Listings"));
}

#[test]
fn new_listing_page_has_form_and_uploader() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let resp = app.get("/admin/listings/new", Some(&cookie));
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Create New Listing"));
    assert!(body.contains(r#"id="image-uploader""#));
    assert!(body.contains(r#"hx-encoding="multipart/form-data""#));
    assert!(body.contains("0 / 10 images"));
    assert!(body.contains(r#"name="leaseLength" value="12""#));
}

#[test]
fn invalid_listing_rerenders_with_errors() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let resp = app.post_form("/admin/listings", Some(&cookie), "title=Flat&status=available");
    assert_eq!(resp.status(), 422);

    let body = body_text(resp);
    assert!(body.contains("Title must be at least 5 characters"));
    assert!(body.contains("Description must be at least 20 characters"));
    assert!(body.contains("Borough is required"));
}

#[test]
fn valid_listing_redirects_to_listings_tab() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let form = [
        "title=Sunny+1BR+in+Astoria",
        "description=Bright+one+bedroom+near+the+N%2FW+trains.",
        "neighborhood=Astoria",
        "borough=Queens",
        "address=31-10+Ditmars+Blvd",
        "zipCode=11105",
        "propertyType=Apartment",
        "bedrooms=1",
        "bathrooms=1",
        "squareFeet=700",
        "price=2400",
        "leaseLength=12",
        "availableFrom=2025-05-01",
        "status=available",
        "amenities=Dishwasher",
        "amenities=Elevator",
    ]
    .join("&");

    let resp = app.post_form("/admin/listings", Some(&cookie), &form);
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), Some("/admin/dashboard?tab=listings"));
}
