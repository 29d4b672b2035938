use crate::tests::utils::{body_text, header, TestApp};

#[test]
fn home_page_shows_featured_and_popular() {
    let app = TestApp::new();
    let resp = app.get("/", None);
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Featured Listings"));
    assert!(body.contains("Modern 2BR in Chelsea"));
    assert!(body.contains("Popular Neighborhoods"));
    assert!(body.contains("Williamsburg"));
    assert!(body.contains(r#"action="/listings""#));
}

#[test]
fn stylesheet_is_served() {
    let app = TestApp::new();
    let resp = app.get("/static/main.css", None);
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), Some("text/css; charset=utf-8"));
}

#[test]
fn unfiltered_listings_show_whole_catalog() {
    let app = TestApp::new();
    let body = body_text(app.get("/listings", None));
    assert!(body.contains("6 listings found"));
}

#[test]
fn borough_filter_narrows_results() {
    let app = TestApp::new();
    let body = body_text(app.get("/listings?location=Brooklyn&bedrooms=&minPrice=", None));
    assert!(body.contains("2 listings found"));
    assert!(body.contains(r#"href="/listings/2""#));
    assert!(body.contains(r#"href="/listings/5""#));
    assert!(!body.contains(r#"href="/listings/1""#));
}

#[test]
fn studio_filter_matches_only_studios() {
    let app = TestApp::new();
    let body = body_text(app.get("/listings?bedrooms=studio", None));
    assert!(body.contains("1 listing found"));
    assert!(body.contains(r#"href="/listings/4""#));
}

#[test]
fn empty_result_shows_message() {
    let app = TestApp::new();
    let body = body_text(app.get("/listings?maxPrice=100", None));
    assert!(body.contains("0 listings found"));
    assert!(body.contains("No listings match your filters."));
}

#[test]
fn malformed_price_is_a_bad_request() {
    let app = TestApp::new();
    let resp = app.get("/listings?minPrice=cheap", None);
    assert_eq!(resp.status(), 400);
}

#[test]
fn detail_page_prefills_inquiry() {
    let app = TestApp::new();
    let resp = app.get("/listings/1", None);
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Modern 2BR in Chelsea"));
    assert!(body.contains("Request Information"));
    assert!(body.contains("interested in this 2 bedroom apartment in Chelsea."));
}

#[test]
fn out_of_range_image_index_shows_the_cover() {
    let app = TestApp::new();
    let cover = body_text(app.get("/listings/1", None));
    let last = body_text(app.get("/listings/1?image=3", None));

    let resp = app.get("/listings/1?image=99", None);
    assert_eq!(resp.status(), 200);
    let out_of_range = body_text(resp);
    assert_eq!(out_of_range, cover);
    assert_ne!(out_of_range, last);

    assert_eq!(body_text(app.get("/listings/1?image=abc", None)), cover);
}

#[test]
fn unknown_listing_is_not_found() {
    let app = TestApp::new();
    let resp = app.get("/listings/999", None);
    assert_eq!(resp.status(), 404);
    assert!(body_text(resp).contains("Not Found"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = TestApp::new();
    assert_eq!(app.get("/nope", None).status(), 404);
}
