use crate::auth::sessions::SESSION_COOKIE;
use crate::tests::fakes::{ADMIN_EMAIL, GOOD_TOKEN_HASH};
use crate::tests::utils::{body_text, header, TestApp};
use http::Method;
use astra::Body;

#[test]
fn login_page_loads() {
    let app = TestApp::new();
    let resp = app.get("/admin/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_text(resp);
    assert!(body.contains("Admin Sign In"));
    assert!(body.contains(r#"action="/auth/sign-in""#));
}

#[test]
fn sign_in_sets_http_only_cookie_and_redirects() {
    let app = TestApp::new();
    let resp = app.post_form(
        "/auth/sign-in",
        None,
        &format!("email={ADMIN_EMAIL}&password=correct-horse"),
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), Some("/admin/dashboard"));

    let cookie = header(&resp, "Set-Cookie").unwrap();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(cookie.contains("HttpOnly"));
}

#[test]
fn wrong_password_shows_provider_message() {
    let app = TestApp::new();
    let resp = app.post_form(
        "/auth/sign-in",
        None,
        &format!("email={ADMIN_EMAIL}&password=guess"),
    );

    assert_eq!(resp.status(), 401);
    assert!(header(&resp, "Set-Cookie").is_none());

    let body = body_text(resp);
    assert!(body.contains("Invalid login credentials"));
    assert!(body.contains(ADMIN_EMAIL));
}

#[test]
fn provider_outage_on_sign_in_is_bad_gateway() {
    let app = TestApp::new();
    app.identity.go_offline();

    let resp = app.post_form(
        "/auth/sign-in",
        None,
        &format!("email={ADMIN_EMAIL}&password=correct-horse"),
    );

    assert_eq!(resp.status(), 502);
    assert!(header(&resp, "Set-Cookie").is_none());

    let body = body_text(resp);
    assert!(body.contains("Unable to sign in right now"));
    assert!(!body.contains("connection refused"));
}

#[test]
fn provider_outage_on_callback_is_bad_gateway() {
    let app = TestApp::new();
    app.identity.go_offline();

    let resp = app.get(&format!("/auth/callback?token_hash={GOOD_TOKEN_HASH}&type=email"), None);
    assert_eq!(resp.status(), 502);
    assert!(body_text(resp).contains("Authentication Error"));
}

#[test]
fn blank_credentials_are_rejected_locally() {
    let app = TestApp::new();
    let resp = app.post_form("/auth/sign-in", None, "email=&password=");
    assert_eq!(resp.status(), 422);
    assert!(body_text(resp).contains("Email and password are required"));
}

#[test]
fn signed_in_admin_skips_login_page() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    let resp = app.get("/admin/login", Some(&cookie));
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), Some("/admin/dashboard"));
}

#[test]
fn callback_with_valid_token_starts_session() {
    let app = TestApp::new();
    let resp = app.get(
        &format!("/auth/callback?token_hash={GOOD_TOKEN_HASH}&type=email"),
        None,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), Some("/"));
    let cookie = header(&resp, "Set-Cookie").unwrap().split(';').next().unwrap().to_string();

    assert_eq!(app.get("/admin/dashboard", Some(&cookie)).status(), 200);
}

#[test]
fn callback_failure_shows_error_page() {
    let app = TestApp::new();
    let resp = app.get("/auth/callback?token_hash=stale&type=email", None);

    assert_eq!(resp.status(), 401);
    let body = body_text(resp);
    assert!(body.contains("Authentication Error"));
    assert!(body.contains("Email link is invalid or has expired"));
    assert!(body.contains("Back to Sign In"));
    assert!(body.contains(r#"href="/admin/login""#));
}

#[test]
fn callback_passes_provider_error_through() {
    let app = TestApp::new();
    let resp = app.get(
        "/auth/callback?error=access_denied&error_description=Link+expired",
        None,
    );
    assert_eq!(resp.status(), 401);
    assert!(body_text(resp).contains("Link expired"));
}

#[test]
fn sign_out_revokes_session_and_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.sign_in();

    let resp = app.send(Method::POST, "/auth/sign-out", Some(&cookie), &[], Body::empty());
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), Some("/"));
    assert!(header(&resp, "Set-Cookie").unwrap().contains("Max-Age=0"));
    assert_eq!(app.identity.signed_out(), vec!["provider-access-token".to_string()]);

    // the old cookie no longer opens admin pages
    let resp = app.get("/admin/dashboard", Some(&cookie));
    assert_eq!(header(&resp, "Location"), Some("/admin/login"));
}

#[test]
fn provider_sign_out_failure_still_signs_out_locally() {
    let app = TestApp::new();
    let cookie = app.sign_in();
    app.identity.fail_sign_out(true);

    let resp = app.send(Method::POST, "/auth/sign-out", Some(&cookie), &[], Body::empty());
    assert_eq!(resp.status(), 302);

    let resp = app.get("/admin/dashboard", Some(&cookie));
    assert_eq!(resp.status(), 302);
}

#[test]
fn sign_out_without_session_just_redirects() {
    let app = TestApp::new();
    let resp = app.send(Method::POST, "/auth/sign-out", None, &[], Body::empty());
    assert_eq!(resp.status(), 302);
    assert!(app.identity.signed_out().is_empty());
}
