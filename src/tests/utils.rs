use crate::config::Config;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use crate::tests::fakes::{FakeIdentity, MemoryStore, ADMIN_EMAIL, ADMIN_PASSWORD, FAKE_STORAGE_ORIGIN};
use astra::{Body, Response};
use http::{Method, Request};
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use tempfile::TempDir;

/// Fresh database in its own temp dir; keep the dir alive for the test.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
    let path = dir.path().join("test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub fn test_config(max_images: usize) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("SUPABASE_URL", FAKE_STORAGE_ORIGIN.to_string()),
        ("SUPABASE_ANON_KEY", "anon-key".to_string()),
        ("IMGPROXY_URL", "https://img.test".to_string()),
        ("SUBMIT_DELAY_MS", "0".to_string()),
        ("MAX_IMAGES", max_images.to_string()),
    ]);
    Config::from_lookup(|name| vars.get(name).cloned()).expect("test config")
}

/// App wired to in-memory backends.
pub struct TestApp {
    _dir: TempDir,
    pub state: AppState,
    pub storage: Arc<MemoryStore>,
    pub identity: Arc<FakeIdentity>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_max_images(10)
    }

    pub fn with_max_images(max_images: usize) -> Self {
        let (dir, db) = init_test_db();
        let storage = Arc::new(MemoryStore::default());
        let identity = Arc::new(FakeIdentity::default());

        let state = AppState::new(test_config(max_images), db, storage.clone(), identity.clone());
        state.images.initialize().expect("bucket setup");

        Self {
            _dir: dir,
            state,
            storage,
            identity,
        }
    }

    pub fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        self.send(Method::GET, uri, cookie, &[], Body::empty())
    }

    pub fn post_form(&self, uri: &str, cookie: Option<&str>, body: &str) -> Response {
        self.send(
            Method::POST,
            uri,
            cookie,
            &[("Content-Type", "application/x-www-form-urlencoded")],
            Body::from(body.as_bytes().to_vec()),
        )
    }

    pub fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        headers: &[(&str, &str)],
        body: Body,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let req = builder.body(body).expect("request");

        handle(req, &self.state).unwrap_or_else(crate::responses::html_error_response)
    }

    /// Sign in through the router and return the `name=value` cookie pair.
    pub fn sign_in(&self) -> String {
        let body = format!("email={ADMIN_EMAIL}&password={ADMIN_PASSWORD}");
        let resp = self.post_form("/auth/sign-in", None, &body);
        assert_eq!(resp.status(), 302);

        let set_cookie = header(&resp, "Set-Cookie").expect("session cookie");
        set_cookie
            .split(';')
            .next()
            .map(str::to_string)
            .expect("cookie pair")
    }
}

pub fn header<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn body_text(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("read body");
    body
}
