// src/auth/sessions.rs
use crate::auth::identity::ProviderSession;
use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_COOKIE: &str = "session";

/// A signed-in admin, as loaded from the session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub id: i64,
    pub user_id: String,
    pub email: Option<String>,
    /// Provider token, kept for sign-out.
    pub access_token: String,
}

/// Store a new local session for a provider session; returns the raw
/// cookie token (only its hash is persisted).
pub fn create_session(
    conn: &Connection,
    provider: &ProviderSession,
    now: i64,
    ttl_secs: i64,
) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);
    let expires_at = now + ttl_secs;

    conn.execute(
        r#"
        insert into sessions (user_id, email, access_token, token_hash, created_at, expires_at)
        values (?, ?, ?, ?, ?, ?)
        "#,
        params![
            provider.user.id,
            provider.user.email,
            provider.access_token,
            hash.as_slice(),
            now,
            expires_at
        ],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<AdminSession>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select id, user_id, email, access_token
        from sessions
        where token_hash = ?
          and expires_at > ?
          and revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(AdminSession {
                id: row.get(0)?,
                user_id: row.get(1)?,
                email: row.get(2)?,
                access_token: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, session_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update sessions set revoked_at = ? where id = ? and revoked_at is null",
        params![now, session_id],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Pull the session token out of a `Cookie` header value.
pub fn session_token_from_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

pub fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
