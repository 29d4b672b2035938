// src/auth/identity.rs
use crate::auth::AuthError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// What the identity provider hands back after sign-in or a callback exchange.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: ProviderUser,
}

/// Query parameters the provider appends when redirecting to `/auth/callback`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallbackParams {
    pub token_hash: Option<String>,
    pub kind: Option<String>,
    pub error_description: Option<String>,
}

pub trait IdentityProvider: Send + Sync {
    fn sign_in_with_password(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError>;

    /// Turn the callback's one-time token into a session.
    fn exchange_session(&self, params: &CallbackParams) -> Result<ProviderSession, AuthError>;

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

/// Blocking client for a Supabase-compatible auth REST API.
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyOtp<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    token_hash: &'a str,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

impl SupabaseAuth {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, AuthError> {
        let resp = req
            .header("apikey", &self.api_key)
            .send()
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("identity provider returned {status}"));

        if status.is_client_error() {
            Err(AuthError::Rejected(message))
        } else {
            Err(AuthError::Request(message))
        }
    }

    fn read_session(resp: Response) -> Result<ProviderSession, AuthError> {
        resp.json().map_err(|e| AuthError::Decode(e.to_string()))
    }
}

impl IdentityProvider for SupabaseAuth {
    fn sign_in_with_password(&self, email: &str, password: &str) -> Result<ProviderSession, AuthError> {
        let req = self
            .client
            .post(self.endpoint("token?grant_type=password"))
            .json(&PasswordGrant { email, password });
        Self::read_session(self.send(req)?)
    }

    fn exchange_session(&self, params: &CallbackParams) -> Result<ProviderSession, AuthError> {
        if let Some(description) = &params.error_description {
            return Err(AuthError::Rejected(description.clone()));
        }

        let (Some(token_hash), Some(kind)) = (&params.token_hash, &params.kind) else {
            return Err(AuthError::Rejected("missing authentication code".into()));
        };

        let req = self.client.post(self.endpoint("verify")).json(&VerifyOtp {
            kind,
            token_hash,
        });
        Self::read_session(self.send(req)?)
    }

    fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let req = self
            .client
            .post(self.endpoint("logout"))
            .bearer_auth(access_token);
        self.send(req)?;
        Ok(())
    }
}
