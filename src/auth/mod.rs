pub mod identity;
pub mod sessions;
pub mod token;

pub use identity::{CallbackParams, IdentityProvider, ProviderSession, SupabaseAuth};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider refused the credentials or the callback token.
    #[error("{0}")]
    Rejected(String),
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("unexpected identity response: {0}")]
    Decode(String),
}
