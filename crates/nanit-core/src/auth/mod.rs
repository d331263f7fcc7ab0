//! Authentication primitives: credentials, bearer tokens, MFA handles.

mod credentials;
mod mfa;
mod tokens;

pub use credentials::Credentials;
pub use mfa::MfaToken;
pub use tokens::{AccessToken, RefreshToken, TokenPair};
