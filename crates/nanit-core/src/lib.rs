//! nanit-core - Session and authentication core for the Nanit cloud API.
//!
//! This library owns the login / MFA / token-refresh lifecycle for one
//! device-account session. All network I/O goes through the [`Transport`]
//! trait so the state machine can be driven against any HTTP backend.
//!
//! # Example
//!
//! ```no_run
//! use nanit_core::{Credentials, SessionManager};
//! # use nanit_core::{Result, Transport, TransportResponse};
//! # use async_trait::async_trait;
//! # struct MyTransport;
//! # #[async_trait]
//! # impl Transport for MyTransport {
//! #     async fn post_json(&self, _: &str, _: &serde_json::Value, _: &[(&str, String)]) -> Result<TransportResponse> { unimplemented!() }
//! #     async fn get_json(&self, _: &str, _: &[(&str, String)], _: &[(&str, String)]) -> Result<TransportResponse> { unimplemented!() }
//! # }
//!
//! # async fn example() -> Result<()> {
//! let mut session = SessionManager::new(MyTransport);
//! let credentials = Credentials::new("alice@example.com", "password");
//!
//! // The server emails a one-time code; the MFA token links the two calls.
//! let mfa_token = session.initiate_login(&credentials).await?;
//! let code = "123456"; // collected from the user out-of-band
//! session.complete_login(&credentials, &mfa_token, code).await?;
//!
//! let babies = session.babies().await?;
//! println!("{babies}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod media;
pub mod session;
pub mod transport;
pub mod types;
pub mod wire;

pub use auth::{AccessToken, Credentials, MfaToken, RefreshToken, TokenPair};
pub use error::Error;
pub use session::SessionManager;
pub use transport::{Transport, TransportResponse};
pub use types::{ApiUrl, BabyUid};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
