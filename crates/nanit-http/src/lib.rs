//! nanit-http - reqwest-backed transport for the Nanit cloud API.
//!
//! Provides [`HttpTransport`], the production implementation of
//! [`nanit_core::Transport`], for use with
//! [`nanit_core::SessionManager`].

mod transport;

pub use transport::HttpTransport;
