//! Command implementations.

pub mod babies;
pub mod events;
pub mod login;
pub mod logout;
pub mod messages;
pub mod refresh;
pub mod urls;
