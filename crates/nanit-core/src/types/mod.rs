//! Core Nanit API types.
//!
//! These types enforce their invariants at construction time, ensuring
//! invalid states are unrepresentable.

mod api_url;
mod baby_uid;

pub use api_url::{ApiUrl, PRODUCTION_API_ROOT};
pub use baby_uid::BabyUid;
