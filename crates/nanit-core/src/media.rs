//! Connection URL construction for the media endpoints.
//!
//! Pure, side-effect-free formatting over given state. [`SessionManager`]
//! exposes wrappers that inject its current access token.
//!
//! [`SessionManager`]: crate::SessionManager

use crate::auth::AccessToken;
use crate::types::BabyUid;

/// Host serving authenticated RTMPS streams.
pub const SECURED_MEDIA_HOST: &str = "media-secured.nanit.com";

/// Host serving the real-time control channel.
pub const REALTIME_API_HOST: &str = "api.nanit.com";

/// Build the streaming-media connection URL for a device.
///
/// The access token is embedded by value, so any URL produced here becomes
/// stale the instant a refresh rotates tokens. Callers must regenerate the
/// URL after every refresh.
pub fn stream_url(uid: &BabyUid, token: &AccessToken) -> String {
    format!(
        "rtmps://{}/nanit/{}.{}",
        SECURED_MEDIA_HOST,
        uid,
        token.as_str()
    )
}

/// Build the real-time control-channel URL for a device.
///
/// No token is embedded; the URL is unaffected by token rotation.
pub fn websocket_url(uid: &BabyUid) -> String {
    format!("wss://{}/focus/cameras/{}/user_connect", REALTIME_API_HOST, uid)
}
