//! Defines functions for reading and minting the session cookie.

use axum_extra::extract::{
    CookieJar,
    cookie::Cookie,
};
use time::Duration;

use super::SessionId;

/// The name of the cookie that holds the session ID.
pub const COOKIE_SESSION_ID: &str = "sessionId";
/// The default duration for which a newly minted session cookie is valid.
pub const DEFAULT_SESSION_DURATION: Duration = Duration::days(7);

/// Get the session ID from the cookie jar, if there is one.
///
/// A cookie with an empty value is treated as missing.
pub fn get_session_id(jar: &CookieJar) -> Option<SessionId> {
    jar.get(COOKIE_SESSION_ID)
        .and_then(|cookie| SessionId::new(cookie.value_trimmed()))
}

/// Get the session ID from the cookie jar, or mint a new one.
///
/// When a new session ID is minted it is added to the returned jar as a
/// cookie on the path "/" with a max age of `duration`. If the jar already
/// holds a session ID it is returned unchanged, so no `Set-Cookie` header is
/// sent.
pub fn get_or_create_session_id(jar: CookieJar, duration: Duration) -> (CookieJar, SessionId) {
    if let Some(session_id) = get_session_id(&jar) {
        return (jar, session_id);
    }

    let session_id = SessionId::generate();
    tracing::info!("Starting a new session");

    let jar = jar.add(
        Cookie::build((COOKIE_SESSION_ID, session_id.to_string()))
            .path("/")
            .max_age(duration),
    );

    (jar, session_id)
}
