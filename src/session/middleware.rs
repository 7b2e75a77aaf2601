//! Middleware that only lets requests with a session cookie through.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{Error, session::get_session_id};

/// Middleware function that checks for a session cookie.
///
/// The session ID is placed into the request and the request executed
/// normally if the cookie is present, otherwise a 401 Unauthorized response is
/// returned and the route handler never runs.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session_id): Extension<SessionId>` to receive the session ID.
pub async fn require_session(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let Some(session_id) = get_session_id(&jar) else {
        tracing::info!(
            "Rejecting {} {}: missing session cookie",
            request.method(),
            request.uri()
        );
        return Error::MissingSession.into_response();
    };

    request.extensions_mut().insert(session_id);
    next.run(request).await
}
