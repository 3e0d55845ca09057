use axum::extract::{FromRef, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use tracing::debug;

pub const SESSION_COOKIE: &str = "noticeboard_session";
pub const LOGIN_PATH: &str = "/login";

/// Path prefixes that need a signed-in session: the dashboard and the
/// upload actions. `/uploads/<file>` downloads stay public.
const PROTECTED_PREFIXES: [&str; 2] = ["/admin", "/upload_"];

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Username stored in the encrypted session cookie, if any.
pub fn session_user(jar: &PrivateCookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn start_session(jar: PrivateCookieJar, username: &str, secure: bool) -> PrivateCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, username.to_owned()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

pub fn end_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}

/// Gate run before every route: protected paths without a session are sent
/// to the login page and never reach their handler.
pub async fn require_login(jar: PrivateCookieJar, req: Request, next: Next) -> Response {
    if is_protected(req.uri().path()) && session_user(&jar).is_none() {
        debug!(path = %req.uri().path(), "no session; redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    }
    next.run(req).await
}

/// The signed-in admin, for handlers that display who is logged in.
#[derive(Debug, Clone)]
pub struct SessionUser(pub String);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});
        session_user(&jar)
            .map(SessionUser)
            .ok_or_else(|| Redirect::to(LOGIN_PATH).into_response())
    }
}
