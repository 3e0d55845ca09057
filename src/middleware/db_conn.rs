use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::Sqlite;
use sqlx::pool::PoolConnection;

use crate::error::SiteError;
use crate::server::router::SiteState;

/// One pooled connection checked out for the lifetime of a request.
/// Dropping it returns the connection to the pool on every exit path.
///
/// Only for handlers without a request body. Handlers that read a form call
/// [`SiteStorage::acquire`](crate::db::SiteStorage::acquire) once the body is
/// in, so a stalled upload never holds a connection.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<SiteState> for DbConn {
    type Rejection = SiteError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &SiteState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.storage.acquire().await?;
        Ok(Self(conn))
    }
}
