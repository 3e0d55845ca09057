use axum::{
    extract::{Multipart, State},
    response::{Html, Redirect},
};
use tracing::{info, instrument, warn};

use crate::SiteError;
use crate::db::{DocumentKind, repo};
use crate::middleware::{DbConn, SessionUser};
use crate::server::router::SiteState;
use crate::service::documents::{self, UploadForm, UploadOutcome};
use crate::views;

const DASHBOARD_PATH: &str = "/admin";

#[instrument(skip_all)]
pub async fn dashboard(
    SessionUser(user): SessionUser,
    DbConn(mut conn): DbConn,
) -> Result<Html<String>, SiteError> {
    let applications = repo::list_applications(&mut conn).await?;
    Ok(views::dashboard_page(&user, &applications))
}

pub async fn upload_notice(
    State(state): State<SiteState>,
    multipart: Multipart,
) -> Result<Redirect, SiteError> {
    upload(&state, DocumentKind::Notice, multipart).await
}

pub async fn upload_result(
    State(state): State<SiteState>,
    multipart: Multipart,
) -> Result<Redirect, SiteError> {
    upload(&state, DocumentKind::Result, multipart).await
}

/// Rejected files get no feedback beyond the redirect; the reason is logged.
#[instrument(skip_all, fields(table = kind.table()))]
async fn upload(
    state: &SiteState,
    kind: DocumentKind,
    multipart: Multipart,
) -> Result<Redirect, SiteError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let submitted = form.filename.clone();

    let mut conn = state.storage.acquire().await?;
    match documents::publish(&state.uploads, &mut conn, kind, form).await? {
        UploadOutcome::Stored { id, filename } => {
            info!(id, %filename, "document published");
        }
        UploadOutcome::Rejected { reason } => {
            warn!(filename = %submitted, reason, "upload ignored");
        }
    }
    Ok(Redirect::to(DASHBOARD_PATH))
}
