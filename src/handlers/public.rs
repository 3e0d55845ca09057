use axum::{Form, extract::State, response::Html};
use tracing::{info, instrument};

use crate::SiteError;
use crate::db::{DocumentKind, NewApplication, repo};
use crate::middleware::DbConn;
use crate::server::router::SiteState;
use crate::service::today;
use crate::views::{self, Flash};

pub async fn home() -> Html<String> {
    views::home_page()
}

#[instrument(skip_all)]
pub async fn notices(DbConn(mut conn): DbConn) -> Result<Html<String>, SiteError> {
    let docs = repo::list_documents(&mut conn, DocumentKind::Notice).await?;
    Ok(views::documents_page(DocumentKind::Notice, &docs))
}

#[instrument(skip_all)]
pub async fn results(DbConn(mut conn): DbConn) -> Result<Html<String>, SiteError> {
    let docs = repo::list_documents(&mut conn, DocumentKind::Result).await?;
    Ok(views::documents_page(DocumentKind::Result, &docs))
}

pub async fn apply_form() -> Html<String> {
    views::apply_page(None)
}

#[instrument(skip_all)]
pub async fn submit_application(
    State(state): State<SiteState>,
    Form(form): Form<NewApplication>,
) -> Result<Html<String>, SiteError> {
    let mut conn = state.storage.acquire().await?;
    let id = repo::insert_application(&mut conn, &form, &today()).await?;
    info!(id, post = %form.post, "application received");
    Ok(views::apply_page(Some(&Flash::success(
        "Application Submitted Successfully",
    ))))
}
