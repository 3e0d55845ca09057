use axum::body::Bytes;
use axum::extract::Multipart;
use sqlx::SqliteConnection;

use crate::db::{DocumentKind, repo};
use crate::error::SiteError;
use crate::service::file_store::{self, FileStore};
use crate::service::today;

/// The `title` and `file` parts of an upload form.
#[derive(Debug)]
pub struct UploadForm {
    pub title: String,
    pub filename: String,
    pub body: Bytes,
}

#[derive(Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Stored { id: i64, filename: String },
    Rejected { reason: &'static str },
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, SiteError> {
        let mut title = None;
        let mut file = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("title") => title = Some(field.text().await?),
                Some("file") => {
                    let filename = field.file_name().unwrap_or_default().to_owned();
                    let body = field.bytes().await?;
                    file = Some((filename, body));
                }
                _ => {}
            }
        }

        let title = title.ok_or(SiteError::MissingField("title"))?;
        let (filename, body) = file.ok_or(SiteError::MissingField("file"))?;
        Ok(Self {
            title,
            filename,
            body,
        })
    }
}

/// Store the uploaded PDF and record it under `kind`.
///
/// Files failing the extension check, or whose name sanitizes to nothing, are
/// rejected without touching the disk or the table.
pub async fn publish(
    store: &FileStore,
    conn: &mut SqliteConnection,
    kind: DocumentKind,
    form: UploadForm,
) -> Result<UploadOutcome, SiteError> {
    if !file_store::is_allowed(&form.filename) {
        return Ok(UploadOutcome::Rejected {
            reason: "extension not allowed",
        });
    }
    let Some(filename) = file_store::secure_filename(&form.filename) else {
        return Ok(UploadOutcome::Rejected {
            reason: "filename is empty after sanitizing",
        });
    };

    store.save(&filename, &form.body).await?;
    let id = repo::insert_document(conn, kind, &form.title, &filename, &today()).await?;

    Ok(UploadOutcome::Stored { id, filename })
}
