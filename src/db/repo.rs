//! Queries run on the connection a request checked out of the pool.

use sqlx::SqliteConnection;

use crate::db::models::{Application, Document, DocumentKind, NewApplication, User};
use crate::error::SiteError;

pub async fn find_user(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, SiteError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(user)
}

/// All documents of one kind, newest first.
pub async fn list_documents(
    conn: &mut SqliteConnection,
    kind: DocumentKind,
) -> Result<Vec<Document>, SiteError> {
    let sql = format!(
        "SELECT id, title, filename, date FROM {} ORDER BY id DESC",
        kind.table()
    );
    let rows = sqlx::query_as::<_, Document>(&sql)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// Returns the new row id.
pub async fn insert_document(
    conn: &mut SqliteConnection,
    kind: DocumentKind,
    title: &str,
    filename: &str,
    date: &str,
) -> Result<i64, SiteError> {
    let sql = format!(
        "INSERT INTO {} (title, filename, date) VALUES (?, ?, ?)",
        kind.table()
    );
    let done = sqlx::query(&sql)
        .bind(title)
        .bind(filename)
        .bind(date)
        .execute(&mut *conn)
        .await?;
    Ok(done.last_insert_rowid())
}

pub async fn insert_application(
    conn: &mut SqliteConnection,
    app: &NewApplication,
    created_at: &str,
) -> Result<i64, SiteError> {
    let done = sqlx::query(
        r#"
        INSERT INTO applications (name, email, phone, post, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&app.name)
    .bind(&app.email)
    .bind(&app.phone)
    .bind(&app.post)
    .bind(created_at)
    .execute(&mut *conn)
    .await?;
    Ok(done.last_insert_rowid())
}

pub async fn list_applications(
    conn: &mut SqliteConnection,
) -> Result<Vec<Application>, SiteError> {
    let rows = sqlx::query_as::<_, Application>(
        r#"SELECT id, name, email, phone, post, created_at
           FROM applications ORDER BY id DESC"#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
