use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string.
    pub password: String,
}

/// A published PDF: a row of either `notices` or `results`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub filename: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Notice,
    Result,
}

impl DocumentKind {
    pub fn table(self) -> &'static str {
        match self {
            DocumentKind::Notice => "notices",
            DocumentKind::Result => "results",
        }
    }

    /// Plural heading used on the public listing page.
    pub fn heading(self) -> &'static str {
        match self {
            DocumentKind::Notice => "Notices",
            DocumentKind::Result => "Results",
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Application {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub post: String,
    pub created_at: String,
}

/// Application form as submitted by the public. Fields are not validated.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub post: String,
}
