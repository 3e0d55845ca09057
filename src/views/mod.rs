//! Server-rendered HTML.
//!
//! Pages are plain `format!` templates around a shared layout. Anything that
//! originated from a user or the database goes through [`escape`].

mod pages;

use axum::http::StatusCode;
use axum::response::Html;

pub use pages::{apply_page, dashboard_page, documents_page, home_page, login_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot message shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    fn render(&self) -> String {
        let class = match self.kind {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        };
        format!(r#"<p class="{class}">{}</p>"#, escape(&self.message))
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash = flash.map(Flash::render).unwrap_or_default();
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav>
<a href="/">Home</a> |
<a href="/notices">Notices</a> |
<a href="/results">Results</a> |
<a href="/apply">Apply</a> |
<a href="/login">Admin</a>
</nav>
<main>
{flash}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!("<h1>{}</h1>\n<p>{}</p>", escape(&heading), escape(message));
    layout(&heading, None, &body)
}
