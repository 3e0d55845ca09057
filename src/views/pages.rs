use axum::response::Html;

use super::{Flash, escape, layout};
use crate::db::{Application, Document, DocumentKind};

pub fn home_page() -> Html<String> {
    let body = r#"<h1>Welcome</h1>
<p>Find the latest notices and examination results, or apply for an open post.</p>
<ul>
<li><a href="/notices">Notices</a></li>
<li><a href="/results">Results</a></li>
<li><a href="/apply">Apply for a post</a></li>
</ul>"#;
    layout("Home", None, body)
}

pub fn documents_page(kind: DocumentKind, docs: &[Document]) -> Html<String> {
    let heading = kind.heading();
    let list = if docs.is_empty() {
        format!("<p>No {} published yet.</p>", heading.to_lowercase())
    } else {
        let items: String = docs
            .iter()
            .map(|d| {
                format!(
                    "<li><a href=\"/uploads/{file}\">{title}</a> \
                     <span class=\"date\">{date}</span></li>\n",
                    file = escape(&d.filename),
                    title = escape(&d.title),
                    date = escape(&d.date),
                )
            })
            .collect();
        format!("<ul>\n{items}</ul>")
    };
    layout(heading, None, &format!("<h1>{heading}</h1>\n{list}"))
}

pub fn apply_page(flash: Option<&Flash>) -> Html<String> {
    let body = r#"<h1>Apply</h1>
<form method="post" action="/apply">
<label>Name <input name="name"></label>
<label>Email <input name="email" type="email"></label>
<label>Phone <input name="phone"></label>
<label>Post <input name="post"></label>
<button type="submit">Submit</button>
</form>"#;
    layout("Apply", flash, body)
}

pub fn login_page(flash: Option<&Flash>) -> Html<String> {
    let body = r#"<h1>Admin Login</h1>
<form method="post" action="/login">
<label>Username <input name="username"></label>
<label>Password <input name="password" type="password"></label>
<button type="submit">Login</button>
</form>"#;
    layout("Login", flash, body)
}

fn upload_form(action: &str, label: &str) -> String {
    format!(
        r#"<section>
<h2>Upload {label}</h2>
<form method="post" action="{action}" enctype="multipart/form-data">
<label>Title <input name="title"></label>
<input name="file" type="file" accept="application/pdf">
<button type="submit">Upload</button>
</form>
</section>"#
    )
}

pub fn dashboard_page(username: &str, applications: &[Application]) -> Html<String> {
    let rows: String = applications
        .iter()
        .map(|a| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&a.name),
                escape(&a.email),
                escape(&a.phone),
                escape(&a.post),
                escape(&a.created_at),
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Dashboard</h1>
<p>Signed in as <strong>{user}</strong>. <a href="/logout">Logout</a></p>
{notice_form}
{result_form}
<section>
<h2>Applications</h2>
<table>
<tr><th>Name</th><th>Email</th><th>Phone</th><th>Post</th><th>Date</th></tr>
{rows}</table>
</section>"#,
        user = escape(username),
        notice_form = upload_form("/upload_notice", "Notice"),
        result_form = upload_form("/upload_result", "Result"),
    );
    layout("Dashboard", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_link_to_uploads() {
        let docs = vec![Document {
            id: 1,
            title: "Term 1".into(),
            filename: "result1.pdf".into(),
            date: "16-10-2026".into(),
        }];
        let Html(page) = documents_page(DocumentKind::Result, &docs);
        assert!(page.contains(r#"<a href="/uploads/result1.pdf">Term 1</a>"#));
        assert!(page.contains("16-10-2026"));
    }

    #[test]
    fn empty_listing_has_placeholder() {
        let Html(page) = documents_page(DocumentKind::Notice, &[]);
        assert!(page.contains("No notices published yet."));
    }

    #[test]
    fn dashboard_escapes_applicant_data() {
        let apps = vec![Application {
            id: 1,
            name: "<img src=x>".into(),
            email: "j@x.com".into(),
            phone: "555".into(),
            post: "Clerk".into(),
            created_at: "16-10-2026".into(),
        }];
        let Html(page) = dashboard_page("admin", &apps);
        assert!(page.contains("&lt;img src=x&gt;"));
        assert!(!page.contains("<img src=x>"));
        assert!(page.contains(r#"action="/upload_notice""#));
        assert!(page.contains(r#"action="/upload_result""#));
    }
}
