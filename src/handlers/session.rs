use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::SiteError;
use crate::db::repo;
use crate::middleware::auth::{end_session, start_session};
use crate::server::router::SiteState;
use crate::service::password;
use crate::views::{self, Flash};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn login_form() -> Html<String> {
    views::login_page(None)
}

/// POST /login -> sets the session cookie and redirects to the dashboard, or
/// re-renders the form with a message.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<SiteState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, SiteError> {
    let mut conn = state.storage.acquire().await?;
    let verified = match repo::find_user(&mut conn, &form.username).await? {
        Some(user) => password::verify_password(&form.password, &user.password)?,
        None => false,
    };

    if !verified {
        warn!(username = %form.username, "login rejected");
        return Ok(views::login_page(Some(&Flash::error("Invalid Credentials"))).into_response());
    }

    info!(username = %form.username, "admin signed in");
    let jar = start_session(jar, &form.username, state.secure_cookie);
    Ok((jar, Redirect::to("/admin")).into_response())
}

pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    (end_session(jar), Redirect::to("/"))
}
