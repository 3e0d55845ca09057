use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    middleware,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::db::SiteStorage;
use crate::handlers::{admin, public, session};
use crate::middleware::require_login;
use crate::service::file_store::FileStore;

#[derive(Clone)]
pub struct SiteState {
    pub storage: SiteStorage,
    pub uploads: FileStore,
    pub secure_cookie: bool,
    pub max_upload_bytes: usize,
    key: Key,
}

impl SiteState {
    pub fn new(storage: SiteStorage, uploads: FileStore, key: Key, cfg: &Config) -> Self {
        Self {
            storage,
            uploads,
            secure_cookie: !cfg.insecure_cookie,
            max_upload_bytes: cfg.max_upload_bytes,
            key,
        }
    }
}

impl FromRef<SiteState> for Key {
    fn from_ref(state: &SiteState) -> Self {
        state.key.clone()
    }
}

pub fn site_router(state: SiteState) -> Router {
    let upload_actions = Router::new()
        .route("/upload_notice", post(admin::upload_notice))
        .route("/upload_result", post(admin::upload_result))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes));

    Router::new()
        .route("/", get(public::home))
        .route("/notices", get(public::notices))
        .route("/results", get(public::results))
        .route(
            "/apply",
            get(public::apply_form).post(public::submit_application),
        )
        .route("/login", get(session::login_form).post(session::login))
        .route("/logout", get(session::logout))
        .route("/admin", get(admin::dashboard))
        .merge(upload_actions)
        .nest_service("/uploads", ServeDir::new(state.uploads.dir()))
        .layer(middleware::from_fn_with_state(state.clone(), require_login))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
