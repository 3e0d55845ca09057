use mimalloc::MiMalloc;
use noticeboard::config::Config;
use noticeboard::db::SiteStorage;
use noticeboard::server::{
    router::{SiteState, site_router},
    shutdown_signal,
};
use noticeboard::service::file_store::FileStore;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        port = cfg.port,
        database_url = %cfg.database_url,
        upload_dir = %cfg.upload_dir.display(),
        loglevel = %cfg.loglevel,
        insecure_cookie = cfg.insecure_cookie,
    );

    if cfg.insecure_cookie {
        warn!(
            "session cookie is sent without `Secure`; \
             set NOTICEBOARD_INSECURE_COOKIE=false when serving over TLS"
        );
    }

    let storage = SiteStorage::open(&cfg.database_url).await?;
    if storage
        .seed_admin(&cfg.admin_username, &cfg.admin_password)
        .await?
    {
        info!(username = %cfg.admin_username, "seeded admin account");
    } else {
        info!(username = %cfg.admin_username, "admin account already present");
    }

    let uploads = FileStore::open(&cfg.upload_dir).await?;
    let key = cfg.cookie_key()?;

    let state = SiteState::new(storage, uploads, key, &cfg);
    let app = site_router(state);

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
