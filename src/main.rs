use site_app::config::SiteConfig;
use site_app::counter::VisitCounter;
use site_app::{AppState, FileStore, resolve_data_dir, router};
use std::{env, net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = SiteConfig::from_env();
    let store = FileStore::new(resolve_data_dir());
    let counter = VisitCounter::new(Arc::new(store));
    let app = router(AppState::new(config, counter));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
