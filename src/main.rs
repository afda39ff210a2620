use std::net::SocketAddr;
use symptom_journal::{router, AppState, Config, DailyStore, RemoteAnalyticsClient};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = DailyStore::open(config.data_path.clone()).await?;
    info!("journal data at {}", store.path().display());
    let remote = RemoteAnalyticsClient::new(config.analytics_url.clone(), config.analytics_timeout)?;
    info!("remote analytics at {}", config.analytics_url);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = router(AppState::new(store, remote, config));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
