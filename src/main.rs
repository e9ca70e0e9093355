use std::net::SocketAddr;
use std::sync::Arc;

use pipeline_backend::{
    build_router,
    config::{get_config, init_config, LogFormat},
    database::pool::{create_pool, run_migrations},
    store::{CandidateStore, MemoryCandidateStore, PgCandidateStore},
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config()?;
    init_tracing(config.log_format);

    let store: Arc<dyn CandidateStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            info!("Using Postgres candidate store");
            Arc::new(PgCandidateStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, candidates are kept in memory only");
            Arc::new(MemoryCandidateStore::new())
        }
    };

    let app_state = AppState::new(store, config.jwt_secret.clone());
    let app = build_router(app_state, config.api_rps);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
