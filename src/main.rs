//! Dashboard entry point: resolve configuration, probe the database, and
//! serve the page in the selected mode.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salesboard::config::{DashboardMode, DbSettings, ServerSettings};
use salesboard::connector::Connector;
use salesboard::reports::ReportCatalog;
use salesboard::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Configuration failures here are fatal: without a resolvable
    // connection descriptor there is no dashboard to show.
    let mode = DashboardMode::from_env()?;
    let db_settings = DbSettings::from_env()?;
    let server_settings = ServerSettings::from_env(mode)?;

    let connector = Connector::new(&db_settings);
    if let Err(e) = connector.ping() {
        // An unreachable store is not fatal; every report degrades to its
        // "no data" rendering until the database comes back.
        tracing::warn!("database unreachable at startup: {}", e);
    } else {
        tracing::info!(
            "connected to postgres at {}:{}/{}",
            db_settings.host,
            db_settings.port,
            db_settings.dbname
        );
    }

    let catalog = ReportCatalog::new(connector);
    tracing::info!("starting sales dashboard in {} mode", mode);
    let state = server::build_state(mode, catalog)?;
    let app = server::router(state);

    let addr = server_settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
