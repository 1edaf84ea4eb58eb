use emp_server::error::Result as ServerErrorResult;
use emp_server::{AppState, build_router, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment wins
    let dotenv_path = dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = emp_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting emp-server v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Initialize database pool (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = emp_db::create_pool(&database_path).await?;
    info!("Database ready");

    // Outbound client for the employee source
    let mut http = reqwest::Client::builder();
    if let Some(timeout) = config.source.timeout() {
        http = http.timeout(timeout);
    }
    let http = http.build()?;

    let app_state = AppState::new(pool.clone(), http, config.source.base_url.clone());
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}
