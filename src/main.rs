use related_posts::api::{AppState, create_router};
use related_posts::db::establish_connection_pool;
use related_posts::models::config::ServerConfig;
use related_posts::repository::DieselRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(DieselRepository::new(pool), config.related.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {e}", config.bind_address);
            std::process::exit(1);
        }
    };

    log::info!(
        "Serving related posts on {} (threshold={}, max_results={}, candidate_limit={})",
        config.bind_address,
        config.related.similarity_threshold,
        config.related.max_results,
        config.related.candidate_limit
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }

    log::info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
