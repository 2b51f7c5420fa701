mod access;
mod config;
mod pages;
mod routes;
mod shell;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Optional `.env`; real environment variables take precedence.
    if let Some(e) = config::env_file_problem(dotenvy::dotenv()) {
        tracing::warn!(error = %e, "ignoring unreadable .env file");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if !config.access_gate {
        tracing::warn!("access gate disabled, every page is served without capability checks");
    }

    let addr = config.bind_addr();
    let state = state::AppState::new(config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, pages = pages::ROUTES.len(), "integratewise-os listening");
    axum::serve(listener, app).await.expect("server failed");
}
