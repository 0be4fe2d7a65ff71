mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portal server stopped");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "cyber alert portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
