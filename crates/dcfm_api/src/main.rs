use anyhow::Context;
use dcfm_api::config::ServerConfig;
use dcfm_api::routes::app_router;
use dcfm_api::AppState;
use dcfm_service::nonce::NonceIssuer;
use dcfm_service::ContactFormService;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    config.logging.init();

    // Creating the table on start mirrors plugin activation
    let repo = config.store.activate().await?;
    let nonces = NonceIssuer::new(&config.nonce_secret, config.nonce_lifetime)
        .context("Invalid nonce configuration")?;

    if config.api_token.is_none() {
        tracing::warn!("DCFM_API_TOKEN is not set; the insert endpoint accepts anonymous requests");
    }

    let state = AppState::new(ContactFormService::new(repo, nonces), config.api_token.clone());
    let app = app_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
