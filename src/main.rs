use shift_summary::api::{AppState, create_router};
use shift_summary::config::{ConfigLoader, FieldRegistry, ServerSettings};
use shift_summary::logo::LogoLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = ServerSettings::from_env();

    let registry = match &settings.fields_config {
        Some(path) => ConfigLoader::load(path)?.into_registry(),
        None => FieldRegistry::default(),
    };

    let state = AppState::new(
        registry,
        LogoLoader::new(settings.logo_retry),
        settings.logo_url.clone(),
    );
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.listen_addr).await?;
    tracing::info!(addr = %settings.listen_addr, "shift summary server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
