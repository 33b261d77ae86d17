use anyhow::Result;
use resume_builder::{start_web_server, AppConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "resume_builder=info,rocket=warn"
                .parse()
                .expect("Invalid log directive")
        }))
        .init();

    let config = AppConfig::from_env()?;

    info!("Starting Resume Builder API Server");
    info!("Port: {}", config.port);
    info!("Content generation configured: {}", config.chat_api_key.is_some());
    info!("Auth backend configured: {}", config.auth.is_some());

    start_web_server(config).await?;

    Ok(())
}
