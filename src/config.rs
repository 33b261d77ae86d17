// src/config.rs
//! Application configuration, resolved once from the environment at
//! startup and passed by reference through Rocket managed state.

use anyhow::{Context, Result};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Credential for the external chat completion service. When absent,
    /// generation requests fail with a configuration error without any
    /// outbound call.
    pub chat_api_key: Option<String>,
    pub auth: Option<AuthBackendConfig>,
}

/// Connection settings for the hosted auth/profile backend.
#[derive(Debug, Clone)]
pub struct AuthBackendConfig {
    pub base_url: String,
    pub anon_key: String,
    /// HS256 secret used to verify the backend's access tokens locally.
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        let chat_api_key = std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty());
        if chat_api_key.is_none() {
            warn!("GROQ_API_KEY not set; content generation will be unavailable");
        }

        let auth = match (
            std::env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty()),
            std::env::var("SUPABASE_ANON_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            std::env::var("SUPABASE_JWT_SECRET")
                .ok()
                .filter(|v| !v.is_empty()),
        ) {
            (Some(base_url), Some(anon_key), Some(jwt_secret)) => {
                info!("Auth backend configured: {}", base_url);
                Some(AuthBackendConfig {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    anon_key,
                    jwt_secret,
                })
            }
            _ => {
                warn!("Auth backend not fully configured; auth endpoints will be unavailable");
                None
            }
        };

        Ok(Self {
            port,
            chat_api_key,
            auth,
        })
    }
}
