// src/auth.rs
//! Thin wrapper around the hosted auth/profile backend: sign-in, sign-up,
//! sign-out, and profile fetch, plus a request guard that verifies the
//! backend's bearer access token locally.

use anyhow::{Context, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::config::AuthBackendConfig;
use crate::web::AppContext;

/// The user record exposed to handlers and returned by auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Access-token claims issued by the hosted backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: Option<String>,
    pub aud: String,
    pub exp: usize,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl From<Claims> for SessionUser {
    fn from(claims: Claims) -> Self {
        let name = claims
            .user_metadata
            .get("full_name")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let avatar_url = claims
            .user_metadata
            .get("avatar_url")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Self {
            id: claims.sub,
            name,
            email: claims.email,
            avatar_url,
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    TokenVerificationFailed,
    NotConfigured,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Authorization token required",
            AuthError::InvalidToken => "Invalid authorization token format",
            AuthError::TokenVerificationFailed => "Token verification failed",
            AuthError::NotConfigured => "Authentication is not configured",
        }
    }
}

/// Request guard for routes that require a signed-in user.
pub struct AuthenticatedUser {
    pub user: SessionUser,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let context = match req.guard::<&State<AppContext>>().await {
            Outcome::Success(context) => context,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::NotConfigured))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        let Some(auth_config) = context.config.auth.as_ref() else {
            return Outcome::Error((Status::ServiceUnavailable, AuthError::NotConfigured));
        };

        let token = match req.headers().get_one("Authorization") {
            Some(header) if header.starts_with("Bearer ") => &header[7..],
            Some(_) => {
                warn!("Invalid Authorization header format");
                return Outcome::Error((Status::Unauthorized, AuthError::InvalidToken));
            }
            None => {
                return Outcome::Error((Status::Unauthorized, AuthError::MissingToken));
            }
        };

        match verify_access_token(token, auth_config) {
            Ok(user) => {
                info!("Authenticated user: {}", user.id);
                Outcome::Success(AuthenticatedUser { user })
            }
            Err(e) => {
                warn!("Token verification failed: {}", e);
                Outcome::Error((Status::Unauthorized, AuthError::TokenVerificationFailed))
            }
        }
    }
}

/// Guard that succeeds with or without credentials.
pub struct OptionalAuth {
    pub user: Option<SessionUser>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalAuth {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match AuthenticatedUser::from_request(req).await {
            Outcome::Success(auth) => Outcome::Success(OptionalAuth {
                user: Some(auth.user),
            }),
            _ => Outcome::Success(OptionalAuth { user: None }),
        }
    }
}

fn verify_access_token(token: &str, config: &AuthBackendConfig) -> Result<SessionUser> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["authenticated"]);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .context("Access token rejected")?;

    Ok(token_data.claims.into())
}

// --- Hosted backend client ---------------------------------------------

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: BackendUser,
}

#[derive(Debug, Deserialize)]
struct BackendUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    #[serde(alias = "error_description", alias = "msg")]
    message: Option<String>,
}

/// An established session as returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: SessionUser,
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// HTTP client for the hosted auth backend's REST surface.
pub struct AuthClient {
    client: reqwest::Client,
    config: AuthBackendConfig,
}

impl AuthClient {
    pub fn new(client: reqwest::Client, config: AuthBackendConfig) -> Self {
        Self { client, config }
    }

    /// Password sign-in, then a profile fetch to enrich the user record.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.base_url
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Failed to reach auth backend")?;

        let tokens = self.parse_token_response(response).await?;
        let user = self
            .fetch_profile(&tokens.access_token, &tokens.user)
            .await;

        Ok(AuthSession {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Sign-up with a generated initials avatar; falls back to the signup
    /// payload when the profile row is not yet readable.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<AuthSession> {
        let url = format!("{}/auth/v1/signup", self.config.base_url);
        let avatar_url = format!(
            "https://api.dicebear.com/7.x/initials/svg?seed={}",
            percent_encode(name)
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "full_name": name, "avatar_url": avatar_url }
            }))
            .send()
            .await
            .context("Failed to reach auth backend")?;

        let tokens = self.parse_token_response(response).await?;
        let user = self
            .fetch_profile(&tokens.access_token, &tokens.user)
            .await;

        Ok(AuthSession {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("Failed to reach auth backend")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sign-out failed with status {}: {}", status, body);
        }
        Ok(())
    }

    async fn parse_token_response(&self, response: reqwest::Response) -> Result<TokenResponse> {
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read auth backend response")?;

        if !status.is_success() {
            let message = serde_json::from_str::<BackendError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            error!("Auth backend error {}: {}", status, message);
            anyhow::bail!("{}", message);
        }

        serde_json::from_str(&body).context("Unexpected auth backend response shape")
    }

    /// Best-effort profile fetch. A missing or unreadable profile row
    /// degrades to the metadata carried on the auth user itself.
    async fn fetch_profile(&self, access_token: &str, user: &BackendUser) -> SessionUser {
        let fallback = SessionUser {
            id: user.id.clone(),
            name: user
                .user_metadata
                .get("full_name")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            email: user.email.clone(),
            avatar_url: user
                .user_metadata
                .get("avatar_url")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        };

        let url = format!(
            "{}/rest/v1/profiles?id=eq.{}&select=id,name,avatar_url",
            self.config.base_url, user.id
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await;

        let rows: Vec<ProfileRow> = match response {
            Ok(r) if r.status().is_success() => r.json().await.unwrap_or_default(),
            Ok(r) => {
                warn!("Profile fetch returned status {}", r.status());
                return fallback;
            }
            Err(e) => {
                warn!("Profile fetch failed: {}", e);
                return fallback;
            }
        };

        match rows.into_iter().next() {
            Some(row) => SessionUser {
                id: row.id,
                name: row.name.or(fallback.name),
                email: fallback.email,
                avatar_url: row.avatar_url.or(fallback.avatar_url),
            },
            None => fallback,
        }
    }
}

/// Percent-encode a query value (avatar seed); enough for the characters
/// a display name can contain.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("Jane Doe"), "Jane%20Doe");
        assert_eq!(percent_encode("safe-name_1.2~"), "safe-name_1.2~");
        assert_eq!(percent_encode("a&b"), "a%26b");
    }

    #[test]
    fn test_claims_to_session_user() {
        let claims = Claims {
            sub: "user-1".to_string(),
            email: Some("jane@example.com".to_string()),
            aud: "authenticated".to_string(),
            exp: 0,
            user_metadata: serde_json::json!({
                "full_name": "Jane Doe",
                "avatar_url": "https://example.com/a.svg"
            }),
        };
        let user: SessionUser = claims.into();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_backend_error_message_aliases() {
        let e: BackendError =
            serde_json::from_str(r#"{"error_description":"Invalid login credentials"}"#).unwrap();
        assert_eq!(e.message.as_deref(), Some("Invalid login credentials"));

        let e: BackendError = serde_json::from_str(r#"{"msg":"User already registered"}"#).unwrap();
        assert_eq!(e.message.as_deref(), Some("User already registered"));
    }
}
