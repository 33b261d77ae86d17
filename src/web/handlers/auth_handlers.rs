// src/web/handlers/auth_handlers.rs
//! Pass-through handlers for the hosted auth backend. Unlike the
//! generation path, auth failures are surfaced to the user directly.

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use crate::auth::{AuthClient, AuthSession, AuthenticatedUser, SessionUser};
use crate::web::types::{ApiError, SignInRequest, SignOutResponse, SignUpRequest};
use crate::web::AppContext;

fn auth_client(context: &AppContext) -> Result<AuthClient, Custom<Json<ApiError>>> {
    match context.config.auth.as_ref() {
        Some(auth_config) => Ok(AuthClient::new(
            context.http.clone(),
            auth_config.clone(),
        )),
        None => Err(Custom(
            Status::ServiceUnavailable,
            Json(ApiError::new("Authentication is not configured")),
        )),
    }
}

pub async fn sign_in_handler(
    request: Json<SignInRequest>,
    context: &State<AppContext>,
) -> Result<Json<AuthSession>, Custom<Json<ApiError>>> {
    let client = auth_client(context)?;

    match client.sign_in(&request.email, &request.password).await {
        Ok(session) => {
            info!("User signed in: {}", session.user.id);
            Ok(Json(session))
        }
        Err(e) => {
            warn!("Sign-in failed for {}: {}", request.email, e);
            Err(Custom(
                Status::Unauthorized,
                Json(ApiError::with_details("Sign in failed", e.to_string())),
            ))
        }
    }
}

pub async fn sign_up_handler(
    request: Json<SignUpRequest>,
    context: &State<AppContext>,
) -> Result<Json<AuthSession>, Custom<Json<ApiError>>> {
    let client = auth_client(context)?;

    match client
        .sign_up(&request.email, &request.password, &request.name)
        .await
    {
        Ok(session) => {
            info!("User signed up: {}", session.user.id);
            Ok(Json(session))
        }
        Err(e) => {
            warn!("Sign-up failed for {}: {}", request.email, e);
            Err(Custom(
                Status::UnprocessableEntity,
                Json(ApiError::with_details("Sign up failed", e.to_string())),
            ))
        }
    }
}

pub async fn sign_out_handler(
    auth: AuthenticatedUser,
    token: BearerToken,
    context: &State<AppContext>,
) -> Result<Json<SignOutResponse>, Custom<Json<ApiError>>> {
    let client = auth_client(context)?;

    match client.sign_out(&token.0).await {
        Ok(()) => {
            info!("User signed out: {}", auth.user.id);
            Ok(Json(SignOutResponse { success: true }))
        }
        Err(e) => {
            warn!("Sign-out failed for {}: {}", auth.user.id, e);
            Err(Custom(
                Status::InternalServerError,
                Json(ApiError::with_details("Sign out failed", e.to_string())),
            ))
        }
    }
}

pub async fn current_user_handler(auth: AuthenticatedUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// Raw bearer token, for calls that relay it to the hosted backend.
pub struct BearerToken(pub String);

#[rocket::async_trait]
impl<'r> rocket::request::FromRequest<'r> for BearerToken {
    type Error = ();

    async fn from_request(
        req: &'r rocket::Request<'_>,
    ) -> rocket::request::Outcome<Self, Self::Error> {
        match req.headers().get_one("Authorization") {
            Some(header) if header.starts_with("Bearer ") => {
                rocket::request::Outcome::Success(BearerToken(header[7..].to_string()))
            }
            _ => rocket::request::Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
