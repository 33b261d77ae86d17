// src/web/mod.rs
//! HTTP surface: routes, CORS, catchers, and server startup.

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::auth::{AuthenticatedUser, OptionalAuth, SessionUser};
use crate::config::AppConfig;
use crate::generation::GenerationClient;
use crate::types::CareerGuidance;
use handlers::auth_handlers::BearerToken;

/// Shared application context, constructed once at startup and handed to
/// every handler by reference through managed state.
pub struct AppContext {
    pub config: AppConfig,
    pub http: reqwest::Client,
    pub generation: GenerationClient,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        let generation = GenerationClient::new(config.chat_api_key.clone());

        Self {
            config,
            http,
            generation,
        }
    }
}

// CORS fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/generate-content", data = "<request>")]
pub async fn generate_content(
    request: Json<GenerateContentRequest>,
    context: &State<AppContext>,
) -> Result<Json<GeneratedContent>, Custom<Json<ApiError>>> {
    handlers::generate_content_handler(request, context).await
}

#[post("/career-guidance", data = "<request>")]
pub async fn career_guidance(
    request: Json<GuidanceRequest>,
    context: &State<AppContext>,
) -> Result<Json<CareerGuidance>, Custom<Json<ApiError>>> {
    handlers::career_guidance_handler(request, context).await
}

#[post("/export", data = "<request>")]
pub async fn export(request: Json<ExportRequest>) -> HtmlDocumentResponse {
    handlers::export_handler(request).await
}

#[get("/templates")]
pub async fn get_templates() -> Json<Vec<TemplateInfo>> {
    handlers::get_templates_handler().await
}

#[get("/health")]
pub async fn health(auth: OptionalAuth) -> Json<HealthResponse> {
    handlers::health_handler(auth).await
}

#[post("/auth/signin", data = "<request>")]
pub async fn sign_in(
    request: Json<SignInRequest>,
    context: &State<AppContext>,
) -> Result<Json<crate::auth::AuthSession>, Custom<Json<ApiError>>> {
    handlers::sign_in_handler(request, context).await
}

#[post("/auth/signup", data = "<request>")]
pub async fn sign_up(
    request: Json<SignUpRequest>,
    context: &State<AppContext>,
) -> Result<Json<crate::auth::AuthSession>, Custom<Json<ApiError>>> {
    handlers::sign_up_handler(request, context).await
}

#[post("/auth/signout")]
pub async fn sign_out(
    auth: AuthenticatedUser,
    token: BearerToken,
    context: &State<AppContext>,
) -> Result<Json<SignOutResponse>, Custom<Json<ApiError>>> {
    handlers::sign_out_handler(auth, token, context).await
}

#[get("/auth/me")]
pub async fn current_user(auth: AuthenticatedUser) -> Json<SessionUser> {
    handlers::current_user_handler(auth).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ApiError> {
    Json(ApiError::new("Invalid request format"))
}

#[rocket::catch(401)]
pub fn unauthorized() -> Json<ApiError> {
    Json(ApiError::new("Authorization required"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ApiError> {
    Json(ApiError::new("Request body failed validation"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ApiError> {
    Json(ApiError::new("Internal server error"))
}

/// Build and launch the API server.
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let port = config.port;
    let context = AppContext::new(config);

    info!("Starting resume builder API server on port {}", port);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(context)
        .register(
            "/api",
            catchers![bad_request, unauthorized, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                generate_content,
                career_guidance,
                export,
                get_templates,
                health,
                sign_in,
                sign_up,
                sign_out,
                current_user,
                options,
            ],
        )
        .launch()
        .await;

    Ok(())
}
