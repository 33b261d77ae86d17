// src/web/handlers/generate_handlers.rs
//! Content generation and career guidance handlers.

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::generation::{ContentGenerator, GenerationError, Section};
use crate::guidance;
use crate::types::CareerGuidance;
use crate::web::types::{ApiError, GenerateContentRequest, GeneratedContent, GuidanceRequest};
use crate::web::AppContext;

/// Map the generation error taxonomy onto the wire error shape.
/// None of these are retried.
fn generation_error_response(e: GenerationError) -> Custom<Json<ApiError>> {
    match e {
        GenerationError::MissingCredential => Custom(
            Status::InternalServerError,
            Json(ApiError::new("API key not configured")),
        ),
        GenerationError::Upstream { status, body } => Custom(
            Status::InternalServerError,
            Json(ApiError::with_details(
                format!("Chat completion request failed: {}", status),
                body,
            )),
        ),
        GenerationError::Transport(e) => {
            error!("Generation transport failure: {}", e);
            Custom(
                Status::InternalServerError,
                Json(ApiError::new("Failed to generate content")),
            )
        }
    }
}

pub async fn generate_content_handler(
    request: Json<GenerateContentRequest>,
    context: &State<AppContext>,
) -> Result<Json<GeneratedContent>, Custom<Json<ApiError>>> {
    // Unrecognized section keys fall back to the professional summary
    // template rather than erroring.
    let section = Section::parse_or_default(&request.section);

    info!(
        "Generating content, section: {}, prompt_len: {}",
        section.key(),
        request.prompt.len()
    );

    let content = context
        .generation
        .generate(
            section,
            &request.prompt,
            request.context.as_deref().unwrap_or(""),
        )
        .await
        .map_err(generation_error_response)?;

    info!("Generated content length: {}", content.len());

    Ok(Json(GeneratedContent { content }))
}

pub async fn career_guidance_handler(
    request: Json<GuidanceRequest>,
    context: &State<AppContext>,
) -> Result<Json<CareerGuidance>, Custom<Json<ApiError>>> {
    let GuidanceRequest {
        resume,
        target_role,
    } = request.into_inner();

    // Abort on first failure; no partially populated guidance is returned.
    let guidance =
        guidance::analyze_career_path(&context.generation, &resume, target_role.as_deref())
            .await
            .map_err(generation_error_response)?;

    Ok(Json(guidance))
}
