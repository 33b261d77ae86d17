// src/web/types.rs
//! Request/response types for the HTTP surface.

use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};

use crate::export::ExportFormat;
use crate::types::ResumeData;

/// Body of POST /api/generate-content.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct GenerateContentRequest {
    pub prompt: String,
    pub section: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct GeneratedContent {
    pub content: String,
}

/// Uniform error shape: {error, details?} with a non-2xx status.
#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Body of POST /api/career-guidance.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct GuidanceRequest {
    pub resume: ResumeData,
    #[serde(default)]
    pub target_role: Option<String>,
}

/// Body of POST /api/export.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct ExportRequest {
    pub resume_data: ResumeData,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub format: Option<ExportFormat>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub authenticated: bool,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SignOutResponse {
    pub success: bool,
}

/// A complete HTML document, optionally offered as a download.
pub struct HtmlDocumentResponse {
    pub html: String,
    pub filename: Option<String>,
}

impl<'r> Responder<'r, 'static> for HtmlDocumentResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let mut response = binding
            .header(ContentType::HTML)
            .sized_body(self.html.len(), std::io::Cursor::new(self.html));

        if let Some(filename) = self.filename {
            response = response.raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", filename),
            );
        }

        response.ok()
    }
}
