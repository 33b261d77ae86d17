// src/web/handlers/export_handlers.rs
//! Export handler: re-render the resume server-side and return a
//! self-contained HTML document.

use rocket::serde::json::Json;
use tracing::info;

use crate::export::{export_resume, ExportFormat};
use crate::types::TemplateId;
use crate::web::types::{ExportRequest, HtmlDocumentResponse};

pub async fn export_handler(request: Json<ExportRequest>) -> HtmlDocumentResponse {
    let ExportRequest {
        resume_data,
        template,
        format,
    } = request.into_inner();

    // Unknown template ids degrade to the default layout.
    let template = template
        .as_deref()
        .and_then(TemplateId::parse)
        .unwrap_or_default();
    let format = format.unwrap_or_default();

    info!(
        "Exporting resume, template: {}, format: {:?}",
        template.id(),
        format
    );

    let document = export_resume(&resume_data, template, format);

    HtmlDocumentResponse {
        html: document.html,
        filename: document.filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResumeData;

    #[tokio::test]
    async fn test_unknown_template_degrades_to_modern() {
        let request = Json(ExportRequest {
            resume_data: ResumeData::default(),
            template: Some("brutalist".to_string()),
            format: Some(ExportFormat::Html),
        });
        let response = export_handler(request).await;
        assert!(response.html.contains("class=\"resume modern\""));
        assert_eq!(response.filename.as_deref(), Some("resume.html"));
    }

    #[tokio::test]
    async fn test_default_format_is_print_export() {
        let request = Json(ExportRequest {
            resume_data: ResumeData::default(),
            template: None,
            format: None,
        });
        let response = export_handler(request).await;
        assert!(response.html.contains("window.print()"));
        assert!(response.filename.is_none());
    }
}
