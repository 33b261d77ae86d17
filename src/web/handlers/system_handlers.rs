// src/web/handlers/system_handlers.rs
//! Template catalog and health handlers.

use rocket::serde::json::Json;

use crate::auth::OptionalAuth;
use crate::types::TemplateId;
use crate::web::types::{HealthResponse, TemplateInfo};

pub async fn get_templates_handler() -> Json<Vec<TemplateInfo>> {
    let templates = TemplateId::ALL
        .iter()
        .map(|t| TemplateInfo {
            id: t.id().to_string(),
            name: t.name().to_string(),
            description: t.description().to_string(),
        })
        .collect();
    Json(templates)
}

pub async fn health_handler(auth: OptionalAuth) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        authenticated: auth.user.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_template_catalog_lists_all_four() {
        let templates = get_templates_handler().await.into_inner();
        let ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["modern", "classic", "minimal", "creative"]);
        assert!(templates.iter().all(|t| !t.description.is_empty()));
    }
}
