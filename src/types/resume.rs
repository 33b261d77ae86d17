// src/types/resume.rs
//! Resume data model - the in-memory root record for one wizard session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl WorkExperience {
    /// Create an empty entry with a fresh id, ready for field-by-field edits.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }
}

/// Root record holding all user-entered resume content for one session.
/// Insertion order of experience and education entries is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Add a skill if it is not already present. Returns true when the
    /// skill was inserted, false for blanks and duplicates.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }
}

/// Career guidance lists, each derived by splitting one model response.
/// Regenerated wholesale on each analysis request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerGuidance {
    pub career_paths: Vec<String>,
    pub job_title_suggestions: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Visual layout selector for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Classic,
    Minimal,
    Creative,
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::Modern
    }
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Modern,
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Creative,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "modern" => Some(TemplateId::Modern),
            "classic" => Some(TemplateId::Classic),
            "minimal" => Some(TemplateId::Minimal),
            "creative" => Some(TemplateId::Creative),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Modern",
            TemplateId::Classic => "Classic",
            TemplateId::Minimal => "Minimal",
            TemplateId::Creative => "Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Modern => "Clean and contemporary design with accent colors",
            TemplateId::Classic => "Traditional professional layout with serif fonts",
            TemplateId::Minimal => "Simple and elegant with plenty of white space",
            TemplateId::Creative => "Bold design with sidebar layout and color accents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_skill_dedup() {
        let mut resume = ResumeData::default();
        assert!(resume.add_skill("Rust"));
        assert!(!resume.add_skill("Rust"));
        assert!(!resume.add_skill("  Rust  "));
        assert_eq!(resume.skills, vec!["Rust"]);
    }

    #[test]
    fn test_add_skill_ignores_blank() {
        let mut resume = ResumeData::default();
        assert!(!resume.add_skill("   "));
        assert!(resume.skills.is_empty());
    }

    #[test]
    fn test_remove_skill() {
        let mut resume = ResumeData::default();
        resume.add_skill("Rust");
        resume.add_skill("SQL");
        resume.remove_skill("Rust");
        assert_eq!(resume.skills, vec!["SQL"]);
    }

    #[test]
    fn test_template_id_parse() {
        assert_eq!(TemplateId::parse("modern"), Some(TemplateId::Modern));
        assert_eq!(TemplateId::parse("Creative"), Some(TemplateId::Creative));
        assert_eq!(TemplateId::parse("brutalist"), None);
    }

    #[test]
    fn test_resume_data_wire_format() {
        let json = serde_json::json!({
            "personalInfo": { "fullName": "Jane Doe", "email": "jane@example.com" },
            "summary": "Engineer.",
            "workExperience": [{
                "id": "1",
                "company": "Acme",
                "position": "Engineer",
                "startDate": "2022-01",
                "endDate": "",
                "current": true,
                "description": ""
            }],
            "education": [],
            "skills": ["Rust"]
        });

        let resume: ResumeData = serde_json::from_value(json).unwrap();
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.work_experience[0].start_date, "2022-01");
        assert!(resume.work_experience[0].current);
    }

    #[test]
    fn test_new_entries_get_unique_ids() {
        let a = WorkExperience::new();
        let b = WorkExperience::new();
        assert_ne!(a.id, b.id);
        assert!(!Education::new().id.is_empty());
    }
}
