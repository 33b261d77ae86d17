// src/generation/mod.rs
//! Content generation against the external chat completion service.

pub mod client;
pub mod prompts;

pub use client::{ContentGenerator, GenerationClient};

use thiserror::Error;

/// The fixed set of resume sections the generation endpoint understands.
/// Dispatch is an exhaustive match so a new section cannot silently pick
/// up another section's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ProfessionalSummary,
    WorkExperience,
    Skills,
    EducationDescription,
    JobTitleSuggestions,
    CompanyDescription,
    CareerPaths,
    SkillGaps,
    CareerRecommendations,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::ProfessionalSummary,
        Section::WorkExperience,
        Section::Skills,
        Section::EducationDescription,
        Section::JobTitleSuggestions,
        Section::CompanyDescription,
        Section::CareerPaths,
        Section::SkillGaps,
        Section::CareerRecommendations,
    ];

    /// Wire name of the section as accepted by the generate-content endpoint.
    pub fn key(&self) -> &'static str {
        match self {
            Section::ProfessionalSummary => "professional summary",
            Section::WorkExperience => "work experience",
            Section::Skills => "skills",
            Section::EducationDescription => "education description",
            Section::JobTitleSuggestions => "job title suggestions",
            Section::CompanyDescription => "company description",
            Section::CareerPaths => "career paths",
            Section::SkillGaps => "skill gaps",
            Section::CareerRecommendations => "career recommendations",
        }
    }

    /// Strict lookup of a wire name.
    pub fn parse(key: &str) -> Option<Self> {
        Section::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Endpoint policy: an unrecognized section key falls back to the
    /// professional summary template instead of erroring.
    pub fn parse_or_default(key: &str) -> Self {
        Section::parse(key).unwrap_or(Section::ProfessionalSummary)
    }

    /// Build the full model prompt for this section from the caller's
    /// free-text prompt and additional context.
    pub fn render_prompt(&self, prompt: &str, context: &str) -> String {
        prompts::render(*self, prompt, context)
    }
}

/// Error taxonomy for the generation path. None of these are retried;
/// all are surfaced to the caller as a generation failure.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Service credential missing from configuration. No outbound call is made.
    #[error("API key not configured")]
    MissingCredential,

    /// Non-success status from the chat completion service.
    #[error("chat completion request failed with status {status}")]
    Upstream { status: u16, body: String },

    /// Transport or response-decoding failure.
    #[error("chat completion transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_keys_resolve_to_their_section() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.key()), Some(section));
            assert_eq!(Section::parse_or_default(section.key()), section);
        }
    }

    #[test]
    fn test_unrecognized_key_falls_back_to_summary() {
        assert_eq!(Section::parse("hobbies"), None);
        assert_eq!(
            Section::parse_or_default("hobbies"),
            Section::ProfessionalSummary
        );
        assert_eq!(
            Section::parse_or_default(""),
            Section::ProfessionalSummary
        );
    }
}
