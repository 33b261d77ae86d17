// src/guidance.rs
//! Career guidance orchestration: four generation calls over one shared
//! context, each parsed into a list.

use tracing::{error, info};

use crate::generation::{ContentGenerator, GenerationError, Section};
use crate::types::{CareerGuidance, ResumeData};

/// Build the consolidated background shared by all four guidance calls.
fn build_context(resume: &ResumeData, target_role: Option<&str>) -> String {
    let experience = resume
        .work_experience
        .iter()
        .map(|exp| format!("{} at {}: {}", exp.position, exp.company, exp.description))
        .collect::<Vec<_>>()
        .join(". ");

    let education = resume
        .education
        .iter()
        .map(|edu| format!("{} in {} from {}", edu.degree, edu.field, edu.institution))
        .collect::<Vec<_>>()
        .join(". ");

    let skills = resume.skills.join(", ");

    format!(
        "Experience: {}\nEducation: {}\nSkills: {}\nCareer Goal: {}",
        experience,
        education,
        skills,
        target_role.filter(|r| !r.is_empty()).unwrap_or("Open to opportunities")
    )
}

/// Split a model response into trimmed, non-empty lines.
fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated model response into trimmed, non-empty items.
fn split_comma(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the four guidance calls sequentially and assemble the result.
///
/// Partial failure policy: abort on the first failed call and return the
/// error; the caller's existing guidance is never partially overwritten.
pub async fn analyze_career_path<C: ContentGenerator>(
    client: &C,
    resume: &ResumeData,
    target_role: Option<&str>,
) -> Result<CareerGuidance, GenerationError> {
    let context = build_context(resume, target_role);
    let target = target_role.filter(|r| !r.is_empty());

    info!("Starting career guidance analysis");

    let career_paths = client
        .generate(
            Section::CareerPaths,
            &context,
            &target.map(|r| format!("Target role: {}", r)).unwrap_or_default(),
        )
        .await
        .map_err(log_failure(Section::CareerPaths))?;

    let job_titles = client
        .generate(
            Section::JobTitleSuggestions,
            &context,
            "Based on current background and experience",
        )
        .await
        .map_err(log_failure(Section::JobTitleSuggestions))?;

    let skill_gaps = client
        .generate(
            Section::SkillGaps,
            &context,
            &target
                .map(|r| format!("For target role: {}", r))
                .unwrap_or_else(|| "For career advancement".to_string()),
        )
        .await
        .map_err(log_failure(Section::SkillGaps))?;

    let recommendations = client
        .generate(
            Section::CareerRecommendations,
            &context,
            &target
                .map(|r| format!("Target role: {}", r))
                .unwrap_or_else(|| "General career growth".to_string()),
        )
        .await
        .map_err(log_failure(Section::CareerRecommendations))?;

    info!("Career guidance analysis completed");

    Ok(CareerGuidance {
        career_paths: split_lines(&career_paths),
        job_title_suggestions: split_comma(&job_titles),
        skill_gaps: split_lines(&skill_gaps),
        recommendations: split_lines(&recommendations),
    })
}

fn log_failure(section: Section) -> impl FnOnce(GenerationError) -> GenerationError {
    move |e| {
        error!("Guidance call for '{}' failed: {}", section.key(), e);
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records call order and fails from a chosen call index onward.
    struct ScriptedGenerator {
        calls: Mutex<Vec<Section>>,
        fail_from: Option<usize>,
    }

    impl ScriptedGenerator {
        fn new(fail_from: Option<usize>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_from,
            }
        }

        fn calls(&self) -> Vec<Section> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContentGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            section: Section,
            _prompt: &str,
            _context: &str,
        ) -> Result<String, GenerationError> {
            let index = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(section);
                calls.len() - 1
            };
            if self.fail_from.is_some_and(|n| index >= n) {
                return Err(GenerationError::Upstream {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(match section {
                Section::JobTitleSuggestions => "Engineer, Senior Engineer , ".to_string(),
                _ => "First item\n\n  Second item  \n".to_string(),
            })
        }
    }

    fn sample_resume() -> ResumeData {
        let mut resume = ResumeData::default();
        let mut exp = crate::types::WorkExperience::new();
        exp.position = "Engineer".to_string();
        exp.company = "Acme".to_string();
        exp.description = "Built things".to_string();
        resume.work_experience.push(exp);
        resume.add_skill("Rust");
        resume.add_skill("SQL");
        resume.add_skill("Postgres");
        resume
    }

    #[tokio::test]
    async fn test_issues_exactly_four_calls_in_order() {
        let client = ScriptedGenerator::new(None);
        let guidance = analyze_career_path(&client, &sample_resume(), Some("Staff Engineer"))
            .await
            .unwrap();

        assert_eq!(
            client.calls(),
            vec![
                Section::CareerPaths,
                Section::JobTitleSuggestions,
                Section::SkillGaps,
                Section::CareerRecommendations,
            ]
        );
        assert_eq!(guidance.career_paths, vec!["First item", "Second item"]);
        assert_eq!(
            guidance.job_title_suggestions,
            vec!["Engineer", "Senior Engineer"]
        );
        assert_eq!(guidance.skill_gaps.len(), 2);
        assert_eq!(guidance.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_failure_on_third_call_aborts_without_partial_commit() {
        let client = ScriptedGenerator::new(Some(2));
        let result = analyze_career_path(&client, &sample_resume(), None).await;

        assert!(result.is_err());
        // The fourth call is never issued once the third fails.
        assert_eq!(client.calls().len(), 3);
    }

    #[test]
    fn test_context_includes_background_and_goal_default() {
        let context = build_context(&sample_resume(), None);
        assert!(context.contains("Engineer at Acme: Built things"));
        assert!(context.contains("Skills: Rust, SQL, Postgres"));
        assert!(context.contains("Career Goal: Open to opportunities"));
    }

    #[test]
    fn test_context_uses_target_role_when_present() {
        let context = build_context(&sample_resume(), Some("Data Scientist"));
        assert!(context.contains("Career Goal: Data Scientist"));
    }

    #[test]
    fn test_split_helpers_drop_empties() {
        assert_eq!(split_lines("a\n\n b \n"), vec!["a", "b"]);
        assert_eq!(split_comma("x, y ,,z "), vec!["x", "y", "z"]);
        assert!(split_lines("").is_empty());
        assert!(split_comma("").is_empty());
    }
}
