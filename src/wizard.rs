// src/wizard.rs
//! Wizard controller: a linear step machine over the form flow, owning
//! the resume data for one session.
//!
//! AI-assist writes go through per-field generation tokens. A response is
//! applied only when its token is still the latest one issued for that
//! field, so a stale in-flight response cannot clobber a newer edit or a
//! newer request's result.

use std::collections::HashMap;

use crate::types::{CareerGuidance, Education, ResumeData, TemplateId, WorkExperience};

/// The eight wizard steps, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Template,
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    CareerGuidance,
    Preview,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::Template,
        WizardStep::PersonalInfo,
        WizardStep::Summary,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::Skills,
        WizardStep::CareerGuidance,
        WizardStep::Preview,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Template => "Template",
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Summary => "Summary",
            WizardStep::Experience => "Experience",
            WizardStep::Education => "Education",
            WizardStep::Skills => "Skills",
            WizardStep::CareerGuidance => "Career Guidance",
            WizardStep::Preview => "Preview",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Template => "Choose your design",
            WizardStep::PersonalInfo => "Basic contact information",
            WizardStep::Summary => "Professional summary",
            WizardStep::Experience => "Work history",
            WizardStep::Education => "Educational background",
            WizardStep::Skills => "Technical and soft skills",
            WizardStep::CareerGuidance => "AI career insights",
            WizardStep::Preview => "Final preview",
        }
    }
}

/// Destination of an AI-assist response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeneratedField {
    Summary,
    ExperienceDescription(String),
    Skills,
    CareerGuidance,
}

/// Handle for one in-flight generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationToken {
    field: GeneratedField,
    seq: u64,
}

/// Session state for one resume-building flow.
#[derive(Debug, Default)]
pub struct WizardController {
    step: usize,
    pub template: TemplateId,
    pub resume: ResumeData,
    pub guidance: CareerGuidance,
    latest_tokens: HashMap<GeneratedField, u64>,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.step]
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    /// Move to the next step; no-op at the final step.
    pub fn advance(&mut self) {
        if self.step + 1 < WizardStep::ALL.len() {
            self.step += 1;
        }
    }

    /// Move to the previous step; no-op at the first step.
    pub fn retreat(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    pub fn select_template(&mut self, template: TemplateId) {
        self.template = template;
    }

    /// Append an empty experience entry and return its id.
    pub fn add_experience(&mut self) -> String {
        let entry = WorkExperience::new();
        let id = entry.id.clone();
        self.resume.work_experience.push(entry);
        id
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.resume.work_experience.retain(|exp| exp.id != id);
    }

    pub fn experience_mut(&mut self, id: &str) -> Option<&mut WorkExperience> {
        self.resume.work_experience.iter_mut().find(|e| e.id == id)
    }

    pub fn add_education(&mut self) -> String {
        let entry = Education::new();
        let id = entry.id.clone();
        self.resume.education.push(entry);
        id
    }

    pub fn remove_education(&mut self, id: &str) {
        self.resume.education.retain(|edu| edu.id != id);
    }

    pub fn education_mut(&mut self, id: &str) -> Option<&mut Education> {
        self.resume.education.iter_mut().find(|e| e.id == id)
    }

    pub fn add_skill(&mut self, skill: &str) -> bool {
        self.resume.add_skill(skill)
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.resume.remove_skill(skill);
    }

    /// Register a new in-flight request for a field. Any token issued
    /// earlier for the same field becomes stale.
    pub fn begin_generation(&mut self, field: GeneratedField) -> GenerationToken {
        let seq = self.latest_tokens.entry(field.clone()).or_insert(0);
        *seq += 1;
        GenerationToken { field, seq: *seq }
    }

    fn token_is_current(&self, token: &GenerationToken) -> bool {
        self.latest_tokens.get(&token.field) == Some(&token.seq)
    }

    /// Apply generated text to the token's field. Returns false (and
    /// writes nothing) when the token is stale or the target entry is gone.
    pub fn apply_generated(&mut self, token: &GenerationToken, content: &str) -> bool {
        if !self.token_is_current(token) {
            return false;
        }
        match &token.field {
            GeneratedField::Summary => {
                self.resume.summary = content.to_string();
                true
            }
            GeneratedField::ExperienceDescription(id) => {
                let id = id.clone();
                match self.experience_mut(&id) {
                    Some(exp) => {
                        exp.description = content.to_string();
                        true
                    }
                    None => false,
                }
            }
            GeneratedField::Skills => {
                // Suggested skills arrive comma-separated; merge-dedup.
                for skill in content.split(',') {
                    self.resume.add_skill(skill);
                }
                true
            }
            GeneratedField::CareerGuidance => false,
        }
    }

    /// Apply a full guidance result; same staleness rule as text fields.
    pub fn apply_guidance(&mut self, token: &GenerationToken, guidance: CareerGuidance) -> bool {
        if token.field != GeneratedField::CareerGuidance || !self.token_is_current(token) {
            return false;
        }
        self.guidance = guidance;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_retreat_clamp_at_boundaries() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.current_step(), WizardStep::Template);

        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::Template);

        for _ in 0..20 {
            wizard.advance();
        }
        assert_eq!(wizard.current_step(), WizardStep::Preview);

        wizard.retreat();
        assert_eq!(wizard.current_step(), WizardStep::CareerGuidance);
    }

    #[test]
    fn test_steps_in_display_order() {
        let titles: Vec<_> = WizardStep::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Template",
                "Personal Info",
                "Summary",
                "Experience",
                "Education",
                "Skills",
                "Career Guidance",
                "Preview"
            ]
        );
    }

    #[test]
    fn test_experience_lifecycle() {
        let mut wizard = WizardController::new();
        let id = wizard.add_experience();
        wizard.experience_mut(&id).unwrap().company = "Acme".to_string();
        assert_eq!(wizard.resume.work_experience.len(), 1);

        wizard.remove_experience(&id);
        assert!(wizard.resume.work_experience.is_empty());
    }

    #[test]
    fn test_stale_generation_token_is_discarded() {
        let mut wizard = WizardController::new();
        let first = wizard.begin_generation(GeneratedField::Summary);
        let second = wizard.begin_generation(GeneratedField::Summary);

        // The older request resolves after the newer one was issued.
        assert!(!wizard.apply_generated(&first, "stale text"));
        assert_eq!(wizard.resume.summary, "");

        assert!(wizard.apply_generated(&second, "fresh text"));
        assert_eq!(wizard.resume.summary, "fresh text");
    }

    #[test]
    fn test_tokens_are_scoped_per_field() {
        let mut wizard = WizardController::new();
        let id = wizard.add_experience();
        let summary_token = wizard.begin_generation(GeneratedField::Summary);
        let exp_token =
            wizard.begin_generation(GeneratedField::ExperienceDescription(id.clone()));

        // A later request for a different field does not invalidate this one.
        assert!(wizard.apply_generated(&summary_token, "summary"));
        assert!(wizard.apply_generated(&exp_token, "did things"));
        assert_eq!(
            wizard.resume.work_experience[0].description,
            "did things"
        );
    }

    #[test]
    fn test_generated_skills_merge_without_duplicates() {
        let mut wizard = WizardController::new();
        wizard.add_skill("Rust");
        let token = wizard.begin_generation(GeneratedField::Skills);
        assert!(wizard.apply_generated(&token, "Rust, SQL , Docker"));
        assert_eq!(wizard.resume.skills, vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_apply_to_removed_entry_is_dropped() {
        let mut wizard = WizardController::new();
        let id = wizard.add_experience();
        let token = wizard.begin_generation(GeneratedField::ExperienceDescription(id.clone()));
        wizard.remove_experience(&id);
        assert!(!wizard.apply_generated(&token, "orphaned"));
    }

    #[test]
    fn test_guidance_applies_wholesale() {
        let mut wizard = WizardController::new();
        let token = wizard.begin_generation(GeneratedField::CareerGuidance);
        let guidance = CareerGuidance {
            career_paths: vec!["Path".to_string()],
            ..Default::default()
        };
        assert!(wizard.apply_guidance(&token, guidance.clone()));
        assert_eq!(wizard.guidance, guidance);

        let stale = token;
        let _newer = wizard.begin_generation(GeneratedField::CareerGuidance);
        assert!(!wizard.apply_guidance(&stale, CareerGuidance::default()));
        assert_eq!(wizard.guidance.career_paths, vec!["Path"]);
    }
}
