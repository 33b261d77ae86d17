// src/render/mod.rs
//! Pure rendering of resume data into an HTML body, four layout variants.
//!
//! All variants share the same data semantics: a section is emitted only
//! when its underlying data is non-empty, dates are shown as "Mon YYYY",
//! and a current position always shows "Present" as its end label.

pub mod templates;

use crate::types::{ResumeData, TemplateId, WorkExperience};

/// Render the resume under the selected layout. Pure; no I/O.
pub fn render_resume(resume: &ResumeData, template: TemplateId) -> String {
    match template {
        TemplateId::Modern => templates::modern(resume),
        TemplateId::Classic => templates::classic(resume),
        TemplateId::Minimal => templates::minimal(resume),
        TemplateId::Creative => templates::creative(resume),
    }
}

/// Format a `YYYY-MM` date as "Mon YYYY". Empty input stays empty;
/// anything unparseable passes through unchanged.
pub fn format_month_year(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match chrono::NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// The "start - end" label for a work entry. A current position reads
/// "Present" regardless of the stored end date.
pub fn date_range(exp: &WorkExperience) -> String {
    let end = if exp.current {
        "Present".to_string()
    } else {
        format_month_year(&exp.end_date)
    };
    format!("{} - {}", format_month_year(&exp.start_date), end)
}

/// Minimal HTML escaping for user-entered text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Education, PersonalInfo};

    fn resume_with_one_job() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            summary: String::new(),
            work_experience: vec![WorkExperience {
                id: "1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                start_date: "2022-01".to_string(),
                end_date: String::new(),
                current: true,
                description: String::new(),
            }],
            education: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2023-08"), "Aug 2023");
        assert_eq!(format_month_year("2022-01"), "Jan 2022");
        assert_eq!(format_month_year(""), "");
        assert_eq!(format_month_year("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_current_position_renders_present() {
        let mut exp = WorkExperience {
            start_date: "2022-01".to_string(),
            end_date: "2023-06".to_string(),
            current: true,
            ..Default::default()
        };
        // Stored end date is ignored, not cleared.
        assert_eq!(date_range(&exp), "Jan 2022 - Present");

        exp.current = false;
        assert_eq!(date_range(&exp), "Jan 2022 - Jun 2023");
    }

    #[test]
    fn test_modern_template_renders_present_line() {
        let html = render_resume(&resume_with_one_job(), TemplateId::Modern);
        assert!(html.contains("Jan 2022 - Present"));
        assert!(html.contains("Acme"));
        assert!(html.contains("Engineer"));
    }

    #[test]
    fn test_empty_education_omitted_in_all_variants() {
        let resume = resume_with_one_job();
        for template in TemplateId::ALL {
            let html = render_resume(&resume, template);
            assert!(
                !html.to_lowercase().contains("education"),
                "{:?} should omit the education section entirely",
                template
            );
        }
    }

    #[test]
    fn test_education_present_when_populated() {
        let mut resume = resume_with_one_job();
        resume.education.push(Education {
            id: "e1".to_string(),
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            graduation_date: "2020-05".to_string(),
            gpa: Some("3.8".to_string()),
        });
        for template in TemplateId::ALL {
            let html = render_resume(&resume, template);
            assert!(html.contains("State University"), "{:?}", template);
            assert!(html.contains("May 2020"), "{:?}", template);
        }
    }

    #[test]
    fn test_empty_summary_and_skills_omitted() {
        let html = render_resume(&resume_with_one_job(), TemplateId::Classic);
        assert!(!html.contains("PROFESSIONAL SUMMARY"));
        assert!(!html.contains("CORE COMPETENCIES"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut resume = resume_with_one_job();
        resume.summary = "<script>alert('x')</script>".to_string();
        let html = render_resume(&resume, TemplateId::Modern);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
