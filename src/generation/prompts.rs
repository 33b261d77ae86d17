// src/generation/prompts.rs
//! Prompt templates for every generation section.
//!
//! Each template carries its role framing (resume writer vs career
//! counselor), the caller-supplied context, and the fixed formatting
//! requirements the post-processing relies on (comma-separated output for
//! job titles and skills, one item per line for the guidance sections).

use super::Section;

pub fn render(section: Section, prompt: &str, context: &str) -> String {
    match section {
        Section::ProfessionalSummary => format!(
            "You are an expert resume writer. Create a compelling professional summary (2-3 sentences) that highlights key qualifications and career objectives.\n\
             \n\
             Context: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Start with years of experience or key expertise area\n\
             - Include 2-3 most relevant skills or achievements\n\
             - End with career goal or value proposition\n\
             - Keep to 2-3 sentences maximum\n\
             - Use active voice and strong action words\n\
             \n\
             Generate a professional summary:"
        ),
        Section::WorkExperience => format!(
            "You are an expert resume writer. Generate 3-4 bullet points describing responsibilities and achievements for this work experience.\n\
             \n\
             Job Details: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Start each bullet with a strong action verb\n\
             - Include quantifiable results where possible (numbers, percentages, dollar amounts)\n\
             - Focus on achievements, not just duties\n\
             - Use past tense for previous roles, present tense for current roles\n\
             - Each bullet should be 1-2 lines maximum\n\
             - Show impact and value delivered\n\
             \n\
             Generate professional bullet points:"
        ),
        Section::Skills => format!(
            "You are an expert resume writer. Suggest relevant skills based on the provided information.\n\
             \n\
             Context: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Include both technical and soft skills\n\
             - Focus on industry-relevant skills\n\
             - Mix of tools, technologies, and competencies\n\
             - Return as a comma-separated list\n\
             - Include 8-12 skills maximum\n\
             - Prioritize in-demand skills for the field\n\
             \n\
             Generate relevant skills:"
        ),
        Section::EducationDescription => format!(
            "You are an expert resume writer. Generate a brief description for this educational background.\n\
             \n\
             Education Details: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Highlight relevant coursework, projects, or achievements\n\
             - Include honors, awards, or notable GPA if applicable\n\
             - Keep to 1-2 sentences\n\
             - Focus on what's most relevant to career goals\n\
             \n\
             Generate education description:"
        ),
        Section::JobTitleSuggestions => format!(
            "You are an expert resume writer. Suggest professional job titles that accurately represent this role.\n\
             \n\
             Role Description: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Provide 3-5 alternative job titles\n\
             - Use industry-standard terminology\n\
             - Consider seniority level and responsibilities\n\
             - Return as a comma-separated list\n\
             - Focus on titles that would be recognized by ATS systems\n\
             \n\
             Generate job title suggestions:"
        ),
        Section::CompanyDescription => format!(
            "You are an expert resume writer. Generate a brief, professional description of this company.\n\
             \n\
             Company Information: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - 1 sentence describing what the company does\n\
             - Include industry and company size if known\n\
             - Use professional, neutral tone\n\
             - Focus on business function and market position\n\
             \n\
             Generate company description:"
        ),
        Section::CareerPaths => format!(
            "You are an expert career counselor. Analyze the provided background and suggest 3-5 potential career paths.\n\
             \n\
             Background: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Consider current experience, education, and skills\n\
             - Suggest realistic next steps and long-term paths\n\
             - Include both lateral moves and advancement opportunities\n\
             - Focus on growth potential and market demand\n\
             - Each path should be 1-2 sentences explaining the progression\n\
             - Return each path on a new line\n\
             \n\
             Generate career path suggestions:"
        ),
        Section::SkillGaps => format!(
            "You are an expert career counselor. Identify key skills that would enhance career prospects based on the provided background.\n\
             \n\
             Background: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Identify 4-6 high-impact skills to develop\n\
             - Focus on in-demand skills for the industry/role\n\
             - Include both technical and soft skills\n\
             - Consider current skill set and natural progression\n\
             - Each skill should include brief explanation of why it's valuable\n\
             - Return each skill on a new line\n\
             \n\
             Generate skill gap analysis:"
        ),
        Section::CareerRecommendations => format!(
            "You are an expert career counselor. Provide actionable career advice based on the provided background.\n\
             \n\
             Background: {prompt}\n\
             Additional Context: {context}\n\
             \n\
             Requirements:\n\
             - Provide 4-6 specific, actionable recommendations\n\
             - Include networking, learning, experience, and positioning advice\n\
             - Focus on practical steps they can take in the next 6-12 months\n\
             - Consider industry trends and market opportunities\n\
             - Each recommendation should be specific and measurable\n\
             - Return each recommendation on a new line\n\
             \n\
             Generate career recommendations:"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_section_selects_its_own_template() {
        let markers = [
            (Section::ProfessionalSummary, "professional summary (2-3 sentences)"),
            (Section::WorkExperience, "3-4 bullet points"),
            (Section::Skills, "Suggest relevant skills"),
            (Section::EducationDescription, "educational background"),
            (Section::JobTitleSuggestions, "professional job titles"),
            (Section::CompanyDescription, "description of this company"),
            (Section::CareerPaths, "3-5 potential career paths"),
            (Section::SkillGaps, "enhance career prospects"),
            (Section::CareerRecommendations, "actionable career advice"),
        ];
        for (section, marker) in markers {
            let prompt = render(section, "p", "c");
            assert!(
                prompt.contains(marker),
                "{:?} template missing marker {:?}",
                section,
                marker
            );
        }
    }

    #[test]
    fn test_prompt_embeds_caller_context() {
        let prompt = render(Section::Skills, "background info", "Target role: SRE");
        assert!(prompt.contains("background info"));
        assert!(prompt.contains("Target role: SRE"));
    }

    #[test]
    fn test_counselor_sections_use_counselor_framing() {
        for section in [
            Section::CareerPaths,
            Section::SkillGaps,
            Section::CareerRecommendations,
        ] {
            assert!(render(section, "", "").starts_with("You are an expert career counselor."));
        }
        assert!(render(Section::WorkExperience, "", "")
            .starts_with("You are an expert resume writer."));
    }
}
