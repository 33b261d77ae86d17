// src/render/templates.rs
//! The four layout variants. Layout differs; data semantics do not.

use super::{date_range, escape, format_month_year};
use crate::types::{Education, PersonalInfo, ResumeData};

fn contact_items(info: &PersonalInfo) -> Vec<String> {
    [
        &info.email,
        &info.phone,
        &info.location,
        &info.linkedin,
        &info.website,
    ]
    .iter()
    .filter(|value| !value.is_empty())
    .map(|value| escape(value))
    .collect()
}

fn display_name(info: &PersonalInfo) -> String {
    if info.full_name.is_empty() {
        "Your Name".to_string()
    } else {
        escape(&info.full_name)
    }
}

fn education_heading_line(edu: &Education) -> String {
    format!("{} in {}", escape(&edu.degree), escape(&edu.field))
}

/// Clean contemporary layout with accent-colored section headings.
pub fn modern(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume modern\">\n");

    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", display_name(&data.personal_info)));
    let contacts = contact_items(&data.personal_info);
    if !contacts.is_empty() {
        html.push_str("<div class=\"contact\">");
        for item in &contacts {
            html.push_str(&format!("<span>{}</span>", item));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</header>\n");

    if !data.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n<h2>Professional Summary</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape(&data.summary)));
    }

    if !data.work_experience.is_empty() {
        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        for exp in &data.work_experience {
            html.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            html.push_str(&format!(
                "<div><h3>{}</h3><p class=\"company\">{}</p></div>\n",
                escape(&exp.position),
                escape(&exp.company)
            ));
            html.push_str(&format!("<div class=\"dates\">{}</div>\n", date_range(exp)));
            html.push_str("</div>\n");
            if !exp.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    escape(&exp.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            html.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            html.push_str(&format!(
                "<div><h3>{}</h3><p class=\"institution\">{}</p></div>\n",
                education_heading_line(edu),
                escape(&edu.institution)
            ));
            html.push_str(&format!(
                "<div class=\"dates\">{}</div>\n</div>\n",
                format_month_year(&edu.graduation_date)
            ));
            if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
                html.push_str(&format!("<p class=\"gpa\">GPA: {}</p>\n", escape(gpa)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n<div class=\"skill-tags\">\n");
        for skill in &data.skills {
            html.push_str(&format!("<span class=\"skill\">{}</span>\n", escape(skill)));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Traditional serif layout with centered header and ruled headings.
pub fn classic(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume classic\">\n");

    html.push_str("<header class=\"header centered\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", display_name(&data.personal_info)));
    let contacts = contact_items(&data.personal_info);
    if !contacts.is_empty() {
        html.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contacts.join(" &bull; ")
        ));
    }
    html.push_str("</header>\n");

    if !data.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n<h2>PROFESSIONAL SUMMARY</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape(&data.summary)));
    }

    if !data.work_experience.is_empty() {
        html.push_str("<section class=\"experience\">\n<h2>PROFESSIONAL EXPERIENCE</h2>\n");
        for exp in &data.work_experience {
            html.push_str("<div class=\"entry\">\n");
            html.push_str(&format!(
                "<div class=\"entry-head\"><h3>{}</h3><span class=\"dates\">{}</span></div>\n",
                escape(&exp.position),
                date_range(exp)
            ));
            html.push_str(&format!(
                "<p class=\"company\">{}</p>\n",
                escape(&exp.company)
            ));
            if !exp.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    escape(&exp.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>EDUCATION</h2>\n");
        for edu in &data.education {
            html.push_str("<div class=\"entry\">\n<div class=\"entry-head\">\n");
            html.push_str(&format!(
                "<div><h3>{}</h3><p class=\"institution\">{}</p></div>\n",
                education_heading_line(edu),
                escape(&edu.institution)
            ));
            html.push_str(&format!(
                "<span class=\"dates\">{}</span>\n</div>\n",
                format_month_year(&edu.graduation_date)
            ));
            if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
                html.push_str(&format!("<p class=\"gpa\">GPA: {}</p>\n", escape(gpa)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>CORE COMPETENCIES</h2>\n<ul class=\"skill-grid\">\n");
        for skill in &data.skills {
            html.push_str(&format!("<li>{}</li>\n", escape(skill)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Two-column layout: summary and experience on the left, education and
/// skills in the narrow right column.
pub fn minimal(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume minimal\">\n");

    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", display_name(&data.personal_info)));
    let contacts = contact_items(&data.personal_info);
    if !contacts.is_empty() {
        html.push_str("<div class=\"contact\">");
        for item in &contacts {
            html.push_str(&format!("<span>{}</span>", item));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</header>\n<div class=\"columns\">\n<div class=\"main-column\">\n");

    if !data.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n<h2>About</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape(&data.summary)));
    }

    if !data.work_experience.is_empty() {
        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        for exp in &data.work_experience {
            html.push_str("<div class=\"entry\">\n");
            html.push_str(&format!(
                "<h3>{}</h3><p class=\"company\">{}</p><p class=\"dates\">{}</p>\n",
                escape(&exp.position),
                escape(&exp.company),
                date_range(exp)
            ));
            if !exp.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    escape(&exp.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</div>\n<div class=\"side-column\">\n");

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            html.push_str("<div class=\"entry\">\n");
            html.push_str(&format!(
                "<h3>{}</h3><p>{}</p><p>{}</p><p class=\"dates\">{}</p>\n",
                escape(&edu.degree),
                escape(&edu.field),
                escape(&edu.institution),
                format_month_year(&edu.graduation_date)
            ));
            if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
                html.push_str(&format!("<p class=\"gpa\">GPA: {}</p>\n", escape(gpa)));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n<ul>\n");
        for skill in &data.skills {
            html.push_str(&format!("<li>{}</li>\n", escape(skill)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</div>\n</div>\n</div>\n");
    html
}

/// Dark sidebar layout: contact, skills, and education in the sidebar,
/// profile and experience timeline on the right.
pub fn creative(data: &ResumeData) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"resume creative\">\n<aside class=\"sidebar\">\n");

    html.push_str(&format!("<h1>{}</h1>\n", display_name(&data.personal_info)));

    let contacts = contact_items(&data.personal_info);
    if !contacts.is_empty() {
        html.push_str("<section class=\"contact\">\n<h2>Contact</h2>\n");
        for item in &contacts {
            html.push_str(&format!("<div>{}</div>\n", item));
        }
        html.push_str("</section>\n");
    }

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n<ul>\n");
        for skill in &data.skills {
            html.push_str(&format!("<li>{}</li>\n", escape(skill)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><h3>{}</h3><p>{}</p><p>{}</p><p class=\"dates\">{}</p></div>\n",
                escape(&edu.degree),
                escape(&edu.field),
                escape(&edu.institution),
                format_month_year(&edu.graduation_date)
            ));
        }
        html.push_str("</section>\n");
    }

    html.push_str("</aside>\n<div class=\"content\">\n");

    if !data.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n<h2>Profile</h2>\n");
        html.push_str(&format!("<p>{}</p>\n</section>\n", escape(&data.summary)));
    }

    if !data.work_experience.is_empty() {
        html.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
        for exp in &data.work_experience {
            html.push_str("<div class=\"entry timeline\">\n");
            html.push_str(&format!(
                "<h3>{}</h3><p class=\"company\">{}</p><p class=\"dates\">{}</p>\n",
                escape(&exp.position),
                escape(&exp.company),
                date_range(exp)
            ));
            if !exp.description.is_empty() {
                html.push_str(&format!(
                    "<p class=\"description\">{}</p>\n",
                    escape(&exp.description)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    html.push_str("</div>\n</div>\n");
    html
}
