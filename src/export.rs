// src/export.rs
//! Export pipeline: wrap a rendered resume in a self-contained HTML
//! document suitable for download or operator-assisted printing.
//!
//! There is no server-side PDF rasterization. The "pdf" format returns a
//! document that invokes the browser's native print dialog shortly after
//! it loads; actual rasterization is delegated to the print pipeline.

use serde::{Deserialize, Serialize};

use crate::render::render_resume;
use crate::types::{ResumeData, TemplateId};

/// Delay before the exported document calls window.print(), giving the
/// new window time to lay out fonts and styles.
const PRINT_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Print-dialog export: the document auto-invokes window.print().
    Pdf,
    /// Placeholder: same document offered as a Word download.
    Docx,
    /// Raw document offered as a downloadable .html file.
    Html,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Pdf
    }
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Html => "html",
        }
    }
}

/// A complete export: the document plus how the client should treat it.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub html: String,
    /// Set for download formats; the pdf/print format is displayed, not saved.
    pub filename: Option<String>,
}

/// Build the export for the requested format. Pure; the resume is
/// re-rendered here rather than trusting any client-side markup.
pub fn export_resume(
    resume: &ResumeData,
    template: TemplateId,
    format: ExportFormat,
) -> ExportedDocument {
    let body = render_resume(resume, template);
    let auto_print = format == ExportFormat::Pdf;
    let html = document_shell(&resume.personal_info.full_name, &body, auto_print);

    let filename = match format {
        ExportFormat::Pdf => None,
        ExportFormat::Docx | ExportFormat::Html => Some(resume_file_name(resume, format)),
    };

    ExportedDocument { html, filename }
}

/// Download filename derived from the person's name: lower-cased,
/// whitespace collapsed to underscores, other non-alphanumerics dropped.
/// Falls back to "resume" when the name is empty.
pub fn resume_file_name(resume: &ResumeData, format: ExportFormat) -> String {
    let sanitized = sanitize_name(&resume.personal_info.full_name);
    let stem = if sanitized.is_empty() {
        "resume".to_string()
    } else {
        format!("{}_resume", sanitized)
    };
    format!("{}.{}", stem, format.extension())
}

fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if c.is_whitespace() && !out.ends_with('_') && !out.is_empty() {
            out.push('_');
        }
        // Any other character (apostrophes, punctuation) is dropped.
    }
    out.trim_end_matches('_').to_string()
}

/// Wrap a rendered body in a standalone HTML document with embedded
/// screen and print styles.
fn document_shell(full_name: &str, body: &str, auto_print: bool) -> String {
    let title = if full_name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", crate::render::escape(full_name))
    };

    let print_script = if auto_print {
        format!(
            "<script>window.onload = function() {{ setTimeout(function() {{ window.print(); }}, {}); }};</script>\n",
            PRINT_DELAY_MS
        )
    } else {
        String::new()
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{css}\n</style>\n{print_script}</head>\n\
         <body>\n{body}</body>\n</html>\n",
        title = title,
        css = DOCUMENT_CSS,
        print_script = print_script,
        body = body,
    )
}

const DOCUMENT_CSS: &str = r#"* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; color: #111827; background: #fff; }
.resume { max-width: 56rem; margin: 0 auto; padding: 2rem; }
.resume h1 { font-size: 1.875rem; margin-bottom: 0.5rem; }
.resume h2 { font-size: 1.125rem; margin-bottom: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; }
.resume h3 { font-size: 1rem; }
.resume section { margin-bottom: 1.5rem; }
.resume .contact span { margin-right: 1rem; font-size: 0.875rem; color: #4b5563; }
.resume .dates { font-size: 0.875rem; color: #4b5563; }
.resume .description { font-size: 0.875rem; line-height: 1.6; color: #374151; margin-top: 0.5rem; }
.resume .entry { margin-bottom: 1rem; }
.resume .entry-head { display: flex; justify-content: space-between; align-items: flex-start; }
.modern .header { border-bottom: 2px solid #0891b2; padding-bottom: 1.5rem; margin-bottom: 1.5rem; }
.modern h2 { color: #0891b2; }
.modern .company { color: #0891b2; font-weight: 500; }
.modern .skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.modern .skill { background: #f3f4f6; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; }
.classic { font-family: Georgia, 'Times New Roman', serif; }
.classic .header.centered { text-align: center; border-bottom: 1px solid #d1d5db; padding-bottom: 1.5rem; margin-bottom: 1.5rem; }
.classic h2 { border-bottom: 1px solid #e5e7eb; padding-bottom: 0.25rem; }
.classic .skill-grid { columns: 3; list-style: disc inside; font-size: 0.875rem; }
.minimal h1 { font-size: 3rem; font-weight: 300; }
.minimal .columns { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.minimal h2 { font-size: 0.875rem; letter-spacing: 0.1em; }
.minimal ul { list-style: none; font-size: 0.875rem; }
.creative { display: grid; grid-template-columns: 1fr 2fr; max-width: 56rem; margin: 0 auto; padding: 0; }
.creative .sidebar { background: #111827; color: #fff; padding: 2rem; }
.creative .sidebar h2 { color: #f1c8c8; font-size: 0.875rem; }
.creative .sidebar ul { list-style: none; font-size: 0.875rem; }
.creative .content { padding: 2rem; }
.creative .timeline { border-left: 2px solid #f1c8c8; padding-left: 1rem; }
@media print {
  body { -webkit-print-color-adjust: exact; print-color-adjust: exact; }
  .resume { max-width: none; padding: 0; }
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PersonalInfo;

    fn resume_named(name: &str) -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: name.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_file_name_sanitization() {
        assert_eq!(
            resume_file_name(&resume_named("Jane O'Brien"), ExportFormat::Html),
            "jane_obrien_resume.html"
        );
        assert_eq!(
            resume_file_name(&resume_named("John Doe"), ExportFormat::Docx),
            "john_doe_resume.docx"
        );
        assert_eq!(
            resume_file_name(&resume_named(""), ExportFormat::Html),
            "resume.html"
        );
        assert_eq!(
            resume_file_name(&resume_named("  !!  "), ExportFormat::Html),
            "resume.html"
        );
    }

    #[test]
    fn test_pdf_export_embeds_deferred_print() {
        let doc = export_resume(&resume_named("Jane"), TemplateId::Modern, ExportFormat::Pdf);
        assert!(doc.html.contains("window.print()"));
        assert!(doc.html.contains("setTimeout"));
        assert!(doc.filename.is_none());
    }

    #[test]
    fn test_html_export_is_download_without_print() {
        let doc = export_resume(&resume_named("Jane"), TemplateId::Modern, ExportFormat::Html);
        assert!(!doc.html.contains("window.print()"));
        assert_eq!(doc.filename.as_deref(), Some("jane_resume.html"));
    }

    #[test]
    fn test_document_is_self_contained() {
        let doc = export_resume(
            &resume_named("Jane"),
            TemplateId::Creative,
            ExportFormat::Html,
        );
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<style>"));
        assert!(doc.html.contains("class=\"resume creative\""));
        assert!(doc.html.contains("<title>Jane - Resume</title>"));
    }
}
