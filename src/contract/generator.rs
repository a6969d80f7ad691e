//! DOCX template merge
//!
//! A DOCX file is a zip container of XML parts. Placeholders written as
//! `{{field}}` in the body, headers or footers are replaced with the
//! normalized contract values; every other entry is copied through as is.
//! Word processors often split a placeholder across several runs, so the
//! markup inside a `{{ … }}` span is dropped before rendering.

use super::validator::ContractData;
use crate::config::DocumentConfig;
use crate::core::error::TemplateError;
use regex::Regex;
use std::io::{Cursor, Read, Write};
use std::sync::OnceLock;
use tera::{Context, Tera};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Main body part, required in every template
pub const DOCUMENT_PART: &str = "word/document.xml";

/// A rendered document ready to be streamed
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Merges contract data into DOCX templates
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    file_name_prefix: String,
    fallback_name: String,
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::from_config(&DocumentConfig::default())
    }
}

impl DocumentGenerator {
    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            file_name_prefix: config.file_name_prefix.clone(),
            fallback_name: config.fallback_name.clone(),
        }
    }

    /// Render `data` into a copy of `template`
    pub fn render(
        &self,
        template: &[u8],
        data: &ContractData,
    ) -> Result<GeneratedDocument, TemplateError> {
        let mut archive = ZipArchive::new(Cursor::new(template))?;
        if !archive.file_names().any(|name| name == DOCUMENT_PART) {
            return Err(TemplateError::MissingPart {
                part: DOCUMENT_PART.to_string(),
            });
        }

        let context = build_context(data);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();

            if entry.is_dir() {
                writer
                    .add_directory(name, options)
                    .map_err(|e| write_error(&e))?;
                continue;
            }

            let mut raw = Vec::new();
            entry
                .read_to_end(&mut raw)
                .map_err(|e| TemplateError::InvalidArchive {
                    message: format!("{}: {}", name, e),
                })?;

            let bytes = if is_text_part(&name) {
                render_part(&name, raw, &context)?.into_bytes()
            } else {
                raw
            };

            writer
                .start_file(name, options)
                .map_err(|e| write_error(&e))?;
            writer.write_all(&bytes).map_err(|e| write_error(&e))?;
        }

        let bytes = writer.finish().map_err(|e| write_error(&e))?.into_inner();

        Ok(GeneratedDocument {
            bytes,
            file_name: self.file_name(&data.form.employee_name),
        })
    }

    /// Download name derived from the employee name
    pub fn file_name(&self, employee_name: &str) -> String {
        let stem = if employee_name.is_empty() {
            self.fallback_name.as_str()
        } else {
            employee_name
        };
        format!("{}{}.docx", self.file_name_prefix, sanitize_file_name(stem))
    }
}

/// Replace characters that are not allowed in file names with `_`
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            other => other,
        })
        .collect()
}

fn write_error(err: &dyn std::fmt::Display) -> TemplateError {
    TemplateError::Write {
        message: err.to_string(),
    }
}

/// Parts that may carry placeholders
fn is_text_part(name: &str) -> bool {
    let Some(file) = name.strip_prefix("word/") else {
        return false;
    };
    if file.contains('/') || !file.ends_with(".xml") {
        return false;
    }
    ["document", "header", "footer", "footnotes", "endnotes"]
        .iter()
        .any(|prefix| file.starts_with(prefix))
}

fn build_context(data: &ContractData) -> Context {
    let mut context = Context::new();
    for (name, value) in data.placeholders() {
        context.insert(name, &to_run_text(value));
    }
    context
}

/// Escape a value for a `<w:t>` run, turning newlines into breaks
fn to_run_text(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len());
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            out.push_str(r#"</w:t><w:br/><w:t xml:space="preserve">"#);
        }
        for c in line.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&apos;"),
                other => out.push(other),
            }
        }
    }
    out
}

fn split_placeholder_regex() -> &'static Regex {
    static SPLIT_REGEX: OnceLock<Regex> = OnceLock::new();
    SPLIT_REGEX.get_or_init(|| {
        Regex::new(r"\{(?:<[^>]*>)*\{((?:[^{}<]|<[^>]*>)*?)\}(?:<[^>]*>)*\}")
            .expect("valid placeholder regex")
    })
}

fn markup_regex() -> &'static Regex {
    static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKUP_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid markup regex"))
}

/// Rejoin placeholders whose characters were spread over several runs
pub fn join_split_placeholders(xml: &str) -> String {
    split_placeholder_regex()
        .replace_all(xml, |caps: &regex::Captures<'_>| {
            format!("{{{{{}}}}}", markup_regex().replace_all(&caps[1], ""))
        })
        .into_owned()
}

fn render_part(name: &str, raw: Vec<u8>, context: &Context) -> Result<String, TemplateError> {
    let xml = String::from_utf8(raw).map_err(|e| TemplateError::Encoding {
        part: name.to_string(),
        message: e.to_string(),
    })?;
    let prepared = join_split_placeholders(&xml);
    if !prepared.contains("{{") && !prepared.contains("{%") {
        return Ok(prepared);
    }
    Tera::one_off(&prepared, context, false).map_err(|e| TemplateError::Render {
        part: name.to_string(),
        message: error_chain(&e),
    })
}

/// Tera nests the useful message in its source chain
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::validator::validate;
    use serde_json::json;

    fn docx_with(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut out = String::new();
        entry.read_to_string(&mut out).unwrap();
        out
    }

    fn sample_data() -> ContractData {
        validate(&json!({
            "employee_name": "李<四>",
            "job_duties": "搬运\n装卸",
            "term_type": "1",
        }))
        .data
    }

    #[test]
    fn test_render_substitutes_and_escapes() {
        let template = docx_with(&[(
            DOCUMENT_PART,
            "<w:p><w:r><w:t>{{employee_name}}/{{term_type_label}}</w:t></w:r></w:p>",
        )]);
        let doc = DocumentGenerator::default()
            .render(&template, &sample_data())
            .unwrap();
        let body = read_part(&doc.bytes, DOCUMENT_PART);
        assert!(body.contains("李&lt;四&gt;/固定期限"), "{body}");
    }

    #[test]
    fn test_newlines_become_breaks() {
        let template = docx_with(&[(DOCUMENT_PART, "<w:t>{{job_duties}}</w:t>")]);
        let doc = DocumentGenerator::default()
            .render(&template, &sample_data())
            .unwrap();
        let body = read_part(&doc.bytes, DOCUMENT_PART);
        assert!(body.contains("搬运</w:t><w:br/><w:t xml:space=\"preserve\">装卸"));
    }

    #[test]
    fn test_split_runs_are_rejoined() {
        let xml = "<w:t>{{employee_</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>name}}</w:t>";
        assert_eq!(join_split_placeholders(xml), "<w:t>{{employee_name}}</w:t>");

        let braces = "<w:t>{</w:t></w:r><w:r><w:t>{position}</w:t></w:r><w:r><w:t>}</w:t>";
        assert_eq!(join_split_placeholders(braces), "<w:t>{{position}}</w:t>");
    }

    #[test]
    fn test_headers_rendered_and_other_parts_copied() {
        let template = docx_with(&[
            (DOCUMENT_PART, "<w:t>body</w:t>"),
            ("word/header1.xml", "<w:t>{{employee_name}}</w:t>"),
            ("word/styles.xml", "<w:style>{{not_a_field}}</w:style>"),
            ("[Content_Types].xml", "<Types/>"),
        ]);
        let doc = DocumentGenerator::default()
            .render(&template, &sample_data())
            .unwrap();
        assert!(read_part(&doc.bytes, "word/header1.xml").contains("李&lt;四&gt;"));
        assert_eq!(
            read_part(&doc.bytes, "word/styles.xml"),
            "<w:style>{{not_a_field}}</w:style>"
        );
        assert_eq!(read_part(&doc.bytes, "[Content_Types].xml"), "<Types/>");
    }

    #[test]
    fn test_unknown_placeholder_is_render_error() {
        let template = docx_with(&[(DOCUMENT_PART, "<w:t>{{salary_grade}}</w:t>")]);
        let err = DocumentGenerator::default()
            .render(&template, &sample_data())
            .unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }), "{err:?}");
    }

    #[test]
    fn test_missing_document_part() {
        let template = docx_with(&[("word/header1.xml", "<w:t/>")]);
        let err = DocumentGenerator::default()
            .render(&template, &sample_data())
            .unwrap_err();
        assert!(matches!(err, TemplateError::MissingPart { .. }));
    }

    #[test]
    fn test_corrupt_template_is_invalid_archive() {
        let err = DocumentGenerator::default()
            .render(b"not a zip file", &sample_data())
            .unwrap_err();
        assert!(matches!(err, TemplateError::InvalidArchive { .. }));
    }

    #[test]
    fn test_file_name_sanitized_and_fallback() {
        let generator = DocumentGenerator::default();
        assert_eq!(generator.file_name("王/五:六"), "劳动合同_王_五_六.docx");
        assert_eq!(generator.file_name(""), "劳动合同_模板.docx");
        assert_eq!(sanitize_file_name(r#"a\b*c?d"e<f>g|h"#), "a_b_c_d_e_f_g_h");
    }

    #[test]
    fn test_is_text_part() {
        assert!(is_text_part("word/document.xml"));
        assert!(is_text_part("word/footer2.xml"));
        assert!(!is_text_part("word/_rels/document.xml.rels"));
        assert!(!is_text_part("word/styles.xml"));
        assert!(!is_text_part("docProps/core.xml"));
    }
}
