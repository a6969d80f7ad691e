//! Download response for generated documents
//!
//! Error shapes live on [`SiteError`](crate::core::error::SiteError); this
//! module only builds the success side.

use super::generator::GeneratedDocument;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// MIME type of Office Open XML word-processing documents
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Everything except `A-Z a-z 0-9 - _ . ! ~` is escaped
///
/// `'`, `(`, `)` and `*` are escaped too: they carry meaning in the
/// extended `filename*` syntax.
const FILE_NAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~');

/// Percent-encode a file name for `filename*=UTF-8''`
pub fn encode_file_name(file_name: &str) -> String {
    utf8_percent_encode(file_name, FILE_NAME_SET).to_string()
}

/// `Content-Disposition` value for an attachment
pub fn content_disposition(file_name: &str) -> String {
    format!(
        "attachment; filename*=UTF-8''{}",
        encode_file_name(file_name)
    )
}

impl IntoResponse for GeneratedDocument {
    fn into_response(self) -> Response {
        let disposition = content_disposition(&self.file_name);
        // percent-encoded output is plain ASCII
        let disposition = HeaderValue::from_str(&disposition)
            .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_CONTENT_TYPE)),
                (header::CONTENT_DISPOSITION, disposition),
                (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
            ],
            self.bytes,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component_rules() {
        assert_eq!(encode_file_name("a b.docx"), "a%20b.docx");
        assert_eq!(encode_file_name("x-y_z.!~"), "x-y_z.!~");
        assert_eq!(encode_file_name("it's (1)*"), "it%27s%20%281%29%2A");
    }

    #[test]
    fn test_encode_utf8_name() {
        assert_eq!(
            encode_file_name("劳动合同_张三.docx"),
            "%E5%8A%B3%E5%8A%A8%E5%90%88%E5%90%8C_%E5%BC%A0%E4%B8%89.docx"
        );
    }

    #[test]
    fn test_content_disposition_prefix() {
        assert_eq!(
            content_disposition("a.docx"),
            "attachment; filename*=UTF-8''a.docx"
        );
    }

    #[test]
    fn test_document_response_headers() {
        let response = GeneratedDocument {
            bytes: vec![1, 2, 3],
            file_name: "劳动合同_模板.docx".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], DOCX_CONTENT_TYPE);
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
        assert!(
            headers[header::CONTENT_DISPOSITION]
                .to_str()
                .unwrap()
                .starts_with("attachment; filename*=UTF-8''%E5%8A%B3")
        );
    }
}
