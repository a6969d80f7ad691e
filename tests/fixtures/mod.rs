//! Shared fixtures for integration tests
//!
//! Templates are built in memory so the tests never depend on a real Word
//! file on disk.

#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use infosite::prelude::*;
use serde_json::{Value, json};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

pub const TEMPLATE_NAME: &str = "labor-contract-template-fillable.docx";

/// Body of the default template: one placeholder split across runs, the
/// rest plain
pub const TEMPLATE_BODY: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document><w:body>"#,
    r#"<w:p><w:r><w:t>甲方：{{employer_name}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>乙方：{{employee_</w:t></w:r>"#,
    r#"<w:r><w:rPr><w:b/></w:rPr><w:t>name}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>期限：{{term_type_label}}，{{start_date}}至{{end_date}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t>工资：{{wage_type_label}} {{monthly_wage}}</w:t></w:r></w:p>"#,
    r#"<w:p><w:r><w:t xml:space="preserve">{{job_duties}}</w:t></w:r></w:p>"#,
    r#"</w:body></w:document>"#,
);

/// Zip the given parts into a DOCX-shaped archive
pub fn docx_with(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(body.as_bytes()).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// A minimal template with content types, a header and the default body
pub fn contract_template() -> Vec<u8> {
    docx_with(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", TEMPLATE_BODY),
        ("word/header1.xml", "<w:hdr><w:t>{{employer_name}}</w:t></w:hdr>"),
    ])
}

/// Extract one part of a generated document as text
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut entry = archive.by_name(name).expect("part present");
    let mut out = String::new();
    entry.read_to_string(&mut out).expect("utf-8 part");
    out
}

/// A payload that passes every rule
pub fn valid_payload() -> Value {
    json!({
        "employer_name": "某某科技有限公司",
        "employee_name": "张三",
        "employee_id": "11010519800101123X",
        "term_type": "1",
        "start_date": "2026-01-01",
        "end_date": "2028-12-31",
        "position": "工程师",
        "work_location": "北京市朝阳区",
        "wage_type": "1",
        "monthly_wage": "12000",
        "payday": "15",
        "sign_date": "2025-12-20",
        "job_duties": "开发\n测试",
    })
}

/// Router with an in-memory store holding `template`
pub fn app_with_template(template: Vec<u8>) -> Router {
    let store = InMemoryTemplateStore::new()
        .with_template(TEMPLATE_NAME, template)
        .expect("insert template");
    ServerBuilder::new()
        .with_template_store(store)
        .build()
        .expect("build router")
}

pub fn test_server(app: Router) -> TestServer {
    TestServer::new(app).expect("start test server")
}
