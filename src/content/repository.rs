//! Markdown content repository
//!
//! The content root holds one directory per category; every `*.md` file below
//! it is an item whose slug is the file stem. An optional YAML front matter
//! block supplies the item's metadata.

use crate::core::error::ContentError;
use indexmap::IndexMap;
use pulldown_cmark::{Parser, html};
use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Listing metadata of a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub summary: String,
    pub updated: String,
    /// Display name of the category
    pub category: String,
    pub category_slug: String,
    pub slug: String,
}

/// A content item with its rendered body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub meta: PostMeta,
    pub content_html: String,
}

/// A category as shown in navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_slug: String,
    pub name: String,
}

/// Read-only view over a markdown tree
#[derive(Debug, Clone)]
pub struct ContentRepository {
    root: PathBuf,
}

impl ContentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every item, most recently updated first
    ///
    /// A missing root yields an empty list. Files directly under the root
    /// have no category and are skipped.
    pub fn all_posts(&self) -> Result<Vec<PostMeta>, ContentError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| ContentError::Io {
                path: self.root.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            if let Some(meta) = self.read_meta(entry.path())? {
                posts.push(meta);
            }
        }

        // stable: equal dates keep walk order
        posts.sort_by(|a, b| b.updated.cmp(&a.updated));
        Ok(posts)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Result<Vec<Category>, ContentError> {
        let mut seen: IndexMap<String, Category> = IndexMap::new();
        for post in self.all_posts()? {
            seen.entry(post.category_slug.clone())
                .or_insert_with(|| Category {
                    category_slug: post.category_slug,
                    name: post.category,
                });
        }
        Ok(seen.into_values().collect())
    }

    /// Items of one category
    pub fn posts_by_category(&self, category_slug: &str) -> Result<Vec<PostMeta>, ContentError> {
        let wanted = safe_segment(category_slug);
        Ok(self
            .all_posts()?
            .into_iter()
            .filter(|post| post.category_slug == wanted)
            .collect())
    }

    /// One item with its markdown rendered to HTML
    pub fn post(&self, category_slug: &str, slug: &str) -> Result<Post, ContentError> {
        let category = safe_segment(category_slug);
        let item = safe_segment(slug);
        if category.is_empty() || item.is_empty() {
            return Err(ContentError::MissingParams {
                category: category_slug.to_string(),
                slug: slug.to_string(),
            });
        }
        let slug = item;

        let path = self.root.join(&category).join(format!("{}.md", slug));
        if !path.is_file() {
            return Err(ContentError::NotFound { category, slug });
        }

        let raw = read_file(&path)?;
        let (front, body) = split_front_matter(&raw);
        let front = parse_front_matter(&path, front)?;

        Ok(Post {
            meta: front.into_meta(category, slug),
            content_html: render_markdown(body),
        })
    }

    fn read_meta(&self, path: &Path) -> Result<Option<PostMeta>, ContentError> {
        let Ok(rel) = path.strip_prefix(&self.root) else {
            return Ok(None);
        };
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.len() < 2 {
            return Ok(None);
        }

        let category = safe_segment(&parts[0]);
        let slug = safe_segment(strip_md_extension(&parts[parts.len() - 1]));
        if category.is_empty() || slug.is_empty() {
            return Ok(None);
        }

        let raw = read_file(path)?;
        let (front, _) = split_front_matter(&raw);
        let front = parse_front_matter(path, front)?;
        Ok(Some(front.into_meta(category, slug)))
    }
}

/// Trim and strip path separators from a route segment
///
/// `.` and `..` come back empty so they can never name a directory.
pub fn safe_segment(input: &str) -> String {
    let segment: String = input.trim().chars().filter(|c| !matches!(c, '/' | '\\')).collect();
    if segment == "." || segment == ".." {
        String::new()
    } else {
        segment
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn strip_md_extension(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 3
        && file_name.is_char_boundary(len - 3)
        && file_name[len - 3..].eq_ignore_ascii_case(".md")
    {
        &file_name[..len - 3]
    } else {
        file_name
    }
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Split a leading `---` YAML block from the markdown body
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }
    (None, text)
}

#[derive(Debug, Default)]
struct FrontMatter {
    title: Option<String>,
    summary: Option<String>,
    updated: Option<String>,
    category: Option<String>,
}

impl FrontMatter {
    fn into_meta(self, category_slug: String, slug: String) -> PostMeta {
        PostMeta {
            title: self.title.unwrap_or_else(|| slug.clone()),
            summary: self.summary.unwrap_or_default(),
            updated: self.updated.unwrap_or_default(),
            category: self.category.unwrap_or_else(|| category_slug.clone()),
            category_slug,
            slug,
        }
    }
}

fn parse_front_matter(path: &Path, front: Option<&str>) -> Result<FrontMatter, ContentError> {
    let Some(front) = front.filter(|f| !f.trim().is_empty()) else {
        return Ok(FrontMatter::default());
    };
    let value: YamlValue = serde_yaml::from_str(front).map_err(|e| ContentError::FrontMatter {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let field = |key: &str| value.get(key).and_then(scalar_text);
    Ok(FrontMatter {
        title: field("title"),
        summary: field("summary"),
        updated: field("updated"),
        category: field("category"),
    })
}

/// Text form of a YAML scalar; null and collections count as absent
fn scalar_text(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render CommonMark to HTML
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
