//! Analytics ingestion bodies.
//!
//! Request bodies are parsed leniently (every field optional, any JSON type)
//! and then validated into events. A field is present when it is a non-empty
//! string, a non-zero number or `true`; scalars are kept in their string form.
//! `null`, `false`, `0`, `""`, arrays and objects count as missing and yield a
//! `BadRequest` carrying the client-facing message.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FolioError, Result};

/// `POST /api/analytics/pageview` body: `{ "page": "..." }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewRequest {
    #[serde(default)]
    pub page: Option<Value>,
}

/// `POST /api/analytics/blog-view` body: `{ "blogId": "...", "blogTitle": "..." }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogViewRequest {
    #[serde(default)]
    pub blog_id: Option<Value>,
    #[serde(default)]
    pub blog_title: Option<Value>,
}

/// `POST /api/analytics/project-view` body: `{ "projectId": "...", "projectName": "..." }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectViewRequest {
    #[serde(default)]
    pub project_id: Option<Value>,
    #[serde(default)]
    pub project_name: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewEvent {
    pub page: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogViewEvent {
    pub blog_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectViewEvent {
    pub project_id: String,
    pub name: String,
}

fn present(field: Option<Value>) -> Option<String> {
    match field? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

impl PageViewRequest {
    pub fn validate(self) -> Result<PageViewEvent> {
        let page = present(self.page)
            .ok_or_else(|| FolioError::BadRequest("Page parameter required".into()))?;
        Ok(PageViewEvent { page })
    }
}

impl BlogViewRequest {
    pub fn validate(self) -> Result<BlogViewEvent> {
        match (present(self.blog_id), present(self.blog_title)) {
            (Some(blog_id), Some(title)) => Ok(BlogViewEvent { blog_id, title }),
            _ => Err(FolioError::BadRequest("Blog ID and title required".into())),
        }
    }
}

impl ProjectViewRequest {
    pub fn validate(self) -> Result<ProjectViewEvent> {
        match (present(self.project_id), present(self.project_name)) {
            (Some(project_id), Some(name)) => Ok(ProjectViewEvent { project_id, name }),
            _ => Err(FolioError::BadRequest("Project ID and name required".into())),
        }
    }
}
