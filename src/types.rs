use std::fmt;

use serde::{Deserialize, Serialize};

pub const CONTENT_PLACEHOLDER: &str = "No detailed content available for this project.";

/// Project identifiers come as numbers from the API and as either numbers
/// or strings from hand-written datasets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(id) => write!(f, "{}", id),
            ProjectId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ProjectRecord {
    /// GitHub URL to display. Private projects never expose one.
    pub fn github_link(&self) -> Option<&str> {
        if self.is_private {
            return None;
        }
        self.github.as_deref().filter(|url| !url.is_empty())
    }

    /// Markdown write-up, or the placeholder when none was supplied.
    pub fn content_or_placeholder(&self) -> &str {
        self.content.as_deref().unwrap_or(CONTENT_PLACEHOLDER)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Listing form of the record, as served by the projects index.
    pub fn summary(&self) -> ProjectRecord {
        ProjectRecord {
            content: None,
            ..self.clone()
        }
    }
}

pub fn find_by_slug(records: Vec<ProjectRecord>, slug: &str) -> Option<ProjectRecord> {
    records.into_iter().find(|record| record.slug == slug)
}
