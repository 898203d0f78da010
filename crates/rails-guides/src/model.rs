use serde::{Deserialize, Serialize};

use crate::categories::CategoryTable;

/// A single Rails guide (e.g. "getting_started" in "Start Here").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    /// Stable snake_case identifier, e.g. "getting_started"
    pub name: String,
    /// Display title derived from the name, e.g. "Getting Started"
    pub title: String,
    /// e.g. "https://guides.rubyonrails.org/getting_started.html"
    pub url: String,
    /// Category label, e.g. "Start Here"
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A guide together with its fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDetail {
    pub name: String,
    pub title: String,
    pub url: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw HTML body, unprocessed.
    pub content: String,
    /// Not populated yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<GuideSection>>,
    /// Not populated yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<Vec<TocEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub content: String,
    /// Heading level, 1-6.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub anchor: String,
    pub level: u8,
}

/// Every guide plus the category table, rebuilt per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRegistry {
    pub guides: Vec<Guide>,
    pub categories: CategoryTable,
    /// Rails version, e.g. "8.0"
    pub version: String,
    /// RFC 3339 timestamp taken when the registry was built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
