/// Builds the guide list from the static category table. No network access.
///
/// `fetch_rails_guides` degrades to an empty list on any error while
/// `fetch_guide_registry` propagates it; callers rely on both behaviors.
use chrono::Utc;
use tracing::{debug, error};

use crate::categories::{CategoryTable, GUIDE_CATEGORIES};
use crate::config::Config;
use crate::error::AppError;
use crate::model::{Guide, GuideRegistry};

/// "active_record_basics" -> "Active Record Basics"
pub fn guide_title(name: &str) -> String {
    name.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn guide_url(base_url: &str, name: &str) -> String {
    format!("{base_url}/{name}.html")
}

pub fn guide_description(title: &str, version: &str) -> String {
    format!("{title} - Rails {version} Guide")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Summary record for `name` filed under `category`.
pub fn build_guide(config: &Config, name: &str, category: &str) -> Result<Guide, AppError> {
    let title = guide_title(name);
    let guide = Guide {
        name: name.to_string(),
        url: guide_url(&config.base_url, name),
        category: category.to_string(),
        description: Some(guide_description(&title, &config.version)),
        title,
    };
    validate(&guide)?;
    Ok(guide)
}

fn validate(guide: &Guide) -> Result<(), AppError> {
    let invalid = |reason: &str| AppError::Validation {
        name: guide.name.clone(),
        reason: reason.to_string(),
    };

    if guide.name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if guide.title.trim().is_empty() {
        return Err(invalid("title must not be empty"));
    }
    if guide.category.is_empty() {
        return Err(invalid("category must not be empty"));
    }
    if !(guide.url.starts_with("http://") || guide.url.starts_with("https://")) {
        return Err(invalid("url must be an absolute http(s) URL"));
    }
    Ok(())
}

/// Every guide in table order, duplicates included. Fails on the first invalid entry.
pub fn try_build_guides(config: &Config) -> Result<Vec<Guide>, AppError> {
    let mut guides = Vec::new();
    for (category, names) in GUIDE_CATEGORIES {
        for name in names.iter() {
            guides.push(build_guide(config, name, category)?);
        }
    }
    debug!(guides = guides.len(), "built guide list");
    Ok(guides)
}

/// Every guide in table order, or an empty list if building fails.
pub fn fetch_rails_guides(config: &Config) -> Vec<Guide> {
    try_build_guides(config)
        .inspect_err(|e| error!(error = %e, "error building Rails guides list"))
        .unwrap_or_default()
}

pub fn fetch_guide_registry(config: &Config) -> Result<GuideRegistry, AppError> {
    let guides = try_build_guides(config)
        .inspect_err(|e| error!(error = %e, "error building guide registry"))?;

    Ok(GuideRegistry {
        guides,
        categories: CategoryTable,
        version: config.version.clone(),
        last_updated: Some(Utc::now().to_rfc3339()),
    })
}

/// Guides whose category label matches exactly.
pub fn guides_in_category(guides: &[Guide], category: &str) -> Vec<Guide> {
    guides
        .iter()
        .filter(|g| g.category == category)
        .cloned()
        .collect()
}
