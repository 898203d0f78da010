/// Rails Guides category table.
///
/// Mirrors the sections of the guides index page. Order matters: iteration,
/// tool registration and reverse lookup all follow definition order.
use serde::ser::{Serialize, SerializeMap, Serializer};

pub type CategoryEntry = (&'static str, &'static [&'static str]);

/// Category label → guide identifiers.
///
/// `rails_application_templates` is listed under both "Going to Production" and
/// "Extending Rails"; lookups resolve to the first.
pub const GUIDE_CATEGORIES: &[CategoryEntry] = &[
    ("Start Here", &["getting_started", "install_ruby_on_rails"]),
    (
        "Models",
        &[
            "active_record_basics",
            "active_record_migrations",
            "active_record_validations",
            "active_record_callbacks",
            "association_basics",
            "active_record_querying",
            "active_model_basics",
        ],
    ),
    (
        "Views",
        &[
            "action_view_overview",
            "layouts_and_rendering",
            "action_view_helpers",
            "form_helpers",
        ],
    ),
    (
        "Controllers",
        &[
            "action_controller_overview",
            "routing",
            "action_controller_advanced",
        ],
    ),
    (
        "Other Components",
        &[
            "active_support_core_extensions",
            "action_mailer_basics",
            "action_mailbox_basics",
            "action_text_overview",
            "active_job_basics",
            "active_storage_overview",
            "action_cable_overview",
        ],
    ),
    (
        "Digging Deeper",
        &[
            "i18n",
            "testing",
            "debugging_rails_applications",
            "configuring",
            "command_line",
            "asset_pipeline",
            "working_with_javascript_in_rails",
            "autoloading_and_reloading_constants",
        ],
    ),
    (
        "Going to Production",
        &[
            "rails_application_templates",
            "caching_with_rails",
            "security",
            "error_reporting",
        ],
    ),
    (
        "Advanced Active Record",
        &[
            "active_record_postgresql",
            "active_record_multiple_databases",
            "active_record_encryption",
            "active_record_composite_primary_keys",
        ],
    ),
    (
        "Extending Rails",
        &[
            "plugins",
            "rails_on_rack",
            "creating_and_customizing_rails_generators",
            "engines",
            "rails_application_templates",
        ],
    ),
    (
        "Contributing",
        &[
            "contributing_to_ruby_on_rails",
            "api_documentation_guidelines",
            "ruby_on_rails_guides_guidelines",
            "development_dependencies_install",
        ],
    ),
];

/// Category a guide is filed under reported when the table has no entry for it.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// First category (in table order) that lists `guide_name`.
pub fn category_of(guide_name: &str) -> Option<&'static str> {
    GUIDE_CATEGORIES
        .iter()
        .find(|(_, guides)| guides.contains(&guide_name))
        .map(|(label, _)| *label)
}

/// Number of table entries, duplicates included.
pub fn total_guide_count() -> usize {
    GUIDE_CATEGORIES.iter().map(|(_, guides)| guides.len()).sum()
}

/// Serializes the category table as a JSON object, keys in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryTable;

impl Serialize for CategoryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(GUIDE_CATEGORIES.len()))?;
        for (label, guides) in GUIDE_CATEGORIES {
            map.serialize_entry(label, guides)?;
        }
        map.end()
    }
}
