/// MCP server implementation for the Rails Guides.
///
/// Exposes three fixed tools:
/// - `getRailsGuides`: every guide with its category and URL
/// - `getGuideRegistry`: the guide list plus the category table and version
/// - `getGuideContent`: raw HTML of one guide
///
/// and one `get{Category}Guides` tool per category, generated at startup.
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ServerHandler,
    handler::server::router::tool::{ToolRoute, ToolRouter},
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::{debug, error, info};

use crate::categories::GUIDE_CATEGORIES;
use crate::config::Config;
use crate::error::AppError;
use crate::fetcher::GuideFetcher;
use crate::model::Guide;
use crate::registry::{fetch_guide_registry, fetch_rails_guides, guides_in_category, try_build_guides};
use mcp_common::mcp_api::{GetGuideContentParams, error_text_result, json_text_result};

/// Placeholder in tool descriptions replaced with the configured Rails version.
const VERSION_PLACEHOLDER: &str = "{version}";

#[derive(Clone)]
pub struct RailsGuidesServer {
    config: Arc<Config>,
    fetcher: Arc<GuideFetcher>,
    tool_router: ToolRouter<RailsGuidesServer>,
}

impl RailsGuidesServer {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let fetcher = Arc::new(GuideFetcher::new(Arc::clone(&config))?);

        let mut tool_router = Self::tool_router();
        stamp_version(&mut tool_router, &config.version);

        match build_category_tools(&config) {
            Ok(tools) => {
                let count = tools.len();
                for tool in tools {
                    debug!(
                        tool = %tool.name,
                        category = tool.category,
                        guides = tool.guides.len(),
                        "registering category tool"
                    );
                    tool_router.add_route(tool.into_route());
                }
                info!(count, version = %config.version, "guide category tools registered");
            }
            Err(e) => {
                error!(error = %e, "error registering guide category tools");
            }
        }

        Ok(Self {
            config,
            fetcher,
            tool_router,
        })
    }
}

#[tool_router]
impl RailsGuidesServer {
    #[tool(
        name = "getRailsGuides",
        description = "Provides a comprehensive list of all Rails {version} Guides with their categories and basic information."
    )]
    async fn get_rails_guides(&self) -> Result<CallToolResult, ErrorData> {
        let guides = fetch_rails_guides(&self.config);
        Ok(json_text_result(&guides))
    }

    #[tool(
        name = "getGuideRegistry",
        description = "Provides the complete Rails {version} Guides registry with categories and metadata."
    )]
    async fn get_guide_registry(&self) -> Result<CallToolResult, ErrorData> {
        match fetch_guide_registry(&self.config) {
            Ok(registry) => Ok(json_text_result(&registry)),
            Err(e) => Ok(error_text_result(format!(
                "Failed to fetch Rails Guides registry: {e}"
            ))),
        }
    }

    #[tool(
        name = "getGuideContent",
        description = "Fetches the complete content of a specific Rails {version} Guide."
    )]
    async fn get_guide_content(
        &self,
        Parameters(params): Parameters<GetGuideContentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let guide_name = params.guide_name;
        match self.fetcher.fetch_guide_details(&guide_name).await {
            Ok(detail) => Ok(json_text_result(&detail)),
            Err(e) => Ok(error_text_result(format!(
                "Failed to fetch guide content for: {guide_name} ({e})"
            ))),
        }
    }
}

/// A generated `get{Category}Guides` tool serving a precomputed guide subset.
#[derive(Debug, Clone)]
pub struct CategoryTool {
    pub category: &'static str,
    pub name: String,
    pub description: String,
    pub guides: Vec<Guide>,
}

impl CategoryTool {
    fn respond(&self) -> CallToolResult {
        json_text_result(&self.guides)
    }

    fn into_route(self) -> ToolRoute<RailsGuidesServer> {
        let attr = Tool::new(self.name.clone(), self.description.clone(), empty_input_schema());
        let tool = Arc::new(self);
        ToolRoute::new_dyn(attr, move |_ctx| {
            let tool = Arc::clone(&tool);
            async move { Ok::<_, ErrorData>(tool.respond()) }.boxed()
        })
    }
}

/// "Going to Production" -> "getGoingtoProductionGuides"
pub fn category_tool_name(category: &str) -> String {
    let stripped: String = category
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!("get{stripped}Guides")
}

/// One tool per category, in table order. Fails if the full guide list cannot be built.
pub fn build_category_tools(config: &Config) -> Result<Vec<CategoryTool>, AppError> {
    let all_guides = try_build_guides(config)?;

    Ok(GUIDE_CATEGORIES
        .iter()
        .map(|&(category, names)| CategoryTool {
            category,
            name: category_tool_name(category),
            description: format!(
                "Provides Rails {} Guides for the {category} category: {}",
                config.version,
                names.join(", ")
            ),
            guides: guides_in_category(&all_guides, category),
        })
        .collect())
}

fn stamp_version(router: &mut ToolRouter<RailsGuidesServer>, version: &str) {
    for route in router.map.values_mut() {
        if let Some(description) = route.attr.description.as_ref() {
            let stamped = description.replace(VERSION_PLACEHOLDER, version);
            route.attr.description = Some(stamped.into());
        }
    }
}

fn empty_input_schema() -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), "object".into());
    schema.insert(
        "properties".to_string(),
        serde_json::Value::Object(JsonObject::new()),
    );
    Arc::new(schema)
}

#[tool_handler]
impl ServerHandler for RailsGuidesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rails-guides-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "Rails {} Guides MCP server. Use getRailsGuides to list every guide, \
                 getGuideRegistry for the full registry with categories, getGuideContent with a \
                 guideName (for example getting_started) to fetch a guide, and the \
                 get<Category>Guides tools to browse one category.",
                self.config.version
            )),
        }
    }
}
