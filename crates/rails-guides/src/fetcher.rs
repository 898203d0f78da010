use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::categories::{category_of, UNKNOWN_CATEGORY};
use crate::config::Config;
use crate::error::AppError;
use crate::model::GuideDetail;
use crate::registry::{guide_description, guide_title, guide_url};
use mcp_common::error::CommonError;
use mcp_common::http::HttpClient;

/// Fetches one guide page per call. No existence check, caching or retry.
pub struct GuideFetcher {
    config: Arc<Config>,
    http: HttpClient,
}

impl GuideFetcher {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http = HttpClient::new(config.http.clone())?;
        Ok(Self { config, http })
    }

    #[instrument(skip(self))]
    pub async fn fetch_guide_details(&self, guide_name: &str) -> Result<GuideDetail, AppError> {
        self.try_fetch(guide_name)
            .await
            .inspect_err(|e| error!(error = %e, "error fetching guide details"))
    }

    async fn try_fetch(&self, guide_name: &str) -> Result<GuideDetail, AppError> {
        let url = guide_url(&self.config.base_url, guide_name);

        let content = self.http.get_text(&url).await.map_err(|e| match e {
            CommonError::Upstream { reason, .. } => AppError::Fetch {
                guide: guide_name.to_string(),
                status: reason,
            },
            other => AppError::Common(other),
        })?;

        let category = category_of(guide_name).unwrap_or(UNKNOWN_CATEGORY);
        let title = guide_title(guide_name);
        info!(url, category, bytes = content.len(), "guide fetched");

        Ok(GuideDetail {
            name: guide_name.to_string(),
            description: Some(guide_description(&title, &self.config.version)),
            title,
            url,
            category: category.to_string(),
            content,
            sections: None,
            table_of_contents: None,
        })
    }
}
