//! Builder use case: one batch fetch, then dispatch by kind

use std::sync::Arc;
use tracing::debug;

use crate::config::NetworkConfig;
use crate::errors::Result;
use crate::features::network_builders::domain::{BuildOutput, BuilderKind, NetworkBuilder};
use crate::features::network_builders::infrastructure::{
    SearchWebsiteBuilder, WebsiteConceptBuilder, WebsiteKeywordBuilder, WebsiteNerBuilder,
};
use relnet_source::{SessionId, SignalSource};

/// Fetches the rows for one network and runs the matching builder
///
/// Exactly one `SignalSource` call is made per build. `WebsiteConcept` is
/// rejected before the source is touched.
pub struct NetworkBuildUseCase<S: SignalSource> {
    source: Arc<S>,
    config: NetworkConfig,
}

impl<S: SignalSource> NetworkBuildUseCase<S> {
    pub fn new(source: Arc<S>, config: NetworkConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub async fn build(&self, kind: BuilderKind, session_ids: &[SessionId]) -> Result<BuildOutput> {
        kind.ensure_implemented()?;

        match kind {
            BuilderKind::SearchWebsite => {
                let rows = self.source.fetch_search_results(session_ids).await?;
                debug!(rows = rows.len(), "fetched search results");
                SearchWebsiteBuilder::new(self.config.search_website.clone())
                    .build(session_ids, &rows)
            }
            BuilderKind::WebsiteKeyword => {
                let rows = self.source.fetch_keywords(session_ids).await?;
                debug!(rows = rows.len(), "fetched keywords");
                WebsiteKeywordBuilder::new(self.config.website_keyword.clone())
                    .build(session_ids, &rows)
            }
            BuilderKind::WebsiteNer => {
                let rows = self.source.fetch_entities(session_ids).await?;
                debug!(rows = rows.len(), "fetched entities");
                WebsiteNerBuilder::new(self.config.website_ner.clone()).build(session_ids, &rows)
            }
            BuilderKind::WebsiteConcept => WebsiteConceptBuilder.build(session_ids, &[]),
        }
    }
}
