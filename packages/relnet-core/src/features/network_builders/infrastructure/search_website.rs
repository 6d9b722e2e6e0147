//! Query → website networks from search rankings

use ahash::AHashSet;
use serde_json::{json, Value};
use tracing::debug;

use crate::attrs;
use crate::config::SearchWebsiteConfig;
use crate::errors::Result;
use crate::features::network_builders::domain::{
    BuildCounters, BuildOutput, BuilderKind, NetworkBuilder,
};
use crate::features::network_builders::infrastructure::units::resolve_domain;
use crate::features::weighting::RankWeighting;
use crate::shared::models::{Graph, NodeType};
use crate::shared::utils::{query_node_id, website_node_id};
use relnet_source::{SearchResultRow, SessionId};

/// Builds `query → website` networks
///
/// Nodes are deduplicated with a seen-set. Edges are not: every qualifying
/// row writes its edge again, so when a query ranks the same website (or
/// domain) twice the weight of the last row wins.
#[derive(Debug, Clone)]
pub struct SearchWebsiteBuilder {
    config: SearchWebsiteConfig,
    weighting: RankWeighting,
}

impl SearchWebsiteBuilder {
    pub fn new(config: SearchWebsiteConfig) -> Self {
        let weighting = RankWeighting::new(config.weight_method);
        Self { config, weighting }
    }

    pub fn config(&self) -> &SearchWebsiteConfig {
        &self.config
    }
}

impl Default for SearchWebsiteBuilder {
    fn default() -> Self {
        Self::new(SearchWebsiteConfig::default())
    }
}

impl NetworkBuilder for SearchWebsiteBuilder {
    type Row = SearchResultRow;

    fn kind(&self) -> BuilderKind {
        BuilderKind::SearchWebsite
    }

    fn config_echo(&self) -> Value {
        json!({
            "weight_method": self.weighting.method().as_str(),
            "aggregate_by_domain": self.config.aggregate_by_domain,
            "max_rank": self.config.max_rank,
            "directed": self.config.directed,
        })
    }

    fn build(&self, session_ids: &[SessionId], rows: &[SearchResultRow]) -> Result<BuildOutput> {
        debug!(rows = rows.len(), sessions = ?session_ids, "building search_website network");

        let mut graph = Graph::new(self.config.directed);
        let mut counters = BuildCounters::new(rows.len());
        let mut seen: AHashSet<String> = AHashSet::new();

        for row in rows {
            if row.rank < 1 {
                counters.skip("invalid rank");
                continue;
            }
            if matches!(self.config.max_rank, Some(max) if row.rank > max) {
                counters.skip("rank above max_rank");
                continue;
            }
            if row.result_url.trim().is_empty() {
                counters.skip("empty url");
                continue;
            }

            let domain = resolve_domain(&row.result_domain, &row.result_url);

            let (website_id, website_label, website_attrs) = if self.config.aggregate_by_domain {
                let Some(domain) = domain else {
                    counters.skip("no domain");
                    continue;
                };
                (
                    website_node_id(&domain),
                    domain.clone(),
                    attrs! { "domain" => domain },
                )
            } else {
                let label = row
                    .result_title
                    .clone()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| row.result_url.clone());
                (
                    website_node_id(&row.result_url),
                    label,
                    attrs! {
                        "url" => row.result_url,
                        "domain" => domain,
                        "title" => row.result_title,
                    },
                )
            };

            let query_id = query_node_id(row.query_id);
            if seen.insert(query_id.clone()) {
                graph.add_node(
                    &query_id,
                    NodeType::Query,
                    row.query_text.clone(),
                    attrs! {
                        "query_id" => row.query_id,
                        "query_text" => row.query_text,
                        "session_id" => row.session_id,
                    },
                )?;
            }
            if seen.insert(website_id.clone()) {
                graph.add_node(&website_id, NodeType::Website, website_label, website_attrs)?;
            }

            let weight = self.weighting.weight(row.rank)?;
            graph.add_edge(
                &query_id,
                &website_id,
                weight,
                attrs! { "rank" => row.rank, "session_id" => row.session_id },
            )?;
        }

        Ok(counters.finish(self, session_ids, graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::weighting::RankWeightMethod;

    fn row(query: i64, url: &str, rank: i64) -> SearchResultRow {
        SearchResultRow::new(1, query, format!("query {}", query), url, rank)
    }

    #[test]
    fn test_builds_query_website_edges() {
        let builder = SearchWebsiteBuilder::default();
        let out = builder
            .build(
                &[1],
                &[row(1, "https://a.com/x", 1), row(1, "https://b.com/y", 2)],
            )
            .unwrap();

        assert_eq!(out.graph.node_count(), 3);
        assert_eq!(out.graph.edge_count(), 2);
        assert_eq!(out.graph.edge("query_1", "website_b.com").unwrap().weight, 0.5);
        assert!(out.graph.validate_bipartite(None).is_ok());
        assert_eq!(out.metadata["network_type"], "search_website");
    }

    #[test]
    fn test_duplicate_pair_last_write_wins() {
        // Same domain at rank 1 and rank 4: the later row overwrites.
        let builder = SearchWebsiteBuilder::default();
        let out = builder
            .build(
                &[1],
                &[row(1, "https://a.com/x", 1), row(1, "https://a.com/z", 4)],
            )
            .unwrap();

        assert_eq!(out.graph.edge_count(), 1);
        let edge = out.graph.edge("query_1", "website_a.com").unwrap();
        assert_eq!(edge.weight, 0.25);
        assert_eq!(edge.attrs["rank"], 4);
    }

    #[test]
    fn test_per_url_nodes_use_title() {
        let mut config = SearchWebsiteConfig::default();
        config.aggregate_by_domain = false;
        config.weight_method = RankWeightMethod::Fixed;
        let builder = SearchWebsiteBuilder::new(config);

        let out = builder
            .build(
                &[1],
                &[row(1, "https://a.com/x", 3).with_title("A page")],
            )
            .unwrap();

        let node = out.graph.node("website_https://a.com/x").unwrap();
        assert_eq!(node.label, "A page");
        assert_eq!(node.attrs["domain"], "a.com");
        assert_eq!(out.graph.edges().next().unwrap().weight, 1.0);
    }

    #[test]
    fn test_rows_past_max_rank_are_skipped() {
        let mut config = SearchWebsiteConfig::default();
        config.max_rank = Some(2);
        let builder = SearchWebsiteBuilder::new(config);

        let out = builder
            .build(
                &[1],
                &[row(1, "https://a.com", 1), row(1, "https://b.com", 3), row(1, "https://c.com", 0)],
            )
            .unwrap();

        assert_eq!(out.graph.edge_count(), 1);
        assert_eq!(out.metadata["rows_skipped"], 2);
    }

    #[test]
    fn test_empty_rows_give_empty_graph() {
        let out = SearchWebsiteBuilder::default().build(&[9], &[]).unwrap();
        assert!(out.graph.is_empty());
        assert_eq!(out.metadata["session_ids"], json!([9]));
        assert!(out.metadata.get("bipartite_warning").is_none());
    }
}
