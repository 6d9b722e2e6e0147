//! Website → keyword networks

use ahash::AHashMap;
use serde_json::{json, Value};
use tracing::debug;

use crate::attrs;
use crate::config::WebsiteKeywordConfig;
use crate::errors::Result;
use crate::features::aggregation::{AggregatedTerm, DomainAggregator, TermObservation};
use crate::features::network_builders::domain::{
    BuildCounters, BuildOutput, BuilderKind, NetworkBuilder,
};
use crate::features::network_builders::infrastructure::units::{
    assemble, resolve_unit, TermTarget, WebsiteUnit,
};
use crate::features::weighting::passthrough_weight;
use crate::shared::models::{Attributes, Graph, NodeType};
use crate::shared::utils::keyword_node_id;
use relnet_source::{KeywordRow, SessionId};

/// Builds `website → keyword` networks
///
/// Keywords are keyed by lemma. The edge weight is the aggregated average
/// score; frequency rides along as an edge attribute.
#[derive(Debug, Clone, Default)]
pub struct WebsiteKeywordBuilder {
    config: WebsiteKeywordConfig,
}

impl WebsiteKeywordBuilder {
    pub fn new(config: WebsiteKeywordConfig) -> Self {
        Self { config }
    }

    fn language_accepted(&self, language: Option<&str>) -> bool {
        if self.config.languages.is_empty() {
            return true;
        }
        language.map_or(false, |lang| {
            self.config
                .languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(lang))
        })
    }
}

impl NetworkBuilder for WebsiteKeywordBuilder {
    type Row = KeywordRow;

    fn kind(&self) -> BuilderKind {
        BuilderKind::WebsiteKeyword
    }

    fn config_echo(&self) -> Value {
        json!({
            "aggregate_by_domain": self.config.aggregate_by_domain,
            "top_k_per_unit": self.config.top_k_per_unit,
            "min_score": self.config.min_score,
            "languages": self.config.languages,
            "max_ngram": self.config.max_ngram,
        })
    }

    fn build(&self, session_ids: &[SessionId], rows: &[KeywordRow]) -> Result<BuildOutput> {
        debug!(rows = rows.len(), sessions = ?session_ids, "building website_keyword network");

        let mut counters = BuildCounters::new(rows.len());
        let mut websites: AHashMap<String, WebsiteUnit> = AHashMap::new();
        let mut aggregator = DomainAggregator::new();

        for row in rows {
            let lemma = row.lemma.trim();
            if lemma.is_empty() {
                counters.skip("empty lemma");
                continue;
            }
            if row.frequency < 1 {
                counters.skip("invalid frequency");
                continue;
            }
            if !row.tfidf_score.is_finite() || row.tfidf_score < 0.0 {
                counters.skip("invalid score");
                continue;
            }
            if !self.language_accepted(row.language.as_deref()) {
                counters.skip("language filtered");
                continue;
            }
            if matches!((self.config.max_ngram, row.ngram), (Some(max), Some(n)) if n > max) {
                counters.skip("ngram too long");
                continue;
            }

            let Some((unit, website)) = resolve_unit(
                self.config.aggregate_by_domain,
                &row.url,
                &row.domain,
                row.content_id,
            ) else {
                counters.skip("no domain");
                continue;
            };
            websites.entry(unit.clone()).or_insert(website);

            aggregator.push(&TermObservation {
                unit,
                document: row.content_id,
                text: lemma.to_string(),
                label: String::new(),
                frequency: row.frequency,
                score: row.tfidf_score,
                language: row.language.clone(),
            });
        }

        let node = |term: &AggregatedTerm| -> (String, String, Attributes) {
            (
                keyword_node_id(&term.text),
                term.text.clone(),
                attrs! { "lemma" => term.text, "language" => term.language },
            )
        };
        let edge = |term: &AggregatedTerm| -> (f64, Attributes) {
            (
                passthrough_weight(term.avg_score),
                attrs! {
                    "frequency" => term.total_frequency,
                    "tfidf" => term.avg_score,
                    "doc_count" => term.doc_count,
                },
            )
        };

        let mut graph = Graph::new(false);
        assemble(
            &mut graph,
            aggregator.finish(),
            &websites,
            &TermTarget {
                node_type: NodeType::Keyword,
                top_k: self.config.top_k_per_unit,
                min_score: self.config.min_score,
                node: &node,
                edge: &edge,
            },
        )?;

        Ok(counters.finish(self, session_ids, graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(content: i64, url: &str, lemma: &str, freq: i64, score: f64) -> KeywordRow {
        KeywordRow::new(1, content, url, lemma, freq, score)
    }

    #[test]
    fn test_domain_aggregation_averages_scores() {
        let builder = WebsiteKeywordBuilder::default();
        let out = builder
            .build(
                &[1],
                &[
                    kw(1, "https://a.com/1", "rust", 2, 0.4),
                    kw(2, "https://a.com/2", "rust", 3, 0.2),
                    kw(2, "https://a.com/2", "tokio", 1, 0.5),
                ],
            )
            .unwrap();

        let g = &out.graph;
        assert_eq!(g.node_count(), 3);
        let edge = g.edge("website_a.com", "keyword_rust").unwrap();
        assert!((edge.weight - 0.3).abs() < 1e-12);
        assert_eq!(edge.attrs["frequency"], 5);
        assert_eq!(edge.attrs["doc_count"], 2);
        assert!(g.validate_bipartite(None).is_ok());
    }

    #[test]
    fn test_per_page_units() {
        let builder = WebsiteKeywordBuilder::new(WebsiteKeywordConfig {
            aggregate_by_domain: false,
            top_k_per_unit: None,
            ..WebsiteKeywordConfig::default()
        });
        let out = builder
            .build(
                &[1],
                &[kw(1, "https://a.com/1", "rust", 1, 0.4), kw(2, "https://a.com/2", "rust", 1, 0.2)],
            )
            .unwrap();

        assert_eq!(out.graph.node_count(), 3);
        assert_eq!(out.graph.degree("keyword_rust"), 2);
    }

    #[test]
    fn test_top_k_then_min_score() {
        let builder = WebsiteKeywordBuilder::new(WebsiteKeywordConfig {
            top_k_per_unit: Some(2),
            min_score: Some(0.3),
            ..WebsiteKeywordConfig::default()
        });
        let out = builder
            .build(
                &[1],
                &[
                    kw(1, "https://a.com", "common", 10, 0.2),
                    kw(1, "https://a.com", "medium", 4, 0.4),
                    kw(1, "https://a.com", "rare", 1, 0.9),
                ],
            )
            .unwrap();

        let keywords: Vec<&str> = out
            .graph
            .nodes()
            .filter(|n| n.node_type == NodeType::Keyword)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(keywords, vec!["medium"]);
    }

    #[test]
    fn test_language_and_ngram_filters() {
        let builder = WebsiteKeywordBuilder::new(WebsiteKeywordConfig {
            languages: vec!["en".into()],
            max_ngram: Some(2),
            ..WebsiteKeywordConfig::default()
        });
        let out = builder
            .build(
                &[1],
                &[
                    kw(1, "https://a.com", "rust", 1, 0.4).with_language("EN"),
                    kw(1, "https://a.com", "rost", 1, 0.4).with_language("de"),
                    kw(1, "https://a.com", "memory safe systems", 1, 0.4)
                        .with_language("en")
                        .with_ngram(3),
                    kw(1, "https://a.com", "borrow", 1, 0.4),
                ],
            )
            .unwrap();

        assert_eq!(out.graph.edge_count(), 1);
        assert_eq!(out.metadata["rows_skipped"], 3);
        assert_eq!(out.metadata["skip_reasons"]["language filtered"], 2);
    }

    #[test]
    fn test_unit_without_selected_terms_has_no_node() {
        let builder = WebsiteKeywordBuilder::new(WebsiteKeywordConfig {
            min_score: Some(0.5),
            ..WebsiteKeywordConfig::default()
        });
        let out = builder
            .build(&[1], &[kw(1, "https://a.com", "weak", 1, 0.1)])
            .unwrap();
        assert!(out.graph.is_empty());
    }
}
