//! Website → named entity networks

use ahash::AHashMap;
use serde_json::{json, Value};
use tracing::debug;

use crate::attrs;
use crate::config::WebsiteNerConfig;
use crate::errors::Result;
use crate::features::aggregation::{AggregatedTerm, DomainAggregator, TermObservation};
use crate::features::network_builders::domain::{
    BuildCounters, BuildOutput, BuilderKind, NetworkBuilder,
};
use crate::features::network_builders::infrastructure::units::{
    assemble, resolve_unit, TermTarget, WebsiteUnit,
};
use crate::features::weighting::confidence_weight;
use crate::shared::models::{Attributes, Graph, NodeType};
use crate::shared::utils::entity_node_id;
use relnet_source::{EntityRow, SessionId};

/// Builds `website → entity` networks
///
/// Entities are keyed by `(label, text)` so "Apple"/ORG and "Apple"/MISC are
/// different nodes. Weight is average confidence × total frequency.
#[derive(Debug, Clone, Default)]
pub struct WebsiteNerBuilder {
    config: WebsiteNerConfig,
}

impl WebsiteNerBuilder {
    pub fn new(config: WebsiteNerConfig) -> Self {
        Self { config }
    }

    fn accepts(&self, row: &EntityRow) -> Option<&'static str> {
        if !self.config.entity_labels.is_empty()
            && !self
                .config
                .entity_labels
                .iter()
                .any(|l| l.eq_ignore_ascii_case(row.entity_label.trim()))
        {
            return Some("label filtered");
        }
        if !self.config.languages.is_empty() {
            let accepted = row.language.as_deref().map_or(false, |lang| {
                self.config
                    .languages
                    .iter()
                    .any(|l| l.eq_ignore_ascii_case(lang))
            });
            if !accepted {
                return Some("language filtered");
            }
        }
        None
    }
}

impl NetworkBuilder for WebsiteNerBuilder {
    type Row = EntityRow;

    fn kind(&self) -> BuilderKind {
        BuilderKind::WebsiteNer
    }

    fn config_echo(&self) -> Value {
        json!({
            "aggregate_by_domain": self.config.aggregate_by_domain,
            "top_k_per_unit": self.config.top_k_per_unit,
            "min_confidence": self.config.min_confidence,
            "entity_labels": self.config.entity_labels,
            "languages": self.config.languages,
        })
    }

    fn build(&self, session_ids: &[SessionId], rows: &[EntityRow]) -> Result<BuildOutput> {
        debug!(rows = rows.len(), sessions = ?session_ids, "building website_ner network");

        let mut counters = BuildCounters::new(rows.len());
        let mut websites: AHashMap<String, WebsiteUnit> = AHashMap::new();
        let mut aggregator = DomainAggregator::new();

        for row in rows {
            let text = row.entity_text.trim();
            let label = row.entity_label.trim();
            if text.is_empty() || label.is_empty() {
                counters.skip("empty entity");
                continue;
            }
            if row.frequency < 1 {
                counters.skip("invalid frequency");
                continue;
            }
            if !row.confidence.is_finite() || row.confidence < 0.0 {
                counters.skip("invalid confidence");
                continue;
            }
            if let Some(reason) = self.accepts(row) {
                counters.skip(reason);
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
                text: text.to_string(),
                label: label.to_string(),
                frequency: row.frequency,
                score: row.confidence,
                language: row.language.clone(),
            });
        }

        let node = |term: &AggregatedTerm| -> (String, String, Attributes) {
            (
                entity_node_id(&term.label, &term.text),
                term.text.clone(),
                attrs! {
                    "entity_text" => term.text,
                    "entity_label" => term.label,
                    "language" => term.language,
                },
            )
        };
        let edge = |term: &AggregatedTerm| -> (f64, Attributes) {
            (
                confidence_weight(term.avg_score, term.total_frequency),
                attrs! {
                    "frequency" => term.total_frequency,
                    "confidence" => term.avg_score,
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
                node_type: NodeType::Entity,
                top_k: self.config.top_k_per_unit,
                min_score: self.config.min_confidence,
                node: &node,
                edge: &edge,
            },
        )?;

        Ok(counters.finish(self, session_ids, graph))
    }
}
