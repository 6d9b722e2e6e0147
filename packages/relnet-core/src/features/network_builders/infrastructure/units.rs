//! Website units shared by the term builders
//!
//! A unit is the source side of a website → term network: one node per
//! domain when aggregating, otherwise one node per page.

use ahash::AHashMap;

use crate::attrs;
use crate::errors::Result;
use crate::features::aggregation::{select_top_k, AggregatedTerm, UnitTerms};
use crate::shared::models::{Attributes, Graph, NodeType};
use crate::shared::utils::{domain_from_url, website_node_id};

/// Website node for one unit
#[derive(Debug, Clone)]
pub(super) struct WebsiteUnit {
    pub node_id: String,
    pub label: String,
    pub attrs: Attributes,
}

/// Row domain, falling back to the URL host
pub(super) fn resolve_domain(domain: &str, url: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        domain_from_url(url)
    } else {
        Some(domain.to_lowercase())
    }
}

/// Unit key and website node for one row; `None` when no domain can be found
/// while aggregating
pub(super) fn resolve_unit(
    aggregate_by_domain: bool,
    url: &str,
    domain: &str,
    content_id: i64,
) -> Option<(String, WebsiteUnit)> {
    let domain = resolve_domain(domain, url);

    if aggregate_by_domain {
        let domain = domain?;
        return Some((
            domain.clone(),
            WebsiteUnit {
                node_id: website_node_id(&domain),
                label: domain.clone(),
                attrs: attrs! { "domain" => domain },
            },
        ));
    }

    let key = if url.trim().is_empty() {
        format!("content_{}", content_id)
    } else {
        url.trim().to_string()
    };
    Some((
        key.clone(),
        WebsiteUnit {
            node_id: website_node_id(&key),
            label: key,
            attrs: attrs! {
                "url" => url,
                "domain" => domain,
                "content_id" => content_id,
            },
        },
    ))
}

/// Target side of a website → term network
pub(super) struct TermTarget<'a> {
    pub node_type: NodeType,
    pub top_k: Option<usize>,
    pub min_score: Option<f64>,
    /// `(node id, label, attributes)`
    pub node: &'a dyn Fn(&AggregatedTerm) -> (String, String, Attributes),
    /// `(weight, attributes)`
    pub edge: &'a dyn Fn(&AggregatedTerm) -> (f64, Attributes),
}

/// Add one website node per unit with selected terms, then its term edges
///
/// Units whose selection comes back empty get no node at all.
pub(super) fn assemble(
    graph: &mut Graph,
    units: Vec<UnitTerms>,
    websites: &AHashMap<String, WebsiteUnit>,
    target: &TermTarget<'_>,
) -> Result<()> {
    for unit in units {
        let Some(website) = websites.get(&unit.unit) else {
            continue;
        };
        let selected = select_top_k(unit.terms, target.top_k, target.min_score);
        if selected.is_empty() {
            continue;
        }

        graph.add_node(
            &website.node_id,
            NodeType::Website,
            website.label.clone(),
            website.attrs.clone(),
        )?;

        for term in &selected {
            let (id, label, node_attrs) = (target.node)(term);
            graph.add_node(&id, target.node_type, label, node_attrs)?;
            let (weight, edge_attrs) = (target.edge)(term);
            graph.add_edge(&website.node_id, &id, weight, edge_attrs)?;
        }
    }
    Ok(())
}
