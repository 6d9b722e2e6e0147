//! Node id generation
//!
//! Ids are `<type prefix>_<key>` and always pass through
//! [`sanitize_node_id`], so characters that break GEXF/GraphML consumers or
//! URL-like ids (space, `/`, `:`, `?`, `&`, `=`) never reach an export.

use crate::shared::constants::node_id::{
    ENTITY_PREFIX, KEYWORD_PREFIX, MAX_LEN, QUERY_PREFIX, REPLACED_CHARS, WEBSITE_PREFIX,
};

/// Replace reserved characters with `_` and truncate to 200 characters
///
/// Idempotent: sanitizing an already sanitized id returns it unchanged.
pub fn sanitize_node_id(raw: &str) -> String {
    raw.chars()
        .map(|c| if REPLACED_CHARS.contains(&c) { '_' } else { c })
        .take(MAX_LEN)
        .collect()
}

pub fn query_node_id(query_id: i64) -> String {
    sanitize_node_id(&format!("{}_{}", QUERY_PREFIX, query_id))
}

/// Website node id from a URL, or from a domain when aggregating
pub fn website_node_id(url_or_domain: &str) -> String {
    sanitize_node_id(&format!("{}_{}", WEBSITE_PREFIX, url_or_domain))
}

pub fn keyword_node_id(lemma: &str) -> String {
    sanitize_node_id(&format!("{}_{}", KEYWORD_PREFIX, lemma))
}

/// Entity ids include the label so homonyms of different types stay apart
pub fn entity_node_id(label: &str, text: &str) -> String {
    sanitize_node_id(&format!("{}_{}_{}", ENTITY_PREFIX, label, text))
}
