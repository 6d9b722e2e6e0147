//! URL helpers

use once_cell::sync::Lazy;
use regex::Regex;

static HOST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.\-]*://)?(?:[^@/?#]*@)?([^/:?#\s]+)")
        .expect("host regex is valid")
});

/// Lowercased host of a URL with a leading `www.` removed
///
/// Returns `None` when no host can be found.
pub fn domain_from_url(url: &str) -> Option<String> {
    let host = HOST_RE.captures(url.trim())?.get(1)?.as_str().to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
