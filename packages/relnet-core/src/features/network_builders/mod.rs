//! Network builders
//!
//! Turn typed signal rows into bipartite relevance graphs.
//!
//! ```text
//! SearchWebsite   query   ──rank weight──────────▶ website
//! WebsiteKeyword  website ──avg score────────────▶ keyword
//! WebsiteNER      website ──confidence×frequency─▶ entity
//! WebsiteConcept  (not implemented)
//! ```
//!
//! - Domain: `BuilderKind`, `BuildOutput`, the `NetworkBuilder` trait
//! - Infrastructure: one builder per kind
//! - Application: `NetworkBuildUseCase` (one batch fetch + dispatch)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::NetworkBuildUseCase;
pub use domain::{BuildCounters, BuildOutput, BuilderKind, NetworkBuilder};
pub use infrastructure::{
    SearchWebsiteBuilder, WebsiteConceptBuilder, WebsiteKeywordBuilder, WebsiteNerBuilder,
};
