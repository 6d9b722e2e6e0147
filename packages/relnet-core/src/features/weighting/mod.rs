//! Edge weight strategies
//!
//! - Rank-based weights for query → website edges
//! - Confidence × frequency for website → entity edges
//! - Pass-through scores for website → keyword edges

pub mod domain;

pub use domain::{confidence_weight, passthrough_weight, RankWeightMethod, RankWeighting};
