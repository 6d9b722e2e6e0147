//! Edge selection per algorithm
//!
//! Each selector returns a keep-mask indexed by edge position.

mod disparity;
mod threshold;
mod top_k;

pub use disparity::{disparity_scores, DisparityScore};
pub(crate) use disparity::select as select_disparity;
pub(crate) use threshold::select as select_threshold;
pub(crate) use top_k::select as select_top_k;
