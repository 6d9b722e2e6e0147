//! Pipeline orchestration
//!
//! One request produces one network:
//!
//! ```text
//! fetch → build → limits → backbone → metrics → export
//! ```

pub mod limits;
pub mod orchestrator;
pub mod record;
pub mod request;

pub use limits::check_limits;
pub use orchestrator::{apply_configured_backbone, NetworkPipeline};
pub use record::NetworkRecord;
pub use request::{BackboneChoice, NetworkRequest};
