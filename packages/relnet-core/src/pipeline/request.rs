//! Pipeline input

use std::path::PathBuf;

use crate::features::backboning::BackboneParams;
use crate::features::export::ExportFormat;
use crate::features::network_builders::BuilderKind;
use relnet_source::SessionId;

/// Which backbone step a run applies
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BackboneChoice {
    /// Whatever the pipeline's `BackboneConfig` says (possibly nothing)
    #[default]
    FromConfig,
    Skip,
    Run {
        algorithm: String,
        params: BackboneParams,
    },
}

/// One network to generate
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkRequest {
    pub kind: BuilderKind,
    pub session_ids: Vec<SessionId>,
    pub backbone: BackboneChoice,
    /// No export when `None`
    pub export_path: Option<PathBuf>,
    /// Falls back to `ExportConfig::format`
    pub export_format: Option<ExportFormat>,
}

impl NetworkRequest {
    pub fn new(kind: BuilderKind, session_ids: impl Into<Vec<SessionId>>) -> Self {
        Self {
            kind,
            session_ids: session_ids.into(),
            backbone: BackboneChoice::FromConfig,
            export_path: None,
            export_format: None,
        }
    }

    pub fn with_backbone(mut self, algorithm: impl Into<String>, params: BackboneParams) -> Self {
        self.backbone = BackboneChoice::Run {
            algorithm: algorithm.into(),
            params,
        };
        self
    }

    pub fn without_backbone(mut self) -> Self {
        self.backbone = BackboneChoice::Skip;
        self
    }

    pub fn with_export(mut self, path: impl Into<PathBuf>, format: Option<ExportFormat>) -> Self {
        self.export_path = Some(path.into());
        self.export_format = format;
        self
    }
}
