use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    classify::classifier::Channels, foundation::error::SketchResult, render::output::DEFAULT_OUTPUT,
};

/// Source identifier of the distance sensor in the installation.
pub const DEFAULT_MAGNITUDE_SOURCE: &str = "lab/mdef/anna";
/// Source identifier of the switch in the installation.
pub const DEFAULT_STATE_SOURCE: &str = "lab/mdef/carmen";

/// Run settings. Only channel routing and the output path are adjustable; the geometry
/// constants are fixed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    pub magnitude_source: String,
    pub state_source: String,
    pub output: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            magnitude_source: DEFAULT_MAGNITUDE_SOURCE.to_string(),
            state_source: DEFAULT_STATE_SOURCE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl SketchConfig {
    /// Read a JSON config file; missing keys take their defaults.
    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = serde_json::from_str(&text)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        Ok(cfg)
    }

    pub fn channels(&self) -> Channels {
        Channels {
            magnitude: self.magnitude_source.clone(),
            state: self.state_source.clone(),
        }
    }
}
