//! Viewer configuration loaded from YAML

use serde::Deserialize;

use crate::animation::ClockParams;
use crate::canvas::CanvasParams;
use crate::growth::Variant;
use crate::scene::TreeParams;

/// Everything the viewer can be told up front. Every field is optional.
///
/// ```yaml
/// variant: apple_tree
/// seed: 7
/// clock:
///   step: 1.0
/// tree:
///   branch_count: 8
///   fruit:
///     layers: 4
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub clock: ClockParams,
    pub canvas: CanvasParams,
    pub tree: TreeParams,
    /// Fixed seed for soil specks and fruit placement; random when absent
    pub seed: Option<u64>,
}

impl ViewerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ViewerConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.clock.validate()?;
        self.canvas.validate()?;
        self.tree.validate()
    }
}
