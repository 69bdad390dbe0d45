use anyhow::Context;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;
use crate::with_field_fn;

/// Parameters of breakpoint evidence clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Two same-contig locations are merged iff the gap between them is
    /// strictly smaller than this.
    pub gap_size:   PosType,
    /// Width of the margin next to a partition boundary where evidence is
    /// passed through instead of being merged.
    pub edge_width: PosType,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            gap_size:   500,
            edge_width: 500,
        }
    }
}

impl ClusterConfig {
    with_field_fn!(gap_size, PosType);
    with_field_fn!(edge_width, PosType);

    pub fn new(
        gap_size: PosType,
        edge_width: PosType,
    ) -> Self {
        Self {
            gap_size,
            edge_width,
        }
    }

    /// Parses a JSON configuration. Missing fields take their default values.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse cluster config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.gap_size > 0,
            "Gap size must be positive, got {}",
            self.gap_size
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = ClusterConfig::default()
            .with_gap_size(5)
            .with_edge_width(20);
        assert_eq!(config, ClusterConfig::new(5, 20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_gap_rejected() {
        let err = ClusterConfig::new(0, 10).validate().unwrap_err();
        assert!(err.to_string().contains("Gap size must be positive"));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = ClusterConfig::from_json(r#"{"gap_size": 42}"#).unwrap();
        assert_eq!(config.gap_size, 42);
        assert_eq!(config.edge_width, ClusterConfig::default().edge_width);
    }

    #[test]
    fn test_from_json_errors() {
        let err = ClusterConfig::from_json("{gap_size").unwrap_err();
        assert!(err.to_string().contains("Failed to parse cluster config"));
        assert!(ClusterConfig::from_json(r#"{"gap_size": 0}"#).is_err());
    }
}
