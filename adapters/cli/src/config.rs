use std::{fs, path::Path};

use anyhow::{Context, Result};
use exobound_system_campaign_generation::CampaignConfig;
use exobound_system_scoring::ScoringConfig;
use serde::Deserialize;

/// Experiment file with optional `[campaign]` and `[scoring]` tables.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ExperimentConfig {
    /// Campaign shape and parameter pools.
    pub(crate) campaign: CampaignConfig,
    /// Loss weights and bonus shape.
    pub(crate) scoring: ScoringConfig,
}

impl ExperimentConfig {
    /// Loads the experiment file, or the reference configuration when no path is given.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read experiment config at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid experiment config at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).context("failed to parse experiment config toml contents")?;
        config
            .scoring
            .validate()
            .context("invalid [scoring] table")?;
        Ok(config)
    }
}
