//! Configuration settings for the N-queens solver

use crate::board::BoardSize;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardConfig,
    pub solver: SolverConfig,
    pub encoding: EncodingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board side length, which is also the number of queens
    pub size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    #[default]
    Cadical,
    Varisat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Emit each attacking pair once instead of once per endpoint
    pub deduplicate_threats: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub queen_marker: char,
    pub empty_marker: char,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { size: 8 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            queen_marker: '*',
            empty_marker: '.',
            output_file: None,
        }
    }
}

impl Settings {
    /// Settings for a given board size, everything else default
    pub fn with_size(size: i64) -> Self {
        let mut settings = Self::default();
        settings.board.size = size;
        settings
    }

    /// Load settings from a YAML file; call `validate` once overrides are merged
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        self.board_size()?;

        if self.output.queen_marker == self.output.empty_marker {
            anyhow::bail!(
                "Queen and empty markers must differ (both are {:?})",
                self.output.queen_marker
            );
        }

        Ok(())
    }

    /// The configured board size, checked
    pub fn board_size(&self) -> Result<BoardSize> {
        BoardSize::new(self.board.size).context("Invalid board configuration")
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.board.size = size;
        }
        if let Some(backend) = cli_overrides.backend {
            self.solver.backend = backend;
        }
        if cli_overrides.deduplicate_threats {
            self.encoding.deduplicate_threats = true;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_file) = cli_overrides.output_file {
            self.output.output_file = Some(output_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<i64>,
    pub backend: Option<SolverBackend>,
    pub deduplicate_threats: bool,
    pub format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
}
