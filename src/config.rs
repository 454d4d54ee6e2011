use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::{canonical_scales, ScaleEntry, CANONICAL_PAIRS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfig {
    #[serde(default = "TestConfig::default_n_trials")]
    pub n_trials: usize,
    #[serde(default = "TestConfig::default_seed")]
    pub seed: u64,
    #[serde(default = "TestConfig::default_delta")]
    pub delta: f64,
    #[serde(default = "TestConfig::default_threshold")]
    pub threshold: f64,
}

impl TestConfig {
    fn default_n_trials() -> usize {
        200_000
    }
    fn default_seed() -> u64 {
        42
    }
    fn default_delta() -> f64 {
        24.0
    }
    fn default_threshold() -> f64 {
        0.2
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            n_trials: Self::default_n_trials(),
            seed: Self::default_seed(),
            delta: Self::default_delta(),
            threshold: Self::default_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "ScanConfig::default_delta_min")]
    pub delta_min: f64,
    #[serde(default = "ScanConfig::default_delta_max")]
    pub delta_max: f64,
    #[serde(default = "ScanConfig::default_step")]
    pub step: f64,
}

impl ScanConfig {
    fn default_delta_min() -> f64 {
        22.0
    }
    fn default_delta_max() -> f64 {
        26.0
    }
    fn default_step() -> f64 {
        0.05
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            delta_min: Self::default_delta_min(),
            delta_max: Self::default_delta_max(),
            step: Self::default_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossConfig {
    /// Auxiliary `Structure,log10_L` table appended after the base scales.
    #[serde(default = "CrossConfig::default_table_path")]
    pub table_path: String,
    /// Append the speculative DM/DE placeholder scales.
    #[serde(default)]
    pub append_dmde: bool,
    /// Count every unordered pair instead of cross-domain pairs only
    /// (comparison mode, noisy).
    #[serde(default)]
    pub all_pairs: bool,
}

impl CrossConfig {
    fn default_table_path() -> String {
        "data/force_scales.csv".to_string()
    }
}

impl Default for CrossConfig {
    fn default() -> Self {
        Self {
            table_path: Self::default_table_path(),
            append_dmde: false,
            all_pairs: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Canonical ladder pairs as (small index, large index) into `scales`.
    /// Kept ahead of the table sections so TOML serialization emits it as a
    /// plain value.
    #[serde(default = "RunConfig::default_pairs")]
    pub pairs: Vec<(usize, usize)>,
    #[serde(default)]
    pub test: TestConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub cross: CrossConfig,
    /// Base scale table; defaults to the paper's 15 structures.
    #[serde(default = "canonical_scales")]
    pub scales: Vec<ScaleEntry>,
}

impl RunConfig {
    fn default_pairs() -> Vec<(usize, usize)> {
        CANONICAL_PAIRS.to_vec()
    }

    /// Read a TOML config, falling back to defaults when the file is missing
    /// or fails to parse. A missing file is written out with the defaults so
    /// the run parameters are visible and editable afterwards.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("failed to parse config {path}: {err}; using defaults");
                    }
                },
                Err(err) => {
                    warn!("failed to read config {path}: {err}; using defaults");
                }
            }
            return Self::default();
        }

        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    warn!("failed to write default config to {path}: {err}");
                }
            }
            Err(err) => warn!("failed to serialize default config: {err}"),
        }
        default_cfg
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            test: TestConfig::default(),
            scan: ScanConfig::default(),
            cross: CrossConfig::default(),
            scales: canonical_scales(),
            pairs: Self::default_pairs(),
        }
    }
}
