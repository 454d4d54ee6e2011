use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "scaleperm.toml")]
    pub config: String,

    /// Number of permutation trials (overrides config)
    #[arg(long)]
    pub n_trials: Option<usize>,

    /// Random seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Match tolerance in decades (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Quick run: clamp trials to 2000
    #[arg(long, default_value_t = false)]
    pub smoke: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Mode {
    /// Permutation test of the canonical pairs at a fixed spacing
    Fixed {
        /// Target spacing in decades (overrides config)
        #[arg(long)]
        delta: Option<f64>,
    },
    /// Look-elsewhere corrected test: scan the spacing over a grid
    Scan {
        /// Lower edge of the spacing grid (overrides config)
        #[arg(long)]
        delta_min: Option<f64>,
        /// Upper edge of the spacing grid (overrides config)
        #[arg(long)]
        delta_max: Option<f64>,
        /// Grid step (overrides config)
        #[arg(long)]
        step: Option<f64>,
    },
    /// Cross-domain test: appended scales against the base ladder
    Cross {
        /// Target spacing in decades (overrides config)
        #[arg(long)]
        delta: Option<f64>,
        /// Auxiliary scale table CSV (overrides config)
        #[arg(long)]
        table: Option<String>,
        /// Append speculative DM/DE placeholder scales
        #[arg(long, default_value_t = false)]
        append_dmde: bool,
        /// Count every unordered pair instead of cross-domain only (noisy)
        #[arg(long, default_value_t = false)]
        all_pairs: bool,
    },
}
