// Entry point: parses the CLI, loads config, runs the selected permutation
// test, and prints the report. All statistics live in scaleperm::core.
use std::error::Error;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scaleperm::cli::{Args, Mode};
use scaleperm::config::{CrossConfig, RunConfig};
use scaleperm::core::deviation::deviations;
use scaleperm::core::permutation::{run_permutation_test, PermutationTest};
use scaleperm::core::scan::{scan_max_strong, DeltaGrid};
use scaleperm::core::statistic::Statistic;
use scaleperm::data::{load_scale_table, values_of, ScaleEntry, DMDE_SCALES};

const RULE: &str = "======================================================================";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = RunConfig::load_or_default(&args.config);
    if let Some(n) = args.n_trials {
        cfg.test.n_trials = n;
    }
    if let Some(seed) = args.seed {
        cfg.test.seed = seed;
    }
    if let Some(threshold) = args.threshold {
        cfg.test.threshold = threshold;
    }
    if args.smoke {
        cfg.test.n_trials = cfg.test.n_trials.min(2000);
    }

    match args.mode.clone() {
        Mode::Fixed { delta } => run_fixed(&cfg, delta.unwrap_or(cfg.test.delta)),
        Mode::Scan {
            delta_min,
            delta_max,
            step,
        } => {
            let grid = DeltaGrid::new(
                delta_min.unwrap_or(cfg.scan.delta_min),
                delta_max.unwrap_or(cfg.scan.delta_max),
                step.unwrap_or(cfg.scan.step),
            )?;
            run_scan(&cfg, grid)
        }
        Mode::Cross {
            delta,
            table,
            append_dmde,
            all_pairs,
        } => {
            let mut cross = cfg.cross.clone();
            if let Some(table) = table {
                cross.table_path = table;
            }
            cross.append_dmde |= append_dmde;
            cross.all_pairs |= all_pairs;
            run_cross(&cfg, &cross, delta.unwrap_or(cfg.test.delta))
        }
    }
}

/// Fixed-spacing test of the canonical pairs (the paper's headline number).
fn run_fixed(cfg: &RunConfig, delta: f64) -> Result<(), Box<dyn Error>> {
    let values = values_of(&cfg.scales);
    let statistic = Statistic::FixedDelta {
        pairs: cfg.pairs.clone(),
        delta,
        threshold: cfg.test.threshold,
    };
    statistic.validate(values.len())?;

    println!("{RULE}");
    println!("PERMUTATION TEST (fixed spacing)");
    println!(
        "Configuration: {} structures, {} pairs, n_trials={}, delta={}, threshold={}, seed={}",
        cfg.scales.len(),
        cfg.pairs.len(),
        cfg.test.n_trials,
        delta,
        cfg.test.threshold,
        cfg.test.seed
    );
    println!("{RULE}");

    let devs = deviations(&values, &cfg.pairs, delta)?;
    println!("\nObserved deviations:");
    for (&(i, j), dev) in cfg.pairs.iter().zip(&devs) {
        println!(
            "  {:<22} -> {:<22} {:.3}",
            cfg.scales[i].name, cfg.scales[j].name, dev
        );
    }

    let result = run_permutation_test(
        &values,
        |v| statistic.eval(v),
        cfg.test.n_trials,
        cfg.test.seed,
    )?;
    report(&result, cfg.test.threshold);
    Ok(())
}

/// Look-elsewhere corrected test: the statistic is the best count any grid
/// spacing achieves, observed and per trial alike.
fn run_scan(cfg: &RunConfig, grid: DeltaGrid) -> Result<(), Box<dyn Error>> {
    let values = values_of(&cfg.scales);
    let statistic = Statistic::DeltaScan {
        pairs: cfg.pairs.clone(),
        grid: grid.clone(),
        threshold: cfg.test.threshold,
    };
    statistic.validate(values.len())?;

    println!("{RULE}");
    println!("DELTA SCAN / LOOK-ELSEWHERE CORRECTION");
    println!(
        "Configuration: scan [{}, {}] step {} ({} grid points), n_trials={}, threshold={}, seed={}",
        grid.delta_min,
        grid.delta_max,
        grid.step,
        grid.n_points(),
        cfg.test.n_trials,
        cfg.test.threshold,
        cfg.test.seed
    );
    println!("{RULE}");

    let (obs_max, obs_best) = scan_max_strong(&values, &cfg.pairs, &grid, cfg.test.threshold);
    println!("\nObserved: max strong matches {obs_max} at delta {obs_best:.2}");
    let at_canonical = Statistic::FixedDelta {
        pairs: cfg.pairs.clone(),
        delta: cfg.test.delta,
        threshold: cfg.test.threshold,
    }
    .eval(&values);
    println!(
        "For reference, strong matches at delta={}: {}",
        cfg.test.delta, at_canonical
    );

    let result = run_permutation_test(
        &values,
        |v| statistic.eval(v),
        cfg.test.n_trials,
        cfg.test.seed,
    )?;
    report(&result, cfg.test.threshold);
    Ok(())
}

/// Cross-domain test: auxiliary scales appended after the base ladder, with
/// only (base, added) pairs counted unless all-pairs mode is forced.
fn run_cross(cfg: &RunConfig, cross: &CrossConfig, delta: f64) -> Result<(), Box<dyn Error>> {
    let mut table: Vec<ScaleEntry> = cfg.scales.clone();
    let n_base = table.len();

    let added = load_scale_table(Path::new(&cross.table_path));
    if added.is_empty() {
        println!("Notice: no auxiliary scales loaded; proceeding with the base ladder only");
    }
    table.extend(added);
    if cross.append_dmde {
        for (name, log10_len) in DMDE_SCALES {
            table.push(ScaleEntry::new(name, log10_len));
        }
        info!("appended speculative DM/DE scales");
    }
    let values = values_of(&table);
    let n_added = values.len() - n_base;

    let statistic = if cross.all_pairs {
        Statistic::AllPairs {
            delta,
            threshold: cfg.test.threshold,
        }
    } else {
        Statistic::CrossDomain {
            n_base,
            delta,
            threshold: cfg.test.threshold,
        }
    };
    statistic.validate(values.len())?;

    let pairs_tested = if cross.all_pairs {
        values.len() * (values.len() - 1) / 2
    } else {
        n_base * n_added
    };

    println!("{RULE}");
    if cross.all_pairs {
        println!("CROSS-DOMAIN CLUSTERING TEST (all-pairs mode, noisy)");
    } else {
        println!("CROSS-DOMAIN CLUSTERING TEST");
    }
    println!(
        "Configuration: base={n_base}, added={n_added}, pairs tested={pairs_tested}, \
         n_trials={}, delta={delta}, threshold={}, seed={}",
        cfg.test.n_trials, cfg.test.threshold, cfg.test.seed
    );
    println!("{RULE}");

    let result = run_permutation_test(
        &values,
        |v| statistic.eval(v),
        cfg.test.n_trials,
        cfg.test.seed,
    )?;
    report(&result, cfg.test.threshold);
    Ok(())
}

fn report(result: &PermutationTest, threshold: f64) {
    println!("\nObserved strong matches (<= {threshold}): {}", result.observed);
    println!("\n{RULE}");
    println!("RESULTS");
    println!("{RULE}");
    println!(
        "Trials with statistic >= {}: {} out of {}",
        result.observed,
        result.exceed_count,
        result.n_trials()
    );
    println!(
        "Empirical p-value: {:.6} ({:.4}%)",
        result.p_empirical,
        result.p_empirical * 100.0
    );
    println!(
        "Conservative upper bound (add-one): {:.6} ({:.4}%)",
        result.p_upper,
        result.p_upper * 100.0
    );
    println!(
        "Null distribution: mean {:.3}, std {:.3}",
        result.null_mean(),
        result.null_std()
    );
    println!("{RULE}");
}
