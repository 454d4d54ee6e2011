//! data.rs — canonical scale table, ladder pairs, and auxiliary table loading.
//!
//! The defaults are the paper's verified table: 15 structures spanning the
//! proton to the observable universe, with 7 canonical small/large pairs
//! expected to sit 24 decades apart.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A named structure and its log10 characteristic length (meters, decades).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScaleEntry {
    pub name: String,
    pub log10_len: f64,
}

impl ScaleEntry {
    pub fn new(name: &str, log10_len: f64) -> Self {
        Self {
            name: name.to_string(),
            log10_len,
        }
    }
}

/// The 7 canonical ladder pairs (small index, large index) into the
/// canonical table.
pub const CANONICAL_PAIRS: [(usize, usize); 7] =
    [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)];

/// Speculative dark-matter halo / dark-energy horizon scales, appended on
/// request in cross-domain runs.
pub const DMDE_SCALES: [(&str, f64); 2] = [("DM halo", 21.0), ("DE horizon", 26.5)];

/// The 15 verified log10(L) values, smallest to largest.
pub fn canonical_scales() -> Vec<ScaleEntry> {
    vec![
        ScaleEntry::new("Proton", -15.08),
        ScaleEntry::new("Atomic orbital (H)", -10.28),
        ScaleEntry::new("Ribosome", -7.96),
        ScaleEntry::new("Bacterium", -6.00),
        ScaleEntry::new("C. elegans", -3.30),
        ScaleEntry::new("Human", -0.046),
        ScaleEntry::new("City", 3.00),
        ScaleEntry::new("Earth", 6.80),
        ScaleEntry::new("Sun", 8.84),
        ScaleEntry::new("Solar System", 12.65),
        ScaleEntry::new("Open Cluster", 16.67),
        ScaleEntry::new("Local Bubble", 18.665),
        ScaleEntry::new("Milky Way", 20.70),
        ScaleEntry::new("Virgo Supercluster", 23.84),
        ScaleEntry::new("Observable Universe", 26.64),
    ]
}

#[derive(Debug, Deserialize)]
struct ScaleRow {
    #[serde(rename = "Structure")]
    name: String,
    #[serde(rename = "log10_L")]
    log10_len: f64,
}

/// Load an auxiliary `Structure,log10_L` CSV table.
///
/// A missing or unreadable file is a degraded run, not a fatal one: it yields
/// an empty addition and a one-line notice. Rows that fail to parse are
/// skipped.
pub fn load_scale_table(path: &Path) -> Vec<ScaleEntry> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(r) => r,
        Err(err) => {
            warn!("no auxiliary scale table at {}: {err}", path.display());
            return Vec::new();
        }
    };
    let entries: Vec<ScaleEntry> = reader
        .deserialize::<ScaleRow>()
        .flatten()
        .map(|row| ScaleEntry {
            name: row.name,
            log10_len: row.log10_len,
        })
        .collect();
    debug!(
        n = entries.len(),
        path = %path.display(),
        "loaded auxiliary scale table"
    );
    entries
}

/// Extract the value sequence from a table, preserving order.
pub fn values_of(entries: &[ScaleEntry]) -> Vec<f64> {
    entries.iter().map(|e| e.log10_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn canonical_table_shape() {
        let scales = canonical_scales();
        assert_eq!(scales.len(), 15);
        // Ladder is strictly increasing.
        let values = values_of(&scales);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
        // Every canonical pair indexes the table.
        for &(i, j) in &CANONICAL_PAIRS {
            assert!(i < j && j < scales.len());
        }
    }

    #[test]
    fn missing_table_degrades_to_empty() {
        let loaded = load_scale_table(Path::new("/nonexistent/force_scales.csv"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn csv_rows_parse_and_bad_rows_are_skipped() {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "scaleperm_table_test_{}.csv",
            std::process::id()
        ));
        fs::write(
            &path,
            "Structure,log10_L\nEW scale,-18.0\nbroken,not-a-number\nGUT scale,-31.0\n",
        )
        .unwrap();

        let loaded = load_scale_table(&path);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], ScaleEntry::new("EW scale", -18.0));
        assert_eq!(loaded[1], ScaleEntry::new("GUT scale", -31.0));

        let _ = fs::remove_file(&path);
    }
}
