mod annotate;
mod summary;
pub mod terminal;

use std::path::{Path, PathBuf};

pub use annotate::{LEGEND, annotate};
pub use summary::{summary_csv, summary_table};

use crate::{algorithms::SearchResult, error::Result, grid::Grid};

pub const SUMMARY_FILE: &str = "summary.csv";

/// Write `<stem>_output.txt` for every result plus `summary.csv` into `dir`,
/// creating it if needed. Returns the written paths.
pub fn write_artifacts(dir: &Path, grid: &Grid, results: &[SearchResult]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(results.len() + 1);

    for result in results {
        let path = dir.join(format!("{}_output.txt", result.stem()));
        std::fs::write(&path, annotate(grid, result))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    let summary = dir.join(SUMMARY_FILE);
    std::fs::write(&summary, summary_csv(results))?;
    log::debug!("wrote {}", summary.display());
    written.push(summary);

    Ok(written)
}
