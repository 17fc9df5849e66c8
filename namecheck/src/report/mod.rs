//! Report generation
//!
//! Three renderings of the sorted results, written side by side with one
//! shared timestamp:
//! - `results_<stamp>.json` - structured records
//! - `results_<stamp>.csv`  - one flat row per name
//! - `results_<stamp>.txt`  - the free and certainly free names only

pub mod csv;
pub mod json;
pub mod text;

use crate::error::CheckerResult;
use crate::types::NameResult;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use tracing::info;

/// Timestamp format used in report file names and the text header
pub const STAMP_FORMAT: &str = "%d%m%Y_%H%M%S";

/// Columns of the configured set probes, in report order
#[derive(Debug, Clone, Default)]
pub struct ReportLayout {
    pub tlds: Vec<String>,
    pub platforms: Vec<String>,
}

/// Files produced by one run
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub text: PathBuf,
}

/// Writes all report files into an output directory
pub struct ReportWriter {
    output_dir: PathBuf,
    layout: ReportLayout,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>, layout: ReportLayout) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write JSON, CSV and text reports, creating the output directory if needed
    pub fn write_all(&self, results: &[NameResult], now: NaiveDateTime) -> CheckerResult<ReportPaths> {
        std::fs::create_dir_all(&self.output_dir)?;

        let stamp = now.format(STAMP_FORMAT).to_string();
        let base = self.output_dir.join(format!("results_{}", stamp));
        let paths = ReportPaths {
            json: base.with_extension("json"),
            csv: base.with_extension("csv"),
            text: base.with_extension("txt"),
        };

        std::fs::write(&paths.json, json::render(results)?)?;
        csv::write(std::fs::File::create(&paths.csv)?, results, &self.layout)?;
        std::fs::write(&paths.text, text::render(results, &stamp))?;

        info!(
            json = %paths.json.display(),
            csv = %paths.csv.display(),
            text = %paths.text.display(),
            "Reports written"
        );

        Ok(paths)
    }
}
