//! Command-line interface for batch texture measurement

use crate::analysis::history::{RunHistory, RunRecord};
use crate::analysis::interpret::interpret;
use crate::analysis::pipeline::{Measurement, MeasurementConfig, Pipeline, measure};
use crate::information::metrics::FisherEstimator;
use crate::io::configuration::{
    DEFAULT_DELAY, DEFAULT_EMBEDDING_DIMENSION, DEFAULT_MAX_WORKING_DIMENSION,
    DEFAULT_RESIZE_TARGET,
};
use crate::io::decode::{collect_images, load_image};
use crate::io::error::Result;
use crate::io::export::{export_csv, export_history_csv, write_csv, write_history_csv};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::warn;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "texcomplex")]
#[command(
    author,
    version,
    about = "Measure the visual complexity of material texture images"
)]
/// Command-line arguments for the measurement tool
// Each boolean is an independent switch over the measurement or output
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input JPG/PNG file or directory to measure
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Measurement pipeline
    #[arg(short, long, value_enum, default_value_t = Pipeline::Fractal)]
    pub pipeline: Pipeline,

    /// Ordinal pattern length (2-7)
    #[arg(short, long, default_value_t = DEFAULT_EMBEDDING_DIMENSION)]
    pub dimension: usize,

    /// Spacing between ordinal pattern samples
    #[arg(short = 't', long, default_value_t = DEFAULT_DELAY)]
    pub delay: usize,

    /// Power-of-two side of the square walked by the Hilbert curve
    #[arg(short, long, default_value_t = DEFAULT_RESIZE_TARGET)]
    pub resize: u32,

    /// Approximate statistical complexity as 4H(1-H)
    #[arg(short, long)]
    pub approximate_complexity: bool,

    /// Information pipeline with both fast estimators
    #[arg(short, long)]
    pub fast: bool,

    /// Longest image side before measuring, 0 for full resolution
    #[arg(short, long, default_value_t = DEFAULT_MAX_WORKING_DIMENSION)]
    pub max_dimension: u32,

    /// Add the log-log fit quality column to fractal exports
    #[arg(long)]
    pub r_squared: bool,

    /// Add a Unix-seconds timestamp column to every export row
    #[arg(long)]
    pub timestamps: bool,

    /// Write the CSV here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Measure files on all cores
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and summaries should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Measurement configuration selected by the flags
    ///
    /// `--fast` forces the information pipeline with both fast estimators.
    pub fn measurement_config(&self) -> MeasurementConfig {
        let base = if self.fast {
            MeasurementConfig::fast_path()
        } else {
            MeasurementConfig {
                pipeline: self.pipeline,
                use_exact_statistical_complexity: !self.approximate_complexity,
                fisher: FisherEstimator::CanonicalOrder,
                ..MeasurementConfig::default()
            }
        };

        MeasurementConfig {
            embedding_dimension: self.dimension,
            delay: self.delay,
            resize_target: self.resize,
            max_working_dimension: (self.max_dimension > 0).then_some(self.max_dimension),
            ..base
        }
    }
}

/// Outcome counts of one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Files measured successfully
    pub measured: usize,
    /// Files that failed to decode or measure
    pub failed: usize,
}

/// Orchestrates batch measurement with progress tracking and CSV export
pub struct FileProcessor {
    cli: Cli,
    history: RunHistory,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            history: RunHistory::new(),
        }
    }

    /// Records of every file measured so far
    pub const fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Measure every target file, then export and summarize the results
    ///
    /// A file that fails to decode or measure is logged and counted; it never
    /// stops the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the flags are invalid, the target cannot be read
    /// or the CSV cannot be written
    pub fn process(&self) -> Result<BatchSummary> {
        let config = self.cli.measurement_config();
        config.validate()?;

        let files = collect_images(&self.cli.target)?;
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(files.len())
        } else {
            ProgressManager::hidden(files.len())
        };

        let outcomes: Vec<Option<RunRecord>> = if self.cli.parallel {
            files
                .par_iter()
                .map(|path| Self::process_file(path, &config, &progress))
                .collect()
        } else {
            files
                .iter()
                .map(|path| Self::process_file(path, &config, &progress))
                .collect()
        };
        progress.finish();

        let summary = BatchSummary {
            measured: outcomes.iter().flatten().count(),
            failed: outcomes.iter().filter(|outcome| outcome.is_none()).count(),
        };
        let start = self.history.len();
        for record in outcomes.into_iter().flatten() {
            self.history.push(record);
        }

        let records = self.history.records();
        let batch = records.get(start..).unwrap_or_default();
        self.export(batch, config.pipeline)?;

        if self.cli.should_show_progress() {
            Self::print_summary(batch, summary);
        }

        Ok(summary)
    }

    fn measure_file(path: &Path, config: &MeasurementConfig) -> Result<Measurement> {
        let image = load_image(path)?;
        measure(&image, config)
    }

    fn process_file(
        path: &Path,
        config: &MeasurementConfig,
        progress: &ProgressManager,
    ) -> Option<RunRecord> {
        progress.start_file(path);

        let outcome = match Self::measure_file(path, config) {
            Ok(measurement) => Some(RunRecord::new(Self::display_name(path), measurement)),
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                None
            }
        };

        progress.complete_file();
        outcome
    }

    fn export(&self, records: &[RunRecord], pipeline: Pipeline) -> Result<()> {
        let r_squared = self.cli.r_squared;
        match (&self.cli.output, self.cli.timestamps) {
            (Some(path), false) => export_csv(path, records, pipeline, r_squared),
            (Some(path), true) => export_history_csv(path, records, pipeline, r_squared),
            (None, false) => write_csv(std::io::stdout().lock(), records, pipeline, r_squared),
            (None, true) => {
                write_history_csv(std::io::stdout().lock(), records, pipeline, r_squared)
            }
        }
    }

    // Summaries go to stderr so stdout stays a clean CSV stream
    #[allow(clippy::print_stderr)]
    fn print_summary(records: &[RunRecord], summary: BatchSummary) {
        for record in records {
            let tiers = interpret(&record.measurement)
                .iter()
                .map(|(metric, tier)| format!("{metric} {}", tier.level))
                .collect::<Vec<_>>()
                .join(", ");

            match &record.measurement {
                Measurement::Fractal(fractal) => eprintln!(
                    "{}: {tiers} (combined {:.3})",
                    record.filename,
                    fractal.combined_score()
                ),
                Measurement::Information(_) => eprintln!("{}: {tiers}", record.filename),
            }
        }

        eprintln!(
            "Measured {} file(s), {} failed",
            summary.measured, summary.failed
        );
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}
