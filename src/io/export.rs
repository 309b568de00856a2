//! CSV export of measurement records

use crate::analysis::history::RunRecord;
use crate::analysis::pipeline::{Measurement, Pipeline};
use crate::io::configuration::CSV_PRECISION;
use crate::io::error::{MeasureError, Result, computation_error, invalid_parameter};
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names for a pipeline's export
///
/// The `r_squared` column only exists for the fractal pipeline.
pub fn headers(pipeline: Pipeline, include_r_squared: bool) -> Vec<&'static str> {
    match pipeline {
        Pipeline::Fractal if include_r_squared => vec!["filename", "FD", "L", "r_squared"],
        Pipeline::Fractal => vec!["filename", "FD", "L"],
        Pipeline::Information => vec!["filename", "H", "C", "F"],
    }
}

/// Fixed-precision rendering of a metric value
pub fn format_value(value: f64) -> String {
    format!("{value:.precision$}", precision = CSV_PRECISION)
}

/// Fields of one export row
pub fn format_row(
    filename: &str,
    measurement: &Measurement,
    include_r_squared: bool,
) -> Vec<String> {
    let mut row = vec![filename.to_owned()];
    match measurement {
        Measurement::Fractal(fractal) => {
            row.push(format_value(fractal.dimension));
            row.push(format_value(fractal.lacunarity));
            if include_r_squared {
                row.push(format_value(fractal.r_squared));
            }
        }
        Measurement::Information(info) => {
            row.push(format_value(info.entropy));
            row.push(format_value(info.complexity));
            row.push(format_value(info.fisher));
        }
    }
    row
}

fn row_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}

/// One result as a single CSV line without the trailing newline
///
/// # Errors
///
/// Returns `CsvExport` if the row cannot be encoded
pub fn format_line(
    filename: &str,
    measurement: &Measurement,
    include_r_squared: bool,
) -> Result<String> {
    let mut writer = row_writer(Vec::new());
    writer.write_record(format_row(filename, measurement, include_r_squared))?;
    let bytes = writer
        .into_inner()
        .map_err(|err| computation_error("csv row", &err.error()))?;
    let line = String::from_utf8(bytes).map_err(|err| computation_error("csv row", &err))?;
    Ok(line.trim_end_matches('\n').to_owned())
}

// Every record must come from the pipeline whose header is written
fn check_pipeline(records: &[RunRecord], pipeline: Pipeline) -> Result<()> {
    records
        .iter()
        .find(|record| record.measurement.pipeline() != pipeline)
        .map_or(Ok(()), |mismatch| {
            Err(invalid_parameter(
                "records",
                &mismatch.filename,
                &format!(
                    "measured with {:?}, export expects {pipeline:?}",
                    mismatch.measurement.pipeline()
                ),
            ))
        })
}

fn write_records<W: Write>(
    sink: W,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
    include_timestamp: bool,
) -> Result<()> {
    check_pipeline(records, pipeline)?;

    let mut writer = row_writer(sink);
    let mut header = headers(pipeline, include_r_squared);
    if include_timestamp {
        header.push("timestamp");
    }
    writer.write_record(header)?;

    for record in records {
        let mut row = format_row(&record.filename, &record.measurement, include_r_squared);
        if include_timestamp {
            row.push(record.unix_seconds().to_string());
        }
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write a header and one row per record to any sink
///
/// # Errors
///
/// Returns `InvalidParameter` if a record came from a different pipeline
/// (nothing is written in that case) and `CsvExport` if writing fails
pub fn write_csv<W: Write>(
    sink: W,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
) -> Result<()> {
    write_records(sink, records, pipeline, include_r_squared, false)
}

/// Like [`write_csv`], with a trailing `timestamp` column of Unix seconds
///
/// # Errors
///
/// Same as [`write_csv`]
pub fn write_history_csv<W: Write>(
    sink: W,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
) -> Result<()> {
    write_records(sink, records, pipeline, include_r_squared, true)
}

fn export_to_path(
    path: &Path,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
    include_timestamp: bool,
) -> Result<()> {
    check_pipeline(records, pipeline)?;

    let file = File::create(path).map_err(|source| MeasureError::FileSystem {
        path: path.to_path_buf(),
        operation: "create csv",
        source,
    })?;

    write_records(file, records, pipeline, include_r_squared, include_timestamp).map_err(
        |err| match err {
            MeasureError::CsvExport { source, .. } => MeasureError::CsvExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        },
    )
}

/// Write the records as a CSV file, replacing any existing file
///
/// # Errors
///
/// Returns `InvalidParameter` if a record came from a different pipeline
/// (an existing file is left untouched), `FileSystem` if the file cannot be
/// created, otherwise the errors of [`write_csv`] with the destination path
/// attached
pub fn export_csv(
    path: &Path,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
) -> Result<()> {
    export_to_path(path, records, pipeline, include_r_squared, false)
}

/// Like [`export_csv`], with a trailing `timestamp` column of Unix seconds
///
/// # Errors
///
/// Same as [`export_csv`]
pub fn export_history_csv(
    path: &Path,
    records: &[RunRecord],
    pipeline: Pipeline,
    include_r_squared: bool,
) -> Result<()> {
    export_to_path(path, records, pipeline, include_r_squared, true)
}
