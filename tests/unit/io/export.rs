//! Tests for CSV headers, row formatting and history export

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;
    use texcomplex::analysis::history::RunRecord;
    use texcomplex::analysis::pipeline::FractalMeasurement;
    use texcomplex::information::InformationResult;
    use texcomplex::io::export::{
        export_csv, export_history_csv, format_line, format_row, format_value, headers, write_csv,
        write_history_csv,
    };
    use texcomplex::{MeasureError, Measurement, Pipeline};

    fn fractal(dimension: f64, lacunarity: f64) -> Measurement {
        Measurement::Fractal(FractalMeasurement {
            dimension,
            lacunarity,
            r_squared: 0.987_66,
        })
    }

    fn information() -> Measurement {
        Measurement::Information(InformationResult {
            entropy: 0.912_34,
            complexity: 0.1,
            fisher: 0.056_78,
        })
    }

    fn stamped(filename: &str, measurement: Measurement, unix_seconds: u64) -> RunRecord {
        RunRecord {
            timestamp: UNIX_EPOCH + Duration::from_secs(unix_seconds),
            ..RunRecord::new(filename, measurement)
        }
    }

    // Tests header columns per pipeline
    // Verified by adding r_squared to information exports
    #[test]
    fn test_headers() {
        assert_eq!(headers(Pipeline::Fractal, false), vec!["filename", "FD", "L"]);
        assert_eq!(
            headers(Pipeline::Fractal, true),
            vec!["filename", "FD", "L", "r_squared"]
        );
        assert_eq!(headers(Pipeline::Information, true), vec!["filename", "H", "C", "F"]);
    }

    // Tests values are printed with four decimals
    // Verified by using the default float formatting
    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.523), "1.5230");
        assert_eq!(format_value(0.0), "0.0000");
        assert_eq!(format_value(2.0 / 3.0), "0.6667");
    }

    // Tests a single fractal result line
    // Verified by swapping the FD and L columns
    #[test]
    fn test_format_line_fractal() {
        let line = format_line("texture.jpg", &fractal(1.523, 0.412), false)
            .expect("Row should format");
        assert_eq!(line, "texture.jpg,1.5230,0.4120");

        let line = format_line("texture.jpg", &fractal(1.523, 0.412), true)
            .expect("Row should format");
        assert_eq!(line, "texture.jpg,1.5230,0.4120,0.9877");
    }

    // Tests filenames needing quotes are escaped
    // Verified by joining fields with commas directly
    #[test]
    fn test_format_line_quotes_filename() {
        let line = format_line("oak, rough.png", &fractal(1.2, 0.3), false)
            .expect("Row should format");
        assert_eq!(line, "\"oak, rough.png\",1.2000,0.3000");
    }

    // Tests information rows carry H, C and F in order
    // Verified by emitting F before C
    #[test]
    fn test_format_row_information() {
        assert_eq!(
            format_row("slate.png", &information(), true),
            vec!["slate.png", "0.9123", "0.1000", "0.0568"]
        );
    }

    // Tests whole-history export to an in-memory sink
    // Verified by omitting the header row
    #[test]
    fn test_write_csv() {
        let records = vec![
            RunRecord::new("a.png", fractal(1.5, 0.25)),
            RunRecord::new("b.png", fractal(1.75, 0.5)),
        ];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &records, Pipeline::Fractal, false).expect("Export should succeed");

        let text = String::from_utf8(buffer).expect("CSV should be UTF-8");
        assert_eq!(text, "filename,FD,L\na.png,1.5000,0.2500\nb.png,1.7500,0.5000\n");
    }

    // Tests mixed pipelines are rejected before anything is written
    // Verified by checking only the first record
    #[test]
    fn test_write_csv_rejects_mixed_pipelines() {
        let records = vec![
            RunRecord::new("a.png", fractal(1.5, 0.25)),
            RunRecord::new("b.png", information()),
        ];
        let mut buffer = Vec::new();
        let result = write_csv(&mut buffer, &records, Pipeline::Fractal, false);

        assert!(matches!(result, Err(MeasureError::InvalidParameter { .. })));
        assert!(buffer.is_empty());
    }

    // Tests an empty history still writes the header
    // Verified by skipping export for empty input
    #[test]
    fn test_write_csv_empty() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[], Pipeline::Information, false).expect("Export should succeed");
        assert_eq!(buffer, b"filename,H,C,F\n");
    }

    // Tests export to a file path
    // Verified by appending to an existing file
    #[test]
    fn test_export_csv_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("results.csv");
        fs::write(&path, "stale contents\n").expect("Failed to seed file");

        let records = vec![RunRecord::new("slate.png", information())];
        export_csv(&path, &records, Pipeline::Information, false).expect("Export should succeed");

        let text = fs::read_to_string(&path).expect("Failed to read export");
        assert_eq!(text, "filename,H,C,F\nslate.png,0.9123,0.1000,0.0568\n");
    }

    // Tests an unwritable destination reports the path
    // Verified by discarding the path in the error
    #[test]
    fn test_export_csv_bad_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("results.csv");

        match export_csv(&path, &[], Pipeline::Fractal, false) {
            Err(MeasureError::FileSystem { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected FileSystem, got {other:?}"),
        }
    }

    // Tests a pipeline mismatch leaves an existing file untouched
    // Verified by creating the file before checking the records
    #[test]
    fn test_export_csv_mismatch_keeps_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("results.csv");
        fs::write(&path, "previous results\n").expect("Failed to seed file");

        let records = vec![RunRecord::new("a.png", fractal(1.5, 0.25))];
        let result = export_csv(&path, &records, Pipeline::Information, false);

        assert!(matches!(result, Err(MeasureError::InvalidParameter { .. })));
        let text = fs::read_to_string(&path).expect("Failed to read file");
        assert_eq!(text, "previous results\n");
    }

    // Tests the history export appends a Unix-seconds timestamp column
    // Verified by dropping the timestamp from each row
    #[test]
    fn test_write_history_csv() {
        let records = vec![
            stamped("a.png", fractal(1.5, 0.25), 1_700_000_000),
            stamped("b.png", fractal(1.75, 0.5), 1_700_000_042),
        ];
        let mut buffer = Vec::new();
        write_history_csv(&mut buffer, &records, Pipeline::Fractal, true)
            .expect("Export should succeed");

        let text = String::from_utf8(buffer).expect("CSV should be UTF-8");
        assert_eq!(
            text,
            "filename,FD,L,r_squared,timestamp\n\
             a.png,1.5000,0.2500,0.9877,1700000000\n\
             b.png,1.7500,0.5000,0.9877,1700000042\n"
        );
    }

    // Tests the history export to a file also checks pipelines first
    // Verified by writing the timestamp header for information records
    #[test]
    fn test_export_history_csv_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("history.csv");

        let records = vec![stamped("slate.png", information(), 1_650_000_000)];
        export_history_csv(&path, &records, Pipeline::Information, false)
            .expect("Export should succeed");
        let text = fs::read_to_string(&path).expect("Failed to read export");
        assert_eq!(
            text,
            "filename,H,C,F,timestamp\nslate.png,0.9123,0.1000,0.0568,1650000000\n"
        );

        let result = export_history_csv(&path, &records, Pipeline::Fractal, false);
        assert!(matches!(result, Err(MeasureError::InvalidParameter { .. })));
        assert_eq!(
            fs::read_to_string(&path).expect("Failed to read export"),
            text
        );
    }
}
