// ============================================================
// Layer 4 — Headerless CSV Parser
// ============================================================
// Both training files and inference input share one layout:
//
//   label,feature_1,feature_2,...,feature_n
//
// Training keeps column 0 as the label. Inference throws
// column 0 away unconditionally: it is a placeholder carried
// over from the training format, whatever it contains.
//
// The csv crate is configured strict (not flexible), so a row
// with a different number of fields than the first row is a
// parse error rather than silently padded.

use std::io::Read;

use crate::domain::dataset::Dataset;
use crate::domain::error::HarnessError;

/// Parse a labelled training file into a Dataset.
pub fn read_labelled<R: Read>(reader: R, source_name: &str) -> Result<Dataset, HarnessError> {
    let mut dataset = Dataset::new();

    for result in csv_reader(reader).into_records() {
        let record = result.map_err(|e| csv_error(source_name, e))?;
        let line   = record_line(&record);

        let mut fields = record.iter();
        // Empty lines are skipped by the csv reader, so column 0 is always present
        let label    = fields.next().unwrap_or_default().to_string();
        let features = parse_features(fields, source_name, line)?;

        dataset.push_row(label, features, source_name, line)?;
    }

    Ok(dataset)
}

/// Parse inference input, dropping column 0 of every row.
pub fn read_unlabelled<R: Read>(reader: R, source_name: &str) -> Result<Vec<Vec<f64>>, HarnessError> {
    let mut rows = Vec::new();

    for result in csv_reader(reader).into_records() {
        let record   = result.map_err(|e| csv_error(source_name, e))?;
        let line     = record_line(&record);
        let features = parse_features(record.iter().skip(1), source_name, line)?;

        if features.is_empty() {
            return Err(HarnessError::DataParse {
                source_name: source_name.to_string(),
                line,
                reason: "row has no feature columns after dropping column 0".to_string(),
            });
        }
        rows.push(features);
    }

    Ok(rows)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_features<'a>(
    fields:      impl Iterator<Item = &'a str>,
    source_name: &str,
    line:        u64,
) -> Result<Vec<f64>, HarnessError> {
    fields
        .enumerate()
        .map(|(i, field)| {
            field.parse::<f64>().map_err(|_| HarnessError::DataParse {
                source_name: source_name.to_string(),
                line,
                // +1 because column 0 was the label
                reason: format!("column {} is not numeric: {:?}", i + 1, field),
            })
        })
        .collect()
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn csv_error(source_name: &str, err: csv::Error) -> HarnessError {
    HarnessError::DataParse {
        source_name: source_name.to_string(),
        line:        err.position().map(|p| p.line()).unwrap_or(0),
        reason:      err.to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_first_column() {
        let ds = read_labelled("a,1,2\nb,3,4\n".as_bytes(), "mem").unwrap();
        assert_eq!(ds.labels(), &["a".to_string(), "b".to_string()]);
        assert_eq!(ds.features(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let ds = read_labelled("setosa, 5.1 ,3.5\n".as_bytes(), "mem").unwrap();
        assert_eq!(ds.labels(), &["setosa".to_string()]);
        assert_eq!(ds.features(), &[vec![5.1, 3.5]]);
    }

    #[test]
    fn test_non_numeric_feature_is_parse_error() {
        let err = read_labelled("a,1,2\nb,x,4\n".as_bytes(), "train.csv").unwrap_err();
        match err {
            HarnessError::DataParse { source_name, line, reason } => {
                assert_eq!(source_name, "train.csv");
                assert_eq!(line, 2);
                assert!(reason.contains("column 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_rows_are_parse_error() {
        let err = read_labelled("a,1,2\nb,3\n".as_bytes(), "train.csv").unwrap_err();
        assert!(matches!(err, HarnessError::DataParse { .. }));
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        let ds = read_labelled("".as_bytes(), "empty.csv").unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_unlabelled_drops_first_column() {
        let rows = read_unlabelled("0,1,2\n0,3,4\n".as_bytes(), "stdin").unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_unlabelled_drops_first_column_even_if_numeric_feature() {
        // Column 0 is dropped no matter what it holds
        let rows = read_unlabelled("5.1,3.5,1.4\n".as_bytes(), "stdin").unwrap();
        assert_eq!(rows, vec![vec![3.5, 1.4]]);
    }

    #[test]
    fn test_unlabelled_single_column_rejected() {
        let err = read_unlabelled("0\n".as_bytes(), "stdin").unwrap_err();
        assert!(matches!(err, HarnessError::DataParse { line: 1, .. }));
    }
}
