//! Loading `metric_id -> value` maps exported by HRIS tooling.

mod parser;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

pub use parser::parse_metric_csv;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read metric file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV metric data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON metric data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported metric file extension '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}

/// Reads a metric map from a `.csv` (`metric_id,value`) or `.json` (flat object) file.
pub fn read_metric_file(path: &Path) -> Result<BTreeMap<String, f64>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let metrics = match extension.as_str() {
        "csv" => parse_metric_csv(File::open(path)?)?,
        "json" => parse_metric_json(File::open(path)?)?,
        other => return Err(InputError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), metrics = metrics.len(), "loaded metric file");
    Ok(metrics)
}

pub fn parse_metric_json<R: Read>(reader: R) -> Result<BTreeMap<String, f64>, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_object() {
        let json = r#"{"turnover_rate": 10.0, "time_to_fill": 38}"#;
        let metrics = parse_metric_json(json.as_bytes()).expect("json parses");
        assert_eq!(metrics.get("turnover_rate"), Some(&10.0));
        assert_eq!(metrics.get("time_to_fill"), Some(&38.0));
    }

    #[test]
    fn rejects_non_numeric_json_values() {
        let json = r#"{"turnover_rate": "high"}"#;
        assert!(matches!(
            parse_metric_json(json.as_bytes()),
            Err(InputError::Json(_))
        ));
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let err = read_metric_file(Path::new("metrics.xlsx")).expect_err("xlsx rejected");
        assert!(matches!(err, InputError::UnsupportedFormat(ext) if ext == "xlsx"));
    }
}
