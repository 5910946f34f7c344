use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io::Read;

/// Parses `metric_id,value` rows. Rows with a blank value are skipped so that
/// partially filled exports behave like absent metrics.
pub fn parse_metric_csv<R: Read>(reader: R) -> Result<BTreeMap<String, f64>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut metrics = BTreeMap::new();

    for record in csv_reader.deserialize::<MetricRow>() {
        let row = record?;
        if let Some(value) = row.value {
            metrics.insert(row.metric_id, value);
        }
    }

    Ok(metrics)
}

#[derive(Debug, Deserialize)]
struct MetricRow {
    metric_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<f64>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_skips_blank_values() {
        let data = "metric_id,value\nturnover_rate, 12.5\ncost_per_hire,\nenps,31\n";
        let metrics = parse_metric_csv(data.as_bytes()).expect("csv parses");
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics.get("turnover_rate"), Some(&12.5));
        assert_eq!(metrics.get("enps"), Some(&31.0));
        assert!(!metrics.contains_key("cost_per_hire"));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let data = "metric_id,value\nturnover_rate,twelve\n";
        assert!(parse_metric_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn later_rows_replace_earlier_duplicates() {
        let data = "metric_id,value\nenps,20\nenps,25\n";
        let metrics = parse_metric_csv(data.as_bytes()).expect("csv parses");
        assert_eq!(metrics.get("enps"), Some(&25.0));
    }
}
