use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use tracing::warn;

/// Opaque caller metadata copied verbatim into reports.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Anything that can answer "what is the measured value of this metric?".
pub trait MetricSource {
    fn metric(&self, id: &str) -> Option<f64>;
}

impl<S: BuildHasher> MetricSource for HashMap<String, f64, S> {
    fn metric(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl MetricSource for BTreeMap<String, f64> {
    fn metric(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<T: MetricSource + ?Sized> MetricSource for &T {
    fn metric(&self, id: &str) -> Option<f64> {
        (**self).metric(id)
    }
}

/// Looks up `id`, treating non-finite measurements as absent.
pub(crate) fn present_value<M: MetricSource + ?Sized>(
    source: &M,
    engine: &'static str,
    id: &str,
) -> Option<f64> {
    let value = source.metric(id)?;
    if value.is_finite() {
        Some(value)
    } else {
        warn!(engine, metric = id, %value, "skipping non-finite metric value");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_absent() {
        let mut values = HashMap::new();
        values.insert("a".to_string(), f64::NAN);
        values.insert("b".to_string(), 4.0);
        assert_eq!(present_value(&values, "test", "a"), None);
        assert_eq!(present_value(&values, "test", "b"), Some(4.0));
        assert_eq!(present_value(&values, "test", "c"), None);
    }
}
