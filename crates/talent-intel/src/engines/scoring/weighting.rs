use std::collections::HashSet;

/// Construction-time contract violations for an engine's definition set.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("{engine}: identifier '{id}' is registered more than once")]
    DuplicateIdentifier { engine: &'static str, id: String },
    #[error("{engine}: weight {weight} for '{id}' must be a finite, non-negative number")]
    InvalidWeight {
        engine: &'static str,
        id: String,
        weight: f64,
    },
}

/// Rejects duplicate identifiers and negative or non-finite weights.
pub fn validate_definitions<'a, I>(engine: &'static str, definitions: I) -> Result<(), DefinitionError>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut seen = HashSet::new();
    for (id, weight) in definitions {
        if !weight.is_finite() || weight < 0.0 {
            return Err(DefinitionError::InvalidWeight {
                engine,
                id: id.to_string(),
                weight,
            });
        }
        if !seen.insert(id) {
            return Err(DefinitionError::DuplicateIdentifier {
                engine,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Running `Σ(score × weight) / Σ(weight)` over the indicators actually present.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedMean {
    weighted_sum: f64,
    weight_used: f64,
}

impl WeightedMean {
    pub fn add(&mut self, score: f64, weight: f64) {
        self.weighted_sum += score * weight;
        self.weight_used += weight;
    }

    /// Zero when nothing (or only zero-weight entries) was added.
    pub fn value(&self) -> f64 {
        if self.weight_used > 0.0 {
            self.weighted_sum / self.weight_used
        } else {
            0.0
        }
    }

    pub fn weight_used(&self) -> f64 {
        self.weight_used
    }
}

impl FromIterator<(f64, f64)> for WeightedMean {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut mean = Self::default();
        for (score, weight) in iter {
            mean.add(score, weight);
        }
        mean
    }
}
