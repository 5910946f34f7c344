/// Ordered `(threshold, tier)` steps evaluated from the highest threshold down.
///
/// A score resolves to the tier of the first threshold it reaches, so a value sitting
/// exactly on a threshold belongs to the higher tier. Scores below every step (and NaN)
/// resolve to `floor`.
#[derive(Debug)]
pub struct TierTable<T: 'static> {
    steps: &'static [(f64, T)],
    floor: T,
}

impl<T: Copy + 'static> TierTable<T> {
    /// `steps` must be sorted by threshold, highest first.
    pub const fn new(steps: &'static [(f64, T)], floor: T) -> Self {
        Self { steps, floor }
    }

    pub fn classify(&self, score: f64) -> T {
        self.steps
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.floor)
    }

    pub fn steps(&self) -> &'static [(f64, T)] {
        self.steps
    }
}
