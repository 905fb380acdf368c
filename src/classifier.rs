//! General-purpose banded classifier — a monotonic step function over a
//! bounded continuous input.
//!
//! Both the hydration slider and the cups-of-water picker map a bounded
//! numeric value to one of a fixed set of ordered outputs. The mapping is the
//! same in both cases: clamp the input into the domain, then pick the first
//! band whose inclusive upper bound covers it.

use crate::error::ConfigError;

/// One band: everything at or below `upper` (and above the previous band's
/// upper bound) classifies to `output`.
#[derive(Debug, Clone)]
pub struct Band<T> {
    pub upper: f64,
    pub output: T,
}

/// An ordered, gap-free partition of `[lo, hi]` into inclusive-upper bands.
///
/// The last band's upper bound is treated as `hi` regardless of its stated
/// value, so the partition always covers the full domain.
#[derive(Debug, Clone)]
pub struct Bands<T> {
    lo: f64,
    hi: f64,
    bands: Vec<Band<T>>,
}

impl<T> Bands<T> {
    /// Build a band table over `[lo, hi]`. Upper bounds must be strictly
    /// increasing; the table must be non-empty.
    pub fn new(lo: f64, hi: f64, bands: Vec<Band<T>>) -> Result<Self, ConfigError> {
        if bands.is_empty() {
            return Err(ConfigError::EmptyBands);
        }
        for pair in bands.windows(2) {
            if pair[1].upper <= pair[0].upper {
                return Err(ConfigError::UnorderedBands {
                    prev: pair[0].upper,
                    next: pair[1].upper,
                });
            }
        }
        Ok(Self { lo, hi, bands })
    }

    /// Classify `value`, clamping it into the domain first. Out-of-range
    /// input is never an error; it lands in the nearest boundary band.
    pub fn classify(&self, value: f64) -> &T {
        let clamped = value.clamp(self.lo, self.hi);
        self.bands
            .iter()
            .find(|band| clamped <= band.upper)
            .map(|band| &band.output)
            // Last band covers up to `hi` even if its stated upper is lower.
            .unwrap_or(&self.bands[self.bands.len() - 1].output)
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Iterate over the bands in order.
    pub fn iter(&self) -> impl Iterator<Item = &Band<T>> {
        self.bands.iter()
    }
}
