//! Weighted random sampling by inverse-transform lookup.
//!
//! Every "multiple choice" source feature (particle types, point
//! positions, sub-sources) and the density-grid cell draw go through
//! [`WeightedSampler`]: weights accumulate into a cumulative table, and a
//! uniform draw in `[0, 1)` selects the entry whose cumulative interval
//! contains it.

use crate::error::SamplerError;

/// A cumulative-weight table over values of type `T`.
///
/// Entry `i` is selected with probability `weight_i / total_weight`.
///
/// # Examples
///
/// ```
/// use aether_core::WeightedSampler;
///
/// let mut sampler = WeightedSampler::new();
/// sampler.add("proton", 3.0).unwrap();
/// sampler.add("photon", 1.0).unwrap();
///
/// // The first three quarters of the unit interval map to "proton".
/// assert_eq!(sampler.sample(0.5), Some(&"proton"));
/// assert_eq!(sampler.sample(0.9), Some(&"photon"));
/// ```
#[derive(Clone, Debug)]
pub struct WeightedSampler<T> {
    values: Vec<T>,
    cdf: Vec<f64>,
}

// A derived Default would demand `T: Default`, which trait-object
// entries cannot satisfy.
impl<T> Default for WeightedSampler<T> {
    fn default() -> Self {
        WeightedSampler::new()
    }
}

impl<T> WeightedSampler<T> {
    /// Create an empty sampler.
    pub fn new() -> Self {
        WeightedSampler {
            values: Vec::new(),
            cdf: Vec::new(),
        }
    }

    /// Append a value with a relative weight.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidWeight`] if `weight` is zero,
    /// negative, or non-finite.
    pub fn add(&mut self, value: T, weight: f64) -> Result<(), SamplerError> {
        if !(weight > 0.0) || !weight.is_finite() {
            return Err(SamplerError::InvalidWeight { weight });
        }
        let total = self.total_weight();
        self.values.push(value);
        self.cdf.push(total + weight);
        Ok(())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sampler holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all weights added so far.
    pub fn total_weight(&self) -> f64 {
        self.cdf.last().copied().unwrap_or(0.0)
    }

    /// Index selected by a uniform draw `u` in `[0, 1)`, or `None` when
    /// empty.
    ///
    /// Selection picks the smallest index `i` with
    /// `cdf[i] >= u * total_weight`.
    pub fn sample_index(&self, u: f64) -> Option<usize> {
        if self.values.is_empty() {
            return None;
        }
        let draw = u * self.total_weight();
        let i = self.cdf.partition_point(|&c| c < draw);
        Some(i.min(self.values.len() - 1))
    }

    /// Value selected by a uniform draw `u` in `[0, 1)`, or `None` when
    /// empty.
    pub fn sample(&self, u: f64) -> Option<&T> {
        self.sample_index(u).map(|i| &self.values[i])
    }

    /// The value stored at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Rng;

    #[test]
    fn rejects_zero_negative_and_nan_weights() {
        let mut s = WeightedSampler::new();
        assert_eq!(
            s.add(1, 0.0),
            Err(SamplerError::InvalidWeight { weight: 0.0 })
        );
        assert_eq!(
            s.add(1, -2.0),
            Err(SamplerError::InvalidWeight { weight: -2.0 })
        );
        assert!(s.add(1, f64::NAN).is_err());
        assert!(s.add(1, f64::INFINITY).is_err());
        assert!(s.is_empty());
    }

    #[test]
    fn empty_sampler_yields_none() {
        let s: WeightedSampler<i32> = WeightedSampler::new();
        assert_eq!(s.sample(0.5), None);
        assert_eq!(s.total_weight(), 0.0);
    }

    #[test]
    fn interval_boundaries() {
        let mut s = WeightedSampler::new();
        s.add("a", 1.0).unwrap();
        s.add("b", 1.0).unwrap();
        assert_eq!(s.sample(0.0), Some(&"a"));
        assert_eq!(s.sample(0.499), Some(&"a"));
        assert_eq!(s.sample(0.5), Some(&"a"));
        assert_eq!(s.sample(0.501), Some(&"b"));
        assert_eq!(s.sample(0.999), Some(&"b"));
    }

    #[test]
    fn single_entry_always_selected() {
        let mut s = WeightedSampler::new();
        s.add(7_u32, 0.25).unwrap();
        for u in [0.0, 0.3, 0.999_999] {
            assert_eq!(s.sample(u), Some(&7));
        }
    }

    /// Empirical frequencies converge to `w_i / total` for a seeded
    /// stream of draws.
    #[test]
    fn sampling_fairness() {
        let weights = [1.0, 2.0, 3.0, 4.0];
        let mut s = WeightedSampler::new();
        for (i, &w) in weights.iter().enumerate() {
            s.add(i, w).unwrap();
        }
        let total: f64 = weights.iter().sum();

        let n = 200_000;
        let mut counts = [0u32; 4];
        let mut rng = Rng::from_seed(12345);
        for _ in 0..n {
            let i = s.sample_index(rng.uniform()).unwrap();
            counts[i] += 1;
        }
        for (i, &w) in weights.iter().enumerate() {
            let expected = w / total;
            let observed = f64::from(counts[i]) / f64::from(n);
            assert!(
                (observed - expected).abs() < 0.01,
                "entry {i}: observed {observed}, expected {expected}"
            );
        }
    }

    /// `Default` must work for entry types without their own `Default`,
    /// trait objects included.
    #[test]
    fn default_works_without_default_entries() {
        struct Opaque;
        let s = WeightedSampler::<Opaque>::default();
        assert!(s.is_empty());

        let boxed = WeightedSampler::<Box<dyn std::fmt::Debug>>::default();
        assert!(boxed.is_empty());
        assert_eq!(boxed.total_weight(), 0.0);
    }
}
