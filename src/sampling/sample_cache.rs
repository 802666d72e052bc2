use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{Result, SamplingError};

use super::SampleRange;

/// Inputs that decide whether cached samples are still valid.
#[derive(Debug, Clone, PartialEq)]
struct Fingerprint<P> {
    params: P,
    range: SampleRange,
}

/// Memoizes a function `f(params, t)` over a quantized range of `t`.
///
/// `P` holds the static arguments of the sampled function (for a cubic
/// curve, its control points) and `t` is the variable parameter. The cache
/// is keyed by the sample index of `t` on the configured [`SampleRange`], so
/// nearby parameter values share one entry.
///
/// Calling [`configure`](Self::configure) with params or a range that differ
/// structurally from the current ones drops every sample before the new
/// range is generated.
pub struct SampleCache<P, T, F>
where
    F: Fn(&P, f64) -> T,
{
    sampler: F,
    fingerprint: Option<Fingerprint<P>>,
    samples: BTreeMap<i64, T>,
}

impl<P, T, F> SampleCache<P, T, F>
where
    P: PartialEq,
    F: Fn(&P, f64) -> T,
{
    /// Creates an empty, unconfigured cache around `sampler`.
    #[must_use]
    pub fn new(sampler: F) -> Self {
        Self {
            sampler,
            fingerprint: None,
            samples: BTreeMap::new(),
        }
    }

    /// Sets the static params and range, then generates every sample in the
    /// range that is not cached yet.
    ///
    /// Returns `true` when the previous samples were discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidRange`] for a malformed range. The
    /// cache is left untouched in that case.
    pub fn configure(&mut self, params: P, range: SampleRange) -> Result<bool> {
        range.validate()?;

        let fingerprint = Fingerprint { params, range };
        let invalidated = self.fingerprint.as_ref() != Some(&fingerprint);
        if invalidated {
            if !self.samples.is_empty() {
                debug!(
                    discarded = self.samples.len(),
                    "sample cache inputs changed, invalidating"
                );
            }
            self.samples.clear();
            self.fingerprint = Some(fingerprint);
        }

        let sampler = &self.sampler;
        if let Some(fp) = &self.fingerprint {
            let range = fp.range;
            for index in 0..range.sample_count() {
                #[allow(clippy::cast_possible_wrap)]
                let key = index as i64;
                self.samples
                    .entry(key)
                    .or_insert_with(|| sampler(&fp.params, range.value_at(key)));
            }
        }
        Ok(invalidated)
    }

    /// Returns the sample for `t`, computing and caching it if `t` quantizes
    /// to an index that has not been filled yet (for example outside the
    /// configured range).
    ///
    /// The function is evaluated at the quantized parameter, not at `t`.
    /// Samples filled on demand stay cached until the next invalidation, so
    /// every distinct out-of-range index adds one entry.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NotConfigured`] before the first successful
    /// [`configure`](Self::configure), and [`SamplingError::InvalidRange`]
    /// for a non-finite `t`.
    pub fn retrieve(&mut self, t: f64) -> Result<&T> {
        let fp = self.fingerprint.as_ref().ok_or(SamplingError::NotConfigured)?;
        if !t.is_finite() {
            return Err(SamplingError::InvalidRange(format!("cannot sample at t = {t}")).into());
        }
        let key = fp.range.quantize(t);
        let sampler = &self.sampler;
        Ok(self.samples.entry(key).or_insert_with(|| {
            let value = fp.range.value_at(key);
            trace!(t, sample = value, "sample cache miss, filling on demand");
            sampler(&fp.params, value)
        }))
    }

    /// Returns the cached sample for `t` without filling. A non-finite `t`
    /// has no sample.
    #[must_use]
    pub fn get(&self, t: f64) -> Option<&T> {
        if !t.is_finite() {
            return None;
        }
        let fp = self.fingerprint.as_ref()?;
        self.samples.get(&fp.range.quantize(t))
    }

    /// Iterates `(t, sample)` in ascending `t`.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &T)> + '_ {
        let range = self.fingerprint.as_ref().map(|fp| fp.range);
        self.samples.iter().filter_map(move |(key, value)| {
            range.map(|r| (r.value_at(*key), value))
        })
    }

    /// Discards every sample and the configuration.
    pub fn invalidate(&mut self) {
        self.samples.clear();
        self.fingerprint = None;
    }

    /// The static params of the current configuration.
    #[must_use]
    pub fn params(&self) -> Option<&P> {
        self.fingerprint.as_ref().map(|fp| &fp.params)
    }

    /// The range of the current configuration.
    #[must_use]
    pub fn range(&self) -> Option<SampleRange> {
        self.fingerprint.as_ref().map(|fp| fp.range)
    }

    /// Number of cached samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether no samples are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<P, T, F> std::fmt::Debug for SampleCache<P, T, F>
where
    P: std::fmt::Debug,
    F: Fn(&P, f64) -> T,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleCache")
            .field("fingerprint", &self.fingerprint)
            .field("samples", &self.samples.len())
            .finish_non_exhaustive()
    }
}
