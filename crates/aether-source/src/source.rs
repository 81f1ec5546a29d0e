//! The [`SourceFeature`] trait, [`Source`], and [`SourceList`].

use std::error::Error;
use std::fmt;

use aether_core::{Candidate, ParticleState, Rng, SamplerError, WeightedSampler};

/// Errors from source construction and candidate emission.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    /// A feature that derives a quantity from the position was
    /// registered before any feature that sets one.
    PositionOrdering {
        /// Name of the offending feature.
        feature: String,
    },
    /// A parameter range is empty or inverted.
    InvalidRange {
        /// Description of the offending parameter.
        what: String,
    },
    /// A weighted choice was misconfigured.
    Sampler(SamplerError),
    /// A [`SourceList`] with no sub-sources was asked for a candidate.
    EmptyList,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOrdering { feature } => write!(
                f,
                "feature '{feature}' needs a position and must be added after a position feature"
            ),
            Self::InvalidRange { what } => write!(f, "invalid range: {what}"),
            Self::Sampler(e) => write!(f, "sampler: {e}"),
            Self::EmptyList => write!(f, "source list holds no sources"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sampler(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SamplerError> for SourceError {
    fn from(e: SamplerError) -> Self {
        SourceError::Sampler(e)
    }
}

/// One independent aspect of candidate preparation.
///
/// Features run in registration order, first the particle hook against
/// the candidate's current state, then the candidate hook against the
/// whole candidate (for aspects that depend on the fully prepared state,
/// such as redshift from position). A feature implements whichever hook
/// it needs; both default to doing nothing.
///
/// # Object safety
///
/// This trait is object-safe; sources store features as
/// `Vec<Box<dyn SourceFeature>>`.
pub trait SourceFeature: Send + Sync {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Prepare one aspect of the new particle's state.
    fn prepare_particle(&self, _state: &mut ParticleState, _rng: &mut Rng) {}

    /// Prepare one aspect of the candidate's bookkeeping.
    ///
    /// Runs after every feature's particle hook, so the particle state
    /// is complete by the time this is called.
    fn prepare_candidate(&self, _candidate: &mut Candidate, _rng: &mut Rng) {}

    /// Whether this feature assigns the particle position.
    fn provides_position(&self) -> bool {
        false
    }

    /// Whether this feature reads the particle position.
    ///
    /// [`Source::add`] rejects a feature that requires a position before
    /// any feature provides one.
    fn requires_position(&self) -> bool {
        false
    }
}

/// Anything that can emit fully prepared candidates.
///
/// Implemented by [`Source`] and [`SourceList`]; the driver only sees
/// this trait.
pub trait Emitter: Send + Sync {
    /// Produce one new candidate.
    ///
    /// # Errors
    ///
    /// Configuration errors detectable only at first use, e.g. an empty
    /// [`SourceList`].
    fn candidate(&self, rng: &mut Rng) -> Result<Candidate, SourceError>;
}

/// An ordered chain of source features.
#[derive(Default)]
pub struct Source {
    features: Vec<Box<dyn SourceFeature>>,
    has_position: bool,
}

impl Source {
    /// Create a source with no features.
    ///
    /// A bare source emits default candidates: id 0, zero energy, at
    /// the origin, heading in `-x`.
    pub fn new() -> Self {
        Source::default()
    }

    /// Append a feature to the chain.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::PositionOrdering`] if `feature` requires a
    /// position and no previously added feature provides one.
    pub fn add(&mut self, feature: Box<dyn SourceFeature>) -> Result<(), SourceError> {
        if feature.requires_position() && !self.has_position {
            return Err(SourceError::PositionOrdering {
                feature: feature.name().to_owned(),
            });
        }
        if feature.provides_position() {
            self.has_position = true;
        }
        self.features.push(feature);
        Ok(())
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no features are registered.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Emitter for Source {
    fn candidate(&self, rng: &mut Rng) -> Result<Candidate, SourceError> {
        let mut candidate = Candidate::default();
        for feature in &self.features {
            feature.prepare_particle(&mut candidate.current, rng);
        }
        for feature in &self.features {
            feature.prepare_candidate(&mut candidate, rng);
        }
        // Freeze the prepared state as the immutable source snapshot.
        candidate.source = candidate.current.clone();
        candidate.previous = candidate.current.clone();
        Ok(candidate)
    }
}

/// A weighted collection of sub-sources, itself an [`Emitter`].
///
/// Each emission draws one sub-source with probability proportional to
/// its weight and delegates to it. Since a `SourceList` can hold other
/// `SourceList`s, compositions nest to any depth.
#[derive(Default)]
pub struct SourceList {
    sources: WeightedSampler<Box<dyn Emitter>>,
}

impl SourceList {
    /// Create an empty list.
    pub fn new() -> Self {
        SourceList::default()
    }

    /// Append a sub-source with a relative weight.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Sampler`] for a zero, negative, or
    /// non-finite weight.
    pub fn add(&mut self, source: Box<dyn Emitter>, weight: f64) -> Result<(), SourceError> {
        self.sources.add(source, weight)?;
        Ok(())
    }

    /// Number of sub-sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no sub-sources are registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Emitter for SourceList {
    fn candidate(&self, rng: &mut Rng) -> Result<Candidate, SourceError> {
        let u = rng.uniform();
        match self.sources.sample(u) {
            Some(source) => source.candidate(rng),
            None => Err(SourceError::EmptyList),
        }
    }
}
