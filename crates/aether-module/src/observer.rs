//! Observers and their composable detection features.
//!
//! An [`Observer`] runs every registered [`ObserverFeature`] once per
//! pass and combines the per-feature verdicts with veto precedence:
//! a single [`DetectionState::Veto`] suppresses any
//! [`DetectionState::Detected`] from the same pass. Only a combined
//! detection triggers the on-detection hooks, sets the configured flag
//! property, and (if configured) deactivates the candidate. A veto alone
//! never deactivates; it exists to filter which crossings count as
//! detections.
//!
//! The geometric features double as step limiters: while the candidate
//! is outside their boundary they bound the next advance by the
//! remaining distance, so no crossing is ever stepped over and
//! detection resolves from the previous/current pair straddling the
//! boundary.

use aether_core::{pdg, Candidate, Property, Vector3};

use crate::module::Module;

/// Per-feature detection verdict for one candidate in one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionState {
    /// Nothing to report.
    Nothing,
    /// The feature recognized a detection this pass.
    Detected,
    /// The feature forbids a detection this pass, overriding any
    /// `Detected` from co-registered features.
    Veto,
}

/// One composable aspect of an observer.
///
/// # Object safety
///
/// Object-safe; observers store features as
/// `Vec<Box<dyn ObserverFeature>>`.
pub trait ObserverFeature: Send + Sync {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Check the candidate, possibly tightening its next-step bound.
    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState;

    /// Act on a combined detection. Runs for every feature, in
    /// registration order, whenever the combined verdict is `Detected`.
    fn on_detection(&self, _candidate: &mut Candidate) {}
}

/// A module combining observer features with veto precedence.
pub struct Observer {
    features: Vec<Box<dyn ObserverFeature>>,
    flag: Option<String>,
    deactivate_on_detection: bool,
}

impl Observer {
    /// Create an observer with no features.
    ///
    /// `deactivate_on_detection` controls whether a detected candidate
    /// is retired from the simulation. Detections mark the candidate
    /// with a `"Detected"` flag property unless reconfigured via
    /// [`with_flag`](Observer::with_flag).
    pub fn new(deactivate_on_detection: bool) -> Self {
        Observer {
            features: Vec::new(),
            flag: Some("Detected".to_owned()),
            deactivate_on_detection,
        }
    }

    /// Append a feature to the chain.
    pub fn add(&mut self, feature: Box<dyn ObserverFeature>) -> &mut Self {
        self.features.push(feature);
        self
    }

    /// Set the property name marked on detection, or `None` to mark
    /// nothing.
    pub fn with_flag(mut self, flag: Option<String>) -> Self {
        self.flag = flag;
        self
    }
}

impl Module for Observer {
    fn name(&self) -> &str {
        "Observer"
    }

    fn process(&self, candidate: &mut Candidate) {
        let mut combined = DetectionState::Nothing;
        for feature in &self.features {
            match feature.check_detection(candidate) {
                DetectionState::Veto => combined = DetectionState::Veto,
                DetectionState::Detected if combined != DetectionState::Veto => {
                    combined = DetectionState::Detected;
                }
                _ => {}
            }
        }

        if combined != DetectionState::Detected {
            return;
        }

        for feature in &self.features {
            feature.on_detection(candidate);
        }
        if let Some(flag) = &self.flag {
            candidate.set_property(flag, Property::Flag);
        }
        if self.deactivate_on_detection {
            candidate.set_active(false);
        }
    }
}

/// Detects candidates entering a sphere (inner boundary).
#[derive(Clone, Copy, Debug)]
pub struct ObserverSmallSphere {
    center: Vector3,
    radius: f64,
}

impl ObserverSmallSphere {
    /// Detect entry into the sphere of `radius` around `center`.
    pub fn new(center: Vector3, radius: f64) -> Self {
        ObserverSmallSphere { center, radius }
    }
}

impl ObserverFeature for ObserverSmallSphere {
    fn name(&self) -> &str {
        "ObserverSmallSphere"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        let d = (candidate.current.position() - self.center).norm();

        // Conservatively limit the next step to prevent overshooting.
        candidate.limit_next_step((d - self.radius).abs());

        // No detection while outside the sphere.
        if d > self.radius {
            return DetectionState::Nothing;
        }

        // Already inside on the previous step: detected back then.
        let d_prev = (candidate.previous.position() - self.center).norm();
        if d_prev <= self.radius {
            return DetectionState::Nothing;
        }

        DetectionState::Detected
    }
}

/// Detects candidates exiting a sphere (outer boundary).
#[derive(Clone, Copy, Debug)]
pub struct ObserverLargeSphere {
    center: Vector3,
    radius: f64,
}

impl ObserverLargeSphere {
    /// Detect exit from the sphere of `radius` around `center`.
    pub fn new(center: Vector3, radius: f64) -> Self {
        ObserverLargeSphere { center, radius }
    }
}

impl ObserverFeature for ObserverLargeSphere {
    fn name(&self) -> &str {
        "ObserverLargeSphere"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        let d = (candidate.current.position() - self.center).norm();

        candidate.limit_next_step((self.radius - d).abs());

        // No detection while inside the sphere.
        if d < self.radius {
            return DetectionState::Nothing;
        }

        // Already outside on the previous step: detected back then.
        let d_prev = (candidate.previous.position() - self.center).norm();
        if d_prev >= self.radius {
            return DetectionState::Nothing;
        }

        DetectionState::Detected
    }
}

/// Detects candidates reaching the observer at `x = 0` (1-D).
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserverPoint;

impl ObserverPoint {
    /// Detect the crossing of `x = 0`.
    pub fn new() -> Self {
        ObserverPoint
    }
}

impl ObserverFeature for ObserverPoint {
    fn name(&self) -> &str {
        "ObserverPoint"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        let x = candidate.current.position().x;
        if x > 0.0 {
            candidate.limit_next_step(x);
            return DetectionState::Nothing;
        }
        DetectionState::Detected
    }
}

/// Vetoes candidates whose redshift lies outside a window.
///
/// A pure filter: it never detects, it only suppresses detections by
/// co-registered features.
#[derive(Clone, Copy, Debug)]
pub struct ObserverRedshiftWindow {
    zmin: f64,
    zmax: f64,
}

impl ObserverRedshiftWindow {
    /// Accept redshifts in `[zmin, zmax]`.
    pub fn new(zmin: f64, zmax: f64) -> Self {
        ObserverRedshiftWindow { zmin, zmax }
    }
}

impl ObserverFeature for ObserverRedshiftWindow {
    fn name(&self) -> &str {
        "ObserverRedshiftWindow"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        let z = candidate.redshift();
        if z < self.zmin || z > self.zmax {
            return DetectionState::Veto;
        }
        DetectionState::Nothing
    }
}

/// Vetoes everything but neutrinos.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserverNeutrinoVeto;

impl ObserverFeature for ObserverNeutrinoVeto {
    fn name(&self) -> &str {
        "ObserverNeutrinoVeto"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        if pdg::is_neutrino(candidate.current.id()) {
            return DetectionState::Nothing;
        }
        DetectionState::Veto
    }
}

/// Vetoes everything but charged leptons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserverChargedLeptonVeto;

impl ObserverFeature for ObserverChargedLeptonVeto {
    fn name(&self) -> &str {
        "ObserverChargedLeptonVeto"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        if pdg::is_charged_lepton(candidate.current.id()) {
            return DetectionState::Nothing;
        }
        DetectionState::Veto
    }
}

/// Vetoes everything but photons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObserverPhotonVeto;

impl ObserverFeature for ObserverPhotonVeto {
    fn name(&self) -> &str {
        "ObserverPhotonVeto"
    }

    fn check_detection(&self, candidate: &mut Candidate) -> DetectionState {
        if pdg::is_photon(candidate.current.id()) {
            return DetectionState::Nothing;
        }
        DetectionState::Veto
    }
}
