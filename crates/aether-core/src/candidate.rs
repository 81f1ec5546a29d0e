//! The unit of simulation work: one particle's propagation record.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::particle::ParticleState;

/// A tagged value stored in the candidate property bag.
///
/// Modules attach properties as markers or metadata; observers and output
/// modules consume them and remove the specific property they acted on,
/// which is what prevents a record from being emitted twice.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    /// A bare presence marker.
    Flag,
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
}

/// One simulated particle's full propagation record.
///
/// Carries three state snapshots: `source` (frozen at creation),
/// `current` (mutated every step), and `previous` (what `current` was
/// before the most recent advance; boundary crossings are detected from
/// the previous/current pair). Bookkeeping covers trajectory length,
/// redshift, the active flag, a property bag, the step-size negotiation
/// bound, and any secondary candidates spawned by interactions.
#[derive(Clone, Debug)]
pub struct Candidate {
    /// State at creation, frozen once the source finishes preparing.
    pub source: ParticleState,
    /// State before the most recent propagation advance.
    pub previous: ParticleState,
    /// Live state, mutated by modules during propagation.
    pub current: ParticleState,
    redshift: f64,
    trajectory_length: f64,
    current_step: f64,
    next_step: f64,
    active: bool,
    properties: IndexMap<String, Property>,
    secondaries: SmallVec<[Box<Candidate>; 2]>,
}

impl Default for Candidate {
    fn default() -> Self {
        Candidate::new(ParticleState::default())
    }
}

impl Candidate {
    /// Create an active candidate with all three snapshots set to
    /// `state`.
    pub fn new(state: ParticleState) -> Self {
        Candidate {
            source: state.clone(),
            previous: state.clone(),
            current: state,
            redshift: 0.0,
            trajectory_length: 0.0,
            current_step: 0.0,
            next_step: f64::INFINITY,
            active: true,
            properties: IndexMap::new(),
            secondaries: SmallVec::new(),
        }
    }

    /// Whether this candidate is still being propagated.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate or deactivate the candidate. An inactive candidate is
    /// never processed again.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Redshift at the candidate's current position / emission time.
    pub fn redshift(&self) -> f64 {
        self.redshift
    }

    /// Set the redshift.
    pub fn set_redshift(&mut self, z: f64) {
        self.redshift = z;
    }

    /// Total path length propagated so far \[m\].
    pub fn trajectory_length(&self) -> f64 {
        self.trajectory_length
    }

    /// Set the accumulated trajectory length \[m\].
    pub fn set_trajectory_length(&mut self, length: f64) {
        self.trajectory_length = length;
    }

    /// Size of the last completed propagation advance \[m\].
    pub fn current_step(&self) -> f64 {
        self.current_step
    }

    /// Record the size of the advance just performed \[m\].
    pub fn set_current_step(&mut self, step: f64) {
        self.current_step = step;
    }

    /// The negotiated bound on the next propagation advance \[m\].
    pub fn next_step(&self) -> f64 {
        self.next_step
    }

    /// Reset the next-step bound. Only the propagation module calls
    /// this, at the start of a fresh step.
    pub fn set_next_step(&mut self, step: f64) {
        self.next_step = step;
    }

    /// Propose an upper bound on the next advance.
    ///
    /// Keeps the minimum over all proposals made during the current
    /// step, so independent geometric constraints compose without
    /// knowing about each other.
    pub fn limit_next_step(&mut self, step: f64) {
        self.next_step = self.next_step.min(step);
    }

    /// Attach a property, replacing any previous value under `name`.
    pub fn set_property(&mut self, name: &str, value: Property) {
        self.properties.insert(name.to_owned(), value);
    }

    /// Whether a property named `name` is attached.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The property named `name`, if attached.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Detach and return the property named `name`.
    pub fn remove_property(&mut self, name: &str) -> Option<Property> {
        self.properties.shift_remove(name)
    }

    /// Detach all properties.
    pub fn clear_properties(&mut self) {
        self.properties.clear();
    }

    /// Spawn a secondary candidate from an interaction.
    ///
    /// The secondary inherits the current state, trajectory length, and
    /// redshift, keeps this candidate's source snapshot, and gets the
    /// given id and energy.
    pub fn add_secondary(&mut self, id: i32, energy: f64) {
        let mut state = self.current.clone();
        state.set_id(id);
        state.set_energy(energy);
        let mut secondary = Candidate::new(state);
        secondary.source = self.source.clone();
        secondary.redshift = self.redshift;
        secondary.trajectory_length = self.trajectory_length;
        self.secondaries.push(Box::new(secondary));
    }

    /// Secondaries spawned so far.
    pub fn secondaries(&self) -> &[Box<Candidate>] {
        &self.secondaries
    }

    /// Take ownership of the spawned secondaries, leaving none behind.
    pub fn take_secondaries(&mut self) -> SmallVec<[Box<Candidate>; 2]> {
        std::mem::take(&mut self.secondaries)
    }
}
