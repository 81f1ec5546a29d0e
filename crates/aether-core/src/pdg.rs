//! PDG Monte Carlo particle numbering helpers.
//!
//! Charge and rest mass are pure functions of the PDG id; they are never
//! stored alongside it. Only the species the electromagnetic-cascade
//! pipeline produces are covered: photons, leptons, and protons. Unknown
//! ids are treated as neutral and massless.

use crate::units::{EPLUS, MASS_ELECTRON, MASS_MUON, MASS_PROTON, MASS_TAU};

/// Electron (PDG 11). The antiparticle is the negated id.
pub const ELECTRON: i32 = 11;
/// Electron neutrino (PDG 12).
pub const NU_E: i32 = 12;
/// Muon (PDG 13).
pub const MUON: i32 = 13;
/// Muon neutrino (PDG 14).
pub const NU_MU: i32 = 14;
/// Tau (PDG 15).
pub const TAU: i32 = 15;
/// Tau neutrino (PDG 16).
pub const NU_TAU: i32 = 16;
/// Photon (PDG 22).
pub const PHOTON: i32 = 22;
/// Proton (PDG 2212).
pub const PROTON: i32 = 2212;

/// Electric charge of a particle \[C\].
///
/// Positive PDG lepton ids denote the negatively charged particle
/// (PDG 11 is the electron), so the sign flips relative to the id.
pub fn charge_of(id: i32) -> f64 {
    let sign = if id > 0 { 1.0 } else { -1.0 };
    match id.abs() {
        ELECTRON | MUON | TAU => -sign * EPLUS,
        PROTON => sign * EPLUS,
        _ => 0.0,
    }
}

/// Rest mass of a particle \[kg\]. Zero for photons, neutrinos, and
/// unknown ids.
pub fn mass_of(id: i32) -> f64 {
    match id.abs() {
        ELECTRON => MASS_ELECTRON,
        MUON => MASS_MUON,
        TAU => MASS_TAU,
        PROTON => MASS_PROTON,
        _ => 0.0,
    }
}

/// Whether the id denotes a neutrino of any flavor.
pub fn is_neutrino(id: i32) -> bool {
    matches!(id.abs(), NU_E | NU_MU | NU_TAU)
}

/// Whether the id denotes a charged lepton of any flavor.
pub fn is_charged_lepton(id: i32) -> bool {
    matches!(id.abs(), ELECTRON | MUON | TAU)
}

/// Whether the id denotes a photon.
pub fn is_photon(id: i32) -> bool {
    id == PHOTON
}
