//! Physical units and constants in SI.
//!
//! All internal quantities are SI: meters, seconds, kilograms, Joules,
//! Coulombs. The constants here convert the astroparticle-friendly units
//! (electron volts, megaparsecs) to and from the internal representation.

/// Speed of light \[m/s\].
pub const C_LIGHT: f64 = 2.997_924_58e8;

/// Speed of light squared \[m²/s²\].
pub const C_SQUARED: f64 = C_LIGHT * C_LIGHT;

/// Elementary charge \[C\].
pub const EPLUS: f64 = 1.602_176_487e-19;

/// Electron volt \[J\].
pub const EV: f64 = EPLUS;

/// Kilo-electron volt \[J\].
pub const KEV: f64 = 1e3 * EV;

/// Mega-electron volt \[J\].
pub const MEV: f64 = 1e6 * EV;

/// Giga-electron volt \[J\].
pub const GEV: f64 = 1e9 * EV;

/// Tera-electron volt \[J\].
pub const TEV: f64 = 1e12 * EV;

/// Peta-electron volt \[J\].
pub const PEV: f64 = 1e15 * EV;

/// Exa-electron volt \[J\].
pub const EEV: f64 = 1e18 * EV;

/// Parsec \[m\].
pub const PARSEC: f64 = 3.085_677_580_7e16;

/// Kiloparsec \[m\].
pub const KPC: f64 = 1e3 * PARSEC;

/// Megaparsec \[m\].
pub const MPC: f64 = 1e6 * PARSEC;

/// Electron rest mass \[kg\].
pub const MASS_ELECTRON: f64 = 9.109_382_91e-31;

/// Muon rest mass \[kg\].
pub const MASS_MUON: f64 = 1.883_531_627e-28;

/// Tau rest mass \[kg\].
pub const MASS_TAU: f64 = 3.167_54e-27;

/// Proton rest mass \[kg\].
pub const MASS_PROTON: f64 = 1.672_621_923_69e-27;
