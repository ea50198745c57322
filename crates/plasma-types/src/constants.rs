// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Number of uniform variates consumed by one source sample.
pub const VARIATES_PER_SAMPLE: usize = 8;

/// Mean D-T neutron birth energy [MeV].
pub const DT_NEUTRON_ENERGY_MEV: f64 = 14.08;

/// D-T fusion energy release [MeV].
pub const DT_FUSION_ENERGY_MEV: f64 = 17.6;

/// Neutron rest mass [MeV/c²].
pub const NEUTRON_MASS_MEV: f64 = 939.565_420_52;

/// Alpha particle rest mass [MeV/c²].
pub const ALPHA_MASS_MEV: f64 = 3727.379_409_7;

/// Elementary charge (C), also J per eV.
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Metres to centimetres.
pub const M_TO_CM: f64 = 100.0;

/// MeV to eV.
pub const MEV_TO_EV: f64 = 1.0e6;

/// keV to MeV.
pub const KEV_TO_MEV: f64 = 1.0e-3;
