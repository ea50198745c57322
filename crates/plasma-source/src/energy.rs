// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Neutron Energy and Direction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Isotropic emission direction and Doppler-broadened D-T neutron energy.
//!
//! Thermal spread of the neutron line (Brysk):
//!   σ² = 2·m_n·E₀·kT / (m_n + m_α)
//! which gives σ ≈ 0.075·√T[keV] MeV around E₀ = 14.08 MeV.

use plasma_types::constants::{
    ALPHA_MASS_MEV, DT_NEUTRON_ENERGY_MEV, KEV_TO_MEV, NEUTRON_MASS_MEV,
};
use std::f64::consts::PI;

/// Lower bound on sampled energies [MeV].
const MIN_ENERGY_MEV: f64 = 1e-9;

/// Unit vector from two uniform variates: μ = 2u − 1, ψ = 2πv.
pub fn isotropic_direction(u_mu: f64, u_psi: f64) -> [f64; 3] {
    let mu = (2.0 * u_mu - 1.0).clamp(-1.0, 1.0);
    let psi = 2.0 * PI * u_psi;
    let sin_polar = (1.0 - mu * mu).max(0.0).sqrt();
    [sin_polar * psi.cos(), sin_polar * psi.sin(), mu]
}

/// Standard normal deviate (Box-Muller, cosine branch).
///
/// Uses `1 − u_r` so that u_r = 0 stays finite.
pub fn box_muller(u_r: f64, u_phase: f64) -> f64 {
    let radius = (-2.0 * (1.0 - u_r).max(f64::MIN_POSITIVE).ln()).sqrt();
    radius * (2.0 * PI * u_phase).cos()
}

/// Standard deviation [MeV] of the D-T neutron line at ion temperature `t_kev`.
pub fn dt_energy_spread_mev(t_kev: f64) -> f64 {
    let kt_mev = t_kev.max(0.0) * KEV_TO_MEV;
    (2.0 * NEUTRON_MASS_MEV * DT_NEUTRON_ENERGY_MEV * kt_mev / (NEUTRON_MASS_MEV + ALPHA_MASS_MEV))
        .sqrt()
}

/// Neutron energy [MeV] drawn at local ion temperature `t_kev`.
pub fn sample_neutron_energy(t_kev: f64, u_r: f64, u_phase: f64) -> f64 {
    let sigma = dt_energy_spread_mev(t_kev);
    (DT_NEUTRON_ENERGY_MEV + sigma * box_muller(u_r, u_phase)).max(MIN_ENERGY_MEV)
}
