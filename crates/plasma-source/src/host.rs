// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Transport Host Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversion of source events to a Monte Carlo transport code's particle
//! bank record: centimetres, electron-volts and the reduced 2-D bases.

use plasma_types::config::Basis;
use plasma_types::constants::{MEV_TO_EV, M_TO_CM};
use plasma_types::state::EmissionEvent;

/// Particle species tag understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Neutron,
}

/// Source-bank record in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostParticle {
    pub kind: ParticleKind,
    pub weight: f64,
    /// Position [cm], projected to the requested basis.
    pub position_cm: [f64; 3],
    pub direction: [f64; 3],
    /// Energy [eV].
    pub energy_ev: f64,
    /// Prompt emission.
    pub delayed_group: i32,
}

/// Project a Cartesian point onto `basis`.
///
/// Ry → (R, Z, 0), Rz → (R, 0, Z) with R = √(x² + y²).
pub fn project(position: [f64; 3], basis: Basis) -> [f64; 3] {
    let [x, y, z] = position;
    match basis {
        Basis::Xyz => position,
        Basis::Ry => [x.hypot(y), z, 0.0],
        Basis::Rz => [x.hypot(y), 0.0, z],
    }
}

/// Convert a sampled event into a host record.
pub fn to_host(event: &EmissionEvent, basis: Basis) -> HostParticle {
    let scaled = event.position.map(|c| c * M_TO_CM);
    HostParticle {
        kind: ParticleKind::Neutron,
        weight: 1.0,
        position_cm: project(scaled, basis),
        direction: event.direction,
        energy_ev: event.energy_mev * MEV_TO_EV,
        delayed_group: 0,
    }
}
