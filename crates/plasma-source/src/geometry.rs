// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Flux-Surface Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shaped flux-surface mapping (ρ, θ, φ) → (x, y, z).
//!
//!   R = R0 + Δ·(1 − ρ²) + a·ρ·cos(θ + δ·sin θ)
//!   Z = κ·a·ρ·sin θ
//!   x = R cos φ,  y = R sin φ,  z = Z

use plasma_types::config::{PlasmaConfig, PlasmaGeometry, ToroidalRange};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxSurfaceGeometry {
    pub minor_radius: f64,
    pub major_radius: f64,
    pub elongation: f64,
    pub triangularity: f64,
    pub shafranov_shift: f64,
    /// Start of the toroidal sector [rad].
    pub phi_min: f64,
    /// Width of the toroidal sector [rad].
    pub phi_span: f64,
}

impl FluxSurfaceGeometry {
    pub fn new(geometry: &PlasmaGeometry, range: &ToroidalRange) -> Self {
        FluxSurfaceGeometry {
            minor_radius: geometry.minor_radius,
            major_radius: geometry.major_radius,
            elongation: geometry.elongation,
            triangularity: geometry.triangularity,
            shafranov_shift: geometry.shafranov_shift,
            phi_min: range.min_rad(),
            phi_span: range.span_rad(),
        }
    }

    pub fn from_config(config: &PlasmaConfig) -> Self {
        Self::new(&config.geometry, &config.toroidal_range)
    }

    /// Poloidal-plane point (R, Z) [m] on surface `rho` at poloidal angle `theta`.
    pub fn poloidal_point(&self, rho: f64, theta: f64) -> (f64, f64) {
        let r_minor = self.minor_radius * rho;
        let shift = self.shafranov_shift * (1.0 - rho * rho);
        let r = self.major_radius + shift + r_minor * (theta + self.triangularity * theta.sin()).cos();
        let z = self.elongation * r_minor * theta.sin();
        (r, z)
    }

    /// Toroidal angle [rad] for a uniform variate in [0, 1).
    pub fn toroidal_angle(&self, u: f64) -> f64 {
        self.phi_min + self.phi_span * u
    }

    /// Cartesian position [m] from `rho` and two uniform variates.
    pub fn position(&self, rho: f64, u_theta: f64, u_phi: f64) -> [f64; 3] {
        let theta = 2.0 * PI * u_theta;
        let phi = self.toroidal_angle(u_phi);
        let (r, z) = self.poloidal_point(rho, theta);
        [r * phi.cos(), r * phi.sin(), z]
    }
}
