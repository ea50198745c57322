// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytic ion density and temperature profiles.
//!
//! H-mode (two regions, ρ_ped = pedestal_radius / minor_radius):
//!   core      f(ρ) = f_ped + (f_0 − f_ped)·(1 − (ρ/ρ_ped)^k)^α
//!   pedestal  f(ρ) = f_sep + (f_ped − f_sep)·(1 − ρ)/(1 − ρ_ped)
//! with k = 2 for density and k = β for temperature.
//!
//! L-mode (single region):
//!   f(ρ) = f_sep + (f_0 − f_sep)·(1 − ρ²)^α
//!
//! Degenerate pedestal locations in H-mode:
//! - ρ_ped = 0: the core is empty and f(0) = f_ped.
//! - ρ_ped = 1: the pedestal region is empty, so the core formula holds up to
//!   the edge and f(1) = f_ped. The separatrix value is never reached.

use plasma_types::config::{DensityProfile, PlasmaConfig, PlasmaMode, TemperatureProfile};

/// Core shape exponent for the density profile.
const DENSITY_CORE_EXPONENT: f64 = 2.0;

/// Shape parameters of one profile quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Shape {
    origin: f64,
    pedestal: f64,
    separatrix: f64,
    peaking: f64,
    core_exponent: f64,
}

impl Shape {
    fn eval(&self, mode: PlasmaMode, rho: f64, rho_ped: f64) -> f64 {
        let rho = rho.clamp(0.0, 1.0);
        match mode {
            PlasmaMode::LMode => {
                let core = (1.0 - rho * rho).max(0.0);
                self.separatrix + (self.origin - self.separatrix) * core.powf(self.peaking)
            }
            PlasmaMode::HMode => {
                if rho <= rho_ped {
                    if rho_ped <= 0.0 {
                        return self.pedestal;
                    }
                    let x = (rho / rho_ped).powf(self.core_exponent);
                    let core = (1.0 - x).max(0.0);
                    self.pedestal + (self.origin - self.pedestal) * core.powf(self.peaking)
                } else {
                    // rho_ped < rho <= 1, so the width is strictly positive
                    let width = 1.0 - rho_ped;
                    self.separatrix + (self.pedestal - self.separatrix) * (1.0 - rho) / width
                }
            }
        }
    }
}

/// Ion density / temperature as functions of normalized minor radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileModel {
    pub mode: PlasmaMode,
    /// Pedestal location in normalized minor radius.
    pub rho_pedestal: f64,
    density: Shape,
    temperature: Shape,
}

impl ProfileModel {
    pub fn new(
        mode: PlasmaMode,
        rho_pedestal: f64,
        density: &DensityProfile,
        temperature: &TemperatureProfile,
    ) -> Self {
        ProfileModel {
            mode,
            rho_pedestal: rho_pedestal.clamp(0.0, 1.0),
            density: Shape {
                origin: density.origin,
                pedestal: density.pedestal,
                separatrix: density.separatrix,
                peaking: density.peaking_factor,
                core_exponent: DENSITY_CORE_EXPONENT,
            },
            temperature: Shape {
                origin: temperature.origin,
                pedestal: temperature.pedestal,
                separatrix: temperature.separatrix,
                peaking: temperature.peaking_factor,
                core_exponent: temperature.beta,
            },
        }
    }

    pub fn from_config(config: &PlasmaConfig) -> Self {
        Self::new(
            config.mode,
            config.geometry.rho_pedestal(),
            &config.density,
            &config.temperature,
        )
    }

    /// Ion density [m^-3] at normalized radius `rho` (clamped to [0, 1]).
    pub fn density(&self, rho: f64) -> f64 {
        self.density.eval(self.mode, rho, self.rho_pedestal)
    }

    /// Ion temperature [keV] at normalized radius `rho` (clamped to [0, 1]).
    pub fn temperature(&self, rho: f64) -> f64 {
        self.temperature.eval(self.mode, rho, self.rho_pedestal)
    }
}
