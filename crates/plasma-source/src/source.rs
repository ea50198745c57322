// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Parametric Plasma Source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parametric D-T neutron source for a shaped tokamak plasma.
//!
//! One call consumes a fixed batch of [`VARIATES_PER_SAMPLE`] uniform
//! variates in [0, 1):
//!
//! | index | use                                 |
//! |-------|-------------------------------------|
//! | 0     | radial bin (inverse CDF)            |
//! | 1     | radius inside the bin               |
//! | 2     | poloidal angle θ                    |
//! | 3     | toroidal angle φ                    |
//! | 4     | direction, cosine of polar angle    |
//! | 5     | direction, azimuth                  |
//! | 6, 7  | energy, Box-Muller pair             |

use crate::energy::{isotropic_direction, sample_neutron_energy};
use crate::geometry::FluxSurfaceGeometry;
use crate::host::{to_host, HostParticle};
use crate::radial::EmissionWeightTable;
use crate::reactivity::{ReactivityTable, BOSCH_HALE_T_MAX_KEV, NRL_T_PEAK_KEV};
use plasma_types::config::{PlasmaConfig, ReactivityModel};
use plasma_types::constants::{DT_FUSION_ENERGY_MEV, Q_ELECTRON, VARIATES_PER_SAMPLE};
use plasma_types::error::{PlasmaSourceError, SourceResult};
use plasma_types::state::{EmissionEvent, RadialProfiles};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::f64::consts::PI;

/// Fixed-size batch of uniform variates for one sample.
pub type Variates = [f64; VARIATES_PER_SAMPLE];

/// Configured neutron source. Immutable after construction, `Send + Sync`.
#[derive(Debug, Clone)]
pub struct PlasmaSource {
    config: PlasmaConfig,
    emission: ReactivityTable,
    geometry: FluxSurfaceGeometry,
    table: EmissionWeightTable,
}

impl PlasmaSource {
    /// Validate `config` and build the emission table.
    pub fn new(config: PlasmaConfig) -> SourceResult<Self> {
        config.validate()?;

        let emission = ReactivityTable::from_config(&config);
        let geometry = FluxSurfaceGeometry::from_config(&config);
        warn_outside_fit(&config);

        let table =
            EmissionWeightTable::build(config.bin_count, |rho| emission.emission_rate_density(rho))?;

        let source = PlasmaSource {
            config,
            emission,
            geometry,
            table,
        };
        log::info!(
            "plasma source '{}' ready: mode={:?}, bins={}, basis={}, rate={:.3e} n/s",
            source.config.name,
            source.config.mode,
            source.config.bin_count,
            source.config.basis,
            source.neutron_rate()
        );
        log::debug!(
            "emission integral={:.4e}, peak bin weight={:.4e}",
            source.table.integral(),
            source.table.weights().fold(0.0_f64, |a, &b| a.max(b))
        );
        Ok(source)
    }

    /// Load a JSON configuration file and build the source.
    pub fn from_file(path: &str) -> SourceResult<Self> {
        Self::new(PlasmaConfig::from_file(path)?)
    }

    pub fn config(&self) -> &PlasmaConfig {
        &self.config
    }

    pub fn emission(&self) -> &ReactivityTable {
        &self.emission
    }

    pub fn geometry(&self) -> &FluxSurfaceGeometry {
        &self.geometry
    }

    pub fn table(&self) -> &EmissionWeightTable {
        &self.table
    }

    /// Sample one neutron birth event.
    pub fn sample(&self, variates: &Variates) -> EmissionEvent {
        let (_, rho) = self.table.sample(variates[0], variates[1]);
        let position = self.geometry.position(rho, variates[2], variates[3]);
        let direction = isotropic_direction(variates[4], variates[5]);
        let t_kev = self.emission.profiles.temperature(rho);
        let energy_mev = sample_neutron_energy(t_kev, variates[6], variates[7]);
        EmissionEvent {
            position,
            direction,
            energy_mev,
            rho,
        }
    }

    /// Sample from the first [`VARIATES_PER_SAMPLE`] values of a slice.
    pub fn sample_slice(&self, variates: &[f64]) -> SourceResult<EmissionEvent> {
        let batch: &Variates = variates
            .get(..VARIATES_PER_SAMPLE)
            .and_then(|head| head.try_into().ok())
            .ok_or(PlasmaSourceError::InsufficientVariates {
                required: VARIATES_PER_SAMPLE,
                supplied: variates.len(),
            })?;
        Ok(self.sample(batch))
    }

    /// Fill a batch from `rng` and sample.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> EmissionEvent {
        let mut variates = [0.0; VARIATES_PER_SAMPLE];
        for v in variates.iter_mut() {
            *v = rng.gen();
        }
        self.sample(&variates)
    }

    /// [`sample_slice`](Self::sample_slice), converted to the host record in
    /// the configured basis.
    pub fn sample_host(&self, variates: &[f64]) -> SourceResult<HostParticle> {
        let event = self.sample_slice(variates)?;
        Ok(to_host(&event, self.config.basis))
    }

    /// `n` events in parallel. Event `i` uses its own generator seeded from
    /// `seed + i`, so output does not depend on the thread count.
    pub fn sample_parallel(&self, n: usize, seed: u64) -> Vec<EmissionEvent> {
        (0..n)
            .into_par_iter()
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                self.sample_with_rng(&mut rng)
            })
            .collect()
    }

    /// Total neutron emission rate [n/s].
    ///
    /// dV ≈ 4π²·R0·κ·a²·ρ dρ for an elongated torus.
    pub fn neutron_rate(&self) -> f64 {
        let g = &self.config.geometry;
        let volume_factor =
            4.0 * PI * PI * g.major_radius * g.elongation * g.minor_radius * g.minor_radius;
        volume_factor * self.table.integral()
    }

    /// Total D-T fusion power [MW].
    pub fn fusion_power_mw(&self) -> f64 {
        let joules_per_reaction = DT_FUSION_ENERGY_MEV * 1e6 * Q_ELECTRON;
        self.neutron_rate() * joules_per_reaction / 1e6
    }

    /// Density, temperature and emission on `n` uniformly spaced rho points.
    pub fn radial_profiles(&self, n: usize) -> SourceResult<RadialProfiles> {
        if n < 2 {
            return Err(PlasmaSourceError::ConfigError(
                "radial profile export needs at least 2 points".to_string(),
            ));
        }
        let mut profiles = RadialProfiles::zeros(n);
        let model = &self.emission.profiles;
        for i in 0..n {
            let rho = profiles.rho[i];
            profiles.density[i] = model.density(rho);
            profiles.temperature[i] = model.temperature(rho);
            profiles.emission[i] = self.emission.emission_rate_density(rho);
        }
        Ok(profiles)
    }
}

fn warn_outside_fit(config: &PlasmaConfig) {
    let t_max = config
        .temperature
        .origin
        .max(config.temperature.pedestal)
        .max(config.temperature.separatrix);
    let limit = match config.reactivity {
        ReactivityModel::NrlFormulary => NRL_T_PEAK_KEV,
        ReactivityModel::BoschHale => BOSCH_HALE_T_MAX_KEV,
    };
    if t_max > limit {
        log::warn!(
            "peak ion temperature {t_max} keV exceeds the {:?} validity limit of {limit} keV",
            config.reactivity
        );
    }
}
