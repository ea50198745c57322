// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — D-T Reactivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! D-T fusion reactivity ⟨σv⟩(T) and local neutron emission rate density.

use crate::profiles::ProfileModel;
use plasma_types::config::{PlasmaConfig, ReactivityModel};

/// Bosch-Hale Gamow constant B_G [keV^1/2].
const BH_GAMOW: f64 = 34.3827;

/// Bosch-Hale reduced mass energy m_r c² [keV].
const BH_MRC2: f64 = 1_124_656.0;

/// Bosch-Hale D-T fit coefficients C1..C7.
const BH_C: [f64; 7] = [
    1.17302e-9,
    1.51361e-2,
    7.51886e-2,
    4.60643e-3,
    1.35e-2,
    -1.0675e-4,
    1.366e-5,
];

/// Upper validity bound of the Bosch-Hale fit [keV].
pub const BOSCH_HALE_T_MAX_KEV: f64 = 100.0;

/// Temperature where the NRL fit peaks, (19.94/2)³ [keV].
pub const NRL_T_PEAK_KEV: f64 = 991.0;

/// NRL Plasma Formulary D-T reactivity ⟨σv⟩ in m³/s.
///
///   σv = 3.68e-18 / T^(2/3) × exp(-19.94 / T^(1/3))
///
/// Strictly increasing below ~990 keV; zero for T ≤ 0.
pub fn nrl_dt(t_kev: f64) -> f64 {
    if t_kev <= 0.0 || !t_kev.is_finite() {
        return 0.0;
    }
    3.68e-18 / t_kev.powf(2.0 / 3.0) * (-19.94 / t_kev.cbrt()).exp()
}

/// Bosch-Hale (NF 32, 1992) D-T reactivity ⟨σv⟩ in m³/s; zero for T ≤ 0.
pub fn bosch_hale_dt(t_kev: f64) -> f64 {
    if t_kev <= 0.0 || !t_kev.is_finite() {
        return 0.0;
    }
    let t = t_kev;
    let [c1, c2, c3, c4, c5, c6, c7] = BH_C;
    let theta = t / (1.0 - t * (c2 + t * (c4 + t * c6)) / (1.0 + t * (c3 + t * (c5 + t * c7))));
    let xi = (BH_GAMOW * BH_GAMOW / (4.0 * theta)).cbrt();
    let sigma_v_cm3 = c1 * theta * (xi / (BH_MRC2 * t * t * t)).sqrt() * (-3.0 * xi).exp();
    sigma_v_cm3 * 1e-6
}

/// Evaluate the selected parametrization.
pub fn dt_reactivity(model: ReactivityModel, t_kev: f64) -> f64 {
    match model {
        ReactivityModel::NrlFormulary => nrl_dt(t_kev),
        ReactivityModel::BoschHale => bosch_hale_dt(t_kev),
    }
}

/// Local D-T reaction (= neutron birth) rate density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactivityTable {
    pub profiles: ProfileModel,
    pub model: ReactivityModel,
}

impl ReactivityTable {
    pub fn new(profiles: ProfileModel, model: ReactivityModel) -> Self {
        ReactivityTable { profiles, model }
    }

    pub fn from_config(config: &PlasmaConfig) -> Self {
        Self::new(ProfileModel::from_config(config), config.reactivity)
    }

    /// Reactions per m³ per second at `rho`, assuming a 50/50 D-T mix:
    /// n_D·n_T·⟨σv⟩ = n²/4·⟨σv⟩.
    pub fn emission_rate_density(&self, rho: f64) -> f64 {
        let n = self.profiles.density(rho);
        let t_kev = self.profiles.temperature(rho);
        0.25 * n * n * dt_reactivity(self.model, t_kev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_temperature_zero_rate() {
        assert_eq!(nrl_dt(0.0), 0.0);
        assert_eq!(bosch_hale_dt(0.0), 0.0);
        assert_eq!(nrl_dt(-3.0), 0.0);
        assert_eq!(bosch_hale_dt(f64::NAN), 0.0);
    }

    #[test]
    fn test_nrl_20kev_magnitude() {
        let rate = nrl_dt(20.0);
        assert!(
            rate > 1e-22 && rate < 1e-21,
            "Rate at 20keV: {rate}, expected O(1e-22)"
        );
    }

    #[test]
    fn test_bosch_hale_reference_values() {
        // Bosch & Hale 1992, Table VIII: 10 keV → 1.136e-16 cm³/s, 20 keV → 4.330e-16 cm³/s
        let r10 = bosch_hale_dt(10.0);
        let r20 = bosch_hale_dt(20.0);
        assert!((r10 / 1.136e-22 - 1.0).abs() < 0.01, "10 keV: {r10}");
        assert!((r20 / 4.330e-22 - 1.0).abs() < 0.01, "20 keV: {r20}");
    }

    #[test]
    fn test_nrl_monotonic_rise() {
        let mut prev = nrl_dt(0.1);
        let mut t = 0.1;
        while t < 100.0 {
            t *= 1.1;
            let rate = nrl_dt(t);
            assert!(rate > prev, "Rate should increase: T={t}, rate={rate}, prev={prev}");
            prev = rate;
        }
    }

    #[test]
    fn test_bosch_hale_monotonic_below_peak() {
        let mut prev = bosch_hale_dt(0.2);
        for t in [1.0, 5.0, 10.0, 20.0, 40.0, 60.0] {
            let rate = bosch_hale_dt(t);
            assert!(rate > prev, "T={t}: {rate} <= {prev}");
            prev = rate;
        }
    }

    #[test]
    fn test_emission_rate_density_scales_with_density_squared() {
        let mut cfg = PlasmaConfig::default();
        let base = ReactivityTable::from_config(&cfg).emission_rate_density(0.3);
        cfg.density.origin *= 2.0;
        cfg.density.pedestal *= 2.0;
        cfg.density.separatrix *= 2.0;
        let doubled = ReactivityTable::from_config(&cfg).emission_rate_density(0.3);
        assert!((doubled / base - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_emission_peaks_on_axis_for_default() {
        let table = ReactivityTable::from_config(&PlasmaConfig::default());
        assert!(table.emission_rate_density(0.0) > table.emission_rate_density(0.5));
        assert!(table.emission_rate_density(0.5) > table.emission_rate_density(0.95));
        assert!(table.emission_rate_density(1.0) >= 0.0);
    }
}
