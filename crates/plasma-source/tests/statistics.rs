// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Statistical Tests for plasma-source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Seeded Monte Carlo checks of the sampled distributions.

use plasma_source::energy::sample_neutron_energy;
use plasma_source::PlasmaSource;
use plasma_types::config::{PlasmaConfig, TemperatureProfile};
use plasma_types::constants::DT_NEUTRON_ENERGY_MEV;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

#[test]
fn empirical_rho_matches_emission_weights() {
    let source = PlasmaSource::new(PlasmaConfig::default()).unwrap();
    let table = source.table();
    let coarse = 20;
    let per_coarse = table.bin_count() / coarse;

    let n = 200_000;
    let mut counts = vec![0usize; coarse];
    for event in source.sample_parallel(n, 2024) {
        let k = ((event.rho * coarse as f64) as usize).min(coarse - 1);
        counts[k] += 1;
    }

    for k in 0..coarse {
        let expected: f64 = table
            .weights()
            .iter()
            .skip(k * per_coarse)
            .take(per_coarse)
            .sum();
        let observed = counts[k] as f64 / n as f64;
        assert!(
            (observed - expected).abs() < 0.005,
            "coarse bin {k}: observed {observed}, expected {expected}"
        );
    }
}

#[test]
fn energy_mean_at_fixed_rho() {
    let source = PlasmaSource::new(PlasmaConfig::default()).unwrap();
    let t_kev = source.emission().profiles.temperature(0.3);
    let mut rng = StdRng::seed_from_u64(42);
    let energies: Vec<f64> = (0..100_000)
        .map(|_| sample_neutron_energy(t_kev, rng.gen(), rng.gen()))
        .collect();
    let (mean, _) = mean_std(&energies);
    assert!(energies.iter().all(|&e| e > 0.0));
    assert!(
        (mean - DT_NEUTRON_ENERGY_MEV).abs() / DT_NEUTRON_ENERGY_MEV < 0.01,
        "mean {mean}"
    );
}

#[test]
fn energy_spread_grows_with_ion_temperature() {
    let mut previous = 0.0;
    for scale in [0.25, 1.0, 4.0] {
        let base = PlasmaConfig::default().temperature;
        let cfg = PlasmaConfig {
            temperature: TemperatureProfile {
                pedestal: base.pedestal * scale,
                separatrix: base.separatrix * scale,
                origin: base.origin * scale,
                ..base
            },
            ..PlasmaConfig::default()
        };
        let source = PlasmaSource::new(cfg).unwrap();
        let t_kev = source.emission().profiles.temperature(0.3);

        let mut rng = StdRng::seed_from_u64(17);
        let energies: Vec<f64> = (0..100_000)
            .map(|_| sample_neutron_energy(t_kev, rng.gen(), rng.gen()))
            .collect();
        let (_, std) = mean_std(&energies);
        assert!(std > previous, "scale {scale}: std {std} <= {previous}");
        previous = std;
    }
}

#[test]
fn directions_cover_sphere() {
    let source = PlasmaSource::new(PlasmaConfig::default()).unwrap();
    let events = source.sample_parallel(10_000, 5);
    let upward = events.iter().filter(|e| e.direction[2] > 0.0).count();
    let frac = upward as f64 / events.len() as f64;
    assert!((frac - 0.5).abs() < 0.03, "upward fraction {frac}");
    for e in &events {
        let d = e.direction;
        assert!(((d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt() - 1.0).abs() < 1e-12);
    }
}
