// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// 1D radial profiles evaluated on a uniform rho grid.
#[derive(Debug, Clone)]
pub struct RadialProfiles {
    pub rho: Array1<f64>,         // Normalized minor radius [0, 1]
    pub density: Array1<f64>,     // Ion density [m^-3]
    pub temperature: Array1<f64>, // Ion temperature [keV]
    pub emission: Array1<f64>,    // D-T reaction rate density [m^-3 s^-1]
}

impl RadialProfiles {
    /// Allocate `n` zeroed points on `rho = linspace(0, 1, n)`.
    pub fn zeros(n: usize) -> Self {
        RadialProfiles {
            rho: Array1::linspace(0.0, 1.0, n),
            density: Array1::zeros(n),
            temperature: Array1::zeros(n),
            emission: Array1::zeros(n),
        }
    }

    /// Location and value of the emission peak.
    pub fn emission_peak(&self) -> Option<(f64, f64)> {
        self.emission
            .iter()
            .zip(self.rho.iter())
            .fold(None, |best, (&e, &r)| match best {
                Some((_, be)) if be >= e => best,
                _ => Some((r, e)),
            })
    }
}

/// Single sampled neutron birth event in machine coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionEvent {
    /// Cartesian position [m]; z along the machine axis.
    pub position: [f64; 3],
    /// Unit direction vector.
    pub direction: [f64; 3],
    /// Kinetic energy [MeV].
    pub energy_mev: f64,
    /// Normalized minor radius of the birth flux surface.
    pub rho: f64,
}

impl EmissionEvent {
    /// Distance from the machine's central axis [m].
    pub fn major_radius_m(&self) -> f64 {
        self.position[0].hypot(self.position[1])
    }

    /// Toroidal angle in [0, 2π).
    pub fn toroidal_angle(&self) -> f64 {
        self.position[1]
            .atan2(self.position[0])
            .rem_euclid(2.0 * std::f64::consts::PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_zeros_grid() {
        let p = RadialProfiles::zeros(11);
        assert_eq!(p.rho.len(), 11);
        assert!((p.rho[0] - 0.0).abs() < 1e-15);
        assert!((p.rho[10] - 1.0).abs() < 1e-15);
        assert!((p.rho[5] - 0.5).abs() < 1e-12);
        assert_eq!(p.emission.iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_emission_peak_location() {
        let mut p = RadialProfiles::zeros(5);
        p.emission[0] = 1.0;
        p.emission[2] = 3.0;
        p.emission[4] = 2.0;
        let (rho, value) = p.emission_peak().unwrap();
        assert!((rho - 0.5).abs() < 1e-12);
        assert!((value - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_event_cylindrical_helpers() {
        let event = EmissionEvent {
            position: [0.0, -2.0, 1.0],
            direction: [0.0, 0.0, 1.0],
            energy_mev: 14.08,
            rho: 0.3,
        };
        assert!((event.major_radius_m() - 2.0).abs() < 1e-12);
        let expected = 1.5 * std::f64::consts::PI;
        assert!((event.toroidal_angle() - expected).abs() < 1e-12);
    }
}
