// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Radial Emission Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reactivity-weighted radial emission distribution.
//!
//! Algorithm:
//! 1. Split ρ ∈ [0, 1] into `bin_count` uniform shells.
//! 2. Bin weight w_i = ∫ S(ρ)·ρ dρ over the shell (Simpson's rule), where
//!    S is the emission rate density and ρ carries the shell volume growth.
//! 3. Normalize into a cumulative distribution with last entry exactly 1.
//! 4. Sample: first bin with cumulative mass > u₀, then ρ uniform in the bin.

use ndarray::Array1;
use plasma_types::error::{PlasmaSourceError, SourceResult};

/// Cumulative emission distribution over normalized minor radius.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct EmissionWeightTable {
    /// Bin edges [bin_count + 1], linspace(0, 1).
    edges: Array1<f64>,
    /// Bin midpoints [bin_count].
    midpoints: Array1<f64>,
    /// Normalized probability mass per bin [bin_count], the steps of `cumulative`.
    weights: Array1<f64>,
    /// Cumulative mass [bin_count]; non-decreasing, last = 1.
    cumulative: Array1<f64>,
    /// Un-normalized ∫₀¹ S(ρ)·ρ dρ.
    integral: f64,
}

impl EmissionWeightTable {
    /// Integrate `rate_density(rho) * rho` over `bin_count` uniform shells.
    pub fn build<F>(bin_count: usize, rate_density: F) -> SourceResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        if bin_count == 0 {
            return Err(PlasmaSourceError::ConfigError(
                "bin_count must be > 0".to_string(),
            ));
        }

        let edges = Array1::linspace(0.0, 1.0, bin_count + 1);
        let integrand = |rho: f64| -> SourceResult<f64> {
            let value = rate_density(rho) * rho;
            if !value.is_finite() || value < 0.0 {
                return Err(PlasmaSourceError::ConfigError(format!(
                    "emission rate density must be finite and >= 0, got {value} at rho={rho}"
                )));
            }
            Ok(value)
        };

        let mut midpoints = Array1::zeros(bin_count);
        let mut raw = Array1::zeros(bin_count);
        let mut f_lo = integrand(edges[0])?;
        for i in 0..bin_count {
            let lo = edges[i];
            let hi = edges[i + 1];
            let mid = 0.5 * (lo + hi);
            let f_mid = integrand(mid)?;
            let f_hi = integrand(hi)?;
            midpoints[i] = mid;
            raw[i] = (hi - lo) * (f_lo + 4.0 * f_mid + f_hi) / 6.0;
            f_lo = f_hi;
        }

        // Prefix sums in one fixed order so every partial sum is <= the total
        let mut prefix = Array1::<f64>::zeros(bin_count);
        let mut running = 0.0_f64;
        for (p, &w) in prefix.iter_mut().zip(raw.iter()) {
            running += w;
            *p = running;
        }
        let integral = running;
        if integral <= 0.0 || !integral.is_finite() {
            return Err(PlasmaSourceError::ConfigError(format!(
                "plasma has no neutron emission (integrated rate {integral})"
            )));
        }

        let mut cumulative = prefix.mapv(|p: f64| (p / integral).min(1.0));
        // Bins past the first c == 1 carry mass below f64 resolution; tie them to 1
        let top = cumulative
            .iter()
            .position(|&c| c >= 1.0)
            .unwrap_or(bin_count - 1);
        for c in cumulative.iter_mut().skip(top) {
            *c = 1.0;
        }

        // Per-bin mass is the CDF step, so a bin has weight > 0 iff find_bin can return it
        let mut weights = Array1::<f64>::zeros(bin_count);
        let mut previous = 0.0;
        for (w, &c) in weights.iter_mut().zip(cumulative.iter()) {
            *w = c - previous;
            previous = c;
        }

        Ok(EmissionWeightTable {
            edges,
            midpoints,
            weights,
            cumulative,
            integral,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.weights.len()
    }

    pub fn edges(&self) -> &Array1<f64> {
        &self.edges
    }

    pub fn midpoints(&self) -> &Array1<f64> {
        &self.midpoints
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn cumulative(&self) -> &Array1<f64> {
        &self.cumulative
    }

    /// Un-normalized ∫₀¹ S(ρ)·ρ dρ [m^-3 s^-1].
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Bounds `[lo, hi)` of bin `index` in normalized radius.
    pub fn bin_bounds(&self, index: usize) -> (f64, f64) {
        (self.edges[index], self.edges[index + 1])
    }

    /// Inverse-CDF bin lookup: first bin whose cumulative mass exceeds `u`.
    pub fn find_bin(&self, u: f64) -> usize {
        let cdf = &self.cumulative;
        let mut lo = 0;
        let mut hi = cdf.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if cdf[mid] <= u {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo.min(cdf.len() - 1)
    }

    /// Draw `(bin_index, rho)` from two uniform variates in [0, 1).
    pub fn sample(&self, u_bin: f64, u_rho: f64) -> (usize, f64) {
        let index = self.find_bin(u_bin);
        let (lo, hi) = self.bin_bounds(index);
        let rho = (lo + u_rho * (hi - lo)).clamp(0.0, 1.0);
        (index, rho)
    }
}
