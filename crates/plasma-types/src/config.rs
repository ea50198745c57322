// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{PlasmaSourceError, SourceResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Confinement regime selecting the profile shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasmaMode {
    /// Low confinement: one broad profile, no pedestal shoulder.
    #[serde(rename = "l-mode")]
    LMode,
    /// High (or advanced) confinement: peaked core plus edge pedestal.
    #[serde(rename = "h-mode", alias = "a-mode")]
    HMode,
}

/// Coordinate representation handed to the host transport code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Basis {
    /// Full 3-D Cartesian position.
    Xyz,
    /// 2-D (R, Z) written into the (x, y) slots.
    Ry,
    /// 2-D (R, Z) written into the (x, z) slots.
    Rz,
}

impl FromStr for Basis {
    type Err = PlasmaSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xyz" => Ok(Basis::Xyz),
            "ry" => Ok(Basis::Ry),
            "rz" => Ok(Basis::Rz),
            _ => Err(PlasmaSourceError::UnknownBasis(s.to_string())),
        }
    }
}

impl TryFrom<String> for Basis {
    type Error = PlasmaSourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Basis> for String {
    fn from(basis: Basis) -> Self {
        basis.to_string()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Basis::Xyz => "xyz",
            Basis::Ry => "ry",
            Basis::Rz => "rz",
        };
        f.write_str(name)
    }
}

/// D-T reactivity parametrization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactivityModel {
    /// NRL Plasma Formulary fit, monotone up to ~1 MeV.
    #[default]
    NrlFormulary,
    /// Bosch-Hale (1992) fit, 0.2–100 keV.
    BoschHale,
}

/// Ion density profile parameters [m^-3].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub pedestal: f64,
    pub separatrix: f64,
    pub origin: f64,
    #[serde(default = "default_density_peaking")]
    pub peaking_factor: f64,
}

/// Ion temperature profile parameters [keV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProfile {
    pub pedestal: f64,
    pub separatrix: f64,
    pub origin: f64,
    #[serde(default = "default_temperature_peaking")]
    pub peaking_factor: f64,
    /// Core shape exponent: larger values flatten the core.
    #[serde(default = "default_temperature_beta")]
    pub beta: f64,
}

/// Plasma cross-section geometry [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaGeometry {
    pub minor_radius: f64,
    pub major_radius: f64,
    /// Pedestal top location, absolute minor radius [m].
    pub pedestal_radius: f64,
    #[serde(default = "default_elongation")]
    pub elongation: f64,
    #[serde(default)]
    pub triangularity: f64,
    #[serde(default)]
    pub shafranov_shift: f64,
}

impl PlasmaGeometry {
    /// Pedestal location in normalized minor radius.
    pub fn rho_pedestal(&self) -> f64 {
        self.pedestal_radius / self.minor_radius
    }
}

/// Toroidal sector the source emits into [degrees].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToroidalRange {
    pub min_deg: f64,
    pub max_deg: f64,
}

impl ToroidalRange {
    pub fn min_rad(&self) -> f64 {
        self.min_deg.to_radians()
    }

    pub fn span_rad(&self) -> f64 {
        (self.max_deg - self.min_deg).to_radians()
    }
}

impl Default for ToroidalRange {
    fn default() -> Self {
        ToroidalRange {
            min_deg: 0.0,
            max_deg: 360.0,
        }
    }
}

/// Top-level source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub mode: PlasmaMode,
    pub density: DensityProfile,
    pub temperature: TemperatureProfile,
    pub geometry: PlasmaGeometry,
    #[serde(default)]
    pub toroidal_range: ToroidalRange,
    #[serde(default = "default_bin_count")]
    pub bin_count: usize,
    #[serde(default = "default_basis")]
    pub basis: Basis,
    #[serde(default)]
    pub reactivity: ReactivityModel,
}

fn default_name() -> String {
    "parametric_plasma_source".to_string()
}
fn default_density_peaking() -> f64 {
    1.0
}
fn default_temperature_peaking() -> f64 {
    8.06
}
fn default_temperature_beta() -> f64 {
    6.0
}
fn default_elongation() -> f64 {
    1.0
}
fn default_bin_count() -> usize {
    100
}
fn default_basis() -> Basis {
    Basis::Xyz
}

/// Spherical tokamak scenario.
impl Default for PlasmaConfig {
    fn default() -> Self {
        let minor_radius = 1.56;
        PlasmaConfig {
            name: default_name(),
            mode: PlasmaMode::HMode,
            density: DensityProfile {
                pedestal: 1.09e20,
                separatrix: 3.0e19,
                origin: 1.09e20,
                peaking_factor: default_density_peaking(),
            },
            temperature: TemperatureProfile {
                pedestal: 6.09,
                separatrix: 0.1,
                origin: 45.9,
                peaking_factor: default_temperature_peaking(),
                beta: default_temperature_beta(),
            },
            geometry: PlasmaGeometry {
                minor_radius,
                major_radius: 2.5,
                pedestal_radius: 0.8 * minor_radius,
                elongation: 2.0,
                triangularity: 0.55,
                shafranov_shift: 0.0,
            },
            toroidal_range: ToroidalRange::default(),
            bin_count: default_bin_count(),
            basis: default_basis(),
            reactivity: ReactivityModel::default(),
        }
    }
}

fn require_finite(value: f64, label: &str) -> SourceResult<()> {
    if !value.is_finite() {
        return Err(PlasmaSourceError::ConfigError(format!(
            "{label} must be finite, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(value: f64, label: &str) -> SourceResult<()> {
    require_finite(value, label)?;
    if value < 0.0 {
        return Err(PlasmaSourceError::ConfigError(format!(
            "{label} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

fn require_positive(value: f64, label: &str) -> SourceResult<()> {
    require_finite(value, label)?;
    if value <= 0.0 {
        return Err(PlasmaSourceError::ConfigError(format!(
            "{label} must be > 0, got {value}"
        )));
    }
    Ok(())
}

impl PlasmaConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> SourceResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse from a JSON document and validate.
    pub fn from_json_str(json: &str) -> SourceResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter invariant. Nothing is clamped or defaulted here.
    pub fn validate(&self) -> SourceResult<()> {
        let d = &self.density;
        require_non_negative(d.pedestal, "density.pedestal")?;
        require_non_negative(d.separatrix, "density.separatrix")?;
        require_non_negative(d.origin, "density.origin")?;
        require_positive(d.peaking_factor, "density.peaking_factor")?;

        let t = &self.temperature;
        require_non_negative(t.pedestal, "temperature.pedestal")?;
        require_non_negative(t.separatrix, "temperature.separatrix")?;
        require_non_negative(t.origin, "temperature.origin")?;
        require_positive(t.peaking_factor, "temperature.peaking_factor")?;
        require_positive(t.beta, "temperature.beta")?;

        let g = &self.geometry;
        require_positive(g.minor_radius, "geometry.minor_radius")?;
        require_positive(g.major_radius, "geometry.major_radius")?;
        require_non_negative(g.pedestal_radius, "geometry.pedestal_radius")?;
        require_positive(g.elongation, "geometry.elongation")?;
        require_finite(g.triangularity, "geometry.triangularity")?;
        require_finite(g.shafranov_shift, "geometry.shafranov_shift")?;
        if g.pedestal_radius > g.minor_radius {
            return Err(PlasmaSourceError::ConfigError(format!(
                "geometry.pedestal_radius ({}) must not exceed minor_radius ({})",
                g.pedestal_radius, g.minor_radius
            )));
        }
        // Innermost R over all surfaces is R0 + min(Δ, 0)·(1 − ρ²) − aρ >= R0 + min(Δ, 0) − a
        let inboard = g.major_radius + g.shafranov_shift.min(0.0) - g.minor_radius;
        if inboard <= 0.0 {
            return Err(PlasmaSourceError::ConfigError(format!(
                "plasma crosses the machine axis: major_radius ({}) + inward shafranov_shift ({}) \
                 must exceed minor_radius ({})",
                g.major_radius,
                g.shafranov_shift.min(0.0),
                g.minor_radius
            )));
        }

        let r = &self.toroidal_range;
        require_finite(r.min_deg, "toroidal_range.min_deg")?;
        require_finite(r.max_deg, "toroidal_range.max_deg")?;
        if r.min_deg < 0.0 || r.max_deg > 360.0 || r.min_deg >= r.max_deg {
            return Err(PlasmaSourceError::ConfigError(format!(
                "toroidal range must satisfy 0 <= min < max <= 360, got [{}, {})",
                r.min_deg, r.max_deg
            )));
        }

        if self.bin_count == 0 {
            return Err(PlasmaSourceError::ConfigError(
                "bin_count must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
