// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source C ABI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! C ABI for loading the parametric plasma source into a Monte Carlo
//! transport code.
//!
//! The host owns its random number stream: it draws
//! [`pps_variates_required`] uniform values per particle and passes them in.
//!
//! ```c
//! pps_source_t* src = pps_source_new_from_json("plasma_source.json");
//! double u[8];
//! for (int i = 0; i < 8; ++i) u[i] = prn(seed);
//! pps_site_t site;
//! if (pps_source_sample(src, u, 8, &site) == PPS_OK) { /* bank site */ }
//! pps_source_free(src);
//! ```

use std::ffi::{c_char, CStr};
use std::ptr;
use std::slice;

use plasma_source::host::{HostParticle, ParticleKind};
use plasma_source::PlasmaSource;
use plasma_types::config::PlasmaConfig;
use plasma_types::constants::VARIATES_PER_SAMPLE;
use plasma_types::error::PlasmaSourceError;

// =============================================================================
// Types
// =============================================================================

/// Source bank site (cm, eV).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PpsSite {
    /// Position [cm]
    pub r: [f64; 3],
    /// Unit direction
    pub u: [f64; 3],
    /// Energy [eV]
    pub e: f64,
    /// Statistical weight
    pub wgt: f64,
    /// Particle type, 0 = neutron
    pub particle: i32,
    /// Delayed group, 0 = prompt
    pub delayed_group: i32,
}

impl From<HostParticle> for PpsSite {
    fn from(p: HostParticle) -> Self {
        PpsSite {
            r: p.position_cm,
            u: p.direction,
            e: p.energy_ev,
            wgt: p.weight,
            particle: match p.kind {
                ParticleKind::Neutron => 0,
            },
            delayed_group: p.delayed_group,
        }
    }
}

/// Status codes returned by sampling functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpsStatus {
    /// Success
    Ok = 0,
    /// Null pointer passed
    NullPointer = 1,
    /// Fewer random variates than required
    InsufficientVariates = 2,
}

/// Opaque source handle.
pub struct PpsSource {
    inner: PlasmaSource,
}

fn into_handle(result: Result<PlasmaSource, PlasmaSourceError>) -> *mut PpsSource {
    match result {
        Ok(inner) => Box::into_raw(Box::new(PpsSource { inner })),
        Err(e) => {
            log::error!("parametric plasma source failed to initialize: {e}");
            ptr::null_mut()
        }
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Library version, null-terminated.
#[no_mangle]
pub extern "C" fn pps_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Number of uniform variates consumed per sample.
#[no_mangle]
pub extern "C" fn pps_variates_required() -> usize {
    VARIATES_PER_SAMPLE
}

/// Create a source with the built-in spherical tokamak configuration.
///
/// Returns NULL on failure.
#[no_mangle]
pub extern "C" fn pps_source_new_default() -> *mut PpsSource {
    into_handle(PlasmaSource::new(PlasmaConfig::default()))
}

/// Create a source from a JSON configuration file.
///
/// Returns NULL if the file cannot be read or the configuration is invalid.
///
/// # Safety
/// `path` must be a valid null-terminated string or NULL.
#[no_mangle]
pub unsafe extern "C" fn pps_source_new_from_json(path: *const c_char) -> *mut PpsSource {
    if path.is_null() {
        return ptr::null_mut();
    }
    let path = match CStr::from_ptr(path).to_str() {
        Ok(p) => p,
        Err(e) => {
            log::error!("configuration path is not valid UTF-8: {e}");
            return ptr::null_mut();
        }
    };
    into_handle(PlasmaSource::from_file(path))
}

/// Free a source.
///
/// # Safety
/// `source` must be a pointer returned by a `pps_source_new_*` function, or NULL.
#[no_mangle]
pub unsafe extern "C" fn pps_source_free(source: *mut PpsSource) {
    if !source.is_null() {
        drop(Box::from_raw(source));
    }
}

// =============================================================================
// Sampling
// =============================================================================

/// Sample one neutron into `out`, in host units and the configured basis.
///
/// Safe to call concurrently on the same handle.
///
/// # Safety
/// - `source` must be valid
/// - `variates` must point to at least `len` doubles
/// - `out` must point to writable memory for one `PpsSite`
#[no_mangle]
pub unsafe extern "C" fn pps_source_sample(
    source: *const PpsSource,
    variates: *const f64,
    len: usize,
    out: *mut PpsSite,
) -> PpsStatus {
    if source.is_null() || variates.is_null() || out.is_null() {
        return PpsStatus::NullPointer;
    }
    let values = slice::from_raw_parts(variates, len);
    match (*source).inner.sample_host(values) {
        Ok(host) => {
            *out = PpsSite::from(host);
            PpsStatus::Ok
        }
        Err(_) => PpsStatus::InsufficientVariates,
    }
}

/// Total neutron emission rate [n/s], or 0 for NULL.
///
/// # Safety
/// `source` must be valid or NULL.
#[no_mangle]
pub unsafe extern "C" fn pps_source_neutron_rate(source: *const PpsSource) -> f64 {
    if source.is_null() {
        return 0.0;
    }
    (*source).inner.neutron_rate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_version_string() {
        let v = unsafe { CStr::from_ptr(pps_version()) };
        assert_eq!(v.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
        assert_eq!(pps_variates_required(), 8);
    }

    #[test]
    fn test_default_source_sample() {
        unsafe {
            let src = pps_source_new_default();
            assert!(!src.is_null());

            let u = [0.31, 0.72, 0.05, 0.93, 0.44, 0.18, 0.66, 0.27];
            let mut site = PpsSite::default();
            assert_eq!(
                pps_source_sample(src, u.as_ptr(), u.len(), &mut site),
                PpsStatus::Ok
            );
            assert_eq!(site.particle, 0);
            assert_eq!(site.wgt, 1.0);
            assert!(site.e > 1.0e7 && site.e < 2.0e7, "E = {} eV", site.e);
            let r_cm = site.r[0].hypot(site.r[1]);
            assert!(r_cm > 90.0 && r_cm < 410.0, "R = {r_cm} cm");
            let norm = (site.u[0].powi(2) + site.u[1].powi(2) + site.u[2].powi(2)).sqrt();
            assert!((norm - 1.0).abs() < 1e-12);

            assert!(pps_source_neutron_rate(src) > 0.0);
            pps_source_free(src);
        }
    }

    #[test]
    fn test_sample_rejects_short_batch() {
        unsafe {
            let src = pps_source_new_default();
            let u = [0.5; 4];
            let mut site = PpsSite::default();
            assert_eq!(
                pps_source_sample(src, u.as_ptr(), u.len(), &mut site),
                PpsStatus::InsufficientVariates
            );
            assert_eq!(site, PpsSite::default());
            pps_source_free(src);
        }
    }

    #[test]
    fn test_null_handling() {
        unsafe {
            let mut site = PpsSite::default();
            let u = [0.5; 8];
            assert_eq!(
                pps_source_sample(ptr::null(), u.as_ptr(), 8, &mut site),
                PpsStatus::NullPointer
            );
            assert!(pps_source_new_from_json(ptr::null()).is_null());
            assert_eq!(pps_source_neutron_rate(ptr::null()), 0.0);
            pps_source_free(ptr::null_mut());
        }
    }

    #[test]
    fn test_missing_config_file_returns_null() {
        let path = CString::new("/nonexistent/plasma_source.json").unwrap();
        let src = unsafe { pps_source_new_from_json(path.as_ptr()) };
        assert!(src.is_null());
    }

    #[test]
    fn test_json_config_with_rz_basis() {
        let mut cfg = PlasmaConfig::default();
        cfg.basis = plasma_types::config::Basis::Rz;
        let file = std::env::temp_dir().join(format!("pps_rz_{}.json", std::process::id()));
        std::fs::write(&file, serde_json_string(&cfg)).unwrap();
        let path = CString::new(file.to_string_lossy().as_bytes()).unwrap();
        unsafe {
            let src = pps_source_new_from_json(path.as_ptr());
            assert!(!src.is_null());
            let mut site = PpsSite::default();
            let u = [0.5; 8];
            assert_eq!(pps_source_sample(src, u.as_ptr(), 8, &mut site), PpsStatus::Ok);
            assert_eq!(site.r[1], 0.0);
            assert!(site.r[0] > 0.0);
            pps_source_free(src);
        }
        let _ = std::fs::remove_file(file);
    }

    fn serde_json_string(cfg: &PlasmaConfig) -> String {
        serde_json::to_string_pretty(cfg).unwrap()
    }
}
