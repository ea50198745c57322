// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Plasma Source
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parametric tokamak D-T neutron source.
//!
//! profiles → reactivity → radial CDF → flux-surface geometry,
//! plus energy/direction sampling and the transport host adapter.

pub mod energy;
pub mod geometry;
pub mod host;
pub mod profiles;
pub mod radial;
pub mod reactivity;
pub mod source;

pub use source::{PlasmaSource, Variates};
