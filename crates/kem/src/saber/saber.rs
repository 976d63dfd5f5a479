//! Saber KEM (NIST PQC security category 3).

use super::kem::SaberKem;
use super::params::SaberParamsImpl;

/// Saber KEM, implementing `saber_api::Kem`.
pub type Saber = SaberKem<SaberParamsImpl>;
