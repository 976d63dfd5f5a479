//! LightSaber KEM (NIST PQC security category 1).

use super::kem::SaberKem;
use super::params::LightSaberParams;

/// LightSaber KEM, implementing `saber_api::Kem`.
pub type LightSaber = SaberKem<LightSaberParams>;
