//! FireSaber KEM (NIST PQC security category 5).

use super::kem::SaberKem;
use super::params::FireSaberParams;

/// FireSaber KEM, implementing `saber_api::Kem`.
pub type FireSaber = SaberKem<FireSaberParams>;
