//! Location Model

use serde::{Deserialize, Serialize};

/// A PAR Brink location (store) known to the bridge
///
/// Immutable reference data, looked up by token. Multiple locations may
/// share a timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Opaque Brink location credential, used as the lookup key
    pub token: String,
    /// Brink location identifier
    pub location_id: String,
    /// Display name (e.g. "Store #214 - Aurora")
    pub name: String,
    /// IANA timezone name (e.g. "America/Denver")
    pub timezone: String,
    /// Two-letter state code
    pub state: String,
}
