//! Result of a successful registry lookup.

use serde::{Deserialize, Serialize};

/// The registered details for an ABN found on the registry.
///
/// Only built once the ABN passed validation and the registry page was classified
/// as a current-details page. Fields are read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResult {
    /// The ABN exactly as it was passed in
    abn: String,

    /// Registered legal name of the entity
    name: String,
}

impl LookupResult {
    /// Create a lookup result.
    pub fn new(abn: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abn: abn.into(),
            name: name.into(),
        }
    }

    /// The ABN that was looked up.
    pub fn abn(&self) -> &str {
        &self.abn
    }

    /// The entity's legal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Split into `(abn, name)`.
    pub fn into_parts(self) -> (String, String) {
        (self.abn, self.name)
    }
}
