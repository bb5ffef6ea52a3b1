//! Identifier types
//!
//! - [`OutputId`]: Unique identifier for a packed output

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an output
///
/// A fresh `OutputId` is assigned to every output when it is packed. The id
/// also names the output's screenshot (`{id}.png`) in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputId(Uuid);

impl OutputId {
    /// Create a new random OutputId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use resultbundle_core::OutputId;
    ///
    /// let id1 = OutputId::new();
    /// let id2 = OutputId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        OutputId(Uuid::new_v4())
    }

    /// Parse an OutputId from its hyphenated string form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(OutputId)
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        OutputId(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OutputId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OutputId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
