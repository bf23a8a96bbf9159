//! Identifiers used throughout NetSettle.
//!
//! Participants are identified by their display name. A settlement run gets
//! a UUIDv7 so reports sort by creation time.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ParticipantName
// ---------------------------------------------------------------------------

/// Unique name of a participant in one settlement session.
///
/// Names are compared exactly: `"alice"` and `"Alice"` are different
/// participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantName(pub String);

impl ParticipantName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ParticipantName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ParticipantName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// SettlementId
// ---------------------------------------------------------------------------

/// Identifier of a single settlement run. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SettlementId(pub Uuid);

impl SettlementId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SettlementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settlement:{}", self.0)
    }
}
