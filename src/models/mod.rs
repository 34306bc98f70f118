pub mod bout;
pub mod event;

pub use bout::{Bout, Odds, Outcome, Prediction};
pub use event::{Event, EventsPayload};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side — corner of a bout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

// ---------------------------------------------------------------------------
// Confidence — model confidence label
// ---------------------------------------------------------------------------

/// Confidence label attached to a prediction.
///
/// Labels outside the known set are kept verbatim in `Other` so a payload
/// serializes back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Other(String),
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
            Confidence::Other(raw) => raw,
        }
    }

    /// Display bucket: unrecognised labels group with `Low`.
    pub fn bucket(&self) -> Confidence {
        match self {
            Confidence::Other(_) => Confidence::Low,
            known => known.clone(),
        }
    }
}

impl From<String> for Confidence {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Low" => Confidence::Low,
            "Medium" => Confidence::Medium,
            "High" => Confidence::High,
            _ => Confidence::Other(raw),
        }
    }
}

impl From<Confidence> for String {
    fn from(c: Confidence) -> Self {
        match c {
            Confidence::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Winner — recorded result designator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Winner {
    A,
    B,
    /// Anything else the result feed recorded (draws, no contests, typos).
    Other(String),
}

impl Winner {
    pub fn side(&self) -> Option<Side> {
        match self {
            Winner::A => Some(Side::A),
            Winner::B => Some(Side::B),
            Winner::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Winner::A => "A",
            Winner::B => "B",
            Winner::Other(raw) => raw,
        }
    }
}

impl From<String> for Winner {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "A" => Winner::A,
            "B" => Winner::B,
            _ => Winner::Other(raw),
        }
    }
}

impl From<Winner> for String {
    fn from(w: Winner) -> Self {
        match w {
            Winner::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `..._utc` field. The raw string on the model is never replaced;
/// this only offers a typed view of it.
pub(crate) fn parse_utc(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
