pub mod diagnostics;

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::models::{Event, EventsPayload};

/// Dataset written by the export step, embedded at compile time.
pub const BUNDLED_EVENTS_JSON: &str = include_str!("../../data/events.json");

// A bundled file that does not match the schema is a build fault; the test
// suite parses it so it never ships.
static BUNDLED: LazyLock<EventsPayload> = LazyLock::new(|| {
    serde_json::from_str(BUNDLED_EVENTS_JSON).expect("bundled data/events.json does not match EventsPayload")
});

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("events payload is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full bundled payload. Every call returns the same immutable value.
pub fn load_events() -> &'static EventsPayload {
    &BUNDLED
}

/// First event of the bundled payload, `None` if it has no events.
pub fn latest_event() -> Option<&'static Event> {
    load_events().latest()
}

impl EventsPayload {
    pub fn from_json_str(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a payload from disk, e.g. a freshly exported file during preview.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let payload = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            events = payload.events.len(),
            "Loaded events payload from file"
        );
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
