use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{parse_utc, Bout};

/// Top-level document of `events.json`.
///
/// Order is meaningful: index 0 is the latest card. Nothing in this crate
/// re-sorts events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsPayload {
    pub events: Vec<Event>,
}

impl EventsPayload {
    /// First event in the payload, or `None` when there are no events.
    /// Position decides; `event_date_utc` is not consulted.
    pub fn latest(&self) -> Option<&Event> {
        self.events.first()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.slug == slug)
    }

    pub fn find_by_id(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.event_id == event_id)
    }

    /// True when every parseable event date is no later than the one before it.
    /// Unparseable dates are skipped rather than treated as out of order.
    pub fn is_sorted_newest_first(&self) -> bool {
        let dates: Vec<DateTime<Utc>> = self.events.iter().filter_map(Event::event_date).collect();
        dates.windows(2).all(|w| w[0] >= w[1])
    }

    pub fn bout_count(&self) -> usize {
        self.events.iter().map(|e| e.bouts.len()).sum()
    }
}

/// A dated fight card. Owns its bouts in card order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub slug: String,
    pub event_name: String,
    pub event_date_utc: String,
    pub location: Option<String>,
    pub bouts: Vec<Bout>,
}

impl Event {
    pub fn event_date(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.event_date_utc)
    }

    pub fn bout(&self, bout_id: &str) -> Option<&Bout> {
        self.bouts.iter().find(|b| b.bout_id == bout_id)
    }

    /// A card is complete once it has bouts and every one has an outcome.
    pub fn is_completed(&self) -> bool {
        !self.bouts.is_empty() && self.bouts.iter().all(Bout::is_completed)
    }
}
