use serde::Serialize;

use crate::models::{Bout, Confidence, EventsPayload};

/// Tally of prediction confidence labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfidenceCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Bouts exported without a prediction.
    pub none: usize,
}

impl ConfidenceCounts {
    fn record(&mut self, bout: &Bout) {
        match bout.prediction.as_ref().map(|p| p.confidence.bucket()) {
            Some(Confidence::High) => self.high += 1,
            Some(Confidence::Medium) => self.medium += 1,
            Some(_) => self.low += 1,
            None => self.none += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.none
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventConfidence {
    pub event_name: String,
    pub counts: ConfidenceCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfidenceDistribution {
    pub overall: ConfidenceCounts,
    /// One entry per event, in payload order.
    pub per_event: Vec<EventConfidence>,
}

pub fn confidence_distribution(payload: &EventsPayload) -> ConfidenceDistribution {
    let mut overall = ConfidenceCounts::default();
    let per_event = payload
        .events
        .iter()
        .map(|event| {
            let mut counts = ConfidenceCounts::default();
            for bout in &event.bouts {
                counts.record(bout);
                overall.record(bout);
            }
            EventConfidence {
                event_name: event.event_name.clone(),
                counts,
            }
        })
        .collect();

    ConfidenceDistribution { overall, per_event }
}

/// Emit the distribution at info level, one line overall plus one per event.
pub fn log_distribution(dist: &ConfidenceDistribution) {
    let o = &dist.overall;
    tracing::info!(
        high = o.high,
        medium = o.medium,
        low = o.low,
        none = o.none,
        "Confidence distribution (overall)"
    );
    for e in &dist.per_event {
        let c = &e.counts;
        tracing::info!(
            event = %e.event_name,
            high = c.high,
            medium = c.medium,
            low = c.low,
            none = c.none,
            total = c.total(),
            "Confidence distribution (event)"
        );
    }
}
