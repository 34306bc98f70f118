use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{parse_utc, Confidence, Side, Winner};

/// One contest on a card. Fighters are plain names; there is no separate
/// fighter record.
///
/// Numeric fields keep their JSON value exactly, but not its spelling: a
/// weight written as `155` serializes back as `155.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bout {
    pub bout_id: String,
    pub bout_order: i64,
    pub weight_class_lbs: Option<f64>,
    pub fighter_a: String,
    pub fighter_b: String,
    pub prediction: Option<Prediction>,
    pub odds: Option<Odds>,
    pub outcome: Option<Outcome>,
}

impl Bout {
    pub fn fighter(&self, side: Side) -> &str {
        match side {
            Side::A => &self.fighter_a,
            Side::B => &self.fighter_b,
        }
    }

    /// Name of the recorded winner, if the bout is over and the result names a side.
    pub fn winner_name(&self) -> Option<&str> {
        let side = self.outcome.as_ref()?.winner.side()?;
        Some(self.fighter(side))
    }

    pub fn is_completed(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Model output for a bout, as exported. `p_a + p_b` is expected to be
/// close to 1 but nothing here enforces it. Probabilities and edges are read
/// bit-exact (serde_json `float_roundtrip`), so full-precision model output
/// survives a load/serialize cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub p_a: f64,
    pub p_b: f64,
    pub confidence: Confidence,
    pub edge_a: Option<f64>,
    pub edge_b: Option<f64>,
}

impl Prediction {
    /// Side with the higher stored win probability; `None` on an exact tie.
    pub fn favorite(&self) -> Option<Side> {
        if self.p_a > self.p_b {
            Some(Side::A)
        } else if self.p_b > self.p_a {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Larger of the stored edges, with its side. Ties go to A.
    pub fn best_edge(&self) -> Option<(Side, f64)> {
        match (self.edge_a, self.edge_b) {
            (Some(a), Some(b)) if b > a => Some((Side::B, b)),
            (Some(a), _) => Some((Side::A, a)),
            (None, Some(b)) => Some((Side::B, b)),
            (None, None) => None,
        }
    }
}

/// Latest sportsbook line for a bout, American format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Odds {
    pub book: String,
    pub odds_a_american: i64,
    pub odds_b_american: i64,
    pub odds_timestamp_utc: String,
}

impl Odds {
    pub fn american(&self, side: Side) -> i64 {
        match side {
            Side::A => self.odds_a_american,
            Side::B => self.odds_b_american,
        }
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.odds_timestamp_utc)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    pub method: Option<String>,
    pub recorded_timestamp_utc: Option<String>,
}

impl Outcome {
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        self.recorded_timestamp_utc.as_deref().and_then(parse_utc)
    }
}
