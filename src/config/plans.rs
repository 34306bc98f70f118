use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription level. Also keys the feature-flag table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Basic,
    Pro,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Free, PlanTier::Basic, PlanTier::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Basic => "basic",
            PlanTier::Pro => "pro",
        }
    }
}

impl FromStr for PlanTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(PlanTier::Free),
            "basic" => Ok(PlanTier::Basic),
            "pro" => Ok(PlanTier::Pro),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan tier: {0}")]
pub struct UnknownTier(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Monthly,
    Annual,
}

/// Pricing card for one tier. Prices are whole USD.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub tier: PlanTier,
    pub name: &'static str,
    pub monthly_price: Decimal,
    pub annual_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_note: Option<&'static str>,
    pub description: &'static str,
}

impl PlanDefinition {
    pub fn price(&self, interval: BillingInterval) -> Decimal {
        match interval {
            BillingInterval::Monthly => self.monthly_price,
            BillingInterval::Annual => self.annual_price,
        }
    }

    /// What paying annually saves against twelve monthly payments.
    pub fn annual_savings(&self) -> Decimal {
        self.monthly_price * Decimal::from(12) - self.annual_price
    }

    pub fn is_paid(&self) -> bool {
        self.monthly_price > Decimal::ZERO
    }
}

static FREE: PlanDefinition = PlanDefinition {
    tier: PlanTier::Free,
    name: "Free",
    monthly_price: Decimal::ZERO,
    annual_price: Decimal::ZERO,
    annual_note: None,
    description: "Public access to core event pages and highlights.",
};

static BASIC: PlanDefinition = PlanDefinition {
    tier: PlanTier::Basic,
    name: "Forge Basic",
    monthly_price: Decimal::from_parts(19, 0, 0, false, 0),
    annual_price: Decimal::from_parts(190, 0, 0, false, 0),
    annual_note: Some("2 months free annually"),
    description: "Deeper context and historical access.",
};

static PRO: PlanDefinition = PlanDefinition {
    tier: PlanTier::Pro,
    name: "Forge Pro",
    monthly_price: Decimal::from_parts(29, 0, 0, false, 0),
    annual_price: Decimal::from_parts(290, 0, 0, false, 0),
    annual_note: Some("2 months free annually"),
    description: "Full tooling, filters, alerts, and affiliate access.",
};

pub fn plan(tier: PlanTier) -> &'static PlanDefinition {
    match tier {
        PlanTier::Free => &FREE,
        PlanTier::Basic => &BASIC,
        PlanTier::Pro => &PRO,
    }
}

/// All plans, cheapest first.
pub fn all_plans() -> Vec<&'static PlanDefinition> {
    PlanTier::ALL.iter().map(|&t| plan(t)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
