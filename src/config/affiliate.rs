use serde::{Deserialize, Serialize};

use super::features::features_for;
use super::plans::PlanTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportsbookKey {
    Fanduel,
    Draftkings,
}

/// Sportsbook affiliate link shown on event pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffiliateConfig {
    pub enabled: bool,
    pub sportsbook: SportsbookKey,
    pub label: &'static str,
    pub url: &'static str,
}

impl AffiliateConfig {
    /// A link renders only once it is switched on and has a destination.
    pub fn is_live(&self) -> bool {
        self.enabled && !self.url.trim().is_empty()
    }
}

// Stays disabled until the sportsbook approves the partnership; the url is
// filled in at the same time.
static AFFILIATE: AffiliateConfig = AffiliateConfig {
    enabled: false,
    sportsbook: SportsbookKey::Fanduel,
    label: "View this market on FanDuel",
    url: "",
};

pub fn affiliate_config() -> &'static AffiliateConfig {
    &AFFILIATE
}

/// The call-to-action for `tier`, if that tier may see it and the link is live.
pub fn affiliate_cta(tier: PlanTier) -> Option<&'static AffiliateConfig> {
    cta_for(features_for(tier).show_affiliate_cta, affiliate_config())
}

fn cta_for(tier_allows: bool, config: &AffiliateConfig) -> Option<&AffiliateConfig> {
    (tier_allows && config.is_live()).then_some(config)
}
