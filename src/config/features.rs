use serde::Serialize;

use super::plans::PlanTier;

/// What a tier unlocks on the page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub tier: PlanTier,

    // Visibility
    pub show_edge_sorting: bool,
    pub show_advanced_metrics: bool,
    pub show_affiliate_cta: bool,

    // Messaging
    pub show_upgrade_prompt: bool,
}

static FREE: FeatureFlags = FeatureFlags {
    tier: PlanTier::Free,
    show_edge_sorting: false,
    show_advanced_metrics: false,
    show_affiliate_cta: false,
    show_upgrade_prompt: true,
};

static BASIC: FeatureFlags = FeatureFlags {
    tier: PlanTier::Basic,
    show_edge_sorting: false,
    show_advanced_metrics: true,
    show_affiliate_cta: false,
    show_upgrade_prompt: true,
};

static PRO: FeatureFlags = FeatureFlags {
    tier: PlanTier::Pro,
    show_edge_sorting: true,
    show_advanced_metrics: true,
    show_affiliate_cta: true,
    show_upgrade_prompt: false,
};

pub fn features_for(tier: PlanTier) -> &'static FeatureFlags {
    match tier {
        PlanTier::Free => &FREE,
        PlanTier::Basic => &BASIC,
        PlanTier::Pro => &PRO,
    }
}
