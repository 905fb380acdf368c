//! Current-intake model — the discrete cups-of-water counterpart to the
//! hydration slider.
//!
//! Same banded-classification technique, different domain: an integer cup
//! count maps to an encouragement message, a display tier, and a
//! health-impact assessment. Also owns the small display arithmetic the
//! impact screen shows (weekly and monthly multiples of the daily count).

use serde::{Deserialize, Serialize};

use crate::classifier::Bands;
use crate::config::OnboardingConfig;
use crate::error::Result;

/// Display tier for the encouragement message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTier {
    /// Low intake, neutral gray — keep the tone encouraging, not alarming.
    Muted,
    /// Mid intake, orange.
    Progress,
    /// High intake, accent blue.
    Excellent,
}

/// Tone of the health-impact line on the impact screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTone {
    Critical,
    Warning,
    Positive,
}

/// Health-impact copy plus its tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthImpact {
    pub message: &'static str,
    pub tone: HealthTone,
}

/// Everything the intake screen renders for a given cup count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeAssessment {
    /// The cup count after clamping into the tracked range.
    pub cups: u32,
    /// Formatted count, e.g. "1 cup" or "6 cups".
    pub display: String,
    pub message: &'static str,
    pub tier: MessageTier,
}

/// Classifies a daily cup count into encouragement, tier, and health impact.
#[derive(Debug, Clone)]
pub struct IntakeClassifier {
    max_cups: u32,
    encouragement: Bands<&'static str>,
    tiers: Bands<MessageTier>,
    health: Bands<HealthImpact>,
}

impl IntakeClassifier {
    /// Build the classifier from the configured band tables.
    pub fn new(config: &OnboardingConfig) -> Result<Self> {
        let intake = &config.intake;
        let hi = intake.max_cups as f64;
        Ok(Self {
            max_cups: intake.max_cups,
            encouragement: Bands::new(0.0, hi, intake.encouragement.clone())?,
            tiers: Bands::new(0.0, hi, intake.tiers.clone())?,
            health: Bands::new(0.0, hi, intake.health.clone())?,
        })
    }

    /// Assess a daily cup count. Counts past the tracked ceiling land in the
    /// top band; this never fails.
    pub fn assess(&self, cups: u32) -> IntakeAssessment {
        let clamped = cups.min(self.max_cups);
        let value = clamped as f64;
        IntakeAssessment {
            cups: clamped,
            display: format_cups(clamped),
            message: self.encouragement.classify(value),
            tier: *self.tiers.classify(value),
        }
    }

    /// Health-impact line for the impact screen.
    pub fn health_impact(&self, cups: u32) -> HealthImpact {
        *self.health.classify(cups.min(self.max_cups) as f64)
    }
}

/// Format a cup count with pluralization: "0 cups", "1 cup", "6 cups".
pub fn format_cups(cups: u32) -> String {
    if cups == 1 {
        "1 cup".to_string()
    } else {
        format!("{cups} cups")
    }
}

/// The impact-visualization breakdown: the daily count projected over a week
/// and a month, next to the recommended target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    pub daily: String,
    pub weekly: String,
    pub monthly: String,
    pub recommended: String,
    pub health: HealthImpact,
}

impl ImpactSummary {
    /// Project `daily_cups` over a week (x7) and a month (x30).
    pub fn for_daily_cups(daily_cups: u32, classifier: &IntakeClassifier, config: &OnboardingConfig) -> Self {
        let cups = daily_cups.min(config.intake.max_cups);
        Self {
            daily: format_cups(cups),
            weekly: format_cups(cups * 7),
            monthly: format_cups(cups * 30),
            recommended: format!("{} daily", format_cups(config.intake.recommended_daily_cups)),
            health: classifier.health_impact(cups),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntakeClassifier {
        IntakeClassifier::new(&OnboardingConfig::default()).unwrap()
    }

    #[test]
    fn encouragement_bands() {
        let c = classifier();
        assert_eq!(
            c.assess(0).message,
            "let's work on building that habit together!"
        );
        assert_eq!(c.assess(1).message, c.assess(0).message);
        assert_eq!(c.assess(2).message, "you're getting started - that's great!");
        assert_eq!(c.assess(5).message, "not bad! there's room for improvement");
        assert_eq!(c.assess(7).message, "you're doing pretty well!");
        assert_eq!(c.assess(8).message, "excellent! you're staying well hydrated");
        assert_eq!(c.assess(11).message, "amazing! you're a hydration champion");
        assert_eq!(c.assess(12).message, "wow! you're absolutely crushing it!");
    }

    #[test]
    fn tiers_are_monotonic() {
        let c = classifier();
        assert_eq!(c.assess(0).tier, MessageTier::Muted);
        assert_eq!(c.assess(3).tier, MessageTier::Muted);
        assert_eq!(c.assess(4).tier, MessageTier::Progress);
        assert_eq!(c.assess(7).tier, MessageTier::Progress);
        assert_eq!(c.assess(8).tier, MessageTier::Excellent);
        assert_eq!(c.assess(12).tier, MessageTier::Excellent);
    }

    #[test]
    fn counts_past_ceiling_clamp_into_top_band() {
        let c = classifier();
        let over = c.assess(40);
        assert_eq!(over.cups, 12);
        assert_eq!(over.message, "wow! you're absolutely crushing it!");
        assert_eq!(over.tier, MessageTier::Excellent);
    }

    #[test]
    fn cup_formatting_pluralizes() {
        assert_eq!(format_cups(0), "0 cups");
        assert_eq!(format_cups(1), "1 cup");
        assert_eq!(format_cups(6), "6 cups");
    }

    #[test]
    fn impact_summary_projects_week_and_month() {
        let config = OnboardingConfig::default();
        let c = IntakeClassifier::new(&config).unwrap();
        let summary = ImpactSummary::for_daily_cups(6, &c, &config);
        assert_eq!(summary.daily, "6 cups");
        assert_eq!(summary.weekly, "42 cups");
        assert_eq!(summary.monthly, "180 cups");
        assert_eq!(summary.recommended, "8 cups daily");
        assert_eq!(summary.health.message, "room for improvement");
        assert_eq!(summary.health.tone, HealthTone::Warning);
    }

    #[test]
    fn health_impact_bands() {
        let c = classifier();
        assert_eq!(c.health_impact(0).message, "may cause fatigue, headaches");
        assert_eq!(c.health_impact(0).tone, HealthTone::Critical);
        assert_eq!(c.health_impact(5).tone, HealthTone::Warning);
        assert_eq!(c.health_impact(8).message, "great hydration habits!");
        assert_eq!(c.health_impact(8).tone, HealthTone::Positive);
    }
}
