//! Hydration state model — maps a continuous slider level to one of six
//! ordered severity bands.
//!
//! Convention: `0.0` is fully hydrated, `1.0` is severely dehydrated, and
//! band upper bounds are inclusive.

use serde::{Deserialize, Serialize};

use crate::classifier::Bands;
use crate::config::OnboardingConfig;
use crate::error::Result;

/// Severity color classification consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Accent,
    Warning,
    Critical,
}

/// One of the six ordered hydration severity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationState {
    FullyHydrated,
    SlightlyThirsty,
    GettingThirsty,
    QuiteThirsty,
    VeryThirsty,
    SeverelyDehydrated,
}

impl HydrationState {
    /// All states in severity order.
    pub const ALL: [HydrationState; 6] = [
        Self::FullyHydrated,
        Self::SlightlyThirsty,
        Self::GettingThirsty,
        Self::QuiteThirsty,
        Self::VeryThirsty,
        Self::SeverelyDehydrated,
    ];

    /// Ordinal 0–5, increasing with dehydration severity.
    pub fn rank(&self) -> u8 {
        match self {
            Self::FullyHydrated => 0,
            Self::SlightlyThirsty => 1,
            Self::GettingThirsty => 2,
            Self::QuiteThirsty => 3,
            Self::VeryThirsty => 4,
            Self::SeverelyDehydrated => 5,
        }
    }

    /// Human-readable description shown under the avatar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullyHydrated => "fully hydrated",
            Self::SlightlyThirsty => "slightly thirsty",
            Self::GettingThirsty => "getting thirsty",
            Self::QuiteThirsty => "quite thirsty",
            Self::VeryThirsty => "very thirsty",
            Self::SeverelyDehydrated => "severely dehydrated",
        }
    }

    /// Severity color tag: the two mildest bands are accent-colored, the two
    /// middle bands warning, the two worst critical.
    pub fn color_tag(&self) -> ColorTag {
        match self.rank() {
            0 | 1 => ColorTag::Accent,
            2 | 3 => ColorTag::Warning,
            _ => ColorTag::Critical,
        }
    }

    /// Stable asset key for the avatar image. The rendering layer owns the
    /// key-to-image lookup; these names come from the product's asset catalog.
    pub fn avatar_asset(&self) -> &'static str {
        match self {
            Self::FullyHydrated => "quench-transparent-default",
            Self::SlightlyThirsty => "quench-avatar-down-10",
            Self::GettingThirsty => "quench-avatar-down-20",
            Self::QuiteThirsty => "quench-avatar-down-40",
            Self::VeryThirsty => "quench-avatar-60-dehydrated",
            Self::SeverelyDehydrated => "quench-dehydrsted-down-80",
        }
    }
}

impl std::fmt::Display for HydrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pure mapping from a slider level in `[0.0, 1.0]` to a [`HydrationState`].
#[derive(Debug, Clone)]
pub struct HydrationClassifier {
    bands: Bands<HydrationState>,
}

impl HydrationClassifier {
    /// Build the classifier from the configured band table.
    pub fn new(config: &OnboardingConfig) -> Result<Self> {
        let bands = Bands::new(0.0, 1.0, config.hydration_bands.clone())?;
        Ok(Self { bands })
    }

    /// Classify a slider level. Values outside `[0.0, 1.0]` are clamped to
    /// the nearest boundary; this never fails.
    pub fn classify(&self, level: f64) -> HydrationState {
        *self.bands.classify(level)
    }
}
