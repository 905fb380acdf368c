use quench_onboarding::intake::ImpactSummary;
use quench_onboarding::screens::{fact_cards, hydration_render_model, ScreenModel};
use quench_onboarding::{
    HydrationClassifier, IntakeClassifier, OnboardingConfig, OnboardingStep, StepSequencer,
};

/// Demo walkthrough of the onboarding flow: prints each screen's model, a
/// hydration-slider sweep, and the intake assessment for a sample cup count.
fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let daily_cups: u32 = std::env::var("QUENCH_DEMO_CUPS")
        .unwrap_or_else(|_| "6".to_string())
        .parse()
        .unwrap_or(6);

    let config = OnboardingConfig::default();
    let sequencer = StepSequencer::new(&config)?;
    let hydration = HydrationClassifier::new(&config)?;
    let intake = IntakeClassifier::new(&config)?;

    println!("quench onboarding v{}\n", env!("CARGO_PKG_VERSION"));

    for step in OnboardingStep::ALL {
        let model = ScreenModel::for_step(step, &sequencer)?;
        println!(
            "[{:>3.0}%] {:<22} {}{}",
            model.progress * 100.0,
            step.name(),
            model.copy.heading,
            if model.shows_back { "" } else { "  (no back)" },
        );
    }

    println!("\nhydration slider sweep:");
    for tenth in 0..=10 {
        let level = tenth as f64 / 10.0;
        let render = hydration_render_model(level, &hydration);
        println!(
            "  {level:.1}  {:<20} {:?} -> {}",
            render.label, render.color, render.asset
        );
    }

    println!("\ndid you know?");
    for card in fact_cards(&config) {
        println!("  {} {}", card.icon, card.text);
    }

    let assessment = intake.assess(daily_cups);
    let impact = ImpactSummary::for_daily_cups(daily_cups, &intake, &config);
    println!("\ndaily intake: {} ({:?})", assessment.display, assessment.tier);
    println!("  {}", assessment.message);
    println!(
        "  weekly {} / monthly {} / recommended {}",
        impact.weekly, impact.monthly, impact.recommended
    );
    println!("  health impact: {} ({:?})", impact.health.message, impact.health.tone);

    Ok(())
}
