//! End-to-end walk of the onboarding flow against the default configuration.

use quench_onboarding::screens::{hydration_render_model, ScreenModel};
use quench_onboarding::{
    ColorTag, GoalForm, HydrationClassifier, IntakeClassifier, OnboardingConfig, OnboardingStep,
    ReasonPicker, StepSequencer,
};

#[test]
fn full_flow_walkthrough() {
    let config = OnboardingConfig::default();
    let sequencer = StepSequencer::new(&config).expect("default config must be valid");
    let hydration = HydrationClassifier::new(&config).expect("default bands must be valid");
    let intake = IntakeClassifier::new(&config).expect("default bands must be valid");

    // Walk forward from Welcome, rendering each screen as the host would.
    let mut step = OnboardingStep::Welcome;
    let mut visited = 0;
    loop {
        visited += 1;
        let model = ScreenModel::for_step(step, &sequencer).unwrap();
        assert_eq!(model.progress, visited as f64 / 8.0);
        assert_eq!(model.shows_back, visited > 1);

        match step {
            OnboardingStep::AvatarStates => {
                // Drag the slider; only the latest value matters.
                let render = hydration_render_model(0.65, &hydration);
                assert_eq!(render.label, "quite thirsty");
                assert_eq!(render.color, ColorTag::Warning);
            }
            OnboardingStep::ReasonSelection => {
                let mut picker = ReasonPicker::new();
                assert!(!picker.can_continue());
                picker.select(3, &config);
                assert_eq!(picker.selected_reason(&config), Some("better focus"));
                assert!(picker.can_continue());
            }
            OnboardingStep::CurrentWaterIntake => {
                let assessment = intake.assess(4);
                assert_eq!(assessment.display, "4 cups");
                assert_eq!(assessment.message, "not bad! there's room for improvement");
            }
            OnboardingStep::GoalCalculation => {
                let mut form = GoalForm::new();
                form.weight = "150".to_string();
                form.activity_hours = "1".to_string();
                form.age = "34".to_string();
                assert!(form.is_complete());
                assert!(model.is_last);
            }
            _ => {}
        }

        match sequencer.next_step(step.name()).unwrap() {
            Some(next) => step = OnboardingStep::from_name(next).expect("catalog names are canonical"),
            None => break,
        }
    }
    assert_eq!(visited, 8);
    assert_eq!(step, OnboardingStep::GoalCalculation);
}

#[test]
fn backing_out_from_the_end_reaches_welcome() {
    let config = OnboardingConfig::default();
    let sequencer = StepSequencer::new(&config).unwrap();

    let mut step = "goal_calculation".to_string();
    let mut hops = 0;
    while let Some(prev) = sequencer.previous_step(&step).unwrap() {
        step = prev.to_string();
        hops += 1;
    }
    assert_eq!(step, "welcome");
    assert_eq!(hops, 7);
}

#[test]
fn classification_is_monotonic_across_both_inputs() {
    let config = OnboardingConfig::default();
    let hydration = HydrationClassifier::new(&config).unwrap();
    let intake = IntakeClassifier::new(&config).unwrap();

    let mut prev_rank = 0;
    for i in 0..=200 {
        let rank = hydration.classify(i as f64 / 200.0).rank();
        assert!(rank >= prev_rank);
        prev_rank = rank;
    }

    // Tier order for intake: Muted <= Progress <= Excellent as cups rise.
    let tier_rank = |cups| match intake.assess(cups).tier {
        quench_onboarding::MessageTier::Muted => 0,
        quench_onboarding::MessageTier::Progress => 1,
        quench_onboarding::MessageTier::Excellent => 2,
    };
    let mut prev = 0;
    for cups in 0..=12 {
        let rank = tier_rank(cups);
        assert!(rank >= prev);
        prev = rank;
    }
}

#[test]
fn sequencer_rejects_steps_outside_the_catalog() {
    let config = OnboardingConfig::default();
    let sequencer = StepSequencer::new(&config).unwrap();
    assert!(sequencer.progress_of("Welcome").is_err(), "names are case-sensitive");
    assert!(sequencer.progress_of("").is_err());
}
