//! Integration tests for the aggregation entry points.
//!
//! These tests drive the application handlers the way a boundary layer
//! would: JSON in, serializable views out.

use std::sync::Arc;

use serde_json::json;

use become_core::application::{
    CalculateCompromiseCommand, CalculateCompromiseHandler, InterpretLikertHandler,
    InterpretLikertQuery, OpinionInput,
};
use become_core::config::AppConfig;
use become_core::domain::aggregation::{AggregationCalculator, BestCompromiseCalculator, Opinion};
use become_core::domain::foundation::{ErrorCode, FuzzyNumber};
use become_core::domain::likert::LikertInterpreter;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn command_from_json(value: serde_json::Value) -> CalculateCompromiseCommand {
    let opinions: Vec<OpinionInput> = serde_json::from_value(value).unwrap();
    CalculateCompromiseCommand { opinions }
}

fn configured_handler() -> CalculateCompromiseHandler {
    CalculateCompromiseHandler::from_config(&AppConfig::default()).unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn skewed_panel_yields_compromise_between_mean_and_median() {
    let cmd = command_from_json(json!([
        { "expert_id": "e1", "lower": 1.0, "peak": 2.0, "upper": 3.0 },
        { "expert_id": "e2", "lower": 2.0, "peak": 3.0, "upper": 4.0 },
        { "expert_id": "e3", "lower": 3.0, "peak": 4.0, "upper": 5.0 },
        { "expert_id": "e4", "lower": 10.0, "peak": 11.0, "upper": 12.0 },
        { "expert_id": "e5", "lower": 11.0, "peak": 12.0, "upper": 13.0 }
    ]));

    let view = configured_handler().handle(cmd).unwrap();

    approx(view.arithmetic_mean.lower, 5.4);
    approx(view.arithmetic_mean.peak, 6.4);
    approx(view.arithmetic_mean.upper, 7.4);
    approx(view.median.lower, 3.0);
    approx(view.median.upper, 5.0);
    approx(view.best_compromise.lower, 4.2);
    approx(view.best_compromise.peak, 5.2);
    approx(view.best_compromise.upper, 6.2);
    approx(view.best_compromise.centroid, 5.2);
    approx(view.max_error, 1.2);
    assert_eq!(view.num_experts, 5);
    assert!(!view.is_even);

    let likert = view.likert.expect("0-100 scale attaches a Likert decision");
    assert_eq!(likert.likert_value, 0);
    assert_eq!(likert.decision_text, "Strongly disagree");
}

#[test]
fn even_panel_averages_two_middle_opinions() {
    let cmd = command_from_json(json!([
        { "expert_id": "d", "lower": 10.0, "peak": 11.0, "upper": 12.0 },
        { "expert_id": "b", "lower": 4.0, "peak": 5.0, "upper": 6.0 },
        { "expert_id": "a", "lower": 1.0, "peak": 2.0, "upper": 3.0 },
        { "expert_id": "c", "lower": 7.0, "peak": 8.0, "upper": 9.0 }
    ]));

    let view = configured_handler().handle(cmd).unwrap();

    approx(view.median.lower, 5.5);
    approx(view.median.peak, 6.5);
    approx(view.median.upper, 7.5);
    approx(view.arithmetic_mean.peak, 6.5);
    approx(view.max_error, 0.0);
    assert!(view.is_even);
}

#[test]
fn compromise_output_has_boundary_shape() {
    let cmd = command_from_json(json!([
        { "expert_id": "e1", "lower": 40.0, "peak": 50.0, "upper": 60.0 }
    ]));

    let view = configured_handler().handle(cmd).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    for key in ["best_compromise", "arithmetic_mean", "median"] {
        let fuzzy = &json[key];
        assert_eq!(fuzzy["lower"], 40.0);
        assert_eq!(fuzzy["peak"], 50.0);
        assert_eq!(fuzzy["upper"], 60.0);
        assert_eq!(fuzzy["centroid"], 50.0);
    }
    assert_eq!(json["max_error"], 0.0);
    assert_eq!(json["num_experts"], 1);
    assert_eq!(json["likert"]["likert_value"], 50);
}

#[test]
fn custom_scale_skips_likert_and_enforces_range() {
    let mut config = AppConfig::default();
    config.scale.min = 0.0;
    config.scale.max = 10.0;
    let handler = CalculateCompromiseHandler::from_config(&config).unwrap();

    let ok = handler
        .handle(command_from_json(json!([
            { "expert_id": "e1", "lower": 2.0, "peak": 4.0, "upper": 6.0 }
        ])))
        .unwrap();
    assert!(ok.likert.is_none());

    let err = handler
        .handle(command_from_json(json!([
            { "expert_id": "e1", "lower": 2.0, "peak": 4.0, "upper": 60.0 }
        ])))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OutOfScale);
    assert_eq!(err.code.http_status(), 422);
}

#[test]
fn empty_request_maps_to_bad_request() {
    let err = configured_handler()
        .handle(command_from_json(json!([])))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::EmptyOpinions);
    assert_eq!(err.code.http_status(), 400);
}

// =============================================================================
// Likert entry point
// =============================================================================

#[test]
fn likert_interprets_best_compromise() {
    let opinions = vec![
        Opinion::from_components("e1", 60.0, 70.0, 80.0).unwrap(),
        Opinion::from_components("e2", 70.0, 80.0, 90.0).unwrap(),
        Opinion::from_components("e3", 65.0, 75.0, 85.0).unwrap(),
    ];
    let result = BestCompromiseCalculator.compute_compromise(&opinions).unwrap();

    let view = InterpretLikertHandler::default()
        .handle(InterpretLikertQuery::from(result.best_compromise()))
        .unwrap();

    assert_eq!(view.likert_value, 75);
    assert_eq!(view.decision_text, "Rather agree");
}

#[test]
fn likert_neutral_scenario() {
    let fuzzy = FuzzyNumber::new(45.0, 50.0, 55.0).unwrap();
    let decision = LikertInterpreter::new().interpret(&fuzzy);
    assert_eq!(decision.likert_value(), 50);
    assert_eq!(decision.decision_text(), "Neutral");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn handler_is_shareable_across_threads() {
    let handler = Arc::new(configured_handler());

    let workers: Vec<_> = (0..4_i32)
        .map(|i| {
            let handler = Arc::clone(&handler);
            std::thread::spawn(move || {
                let base = f64::from(i) * 10.0;
                handler
                    .handle(CalculateCompromiseCommand {
                        opinions: vec![
                            OpinionInput::new("a", base, base + 1.0, base + 2.0),
                            OpinionInput::new("b", base + 2.0, base + 3.0, base + 4.0),
                        ],
                    })
                    .map(|view| view.num_experts)
            })
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap().unwrap(), 2);
    }
}
