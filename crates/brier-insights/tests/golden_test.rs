//! Golden scenarios: fixed prediction sets with hand-computed figures.

use brier_core::traits::IInsightEngine;
use brier_insights::InsightEngine;
use test_fixtures::golden_scenarios;

const TOLERANCE: f64 = 1e-9;

#[test]
fn golden_scenarios_match() {
    let scenarios = golden_scenarios();
    assert!(!scenarios.is_empty(), "no golden scenarios found");

    let engine = InsightEngine::new();
    for scenario in scenarios {
        let name = &scenario.name;
        let expected = &scenario.expected;
        let outcome = engine.analyze(&scenario.records());

        assert_eq!(outcome.locked().is_some(), expected.locked, "{name}: locked");
        let Some(report) = outcome.report() else {
            continue;
        };

        match (report.brier_score, expected.brier_score) {
            (Some(actual), Some(wanted)) => assert!(
                (actual - wanted).abs() < TOLERANCE,
                "{name}: brier {actual} != {wanted}"
            ),
            (actual, wanted) => assert_eq!(actual, wanted, "{name}: brier"),
        }
        if let Some(wanted) = expected.accuracy {
            assert!(
                (report.accuracy - wanted).abs() < TOLERANCE,
                "{name}: accuracy {} != {wanted}",
                report.accuracy
            );
        }
        assert_eq!(
            report.calibration.score, expected.calibration_score,
            "{name}: calibration score"
        );
        assert_eq!(
            report.bias.overconfident, expected.overconfident,
            "{name}: overconfident"
        );
        assert_eq!(
            report.bias.underconfident, expected.underconfident,
            "{name}: underconfident"
        );

        let patterns: Vec<&str> = report.patterns.iter().map(|p| p.message.as_str()).collect();
        assert_eq!(patterns, expected.patterns, "{name}: patterns");

        if let Some(count) = expected.recommendation_count {
            assert_eq!(report.recommendations.len(), count, "{name}: recommendations");
        }
    }
}
