use brier_core::config::InsightsConfig;
use brier_core::models::{Category, PredictionRecord};
use brier_insights::{bias, brier_score, calibration, category_breakdown, summarize};
use proptest::prelude::*;
use test_fixtures::RecordBuilder;

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// (probability, category, outcome); `None` outcome means pending.
fn arb_records(max: usize) -> impl Strategy<Value = Vec<PredictionRecord>> {
    prop::collection::vec(
        (0i64..=100, arb_category(), prop::option::of(any::<bool>())),
        0..max,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (p, category, outcome))| {
                let builder = RecordBuilder::new(p).id(format!("prop-{i}")).category(category);
                match outcome {
                    Some(outcome) => builder.resolved(outcome).build(),
                    None => builder.build(),
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn brier_is_bounded_mean_of_squared_errors(records in arb_records(60)) {
        let errors: Vec<f64> = records
            .iter()
            .filter_map(|r| r.outcome().map(|o| {
                let p = f64::from(r.probability.percent()) / 100.0;
                let o = if o { 1.0 } else { 0.0 };
                (p - o) * (p - o)
            }))
            .collect();

        match brier_score(&records) {
            None => prop_assert!(errors.is_empty()),
            Some(score) => {
                prop_assert!((0.0..=1.0).contains(&score));
                let mean = errors.iter().sum::<f64>() / errors.len() as f64;
                prop_assert!((score - mean).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn calibration_ignores_record_order(records in arb_records(60)) {
        let mut reversed = records.clone();
        reversed.reverse();
        prop_assert_eq!(calibration::analyze(&records), calibration::analyze(&reversed));

        let mut rotated = records.clone();
        if !rotated.is_empty() {
            let mid = rotated.len() / 2;
            rotated.rotate_left(mid);
        }
        prop_assert_eq!(calibration::analyze(&records).score, calibration::analyze(&rotated).score);
    }

    #[test]
    fn calibration_buckets_partition_resolved_records(records in arb_records(60)) {
        let summary = calibration::analyze(&records);
        let bucketed: usize = summary.buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(bucketed, records.iter().filter(|r| r.is_resolved()).count());
        prop_assert_eq!(summary.score.is_some(), bucketed > 0);
        if let Some(score) = summary.score {
            prop_assert!(score <= 100);
        }
    }

    #[test]
    fn bias_flags_respect_sample_floor(records in arb_records(40)) {
        let config = InsightsConfig::default();
        let bias = bias::detect(&records, &config);
        if bias.overconfident {
            prop_assert!(bias.high_count >= config.bias_min_sample);
        }
        if bias.underconfident {
            prop_assert!(bias.low_count >= config.bias_min_sample);
        }
        prop_assert!((0.0..=1.0).contains(&bias.high_accuracy));
        prop_assert!((0.0..=1.0).contains(&bias.low_accuracy));
    }

    #[test]
    fn breakdown_agrees_with_summary(records in arb_records(60)) {
        let stats = summarize(&records);
        let breakdown = category_breakdown(&records);
        prop_assert_eq!(breakdown.iter().map(|c| c.total).sum::<usize>(), stats.total);
        prop_assert_eq!(breakdown.iter().map(|c| c.resolved).sum::<usize>(), stats.resolved);
        prop_assert_eq!(stats.resolved + stats.pending, stats.total);
        for entry in &breakdown {
            prop_assert_eq!(entry.accuracy.is_some(), entry.resolved > 0);
            prop_assert_eq!(
                stats.by_category.get(&entry.category).copied().unwrap_or(0),
                entry.total
            );
        }
    }
}
