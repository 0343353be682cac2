//! Weekly and monthly reports over recently created predictions.

use chrono::{DateTime, Duration, Utc};

use brier_core::config::ReportConfig;
use brier_core::models::{Category, PeriodicReport, PredictionRecord, ReportPeriod};

use crate::scoring::{accuracy, brier_score, count_by_category};

pub const KEEP_PREDICTING: &str = "Keep predicting to get personalized insights!";
pub const OFTEN_WRONG: &str = "Your predictions were often wrong. Consider being less confident.";

/// Records created within `[now - days, now]`.
pub fn within_window(
    records: &[PredictionRecord],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<PredictionRecord> {
    let start = now - Duration::days(days);
    records
        .iter()
        .filter(|r| r.created_at >= start && r.created_at <= now)
        .cloned()
        .collect()
}

fn window_days(period: ReportPeriod, config: &ReportConfig) -> i64 {
    match period {
        ReportPeriod::Week => config.weekly_window_days,
        ReportPeriod::Month => config.monthly_window_days,
    }
}

/// Score the predictions created in the trailing `period` before `now`.
pub fn build_periodic(
    records: &[PredictionRecord],
    period: ReportPeriod,
    now: DateTime<Utc>,
    config: &ReportConfig,
) -> PeriodicReport {
    let days = window_days(period, config);
    let window = within_window(records, now, days);
    let resolved = window.iter().filter(|r| r.is_resolved()).count();
    let brier = brier_score(&window);
    let by_category = count_by_category(&window);

    let busiest = by_category
        .iter()
        .filter(|&(_, &count)| count > config.busy_category_count)
        // max_by_key keeps the last maximum; reverse so the earliest category wins ties
        .rev()
        .max_by_key(|&(_, &count)| count)
        .map(|(&category, _)| category);

    PeriodicReport {
        period,
        start: now - Duration::days(days),
        end: now,
        total: window.len(),
        resolved,
        pending: window.len() - resolved,
        brier_score: brier,
        accuracy: accuracy(&window),
        insights: insights(period, brier, busiest, config),
        by_category,
    }
}

pub fn build_weekly(
    records: &[PredictionRecord],
    now: DateTime<Utc>,
    config: &ReportConfig,
) -> PeriodicReport {
    build_periodic(records, ReportPeriod::Week, now, config)
}

pub fn build_monthly(
    records: &[PredictionRecord],
    now: DateTime<Utc>,
    config: &ReportConfig,
) -> PeriodicReport {
    build_periodic(records, ReportPeriod::Month, now, config)
}

fn insights(
    period: ReportPeriod,
    brier: Option<f64>,
    busiest: Option<Category>,
    config: &ReportConfig,
) -> Vec<String> {
    let mut insights = Vec::new();

    match brier {
        Some(score) if score < config.celebrate_below => insights.push(format!(
            "Excellent calibration this {}!",
            period.label().to_lowercase()
        )),
        Some(score) if score > config.caution_above => insights.push(OFTEN_WRONG.to_string()),
        _ => {}
    }

    if let Some(category) = busiest {
        insights.push(format!(
            "You made many {category} predictions - how did they turn out?"
        ));
    }

    if insights.is_empty() {
        insights.push(KEEP_PREDICTING.to_string());
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{epoch, RecordBuilder};

    fn config() -> ReportConfig {
        ReportConfig::default()
    }

    #[test]
    fn window_is_inclusive_and_excludes_future() {
        let records = vec![
            RecordBuilder::new(30).id("edge").days_ago(7).build(),
            RecordBuilder::new(30).id("old").days_ago(8).build(),
            RecordBuilder::new(30)
                .id("future")
                .created_at(epoch() + Duration::hours(1))
                .build(),
        ];
        let window = within_window(&records, epoch(), 7);
        let ids: Vec<&str> = window.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["edge"]);
    }

    #[test]
    fn empty_week_falls_back() {
        let report = build_weekly(&[], epoch(), &config());
        assert_eq!(report.total, 0);
        assert_eq!(report.brier_score, None);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.insights, vec![KEEP_PREDICTING.to_string()]);
        assert_eq!(report.end - report.start, Duration::days(7));
    }

    #[test]
    fn good_week_is_celebrated() {
        let records = vec![
            RecordBuilder::new(10).days_ago(1).resolved(false).build(),
            RecordBuilder::new(90).days_ago(2).resolved(true).build(),
            RecordBuilder::new(40).days_ago(3).build(),
        ];
        let report = build_weekly(&records, epoch(), &config());
        assert_eq!(report.total, 3);
        assert_eq!(report.resolved, 2);
        assert_eq!(report.pending, 1);
        assert_eq!(report.accuracy, 100.0);
        assert_eq!(report.insights, vec!["Excellent calibration this week!"]);
    }

    #[test]
    fn bad_month_is_cautioned() {
        let records = vec![RecordBuilder::new(90).days_ago(20).resolved(false).build()];
        let weekly = build_weekly(&records, epoch(), &config());
        assert_eq!(weekly.total, 0);

        let monthly = build_monthly(&records, epoch(), &config());
        assert_eq!(monthly.period, ReportPeriod::Month);
        assert_eq!(monthly.total, 1);
        assert_eq!(monthly.insights, vec![OFTEN_WRONG.to_string()]);
    }

    #[test]
    fn middling_score_gets_no_score_insight() {
        let records = vec![RecordBuilder::new(60).days_ago(1).resolved(true).build()];
        // (0.6 - 1)^2 = 0.16 -> celebrated
        let report = build_weekly(&records, epoch(), &config());
        assert_eq!(report.insights.len(), 1);

        let records = vec![RecordBuilder::new(40).days_ago(1).resolved(true).build()];
        // 0.36 -> neither threshold
        let report = build_weekly(&records, epoch(), &config());
        assert_eq!(report.insights, vec![KEEP_PREDICTING.to_string()]);
    }

    #[test]
    fn busiest_category_is_called_out() {
        let mut records: Vec<PredictionRecord> = (0..4)
            .map(|i| {
                RecordBuilder::new(40)
                    .id(format!("w{i}"))
                    .category(Category::Work)
                    .days_ago(1)
                    .build()
            })
            .collect();
        records.extend((0..4).map(|i| {
            RecordBuilder::new(40)
                .id(format!("s{i}"))
                .category(Category::Social)
                .days_ago(1)
                .build()
        }));
        let report = build_weekly(&records, epoch(), &config());
        assert_eq!(report.by_category.get(&Category::Work), Some(&4));
        assert_eq!(
            report.insights,
            vec!["You made many social predictions - how did they turn out?"]
        );
    }

    #[test]
    fn three_in_a_category_is_not_busy() {
        let records: Vec<PredictionRecord> = (0..3)
            .map(|i| {
                RecordBuilder::new(40)
                    .id(format!("d{i}"))
                    .category(Category::Dating)
                    .days_ago(1)
                    .build()
            })
            .collect();
        let report = build_weekly(&records, epoch(), &config());
        assert_eq!(report.insights, vec![KEEP_PREDICTING.to_string()]);
    }
}
