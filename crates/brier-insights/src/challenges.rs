//! Daily and weekly challenges scored over the trailing week.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use brier_core::models::{
    Challenge, ChallengeCadence, ChallengeId, ChallengeProgress, ChallengeStatus,
    PredictionRecord,
};

use crate::report::within_window;
use crate::scoring::brier_score;

const WINDOW_DAYS: i64 = 7;
const PERFECT_WEEK_BRIER: f64 = 0.2;
const WEEKLY_PREDICTIONS: usize = 5;
const WEEKLY_CATEGORIES: usize = 3;

fn challenge(id: ChallengeId, name: &str, cadence: ChallengeCadence, xp: u32) -> Challenge {
    Challenge {
        id,
        name: name.to_string(),
        cadence,
        xp,
    }
}

/// The fixed challenge catalog, daily challenges first.
pub fn catalog() -> Vec<Challenge> {
    use ChallengeCadence::{Daily, Weekly};
    use ChallengeId::*;
    vec![
        challenge(FirstPred, "Make a prediction", Daily, 10),
        challenge(ResolveOne, "Resolve a prediction", Daily, 15),
        challenge(BeHonest, "Log a fear that actually happened", Daily, 20),
        challenge(FivePred, "Make 5 predictions", Weekly, 50),
        challenge(PerfectWeek, "Get a Brier score under 0.2", Weekly, 100),
        challenge(AllCats, "Predict in 3+ categories", Weekly, 30),
    ]
}

/// Evaluate every catalog entry against the predictions of the last week.
///
/// `streak` is passed through from the caller's [`StreakState`].
///
/// [`StreakState`]: brier_core::models::StreakState
pub fn check_progress(
    records: &[PredictionRecord],
    now: DateTime<Utc>,
    streak: u32,
) -> ChallengeProgress {
    let week = within_window(records, now, WINDOW_DAYS);
    let resolved: Vec<&PredictionRecord> = week.iter().filter(|r| r.is_resolved()).collect();
    let categories: BTreeSet<_> = week.iter().map(|r| r.category).collect();

    let challenges: Vec<ChallengeStatus> = catalog()
        .into_iter()
        .map(|challenge| {
            let completed = match challenge.id {
                ChallengeId::FirstPred => !records.is_empty(),
                ChallengeId::ResolveOne => !resolved.is_empty(),
                ChallengeId::BeHonest => resolved.iter().any(|r| r.outcome() == Some(true)),
                ChallengeId::FivePred => week.len() >= WEEKLY_PREDICTIONS,
                ChallengeId::PerfectWeek => {
                    brier_score(&week).is_some_and(|s| s < PERFECT_WEEK_BRIER)
                }
                ChallengeId::AllCats => categories.len() >= WEEKLY_CATEGORIES,
            };
            ChallengeStatus {
                challenge,
                completed,
            }
        })
        .collect();

    let total_xp = challenges
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.challenge.xp)
        .sum();

    ChallengeProgress {
        challenges,
        total_xp,
        streak,
    }
}
