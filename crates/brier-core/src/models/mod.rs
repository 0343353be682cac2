pub mod bias;
pub mod calibration;
pub mod category;
pub mod challenge;
pub mod insight_report;
pub mod pattern;
pub mod periodic_report;
pub mod prediction;
pub mod probability;
pub mod recommendation;
pub mod snapshot;
pub mod stats;
pub mod streak;

pub use bias::{BiasVerdict, ConfidenceBias};
pub use calibration::{BucketResult, CalibrationSummary};
pub use category::Category;
pub use challenge::{
    Challenge, ChallengeCadence, ChallengeId, ChallengeProgress, ChallengeStatus,
};
pub use insight_report::{InsightOutcome, InsightReport, LockedInsights};
pub use pattern::{PatternInsight, PatternKind};
pub use periodic_report::{PeriodicReport, ReportPeriod};
pub use prediction::{NewPrediction, PredictionRecord, PredictionStatus};
pub use probability::Probability;
pub use recommendation::{Recommendation, Severity};
pub use snapshot::PredictionSnapshot;
pub use stats::{CategoryStats, PredictionStats};
pub use streak::StreakState;
