//! Test fixtures for Brier: record builders and golden scenario files.
//!
//! Golden scenarios live under `golden/` as JSON and describe a set of
//! predictions together with the figures the insights pipeline must produce.

use std::path::PathBuf;

use brier_core::models::{Category, NewPrediction, PredictionRecord, Probability};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Fixed reference instant so fixtures are deterministic.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixture epoch is not a valid instant"))
}

/// Fluent builder for a single prediction.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id: String,
    probability: i64,
    category: Category,
    created_at: DateTime<Utc>,
    outcome: Option<bool>,
    resolved_at: Option<DateTime<Utc>>,
    notes: Option<String>,
}

impl RecordBuilder {
    pub fn new(probability: i64) -> Self {
        Self {
            id: format!("fixture-{probability}"),
            probability,
            category: Category::Other,
            created_at: epoch(),
            outcome: None,
            resolved_at: None,
            notes: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Created `days` days before [`epoch`].
    pub fn days_ago(self, days: i64) -> Self {
        self.created_at(epoch() - Duration::days(days))
    }

    pub fn resolved(mut self, outcome: bool) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn resolved_at(mut self, at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(at);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// # Panics
    /// Panics on an out-of-range probability.
    pub fn build(self) -> PredictionRecord {
        let probability = Probability::new(self.probability)
            .unwrap_or_else(|e| panic!("bad fixture probability: {e}"));
        let input = NewPrediction::new("Fixture event", "Fixture fear", probability, self.category);
        let mut record = PredictionRecord::new(self.id, input, self.created_at)
            .unwrap_or_else(|e| panic!("bad fixture record: {e}"));
        if let Some(outcome) = self.outcome {
            let at = self.resolved_at.unwrap_or(self.created_at + Duration::hours(1));
            record
                .resolve(outcome, self.notes, at)
                .unwrap_or_else(|e| panic!("fixture resolution failed: {e}"));
        }
        record
    }
}

/// A resolved prediction with default category.
pub fn resolved(probability: i64, outcome: bool) -> PredictionRecord {
    RecordBuilder::new(probability).resolved(outcome).build()
}

/// A resolved prediction in `category`.
pub fn resolved_in(category: Category, probability: i64, outcome: bool) -> PredictionRecord {
    RecordBuilder::new(probability)
        .category(category)
        .resolved(outcome)
        .build()
}

/// A pending prediction.
pub fn pending(probability: i64) -> PredictionRecord {
    RecordBuilder::new(probability).build()
}

/// `count` identical resolved predictions with distinct ids.
pub fn repeat_resolved(count: usize, probability: i64, outcome: bool) -> Vec<PredictionRecord> {
    (0..count)
        .map(|i| {
            RecordBuilder::new(probability)
                .id(format!("repeat-{i}"))
                .resolved(outcome)
                .build()
        })
        .collect()
}

/// Resolved predictions whose resolution times step back one hour per
/// element, so the slice is ordered most-recent-first.
pub fn timeline(probabilities: &[i64], outcome: bool) -> Vec<PredictionRecord> {
    probabilities
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            RecordBuilder::new(p)
                .id(format!("timeline-{i}"))
                .resolved(outcome)
                .resolved_at(epoch() - Duration::hours(i as i64))
                .build()
        })
        .collect()
}

/// One prediction in a golden scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenPrediction {
    pub probability: i64,
    #[serde(default = "default_category")]
    pub category: Category,
    pub outcome: Option<bool>,
}

fn default_category() -> Category {
    Category::Other
}

/// Expected pipeline figures for a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub locked: bool,
    pub brier_score: Option<f64>,
    pub accuracy: Option<f64>,
    pub calibration_score: Option<u8>,
    #[serde(default)]
    pub overconfident: bool,
    #[serde(default)]
    pub underconfident: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub recommendation_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub predictions: Vec<GoldenPrediction>,
    pub expected: GoldenExpectation,
}

impl GoldenScenario {
    /// Materialize the scenario as records, most-recent-first.
    pub fn records(&self) -> Vec<PredictionRecord> {
        self.predictions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut builder = RecordBuilder::new(p.probability)
                    .id(format!("{}-{i}", self.name))
                    .category(p.category)
                    .created_at(epoch() - Duration::hours(i as i64 + 1));
                if let Some(outcome) = p.outcome {
                    builder = builder
                        .resolved(outcome)
                        .resolved_at(epoch() - Duration::minutes(i as i64));
                }
                builder.build()
            })
            .collect()
    }
}

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file relative to `golden/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load every golden scenario, sorted by file name.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    let dir = fixtures_root();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let name = p
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("non-UTF-8 fixture name: {}", p.display()));
            load_fixture(name)
        })
        .collect()
}
