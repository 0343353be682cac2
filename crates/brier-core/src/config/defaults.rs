// Single source of truth for all default values.

// --- Insights gate ---
pub const DEFAULT_MIN_RESOLVED: usize = 5;

// --- Confidence bias ---
pub const DEFAULT_HIGH_CONFIDENCE_THRESHOLD: u8 = 80;
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: u8 = 20;
pub const DEFAULT_BIAS_ACCURACY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_BIAS_MIN_SAMPLE: usize = 3;

// --- Pattern mining ---
pub const DEFAULT_DRIFT_WINDOW: usize = 7;
pub const DEFAULT_DRIFT_MIN_WINDOW: usize = 3;
pub const DEFAULT_DRIFT_DELTA: f64 = 10.0; // percentage points
pub const DEFAULT_CATEGORY_MIN_SAMPLE: usize = 3;
pub const DEFAULT_STRONG_CATEGORY_ACCURACY: f64 = 80.0;
pub const DEFAULT_WEAK_CATEGORY_ACCURACY: f64 = 40.0;

// --- Recommendations ---
pub const DEFAULT_CALIBRATION_WARNING_SCORE: u8 = 60;

// --- Periodic reports ---
pub const DEFAULT_WEEKLY_WINDOW_DAYS: i64 = 7;
pub const DEFAULT_MONTHLY_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_CELEBRATE_BELOW: f64 = 0.2;
pub const DEFAULT_CAUTION_ABOVE: f64 = 0.4;
pub const DEFAULT_BUSY_CATEGORY_COUNT: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
