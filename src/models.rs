use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// RFC 3339 creation timestamp, immutable after creation.
    pub created_at: String,
    /// Optional `HH:mm` reminder; `None` means no reminder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

/// One completed day for one habit. `(habit_id, date)` is unique; a habit is
/// either done or not done on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub habit_id: String,
    /// Calendar date, `YYYY-MM-DD`, no time component.
    pub date: String,
}

/// The persisted aggregate: everything the app knows, saved as one blob.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreState {
    pub habits: Vec<Habit>,
    pub completions: Vec<HabitCompletion>,
}

/// A habit joined with its completion history, as rendered by the UI.
#[derive(Debug, Clone, Serialize)]
pub struct HabitWithProgress {
    #[serde(flatten)]
    pub habit: Habit,
    pub completed_today: bool,
    pub weekly_completions: Vec<HabitCompletion>,
    pub all_completions: Vec<HabitCompletion>,
}

/// Denormalized completion row used by the CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRecord {
    pub habit_id: String,
    pub habit_name: String,
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct HabitRequest {
    pub name: String,
    #[serde(default)]
    pub reminder_time: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ToggleRequest {
    /// Date to flip; defaults to today when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct InsightsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
