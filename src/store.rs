use crate::dates::{date_key, week_dates};
use crate::models::{CompletionRecord, Habit, HabitCompletion, HabitWithProgress, StoreState};
use crate::storage::StateBackend;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

/// Habits installed on first run, when the backend has nothing to load.
/// Creation timestamps are refreshed at seeding time.
pub fn default_seed_habits() -> Vec<Habit> {
    let seed = |id: &str, name: &str, reminder: &str| Habit {
        id: id.into(),
        name: name.into(),
        created_at: String::new(),
        reminder_time: Some(reminder.into()),
    };

    vec![
        seed("1", "Wake up on time", "06:00"),
        seed("2", "Exercise for 1 minute", "06:30"),
        seed("3", "Read 10 pages of a book", "20:00"),
    ]
}

struct Inner {
    initialized: bool,
    state: StoreState,
}

/// Millisecond-clock ids, nudged forward past any id already taken so that
/// several creations within one millisecond stay distinct.
fn fresh_id(state: &StoreState) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !state.habits.iter().any(|h| h.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// In-memory habit state with write-through persistence.
///
/// Every operation takes the store mutex for its whole read-modify-write-save
/// span, so mutations are single-writer transactions: two concurrent toggles
/// cannot both observe the pre-toggle state.
pub struct HabitStore {
    backend: Arc<dyn StateBackend>,
    seed: Vec<Habit>,
    inner: Mutex<Inner>,
}

impl HabitStore {
    pub fn new(backend: Arc<dyn StateBackend>, seed: Vec<Habit>) -> Self {
        Self {
            backend,
            seed,
            inner: Mutex::new(Inner {
                initialized: false,
                state: StoreState::default(),
            }),
        }
    }

    /// Loads persisted state, or seeds and saves the defaults when nothing
    /// usable is stored. Safe to call any number of times; only the first
    /// call does work.
    pub async fn initialize(&self) {
        let _ = self.ready().await;
    }

    async fn ready(&self) -> MutexGuard<'_, Inner> {
        let mut inner = self.inner.lock().await;
        if inner.initialized {
            return inner;
        }

        match self.backend.load().await {
            Some(loaded) if !loaded.habits.is_empty() => {
                info!(habits = loaded.habits.len(), "store loaded from backend");
                inner.state = loaded;
            }
            _ => {
                let created_at = Utc::now().to_rfc3339();
                let mut habits = self.seed.clone();
                for habit in &mut habits {
                    habit.created_at = created_at.clone();
                }
                info!(habits = habits.len(), "no stored state, seeding defaults");
                inner.state = StoreState {
                    habits,
                    completions: Vec::new(),
                };
                self.backend.save(&inner.state).await;
            }
        }

        inner.initialized = true;
        inner
    }

    pub async fn list_habits(&self) -> Vec<Habit> {
        self.ready().await.state.habits.clone()
    }

    pub async fn habit(&self, id: &str) -> Option<Habit> {
        let inner = self.ready().await;
        inner.state.habits.iter().find(|h| h.id == id).cloned()
    }

    pub async fn add_habit(&self, name: &str, reminder_time: Option<String>) -> Habit {
        let mut inner = self.ready().await;
        let habit = Habit {
            id: fresh_id(&inner.state),
            name: name.to_string(),
            created_at: Utc::now().to_rfc3339(),
            reminder_time,
        };
        inner.state.habits.push(habit.clone());
        self.backend.save(&inner.state).await;
        habit
    }

    /// Replaces name and reminder, keeping id and creation time. `None` when
    /// no habit has this id.
    pub async fn update_habit(
        &self,
        id: &str,
        name: &str,
        reminder_time: Option<String>,
    ) -> Option<Habit> {
        let mut inner = self.ready().await;
        let habit = inner.state.habits.iter_mut().find(|h| h.id == id)?;
        habit.name = name.to_string();
        habit.reminder_time = reminder_time;
        let updated = habit.clone();
        self.backend.save(&inner.state).await;
        Some(updated)
    }

    /// Removes the habit and every completion that points at it. Unknown ids
    /// are a no-op.
    pub async fn delete_habit(&self, id: &str) {
        let mut inner = self.ready().await;
        inner.state.habits.retain(|h| h.id != id);
        inner.state.completions.retain(|c| c.habit_id != id);
        self.backend.save(&inner.state).await;
    }

    /// Flips the completion for `(habit_id, date)` and returns the new
    /// completed flag. Calling twice restores the original state.
    pub async fn toggle_completion(&self, habit_id: &str, date: &str) -> bool {
        let mut inner = self.ready().await;
        let existing = inner
            .state
            .completions
            .iter()
            .position(|c| c.habit_id == habit_id && c.date == date);

        let completed = match existing {
            Some(index) => {
                inner.state.completions.remove(index);
                false
            }
            None => {
                inner.state.completions.push(HabitCompletion {
                    habit_id: habit_id.to_string(),
                    date: date.to_string(),
                });
                true
            }
        };

        self.backend.save(&inner.state).await;
        completed
    }

    pub async fn completions_for(&self, habit_id: &str) -> Vec<HabitCompletion> {
        let inner = self.ready().await;
        inner
            .state
            .completions
            .iter()
            .filter(|c| c.habit_id == habit_id)
            .cloned()
            .collect()
    }

    pub async fn completion_on(&self, habit_id: &str, date: &str) -> Option<HabitCompletion> {
        let inner = self.ready().await;
        inner
            .state
            .completions
            .iter()
            .find(|c| c.habit_id == habit_id && c.date == date)
            .cloned()
    }

    /// Completions falling in the Monday-start week containing `reference`.
    pub async fn weekly_completions(
        &self,
        habit_id: &str,
        reference: NaiveDate,
    ) -> Vec<HabitCompletion> {
        let week: Vec<String> = week_dates(reference).into_iter().map(date_key).collect();
        let inner = self.ready().await;
        inner
            .state
            .completions
            .iter()
            .filter(|c| c.habit_id == habit_id && week.contains(&c.date))
            .cloned()
            .collect()
    }

    /// Every completion joined with its habit name, for the CSV export. Only
    /// completed days are represented; an absent row means "not done".
    pub async fn all_completion_records(&self) -> Vec<CompletionRecord> {
        let inner = self.ready().await;
        let names: HashMap<&str, &str> = inner
            .state
            .habits
            .iter()
            .map(|h| (h.id.as_str(), h.name.as_str()))
            .collect();

        inner
            .state
            .completions
            .iter()
            .map(|c| CompletionRecord {
                habit_id: c.habit_id.clone(),
                habit_name: names.get(c.habit_id.as_str()).unwrap_or(&"Unknown Habit").to_string(),
                date: c.date.clone(),
                completed: true,
            })
            .collect()
    }

    /// The UI join: each habit with its done-today flag, this week's
    /// completions, and full history. Linear scans per habit are fine at this
    /// scale.
    pub async fn habits_with_progress(
        &self,
        today: &str,
        reference: NaiveDate,
    ) -> Vec<HabitWithProgress> {
        let week: Vec<String> = week_dates(reference).into_iter().map(date_key).collect();
        let inner = self.ready().await;

        inner
            .state
            .habits
            .iter()
            .map(|habit| {
                let all: Vec<HabitCompletion> = inner
                    .state
                    .completions
                    .iter()
                    .filter(|c| c.habit_id == habit.id)
                    .cloned()
                    .collect();
                let weekly = all.iter().filter(|c| week.contains(&c.date)).cloned().collect();
                let completed_today = all.iter().any(|c| c.date == today);
                HabitWithProgress {
                    habit: habit.clone(),
                    completed_today,
                    weekly_completions: weekly,
                    all_completions: all,
                }
            })
            .collect()
    }
}
