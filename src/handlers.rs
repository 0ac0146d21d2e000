use crate::dates::today_string;
use crate::errors::AppError;
use crate::export::build_csv;
use crate::insights::{GENERATION_FAILED_MESSAGE, InsightGenerator, NO_DATA_MESSAGE};
use crate::models::{
    Habit, HabitCompletion, HabitRequest, HabitWithProgress, InsightsResponse, ToggleRequest,
    ToggleResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::Html,
};
use chrono::Local;
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    state.store.initialize().await;
    Html(render_index(&today_string()))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitWithProgress>> {
    let today = today_string();
    let reference = Local::now().date_naive();
    Json(state.store.habits_with_progress(&today, reference).await)
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Habit name cannot be empty."));
    }

    let habit = state
        .store
        .add_habit(name, normalize_reminder(payload.reminder_time))
        .await;
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Habit name cannot be empty."));
    }

    let updated = state
        .store
        .update_habit(&id, name, normalize_reminder(payload.reminder_time))
        .await;
    match updated {
        Some(habit) => Ok(Json(habit)),
        None => Err(AppError::not_found("Habit not found.")),
    }
}

pub async fn delete_habit(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.delete_habit(&id).await;
    StatusCode::NO_CONTENT
}

pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    // Completions must always point at a live habit.
    if state.store.habit(&id).await.is_none() {
        return Err(AppError::not_found("Habit not found."));
    }

    let date = payload.date.unwrap_or_else(today_string);
    let completed = state.store.toggle_completion(&id, &date).await;
    Ok(Json(ToggleResponse { date, completed }))
}

pub async fn export_csv(
    State(state): State<AppState>,
) -> ([(header::HeaderName, &'static str); 1], String) {
    let habits = state.store.list_habits().await;
    let records = state.store.all_completion_records().await;
    (
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        build_csv(&habits, &records),
    )
}

pub async fn habit_insights(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InsightsResponse>, AppError> {
    let habit = state
        .store
        .habit(&id)
        .await
        .ok_or_else(|| AppError::not_found("Habit not found."))?;

    let completions = state.store.completions_for(&id).await;
    Ok(Json(
        generate_insights(&habit.name, &completions, state.insights.as_ref()).await,
    ))
}

/// Runs the insight generator over a habit's history. With no completions the
/// generator is skipped entirely; when it fails, the caller sees only the
/// generic message.
async fn generate_insights(
    habit_name: &str,
    completions: &[HabitCompletion],
    generator: &dyn InsightGenerator,
) -> InsightsResponse {
    let completion_data = completions
        .iter()
        .map(|c| c.date.as_str())
        .collect::<Vec<_>>()
        .join(",");

    if completion_data.is_empty() {
        return InsightsResponse {
            insights: Some(NO_DATA_MESSAGE.to_string()),
            error: None,
        };
    }

    match generator.generate(habit_name, &completion_data).await {
        Ok(tips) => InsightsResponse {
            insights: Some(tips),
            error: None,
        },
        Err(err) => {
            error!("failed to generate insights for {habit_name}: {err}");
            InsightsResponse {
                insights: None,
                error: Some(GENERATION_FAILED_MESSAGE.to_string()),
            }
        }
    }
}

fn normalize_reminder(reminder: Option<String>) -> Option<String> {
    reminder.filter(|time| !time.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGenerator {
        seen: Mutex<Option<(String, String)>>,
        fail: bool,
    }

    #[async_trait]
    impl InsightGenerator for RecordingGenerator {
        async fn generate(
            &self,
            habit_name: &str,
            completion_data: &str,
        ) -> Result<String, InsightError> {
            *self.seen.lock().unwrap() =
                Some((habit_name.to_string(), completion_data.to_string()));
            if self.fail {
                Err(InsightError::Unconfigured)
            } else {
                Ok("Keep going!".to_string())
            }
        }
    }

    fn completion(date: &str) -> HabitCompletion {
        HabitCompletion {
            habit_id: "1".into(),
            date: date.into(),
        }
    }

    #[tokio::test]
    async fn no_completions_short_circuits_without_calling_the_generator() {
        let generator = RecordingGenerator::default();
        let response = generate_insights("Read", &[], &generator).await;

        assert_eq!(response.insights.as_deref(), Some(NO_DATA_MESSAGE));
        assert!(response.error.is_none());
        assert!(generator.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn completion_dates_are_joined_with_commas() {
        let generator = RecordingGenerator::default();
        let completions = [completion("2026-08-01"), completion("2026-08-02")];
        let response = generate_insights("Read", &completions, &generator).await;

        assert_eq!(response.insights.as_deref(), Some("Keep going!"));
        let seen = generator.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.0, "Read");
        assert_eq!(seen.1, "2026-08-01,2026-08-02");
    }

    #[tokio::test]
    async fn generator_failure_maps_to_the_generic_message() {
        let generator = RecordingGenerator {
            fail: true,
            ..RecordingGenerator::default()
        };
        let response = generate_insights("Read", &[completion("2026-08-01")], &generator).await;

        assert!(response.insights.is_none());
        assert_eq!(response.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
    }
}

