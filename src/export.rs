use crate::models::{CompletionRecord, Habit};

pub const EMPTY_EXPORT: &str = "No data to export.";

const CSV_HEADER: &str = "Habit Name,Date,Completed";

/// Renders the full completion history as CSV. Completed days become
/// `"name",date,Yes` rows; a habit with no completions still shows up once as
/// `"name",N/A,No` so the export lists every habit.
pub fn build_csv(habits: &[Habit], records: &[CompletionRecord]) -> String {
    if habits.is_empty() && records.is_empty() {
        return EMPTY_EXPORT.to_string();
    }

    let mut lines = Vec::with_capacity(1 + records.len() + habits.len());
    lines.push(CSV_HEADER.to_string());

    for record in records {
        lines.push(format!(
            "{},{},{}",
            quote(&record.habit_name),
            record.date,
            if record.completed { "Yes" } else { "No" }
        ));
    }

    for habit in habits {
        if !records.iter().any(|r| r.habit_id == habit.id) {
            lines.push(format!("{},N/A,No", quote(&habit.name)));
        }
    }

    lines.join("\n")
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn habit(id: &str, name: &str) -> Habit {
        Habit {
            id: id.into(),
            name: name.into(),
            created_at: "2026-08-01T06:00:00+00:00".into(),
            reminder_time: None,
        }
    }

    fn record(habit_id: &str, habit_name: &str, date: &str) -> CompletionRecord {
        CompletionRecord {
            habit_id: habit_id.into(),
            habit_name: habit_name.into(),
            date: date.into(),
            completed: true,
        }
    }

    #[test]
    fn empty_store_exports_sentinel() {
        assert_eq!(build_csv(&[], &[]), EMPTY_EXPORT);
    }

    #[test]
    fn completions_become_yes_rows() {
        let habits = [habit("1", "Stretch")];
        let records = [
            record("1", "Stretch", "2026-08-01"),
            record("1", "Stretch", "2026-08-02"),
        ];

        let csv = build_csv(&habits, &records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Habit Name,Date,Completed");
        assert_eq!(lines[1], "\"Stretch\",2026-08-01,Yes");
        assert_eq!(lines[2], "\"Stretch\",2026-08-02,Yes");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn habit_without_completions_gets_a_placeholder_row() {
        let habits = [habit("1", "Stretch"), habit("2", "Floss")];
        let records = [record("1", "Stretch", "2026-08-01")];

        let csv = build_csv(&habits, &records);
        assert!(csv.contains("\"Floss\",N/A,No"));
        assert!(!csv.contains("\"Stretch\",N/A,No"));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let habits = [habit("1", "Say \"hi\", daily")];
        let csv = build_csv(&habits, &[]);
        assert!(csv.contains("\"Say \"\"hi\"\", daily\",N/A,No"));
    }
}
