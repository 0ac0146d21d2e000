use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's local calendar date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    date_key(Local::now().date_naive())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The 7 dates of the week containing `reference`, Monday through Sunday.
pub fn week_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(reference);
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2026-01-07 is a Wednesday.
        let wednesday = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());

        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(week_start(monday), monday);

        let sunday = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    }

    #[test]
    fn week_dates_cover_monday_through_sunday() {
        let reference = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let dates = week_dates(reference);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        assert!(dates.contains(&reference));
    }

    #[test]
    fn date_key_is_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(date_key(date), "2026-08-03");
    }
}
