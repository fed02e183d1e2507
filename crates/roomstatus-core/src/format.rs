//! Display formatting for panel strings.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Formats an instant as a 12-hour time of day in the given offset.
///
/// No leading zero on the hour: `9:05 AM`, `2:00 PM`.
pub fn time_of_day(instant: DateTime<Utc>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format("%-I:%M %p")
        .to_string()
        .trim()
        .to_string()
}

/// Formats an all-day date the way calendar feeds spell it (`YYYY-MM-DD`).
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a minute countdown for humans.
///
/// `None` means there is nothing to count down to.
pub fn minutes_label(minutes: Option<i64>) -> String {
    match minutes {
        None => "-".to_string(),
        Some(m) if m.abs() < 60 => format!("{} min", m),
        Some(m) => {
            let sign = if m < 0 { "-" } else { "" };
            let m = m.abs();
            if m % 60 == 0 {
                format!("{}{}h", sign, m / 60)
            } else {
                format!("{}{}h{:02}", sign, m / 60, m % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, h, min, 0).unwrap()
    }

    #[test]
    fn time_of_day_has_no_leading_zero() {
        let offset = FixedOffset::east_opt(0).unwrap();
        assert_eq!(time_of_day(utc(9, 5), &offset), "9:05 AM");
        assert_eq!(time_of_day(utc(14, 0), &offset), "2:00 PM");
        assert_eq!(time_of_day(utc(0, 30), &offset), "12:30 AM");
        assert_eq!(time_of_day(utc(12, 0), &offset), "12:00 PM");
    }

    #[test]
    fn time_of_day_uses_offset() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(time_of_day(utc(14, 0), &offset), "9:00 AM");
    }

    #[test]
    fn date_label_is_iso() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_label(d), "2025-03-07");
    }

    #[test]
    fn minutes_labels() {
        assert_eq!(minutes_label(None), "-");
        assert_eq!(minutes_label(Some(0)), "0 min");
        assert_eq!(minutes_label(Some(45)), "45 min");
        assert_eq!(minutes_label(Some(60)), "1h");
        assert_eq!(minutes_label(Some(95)), "1h35");
        assert_eq!(minutes_label(Some(-3)), "-3 min");
    }
}
