use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// seconds, minutes and hours all count as today
    SubDay,
    Week,
    Day,
    Month,
}

impl Unit {
    fn days(self) -> i64 {
        match self {
            Unit::SubDay => 0,
            Unit::Week => 7,
            Unit::Day => 1,
            Unit::Month => 30,
        }
    }
}

fn detect_unit(age: &str, words: &[&str]) -> Option<Unit> {
    let has = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));
    if age.contains("month") {
        Some(Unit::Month)
    } else if has(&["day", "days"]) {
        Some(Unit::Day)
    } else if has(&["week", "weeks"]) {
        Some(Unit::Week)
    } else if has(&["second", "seconds", "minute", "minutes", "hour", "hours"]) {
        Some(Unit::SubDay)
    } else {
        None
    }
}

fn try_convert_age(age: &str, today: NaiveDate) -> Option<NaiveDate> {
    let words = age.split_whitespace().collect::<Vec<_>>();
    let unit = detect_unit(age, &words)?;
    if unit == Unit::SubDay {
        return Some(today);
    }
    let amount: i64 = (*words.first()?).parse().ok()?;
    let delta = Duration::try_days(amount.checked_mul(unit.days())?)?;
    today.checked_sub_signed(delta)
}

/// Turns a posting age like `"3 days ago"` into the date it refers to.
///
/// Months are approximated as 30 days. Anything that cannot be read,
/// including a missing or non numeric amount, resolves to `today`.
pub fn resolve(age: &str, today: NaiveDate) -> NaiveDate {
    match try_convert_age(age, today) {
        Some(date) => date,
        None => {
            log::debug!("could not resolve posting age '{}', using {}", age, today);
            today
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sub_day_units_resolve_to_today() {
        let today = date(2024, 1, 10);
        for age in [
            "1 second ago",
            "30 seconds ago",
            "1 minute ago",
            "45 minutes ago",
            "1 hour ago",
            "23 hours ago",
        ] {
            assert_eq!(resolve(age, today), today, "age: {}", age);
        }
    }

    #[test]
    fn test_days() {
        let today = date(2024, 1, 10);
        assert_eq!(resolve("2 days ago", today), date(2024, 1, 8));
        assert_eq!(resolve("1 day ago", today), date(2024, 1, 9));
        assert_eq!(resolve("10 days ago", today), date(2023, 12, 31));
    }

    #[test]
    fn test_weeks() {
        let today = date(2024, 1, 10);
        assert_eq!(resolve("1 week ago", today), date(2024, 1, 3));
        assert_eq!(resolve("3 weeks ago", today), date(2023, 12, 20));
    }

    #[test]
    fn test_months_are_thirty_days() {
        let today = date(2024, 3, 31);
        assert_eq!(resolve("1 month ago", today), date(2024, 3, 1));
        assert_eq!(resolve("2 months ago", today), date(2024, 1, 31));
    }

    #[test]
    fn test_every_unit_is_a_fixed_multiple() {
        let today = date(2023, 6, 15);
        for n in 0..40i64 {
            for (unit, days) in [("hours", 0), ("days", 1), ("weeks", 7), ("months", 30)] {
                let age = format!("{} {} ago", n, unit);
                assert_eq!(
                    resolve(&age, today),
                    today - Duration::days(n * days),
                    "age: {}",
                    age
                );
            }
        }
    }

    #[test]
    fn test_unreadable_input_falls_back_to_today() {
        let today = date(2024, 1, 10);
        for age in [
            "",
            "today",
            "days ago",
            "a few days ago",
            "30+ days ago",
            "one week ago",
            "3 fortnights ago",
            "999999999999999999 months ago",
        ] {
            assert_eq!(resolve(age, today), today, "age: {}", age);
        }
    }

    #[test]
    fn test_month_wins_over_other_units() {
        let today = date(2024, 3, 31);
        assert_eq!(resolve("1 month and 2 days ago", today), date(2024, 3, 1));
    }
}
