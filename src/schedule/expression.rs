use super::types::ScheduleType;
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use cron::Schedule;
use std::str::FromStr;

/// Local-time layouts accepted for `once` schedules, most specific first.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Check `value` against the grammar of `schedule_type`.
pub fn validate_schedule(schedule_type: ScheduleType, value: &str) -> Result<(), ValidationError> {
    let valid = match schedule_type {
        ScheduleType::Cron => is_valid_cron(value),
        ScheduleType::Interval => is_valid_interval(value),
        ScheduleType::Once => is_valid_timestamp(value),
    };

    if valid {
        return Ok(());
    }

    Err(match schedule_type {
        ScheduleType::Cron => ValidationError::Cron(value.to_string()),
        ScheduleType::Interval => ValidationError::Interval(value.to_string()),
        ScheduleType::Once => ValidationError::Timestamp(value.to_string()),
    })
}

fn is_valid_cron(expression: &str) -> bool {
    normalize_expression(expression).is_some_and(|normalized| Schedule::from_str(&normalized).is_ok())
}

fn normalize_expression(expression: &str) -> Option<String> {
    let expression = expression.trim();
    // shorthand macros such as @daily are understood by the crate as-is
    if expression.starts_with('@') {
        return Some(expression.to_string());
    }

    let fields: Vec<&str> = expression.split_whitespace().collect();
    match fields.as_slice() {
        // standard crontab syntax: minute hour day month weekday
        [minute, hour, day, month, weekday] => Some(format!(
            "0 {minute} {hour} {day} {month} {}",
            crontab_weekdays(weekday)
        )),
        // crate-native syntax includes seconds (+ optional year)
        [_, _, _, _, _, _] | [_, _, _, _, _, _, _] => Some(expression.to_string()),
        _ => None,
    }
}

const WEEKDAY_NAMES: [&str; 8] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Crontab numbers weekdays 0-7 with both ends meaning Sunday; the crate
/// numbers them 1-7. Names mean the same thing to both, so numeric weekdays
/// are spelled out.
fn crontab_weekdays(field: &str) -> String {
    field
        .split(',')
        .map(crontab_weekday_item)
        .collect::<Vec<_>>()
        .join(",")
}

fn crontab_weekday_item(item: &str) -> String {
    let (range, step) = match item.split_once('/') {
        Some((range, step)) => (range, Some(step)),
        None => (item, None),
    };

    let rewritten = match range.split_once('-') {
        Some(("0", "7")) => "Sun-Sat".to_string(),
        // "n-7" would wrap backwards once named; split Sunday off instead
        Some((start, "7")) if step.is_none() && start != "0" && start != "7" => {
            format!("{}-Sat,Sun", weekday_name(start))
        }
        Some((start, end)) => format!("{}-{}", weekday_name(start), weekday_name(end)),
        None => weekday_name(range),
    };

    match step {
        Some(step) => format!("{rewritten}/{step}"),
        None => rewritten,
    }
}

fn weekday_name(token: &str) -> String {
    token
        .parse::<usize>()
        .ok()
        .and_then(|day| WEEKDAY_NAMES.get(day))
        .map_or_else(|| token.to_string(), |name| (*name).to_string())
}

fn is_valid_interval(value: &str) -> bool {
    value.trim().parse::<u64>().is_ok_and(|ms| ms > 0)
}

fn is_valid_timestamp(value: &str) -> bool {
    let value = value.trim();
    if NAIVE_TIMESTAMP_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
    {
        return true;
    }
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return true;
    }
    // Offset-qualified instants are still a valid point in time.
    DateTime::parse_from_rfc3339(value).is_ok()
}
