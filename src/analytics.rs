use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

pub const TOP_N: usize = 5;
const WEEK_COUNT: usize = 8;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean rounded to one decimal; `None` for no values.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(round1(sum / count as f64))
    }
}

/// Share of `part` in `whole` as a whole-number percentage.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some((part as f64 / whole as f64 * 100.0).round())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Count {
    pub value: String,
    pub count: u64,
}

/// Occurrence counts of string values, one increment per occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable(BTreeMap<String, u64>);

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every item of `field` across all `rows`.
    pub fn over<'a, T: 'a, I, F>(rows: I, field: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&'a T) -> &'a [String],
    {
        let mut table = Self::new();
        for row in rows {
            table.extend(field(row));
        }
        table
    }

    /// Counts one value per row, ignoring blanks.
    pub fn of_values<'a, T: 'a, I, F>(rows: I, field: F) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&'a T) -> &'a str,
    {
        let mut table = Self::new();
        for row in rows {
            table.add(field(row));
        }
        table
    }

    pub fn add(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        *self.0.entry(value.to_string()).or_insert(0) += 1;
    }

    pub fn extend<'a>(&mut self, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            self.add(value);
        }
    }

    pub fn get(&self, value: &str) -> u64 {
        self.0.get(value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts sorted descending, ties broken by value.
    pub fn ranked(&self) -> Vec<Count> {
        let mut counts: Vec<Count> = self
            .0
            .iter()
            .map(|(value, count)| Count {
                value: value.clone(),
                count: *count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
        counts
    }

    pub fn top(&self, n: usize) -> Vec<Count> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn most_common(&self) -> Option<Count> {
        self.ranked().into_iter().next()
    }
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub entries: u64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyPoint {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub entries: u64,
    pub days_counted: u8,
    pub avg_per_day: f64,
}

/// How many entries were logged per day over the last week and per ISO week
/// over the last eight weeks.
#[derive(Debug, Serialize)]
pub struct ActivitySeries {
    pub last_7_days: Vec<DailyPoint>,
    pub weekly_totals: Vec<WeeklyPoint>,
}

pub fn build_activity<I>(today: NaiveDate, dates: I) -> ActivitySeries
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for date in dates {
        *per_day.entry(date).or_insert(0) += 1;
    }
    let count_on = |date: NaiveDate| per_day.get(&date).copied().unwrap_or(0);

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        last_7_days.push(DailyPoint {
            date: date.to_string(),
            entries: count_on(date),
        });
    }

    let current_week_start = week_start(today);
    let mut weekly_totals = Vec::with_capacity(WEEK_COUNT);
    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let entries: u64 = (0..7)
            .map(|day_offset| count_on(start + Duration::days(day_offset)))
            .sum();

        let days_counted = if today < start {
            0
        } else if today > end {
            7
        } else {
            (today - start).num_days() as u8 + 1
        };
        let denom = if days_counted == 0 { 1.0 } else { f64::from(days_counted) };

        weekly_totals.push(WeeklyPoint {
            week: week_label(start),
            start_date: start.to_string(),
            end_date: end.to_string(),
            entries,
            days_counted,
            avg_per_day: round1(entries as f64 / denom),
        });
    }

    ActivitySeries {
        last_7_days,
        weekly_totals,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
