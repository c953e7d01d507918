//! Daily rollup of journal records into per-day summaries.
//!
//! Pure in-memory aggregation: callers fetch the three record sets for a
//! user and window, then hand them to [`aggregate`]. The rollup holds no
//! state and never fails; records dated outside the window are dropped.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// One food journal row joined with its food item's per-serving macros.
/// The macro fields are optional because the item side of the join can be
/// missing; absent values count as zero.
#[derive(Debug, Clone)]
pub struct NutritionRecord {
    pub date: NaiveDate,
    pub servings: f64,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ExerciseRecord {
    pub date: NaiveDate,
    pub calories_burned: i32,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone)]
pub struct WeightSample {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Zero-filled roll-up for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories_burned: i64,
    pub exercise_minutes: i64,
    pub weight: Option<f64>,
}

impl DailySummary {
    fn zeroed(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            calories_burned: 0,
            exercise_minutes: 0,
            weight: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories_burned: i64,
    pub exercise_minutes: i64,
}

/// Per-day averages, rounded to the nearest whole unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAverages {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    pub calories_burned: i64,
    pub exercise_minutes: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_data: Vec<DailySummary>,
    pub totals: WindowTotals,
    pub averages: WindowAverages,
}

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// The Sunday-through-Saturday week containing `pivot`.
    pub fn week_of(pivot: NaiveDate) -> Self {
        let start = pivot - Duration::days(pivot.weekday().num_days_from_sunday() as i64);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// The calendar month containing `pivot`.
    pub fn month_of(pivot: NaiveDate) -> Self {
        let start = pivot
            .with_day(1)
            .expect("day 1 exists in every month");
        let next_month = if pivot.month() == 12 {
            NaiveDate::from_ymd_opt(pivot.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(pivot.year(), pivot.month() + 1, 1)
        };
        let end = next_month
            .map(|first| first - Duration::days(1))
            .unwrap_or(pivot);
        Self { start, end }
    }
}

/// Roll up the three record sets into one summary per calendar day in
/// `[start, end]`, plus window totals and per-day averages.
///
/// Every day in the window appears exactly once, zero-filled when no
/// records touch it. When `start > end` the day sequence is empty and
/// totals and averages are all zero.
pub fn aggregate(
    start: NaiveDate,
    end: NaiveDate,
    nutrition: &[NutritionRecord],
    exercise: &[ExerciseRecord],
    weights: &[WeightSample],
) -> WindowResult {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();
    let mut day = start;
    while day <= end {
        days.insert(day, DailySummary::zeroed(day));
        day += Duration::days(1);
    }

    for record in nutrition {
        if let Some(summary) = days.get_mut(&record.date) {
            // Zero or negative servings count as a single serving
            let multiplier = if record.servings > 0.0 {
                record.servings
            } else {
                1.0
            };
            summary.calories += record.calories.unwrap_or(0.0) * multiplier;
            summary.protein += record.protein.unwrap_or(0.0) * multiplier;
            summary.carbs += record.carbs.unwrap_or(0.0) * multiplier;
            summary.fat += record.fat.unwrap_or(0.0) * multiplier;
        }
    }

    for record in exercise {
        if let Some(summary) = days.get_mut(&record.date) {
            summary.calories_burned += i64::from(record.calories_burned);
            summary.exercise_minutes += i64::from(record.duration_minutes);
        }
    }

    // Last sample in input order wins when a date repeats.
    for sample in weights {
        if let Some(summary) = days.get_mut(&sample.date) {
            summary.weight = Some(sample.weight_kg);
        }
    }

    let daily_data: Vec<DailySummary> = days.into_values().collect();

    let totals = daily_data
        .iter()
        .fold(WindowTotals::default(), |mut acc, day| {
            acc.calories += day.calories;
            acc.protein += day.protein;
            acc.carbs += day.carbs;
            acc.fat += day.fat;
            acc.calories_burned += day.calories_burned;
            acc.exercise_minutes += day.exercise_minutes;
            acc
        });

    let day_count = daily_data.len().max(1) as f64;
    let per_day = |total: f64| (total / day_count).round() as i64;
    let averages = WindowAverages {
        calories: per_day(totals.calories),
        protein: per_day(totals.protein),
        carbs: per_day(totals.carbs),
        fat: per_day(totals.fat),
        calories_burned: per_day(totals.calories_burned as f64),
        exercise_minutes: per_day(totals.exercise_minutes as f64),
    };

    WindowResult {
        start_date: start,
        end_date: end,
        daily_data,
        totals,
        averages,
    }
}
