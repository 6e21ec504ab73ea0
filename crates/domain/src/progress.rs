use std::collections::BTreeMap;

use crate::{Completion, DayOfWeek, Name, WeekOfYear};

/// Exercises completed in `week`, grouped by day of week.
#[must_use]
pub fn week_progress(completions: &[Completion], week: WeekOfYear) -> BTreeMap<DayOfWeek, Vec<Name>> {
    let mut result: BTreeMap<DayOfWeek, Vec<Name>> = BTreeMap::new();
    for completion in completions.iter().filter(|c| c.week_of_year == week) {
        result
            .entry(completion.day_of_week)
            .or_default()
            .push(completion.exercise.clone());
    }
    result
}
