use std::collections::{BTreeMap, HashSet};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{Catalog, Name, WeekOfYear};

#[derive(Debug, Display, Clone, Copy, EnumIter, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const COUNT: usize = 5;
}

/// Exercises assigned to each training day. A day without exercises is a rest day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPlan {
    days: BTreeMap<Day, Vec<Name>>,
}

impl WeeklyPlan {
    fn rest() -> Self {
        Self {
            days: Day::iter().map(|day| (day, Vec::new())).collect(),
        }
    }

    #[must_use]
    pub fn exercises(&self, day: Day) -> &[Name] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_rest_day(&self, day: Day) -> bool {
        self.exercises(day).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Name])> {
        self.days.iter().map(|(day, exercises)| (*day, exercises.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exercises already assigned in the current distribution cycle.
pub type Excluded = HashSet<Name>;

/// Distributes all exercises of the catalog that are not excluded across the training days.
///
/// The exercises are shuffled with the week number as seed, so the same inputs always yield
/// the same plan. When every exercise is excluded, the cycle starts over with the whole
/// catalog. The returned set contains the previously excluded and the newly assigned
/// exercises.
#[must_use]
pub fn distribute(
    catalog: &Catalog,
    excluded: &Excluded,
    week: WeekOfYear,
) -> (WeeklyPlan, Excluded) {
    let all_exercises = catalog.all_exercises();

    if all_exercises.is_empty() {
        return (WeeklyPlan::rest(), excluded.clone());
    }

    let mut excluded = excluded.clone();
    let mut available = all_exercises
        .iter()
        .filter(|exercise| !excluded.contains(*exercise))
        .cloned()
        .collect::<Vec<_>>();

    if available.is_empty() {
        available = all_exercises;
        excluded.clear();
    }

    let mut rng = StdRng::seed_from_u64(u64::from(*week));
    available.shuffle(&mut rng);

    let per_day = available.len() / Day::COUNT;
    let extra = available.len() % Day::COUNT;

    let mut plan = WeeklyPlan::rest();
    let mut remaining = available.iter();
    for (i, day) in Day::iter().enumerate() {
        let count = per_day + usize::from(i < extra);
        plan.days
            .insert(day, remaining.by_ref().take(count).cloned().collect());
    }

    excluded.extend(available);

    (plan, excluded)
}
