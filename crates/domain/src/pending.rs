use indexmap::IndexMap;
use log::warn;

use crate::{Catalog, Completion, Name, WeekOfYear};

/// Pending exercises per body part, in the order the body parts were requested.
pub type Pending = IndexMap<Name, Vec<Name>>;

/// Computes the exercises of the given body parts that have no completion in `week`.
///
/// Without a filter all body parts of the catalog are considered. Body parts without any
/// pending exercise are omitted, unknown body parts are skipped.
#[must_use]
pub fn pending(
    catalog: &Catalog,
    completions: &[Completion],
    week: WeekOfYear,
    bodyparts: Option<&[Name]>,
) -> Pending {
    let selected = match bodyparts {
        Some(bodyparts) => bodyparts.to_vec(),
        None => catalog.bodypart_names().cloned().collect(),
    };

    let mut result = Pending::new();

    for bodypart in selected {
        let Some(exercises) = catalog.exercises_of(&bodypart) else {
            warn!("body part {bodypart} not found in catalog");
            continue;
        };

        let remaining = exercises
            .iter()
            .filter(|exercise| {
                !completions
                    .iter()
                    .any(|c| c.exercise == **exercise && c.week_of_year == week)
            })
            .cloned()
            .collect::<Vec<_>>();

        if !remaining.is_empty() {
            result.insert(bodypart, remaining);
        }
    }

    result
}

/// Body parts that still have pending exercises in `week`, in catalog order.
#[must_use]
pub fn available_bodyparts(
    catalog: &Catalog,
    completions: &[Completion],
    week: WeekOfYear,
) -> Vec<Name> {
    pending(catalog, completions, week, None)
        .into_keys()
        .collect()
}

#[must_use]
pub fn flatten(pending: &Pending) -> Vec<Name> {
    pending.values().flatten().cloned().collect()
}
