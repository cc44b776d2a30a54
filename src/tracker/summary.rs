//! Derived calorie figures. Nothing here is stored; every value is
//! recomputed from the current state.

use std::collections::BTreeMap;

use super::{
    category::{CategoryCatalog, CategoryId, CategoryKind},
    reducer::ActivityState,
};

/// Consumed, burned and net calories for a state snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalorieSummary {
    pub consumed: f64,
    pub burned: f64,
}

impl CalorieSummary {
    /// Activities whose category is unknown to `catalog` count toward
    /// neither side.
    pub fn from_state(state: &ActivityState, catalog: &CategoryCatalog) -> Self {
        state
            .activities
            .iter()
            .fold(Self::default(), |mut summary, activity| {
                match catalog.kind_of(activity.category) {
                    Some(CategoryKind::Intake) => summary.consumed += activity.calories,
                    Some(CategoryKind::Expenditure) => summary.burned += activity.calories,
                    None => {}
                }
                summary
            })
    }

    pub fn net(&self) -> f64 {
        self.consumed - self.burned
    }
}

/// Sum of calories per category id, including ids missing from the catalog.
pub fn totals_by_category(state: &ActivityState) -> BTreeMap<CategoryId, f64> {
    let mut totals = BTreeMap::new();
    for activity in &state.activities {
        *totals.entry(activity.category).or_insert(0.0) += activity.calories;
    }
    totals
}

pub fn net_calories(state: &ActivityState, catalog: &CategoryCatalog) -> f64 {
    CalorieSummary::from_state(state, catalog).net()
}
