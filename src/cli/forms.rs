//! Activity entry form.
//!
//! The form owns a draft [`Activity`] that is edited field by field, checked
//! locally, and handed to the store as a single `SaveActivity` action. The
//! store never sees a half-edited draft.

use tracing::debug;

use crate::errors::ValidationError;
use crate::tracker::{
    Activity, ActivityAction, ActivityState, CategoryCatalog, CategoryId, IdGenerator, FOOD,
};

/// Editable buffer backing the form view.
pub struct ActivityForm<G: IdGenerator> {
    draft: Activity,
    ids: G,
    default_category: CategoryId,
    synced_id: Option<String>,
}

impl<G: IdGenerator> ActivityForm<G> {
    pub fn new(catalog: &CategoryCatalog, ids: G) -> Self {
        let default_category = catalog
            .default_category()
            .map(|category| category.id)
            .unwrap_or(FOOD);
        let mut form = Self {
            draft: Activity::new(String::new(), default_category, String::new(), 0.0),
            ids,
            default_category,
            synced_id: None,
        };
        form.reset();
        form
    }

    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// Replaces the draft with a blank one carrying a fresh id.
    pub fn reset(&mut self) {
        self.draft = Activity::new(self.ids.next_id(), self.default_category, "", 0.0);
        debug!(id = %self.draft.id, "reset activity draft");
    }

    /// Follows the store's selection. When `active_id` changes to a value that
    /// resolves, the draft is replaced by a copy of that activity. Returns
    /// whether the draft was pre-populated.
    pub fn sync(&mut self, state: &ActivityState) -> bool {
        let selected = state.selected_id();
        if selected == self.synced_id.as_deref() {
            return false;
        }
        self.synced_id = selected.map(str::to_string);
        match state.active_activity() {
            Some(selected) => {
                self.draft = selected.clone();
                debug!(id = %selected.id, "loaded activity into draft");
                true
            }
            None => false,
        }
    }

    pub fn set_category(&mut self, category: CategoryId) {
        self.draft.category = category;
    }

    /// Like [`set_category`](Self::set_category) but only accepts ids the
    /// catalog knows about.
    pub fn select_category(
        &mut self,
        catalog: &CategoryCatalog,
        category: CategoryId,
    ) -> Result<(), ValidationError> {
        if catalog.get(category).is_none() {
            return Err(ValidationError::UnknownCategory(category));
        }
        self.set_category(category);
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_calories(&mut self, calories: f64) {
        self.draft.calories = calories;
    }

    /// Parses raw text into the calories field. Non-numeric input leaves the
    /// field unchanged.
    pub fn set_calories_input(&mut self, input: &str) -> Result<(), ValidationError> {
        let value = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidCalories(input.trim().to_string()))?;
        self.set_calories(value);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        // NaN fails this comparison too
        let positive = self.draft.calories > 0.0;
        if !positive {
            return Err(ValidationError::NonPositiveCalories(self.draft.calories));
        }
        Ok(())
    }

    /// Whether the submit control is enabled.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Turns a valid draft into a save action and starts a fresh draft.
    pub fn submit(&mut self) -> Result<ActivityAction, ValidationError> {
        self.validate()?;
        let fresh = Activity::new(self.ids.next_id(), self.default_category, "", 0.0);
        let activity = std::mem::replace(&mut self.draft, fresh);
        debug!(id = %activity.id, "submitted activity draft");
        Ok(ActivityAction::SaveActivity { activity })
    }

    pub fn submit_label(&self, catalog: &CategoryCatalog) -> String {
        match catalog.resolve_name(self.draft.category) {
            Some(name) => format!("Save {name}"),
            None => "Save Activity".to_string(),
        }
    }
}
