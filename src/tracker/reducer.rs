//! Activity store: state, actions and the pure transition function.
//!
//! The store trusts its callers. It never validates records and never fails;
//! invalid input is either rejected upstream by the form or tolerated here
//! (deleting or selecting an unknown id changes nothing else).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::activity::Activity;

/// Whether the form should create a new entry or edit a selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Create,
    Edit,
}

/// Snapshot of the tracker state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityState {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_id: Option<String>,
}

impl ActivityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    /// The current selection. An empty id counts as no selection.
    pub fn selected_id(&self) -> Option<&str> {
        self.active_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The activity selected for editing, if the selection still resolves.
    pub fn active_activity(&self) -> Option<&Activity> {
        self.selected_id().and_then(|id| self.activity(id))
    }

    pub fn mode(&self) -> SelectionMode {
        if self.selected_id().is_some() {
            SelectionMode::Edit
        } else {
            SelectionMode::Create
        }
    }
}

/// Intents submitted by the list and form views.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityAction {
    SaveActivity { activity: Activity },
    SetActiveId { id: String },
    DeleteActivity { id: String },
}

impl ActivityAction {
    pub fn name(&self) -> &'static str {
        match self {
            ActivityAction::SaveActivity { .. } => "save-activity",
            ActivityAction::SetActiveId { .. } => "set-activeId",
            ActivityAction::DeleteActivity { .. } => "delete-activity",
        }
    }
}

/// Computes the state that follows `state` once `action` is applied.
///
/// `state` is never modified. Saving upserts by id and always returns to
/// create mode.
pub fn transition(state: &ActivityState, action: ActivityAction) -> ActivityState {
    let kind = action.name();
    let next = match action {
        ActivityAction::SaveActivity { activity } => {
            let mut activities = state.activities.clone();
            match activities.iter_mut().find(|existing| existing.id == activity.id) {
                Some(existing) => *existing = activity,
                None => activities.push(activity),
            }
            ActivityState {
                activities,
                active_id: None,
            }
        }
        ActivityAction::SetActiveId { id } => ActivityState {
            activities: state.activities.clone(),
            active_id: Some(id),
        },
        ActivityAction::DeleteActivity { id } => {
            let mut activities = state.activities.clone();
            if let Some(index) = activities.iter().position(|activity| activity.id == id) {
                activities.remove(index);
            }
            ActivityState {
                activities,
                active_id: state.active_id.clone(),
            }
        }
    };
    debug!(
        action = kind,
        activities = next.activities.len(),
        editing = next.selected_id().is_some(),
        "applied activity action"
    );
    next
}

/// Session owner of the tracker state; applies actions one at a time.
#[derive(Debug, Default)]
pub struct ActivityStore {
    state: ActivityState,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ActivityAction) -> &ActivityState {
        self.state = transition(&self.state, action);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch(calories: f64) -> Activity {
        Activity::new("a1", 1, "Lunch", calories)
    }

    fn save(activity: Activity) -> ActivityAction {
        ActivityAction::SaveActivity { activity }
    }

    #[test]
    fn save_appends_then_replaces_in_place() {
        let empty = ActivityState::new();
        let first = transition(&empty, save(lunch(500.0)));
        assert_eq!(first.activities, vec![lunch(500.0)]);
        assert_eq!(first.active_id, None);

        let updated = transition(&first, save(lunch(650.0)));
        assert_eq!(updated.activities, vec![lunch(650.0)]);

        let deleted = transition(
            &updated,
            ActivityAction::DeleteActivity { id: "a1".into() },
        );
        assert!(deleted.is_empty());
    }

    #[test]
    fn prior_state_is_left_untouched() {
        let start = transition(&ActivityState::new(), save(lunch(500.0)));
        let snapshot = start.clone();
        let _ = transition(&start, save(lunch(900.0)));
        let _ = transition(&start, ActivityAction::DeleteActivity { id: "a1".into() });
        let _ = transition(&start, ActivityAction::SetActiveId { id: "a1".into() });
        assert_eq!(start, snapshot);
    }

    #[test]
    fn update_keeps_position() {
        let mut state = ActivityState::new();
        for (id, name) in [("a", "Oats"), ("b", "Run"), ("c", "Salad")] {
            state = transition(&state, save(Activity::new(id, 1, name, 100.0)));
        }
        state = transition(&state, save(Activity::new("b", 2, "Long run", 450.0)));
        let names: Vec<_> = state.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Oats", "Long run", "Salad"]);
    }

    #[test]
    fn save_clears_selection_even_for_new_records() {
        let mut state = transition(&ActivityState::new(), save(lunch(500.0)));
        state = transition(&state, ActivityAction::SetActiveId { id: "a1".into() });
        assert_eq!(state.mode(), SelectionMode::Edit);
        state = transition(&state, save(Activity::new("a2", 2, "Swim", 300.0)));
        assert_eq!(state.mode(), SelectionMode::Create);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let state = transition(&ActivityState::new(), save(lunch(500.0)));
        let next = transition(&state, ActivityAction::DeleteActivity { id: "zz".into() });
        assert_eq!(next, state);
    }

    #[test]
    fn set_active_id_does_not_validate() {
        let state = ActivityState::new();
        let next = transition(&state, ActivityAction::SetActiveId { id: "ghost".into() });
        assert_eq!(next.active_id.as_deref(), Some("ghost"));
        assert!(next.active_activity().is_none());
        assert!(next.activities.is_empty());
    }

    #[test]
    fn empty_active_id_means_no_selection() {
        let mut state = transition(
            &ActivityState::new(),
            save(Activity::new("", 1, "Blank id", 100.0)),
        );
        state = transition(&state, ActivityAction::SetActiveId { id: String::new() });
        assert_eq!(state.active_id.as_deref(), Some(""));
        assert_eq!(state.selected_id(), None);
        assert_eq!(state.mode(), SelectionMode::Create);
        assert!(state.active_activity().is_none());
    }

    #[test]
    fn deleting_the_selected_activity_keeps_selection() {
        let mut state = transition(&ActivityState::new(), save(lunch(500.0)));
        state = transition(&state, ActivityAction::SetActiveId { id: "a1".into() });
        let next = transition(&state, ActivityAction::DeleteActivity { id: "a1".into() });
        assert!(next.is_empty());
        assert_eq!(next.active_id.as_deref(), Some("a1"));
        assert_eq!(next.mode(), SelectionMode::Edit);
        assert!(next.active_activity().is_none());
    }

    #[test]
    fn store_accepts_unvalidated_records() {
        let mut store = ActivityStore::new();
        store.dispatch(save(Activity::new("x", 42, "", 0.0)));
        assert_eq!(store.state().len(), 1);
        assert_eq!(store.state().activities[0].category, 42);
    }

    #[test]
    fn action_names_match_intents() {
        assert_eq!(save(lunch(1.0)).name(), "save-activity");
        assert_eq!(
            ActivityAction::SetActiveId { id: "a".into() }.name(),
            "set-activeId"
        );
        assert_eq!(
            ActivityAction::DeleteActivity { id: "a".into() }.name(),
            "delete-activity"
        );
    }
}
