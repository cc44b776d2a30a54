use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryId;

/// A single food or exercise entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: String,
    pub category: CategoryId,
    pub name: String,
    pub calories: f64,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        category: CategoryId,
        name: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            calories,
        }
    }
}

/// Source of fresh activity identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique_and_parseable() {
        let mut ids = UuidIds;
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn closures_act_as_generators() {
        let mut counter = 0;
        let mut ids = move || {
            counter += 1;
            format!("id-{counter}")
        };
        assert_eq!(ids.next_id(), "id-1");
        assert_eq!(ids.next_id(), "id-2");
    }

    #[test]
    fn activity_serializes_with_plain_fields() {
        let activity = Activity::new("a1", 1, "Lunch", 500.0);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["id"], "a1");
        assert_eq!(json["category"], 1);
        assert_eq!(json["calories"], 500.0);
    }
}
