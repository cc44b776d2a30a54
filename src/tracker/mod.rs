//! Tracker domain: category catalog, activity records, the reducer-style
//! store and derived calorie figures.

pub mod activity;
pub mod category;
pub mod reducer;
pub mod summary;

pub use activity::{Activity, IdGenerator, UuidIds};
pub use category::{Category, CategoryCatalog, CategoryId, CategoryKind, EXERCISE, FOOD};
pub use reducer::{transition, ActivityAction, ActivityState, ActivityStore, SelectionMode};
pub use summary::{net_calories, totals_by_category, CalorieSummary};
