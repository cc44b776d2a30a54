use calorie_core::cli::forms::ActivityForm;
use calorie_core::errors::ValidationError;
use calorie_core::tracker::{
    ActivityStore, CategoryCatalog, SelectionMode, UuidIds, EXERCISE, FOOD,
};

#[test]
fn create_then_edit_through_the_form() {
    let catalog = CategoryCatalog::default();
    let mut store = ActivityStore::new();
    let mut form = ActivityForm::new(&catalog, UuidIds);
    let first_id = form.draft().id.clone();
    assert!(!first_id.is_empty());
    assert_eq!(form.submit_label(&catalog), "Save Food");

    form.set_name("Breakfast");
    form.set_calories(350.0);
    store.dispatch(form.submit().unwrap());
    form.sync(store.state());
    assert_ne!(form.draft().id, first_id);
    assert_eq!(form.draft().category, FOOD);
    assert!(form.draft().name.is_empty());

    form.set_category(EXERCISE);
    form.set_name("Walk");
    form.set_calories_input("120").unwrap();
    store.dispatch(form.submit().unwrap());
    assert_eq!(store.state().len(), 2);

    let walk_id = store.state().activities[1].id.clone();
    store.dispatch(calorie_core::cli::list_view::edit_action(walk_id.clone()));
    assert_eq!(store.state().mode(), SelectionMode::Edit);
    assert!(form.sync(store.state()));
    assert_eq!(form.draft().name, "Walk");
    assert_eq!(form.submit_label(&catalog), "Save Exercise");

    form.set_calories(180.0);
    store.dispatch(form.submit().unwrap());
    form.sync(store.state());
    assert_eq!(store.state().len(), 2);
    assert_eq!(store.state().activities[1].id, walk_id);
    assert_eq!(store.state().activities[1].calories, 180.0);
    assert_eq!(store.state().mode(), SelectionMode::Create);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let catalog = CategoryCatalog::default();
    let store = ActivityStore::new();
    let mut form = ActivityForm::new(&catalog, UuidIds);

    form.set_calories(100.0);
    assert_eq!(form.submit(), Err(ValidationError::EmptyName));

    form.set_name("Soda");
    form.set_calories(-1.0);
    assert_eq!(
        form.submit(),
        Err(ValidationError::NonPositiveCalories(-1.0))
    );
    assert_eq!(form.draft().name, "Soda");
    assert!(store.state().is_empty());
}
