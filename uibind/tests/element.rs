use uibind::{find_element, find_element_mut, Element};

// ============================================================================
// Class state
// ============================================================================

#[test]
fn test_add_remove_class() {
    let mut el = Element::box_().id("el");

    assert!(!el.has_class("is-active"));

    el.add_class("is-active");
    assert!(el.has_class("is-active"));

    // Adding again is a no-op, not a duplicate
    el.add_class("is-active");
    assert_eq!(el.classes, vec!["is-active"]);

    el.remove_class("is-active");
    assert!(!el.has_class("is-active"));

    // Removing again is a no-op
    el.remove_class("is-active");
    assert!(el.classes.is_empty());
}

#[test]
fn test_toggle_class_period_two() {
    let mut el = Element::box_().id("el").class("modal");

    el.toggle_class("is-active");
    assert!(el.has_class("is-active"));

    el.toggle_class("is-active");
    assert!(!el.has_class("is-active"));

    // Other classes are untouched
    assert!(el.has_class("modal"));
}

#[test]
fn test_class_builder_deduplicates() {
    let el = Element::box_().class("modal").class("modal");
    assert_eq!(el.classes, vec!["modal"]);
}

// ============================================================================
// Data attributes
// ============================================================================

#[test]
fn test_data_attributes() {
    let el = Element::box_().data("data-target", "confirm-dialog");

    assert_eq!(
        el.get_data("data-target"),
        Some(&"confirm-dialog".to_string())
    );
    assert_eq!(el.get_data("data-other"), None);
}

// ============================================================================
// Tree lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = Element::box_().id("root").child(
        Element::box_()
            .id("outer")
            .child(Element::text("hello").id("inner")),
    );

    assert_eq!(find_element(&root, "root").map(|el| el.id.as_str()), Some("root"));
    assert_eq!(find_element(&root, "inner").map(|el| el.id.as_str()), Some("inner"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_toggles_in_place() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::box_().id("menu").class("navbar-menu"));

    if let Some(menu) = find_element_mut(&mut root, "menu") {
        menu.toggle_class("is-active");
    }

    let menu = find_element(&root, "menu").unwrap();
    assert!(menu.has_class("is-active"));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
}
