use crate::PieDb;

#[test]
fn add_section_first_write_wins() {
    let mut db = PieDb::new();
    db.add_section("a", 1.0);
    db.add_section("a", 2.0);
    assert_eq!(db.sections().get("a"), Some(&1.0));
}

#[test]
fn sections_keep_insertion_order() {
    let mut db = PieDb::new();
    db.add_section("z", 1.0);
    db.add_section("a", 2.0);
    db.add_section("m", 3.0);
    let labels: Vec<&str> = db.sections().keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["z", "a", "m"]);
}

#[test]
fn accessors_round_trip() {
    let mut db = PieDb::new();
    db.set_diagram_title("Title");
    db.set_acc_title("Acc title");
    db.set_acc_description("Acc description");
    db.set_show_data(true);
    assert_eq!(db.diagram_title(), "Title");
    assert_eq!(db.acc_title(), "Acc title");
    assert_eq!(db.acc_description(), "Acc description");
    assert!(db.show_data());
}

#[test]
fn clear_resets_everything_to_defaults() {
    let mut db = PieDb::new();
    db.add_section("a", 1.0);
    db.set_show_data(true);
    db.set_diagram_title("Title");
    db.clear();
    assert!(db.sections().is_empty());
    assert!(!db.show_data());
    assert_eq!(db.diagram_title(), "");
    assert_eq!(db, PieDb::new());
}
