//! End-to-end lifecycle scenarios, driven the way the platform drives a
//! control.

use chipfield_core::host::Context;
use chipfield_harness::Host;
use chipfield_widgets::{LookupItem, LookupProvider, MultiSelectLookup};

fn editable_host() -> Host<MultiSelectLookup> {
    let mut host = Host::new(MultiSelectLookup::new());
    host.init_editable();
    host
}

#[test]
fn select_remove_report_scenario() {
    let mut host = editable_host();

    host.type_str("cont");
    host.press_enter();
    assert_eq!(host.chip_names(), vec!["Contoso"]);
    assert_eq!(host.notifications(), 1);

    host.type_str("fab");
    host.press_enter();
    assert_eq!(host.chip_names(), vec!["Contoso", "Fabrikam"]);
    assert_eq!(host.notifications(), 2);

    assert!(host.click_remove("Contoso"));
    assert_eq!(host.chip_names(), vec!["Fabrikam"]);
    assert_eq!(host.notifications(), 3);

    assert_eq!(host.outputs().value, "2");
}

#[test]
fn searching_a_selected_name_again_is_silent() {
    let mut host = editable_host();
    host.type_str("northwind");
    host.press_enter();
    host.type_str("NORTH");
    host.press_enter();

    assert_eq!(host.chip_names(), vec!["Northwind"]);
    assert_eq!(host.notifications(), 1);
    assert_eq!(host.outputs().value, "4");
}

#[test]
fn unmatched_search_leaves_everything_untouched() {
    let mut host = editable_host();
    host.type_str("zebra");
    host.press_enter();

    assert!(host.chip_names().is_empty());
    assert_eq!(host.notifications(), 0);
    assert_eq!(host.outputs().value, "");
}

#[test]
fn input_editing_feeds_the_search() {
    let mut host = editable_host();
    // Typo, correct it with backspace, then commit.
    host.type_str("fax");
    host.key(chipfield_core::event::KeyCode::Backspace);
    host.type_str("b");
    host.press_enter();

    assert_eq!(host.outputs().value, "2");
    assert_eq!(host.chip_names(), vec!["Fabrikam"]);
}

#[test]
fn outputs_round_trip_through_the_delimited_format() {
    let mut host = editable_host();
    for term in ["adv", "cont", "north"] {
        host.type_str(term);
        host.press_enter();
    }
    let value = host.outputs().value;
    let ids: Vec<&str> = value.split(';').collect();
    assert_eq!(ids, vec!["3", "1", "4"]);
}

#[test]
fn view_mode_normalizes_the_raw_value() {
    let mut host = Host::new(MultiSelectLookup::new());
    host.init_read_only("1; 2 ;;3");
    assert_eq!(host.view_text(), "1, 2, 3");

    host.update_raw("4;;  ;1");
    assert_eq!(host.view_text(), "4, 1");
}

#[test]
fn view_mode_treats_missing_value_as_empty() {
    let mut host = Host::new(MultiSelectLookup::new());
    host.init(&Context::new().with_read_only(true));
    assert_eq!(host.view_text(), "");
}

#[test]
fn host_echo_after_notify_changes_nothing() {
    let mut host = editable_host();
    host.type_str("cont");
    host.press_enter();

    // Typical platform round: notify -> get_outputs -> update_view echo.
    let echo = host.outputs().value;
    host.update_raw(&echo);

    assert_eq!(host.chip_names(), vec!["Contoso"]);
    assert_eq!(host.notifications(), 1);
    assert_eq!(host.outputs().value, "1");
}

#[test]
fn init_with_a_preexisting_value_populates_chips_silently() {
    let mut host = Host::new(MultiSelectLookup::new());
    host.init(&Context::new().with_raw_value("2;4"));

    assert_eq!(host.chip_names(), vec!["Fabrikam", "Northwind"]);
    assert_eq!(host.notifications(), 0);
    assert_eq!(host.outputs().value, "2;4");
}

#[test]
fn external_reload_rebuilds_chips_without_notifying() {
    let mut host = editable_host();
    host.type_str("cont");
    host.press_enter();
    assert_eq!(host.notifications(), 1);

    host.update_raw("2;4");
    assert_eq!(host.chip_names(), vec!["Fabrikam", "Northwind"]);
    assert_eq!(host.notifications(), 1);
    assert_eq!(host.outputs().value, "2;4");

    // The rebuilt chips are live: removing one behaves normally.
    assert!(host.click_remove("Fabrikam"));
    assert_eq!(host.outputs().value, "4");
    assert_eq!(host.notifications(), 2);
}

#[test]
fn destroy_leaves_only_the_mount() {
    let mut host = editable_host();
    host.type_str("cont");
    host.press_enter();
    host.destroy();

    assert_eq!(host.arena().len(), 1);
    assert_eq!(host.arena().listener_count(), 0);
    assert_eq!(host.view_text(), "");

    // Interaction after teardown is inert.
    host.type_str("fab");
    assert!(!host.press_enter());
    assert_eq!(host.notifications(), 1);
}

#[test]
fn destroy_is_safe_in_view_mode() {
    let mut host = Host::new(MultiSelectLookup::new());
    host.init_read_only("1;2");
    host.destroy();
    host.destroy();
    assert_eq!(host.view_text(), "");
    assert_eq!(host.arena().len(), 1);
}

#[test]
fn a_custom_provider_drives_search_and_resolve() {
    #[derive(Clone)]
    struct Colors;
    impl LookupProvider for Colors {
        fn search(&self, query: &str) -> Option<LookupItem> {
            let term = query.to_lowercase();
            ["Crimson", "Cobalt", "Celadon"]
                .iter()
                .enumerate()
                .find(|(_, name)| name.to_lowercase().starts_with(&term))
                .map(|(i, name)| LookupItem::new(format!("c{i}"), *name))
        }
        fn resolve(&self, id: &str) -> Option<LookupItem> {
            ["Crimson", "Cobalt", "Celadon"]
                .iter()
                .enumerate()
                .find(|(i, _)| format!("c{i}") == id)
                .map(|(i, name)| LookupItem::new(format!("c{i}"), *name))
        }
    }

    let mut host = Host::new(MultiSelectLookup::new().with_provider(Colors));
    host.init_editable();
    host.type_str("cob");
    host.press_enter();
    assert_eq!(host.chip_names(), vec!["Cobalt"]);

    host.update_raw("c2");
    assert_eq!(host.chip_names(), vec!["Celadon"]);
}
