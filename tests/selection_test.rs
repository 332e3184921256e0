use wordplaylist::management::SelectionStore;

#[test]
fn test_unseen_uri_is_not_selected() {
    let store = SelectionStore::new();
    assert!(!store.is_selected("spotify:track:1"));
    assert!(store.selected_uris().is_empty());
    assert!(store.is_empty());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut store = SelectionStore::new();

    assert!(store.toggle("spotify:track:1"));
    assert!(store.is_selected("spotify:track:1"));

    assert!(!store.toggle("spotify:track:1"));
    assert!(!store.is_selected("spotify:track:1"));
    assert!(store.selected_uris().is_empty());
}

#[test]
fn test_selected_uris_excludes_last_toggled_off() {
    let mut store = SelectionStore::new();
    for uri in ["a", "b", "c", "b", "d", "a", "a"] {
        store.toggle(uri);
    }

    // a: on/off/on, b: on/off, c: on, d: on
    assert_eq!(store.selected_uris(), vec!["a", "c", "d"]);
    assert_eq!(store.len_selected(), 3);
}

#[test]
fn test_selected_uris_keep_first_toggle_order() {
    let mut store = SelectionStore::new();
    store.toggle("z");
    store.toggle("m");
    store.toggle("a");
    store.toggle("m");
    store.toggle("m");

    assert_eq!(store.selected_uris(), vec!["z", "m", "a"]);
}

#[test]
fn test_clear_forgets_everything() {
    let mut store = SelectionStore::new();
    store.toggle("a");
    store.clear();

    assert!(!store.is_selected("a"));
    assert!(store.toggle("a"));
}
