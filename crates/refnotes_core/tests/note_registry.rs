use refnotes_core::{note_data, NoteCode, NoteRegistry};

#[test]
fn auto_assigned_codes_start_at_one_and_increment() {
    let mut registry = NoteRegistry::new();

    assert_eq!(registry.add("m1", None), NoteCode::Number(1));
    assert_eq!(registry.add("m2", None), NoteCode::Number(2));
    assert_eq!(
        registry.get_codes(),
        vec![NoteCode::Number(1), NoteCode::Number(2)]
    );
}

#[test]
fn codes_keep_first_use_order_and_count_distinct_codes() {
    let mut registry = NoteRegistry::new();
    registry.add("first", "b");
    registry.add("second", "a");
    registry.add("third", "b");
    registry.add("fourth", 7_u64);

    assert_eq!(
        registry.get_codes(),
        vec![
            NoteCode::from("b"),
            NoteCode::from("a"),
            NoteCode::Number(7)
        ]
    );
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get_first_code(), Some(NoteCode::from("b")));
    assert_eq!(registry.get_code(), Some(NoteCode::from("b")));
    assert_eq!(registry.get_last_code(), Some(NoteCode::Number(7)));
}

#[test]
fn adding_to_existing_code_appends_messages() {
    let mut registry = NoteRegistry::new();
    assert_eq!(registry.add("m1", "a"), NoteCode::from("a"));
    assert_eq!(registry.add("m2", "a"), NoteCode::from("a"));

    assert_eq!(registry.get_messages("a"), vec!["m1", "m2"]);
    assert_eq!(registry.get_message("a"), "m1");
}

#[test]
fn empty_registry_queries_return_empty_values() {
    let registry = NoteRegistry::new();

    assert!(!registry.has_notes());
    assert!(registry.get_codes().is_empty());
    assert_eq!(registry.get_first_code(), None);
    assert_eq!(registry.get_last_code(), None);
    assert_eq!(registry.get_code(), None);
    assert!(registry.get_messages(None).is_empty());
    assert_eq!(registry.get_message(None), "");
    assert_eq!(registry.get_data(None), None);
}

#[test]
fn unknown_code_queries_return_empty_values() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");

    assert!(registry.get_messages("missing").is_empty());
    assert_eq!(registry.get_message("missing"), "");
    assert_eq!(registry.get_data("missing"), None);
}

#[test]
fn get_messages_without_code_flattens_in_code_order() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");
    registry.add("m2", "b");
    registry.add("m3", "b");

    assert_eq!(registry.get_messages(None), vec!["m1", "m2", "m3"]);
    assert_eq!(registry.get_messages(""), vec!["m1", "m2", "m3"]);
}

#[test]
fn get_message_without_code_reads_first_note() {
    let mut registry = NoteRegistry::new();
    registry.add("first of a", "a");
    registry.add("second of a", "a");
    registry.add("first of b", "b");

    assert_eq!(registry.get_message(None), "first of a");
    assert_eq!(registry.get_message("b"), "first of b");
}

#[test]
fn add_data_overwrites_existing_data() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");
    registry.add_data(note_data([("x", 1)]), "a");
    registry.add_data(note_data([("y", 2)]), "a");

    assert_eq!(registry.get_data("a"), Some(&note_data([("y", 2)])));
}

#[test]
fn append_data_merges_with_last_write_wins() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");
    registry.append_data(note_data([("x", 1)]), "a");
    registry.append_data(note_data([("y", 2)]), "a");
    assert_eq!(
        registry.get_data("a"),
        Some(&note_data([("x", 1), ("y", 2)]))
    );

    registry.append_data(note_data([("x", 9)]), "a");
    assert_eq!(
        registry.get_data("a"),
        Some(&note_data([("x", 9), ("y", 2)]))
    );
}

#[test]
fn data_can_be_recorded_before_the_note_exists() {
    let mut registry = NoteRegistry::new();
    registry.append_data(note_data([("url", "https://example.com")]), "src");

    assert!(!registry.has_notes());
    assert_eq!(
        registry.get_data("src"),
        Some(&note_data([("url", "https://example.com")]))
    );

    registry.remove("src");
    assert_eq!(registry.get_data("src"), None);
    assert!(registry.snapshot().notes.is_empty());
}

#[test]
fn remove_drops_messages_data_and_code() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");
    registry.add("m2", "b");
    registry.append_data(note_data([("x", 1)]), "a");

    registry.remove("a");

    assert!(registry.get_messages("a").is_empty());
    assert_eq!(registry.get_data("a"), None);
    assert_eq!(registry.get_codes(), vec![NoteCode::from("b")]);
}

#[test]
fn remove_of_absent_code_is_a_no_op() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");

    registry.remove("missing");
    registry.remove("missing");

    assert_eq!(registry.get_codes(), vec![NoteCode::from("a")]);
}

#[test]
fn auto_code_can_be_reused_after_remove() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", None);
    registry.add("m2", None);
    registry.remove(1_u64);

    // One note left, so the next auto code is 2 again and joins that note.
    assert_eq!(registry.add("m3", None), NoteCode::Number(2));
    assert_eq!(registry.get_messages(2_u64), vec!["m2", "m3"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn entries_expose_notes_with_their_data() {
    let mut registry = NoteRegistry::new();
    registry.add_with_data("Knuth, TAOCP", "knuth", note_data([("page", 42)]));
    registry.add("See above", None);

    let entries: Vec<_> = registry.entries().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].code, &NoteCode::from("knuth"));
    assert_eq!(entries[0].messages, ["Knuth, TAOCP".to_string()]);
    assert_eq!(entries[0].data, Some(&note_data([("page", 42)])));
    assert_eq!(entries[1].code, &NoteCode::Number(2));
    assert_eq!(entries[1].data, None);
}

#[test]
fn decimal_text_code_and_number_code_name_the_same_note() {
    let mut registry = NoteRegistry::new();
    assert_eq!(registry.add("explicit", "2"), NoteCode::Number(2));
    assert_eq!(registry.add("as number", 2_u64), NoteCode::Number(2));

    // One note exists, so the next auto code is 2 and joins it.
    assert_eq!(registry.add("first auto", None), NoteCode::Number(2));
    assert_eq!(registry.add("second auto", None), NoteCode::Number(2));
    assert_eq!(registry.get_codes(), vec![NoteCode::Number(2)]);
    assert_eq!(
        registry.get_messages("2"),
        vec!["explicit", "as number", "first auto", "second auto"]
    );
    assert_eq!(registry.get_messages(2_u64), registry.get_messages("2"));

    registry.append_data(note_data([("page", 3)]), 2_u64);
    assert_eq!(registry.get_data("2"), Some(&note_data([("page", 3)])));
}

#[test]
fn zero_text_code_is_treated_as_omitted() {
    let mut registry = NoteRegistry::new();
    registry.add("m1", "a");

    let from_text = registry.add("m2", "0");
    let from_parsed = registry.add("m3", "0".parse::<NoteCode>().unwrap());
    // Both spellings auto-assign, so each starts a new note.
    assert_eq!(from_text, NoteCode::Number(2));
    assert_eq!(from_parsed, NoteCode::Number(3));
    assert_eq!(registry.get_messages("0"), vec!["m1", "m2", "m3"]);
}
