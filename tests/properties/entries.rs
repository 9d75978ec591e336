//! Property tests for building entries from a source.

use proptest::prelude::*;

use nestmenu::domain::{build_entries, ActionSpec, BuildOptions, EntryAction, EntrySource};

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-c]{1,3}", 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One entry per source item, in source order when unsorted.
    #[test]
    fn property_build_keeps_count_and_order(items in names()) {
        let source = EntrySource::sequence(items.clone());
        let entries = build_entries(&source, &BuildOptions::default()).unwrap();

        let built: Vec<String> = entries.iter().map(|e| e.display_name.clone()).collect();
        prop_assert_eq!(built, items);
        prop_assert!(entries.iter().all(|e| !e.selected));
    }

    /// PROPERTY: Sorting orders names bytewise and keeps duplicates in source order.
    #[test]
    fn property_sort_is_ordered_and_stable(items in names()) {
        let source = EntrySource::mapping(
            items.iter().enumerate().map(|(i, n)| (n.clone(), ActionSpec::command(format!("cmd {i}")))),
        );
        let options = BuildOptions { sort: true, ..BuildOptions::default() };
        let entries = build_entries(&source, &options).unwrap();

        prop_assert_eq!(entries.len(), items.len());
        let position = |e: &nestmenu::MenuEntry| match &e.action {
            Some(EntryAction::Execute(cmd)) => cmd["cmd ".len()..].parse::<usize>().unwrap(),
            other => panic!("unexpected action {other:?}"),
        };
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.display_name.as_bytes() <= b.display_name.as_bytes());
            if a.display_name == b.display_name {
                prop_assert!(position(a) < position(b));
            }
        }
    }
}
