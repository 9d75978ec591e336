//! Property tests for the navigation stack.

use proptest::prelude::*;

use nestmenu::domain::NavigationStack;
use nestmenu::EntrySource;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Popping returns frames in reverse push order, unchanged.
    #[test]
    fn property_push_pop_round_trip(
        frames in proptest::collection::vec(
            (proptest::option::of("[a-z]{1,8}"), proptest::collection::vec("[a-z]{1,8}", 1..5)),
            0..12,
        )
    ) {
        let mut stack = NavigationStack::new();
        for (title, items) in &frames {
            stack.push(title.clone(), EntrySource::sequence(items.clone()));
        }
        prop_assert_eq!(stack.depth(), frames.len());

        for (title, items) in frames.iter().rev() {
            let frame = stack.pop().unwrap();
            prop_assert_eq!(&frame.title, title);
            prop_assert_eq!(frame.source, EntrySource::sequence(items.clone()));
        }
        prop_assert!(stack.is_root());
        prop_assert!(stack.pop().is_none());
    }
}
