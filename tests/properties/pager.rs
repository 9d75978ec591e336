//! Property tests for page layout arithmetic.

use proptest::prelude::*;

use nestmenu::PageState;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pages partition the entries; every page but the last is full.
    #[test]
    fn property_pages_sum_to_entry_count(count in 1usize..500, size in 1usize..60) {
        let pages = PageState::with_page_size(count, size);
        let total: usize = (0..=pages.total_pages).map(|p| pages.entries_on_page(p)).sum();
        prop_assert_eq!(total, count);
        for page in 0..pages.total_pages {
            prop_assert_eq!(pages.entries_on_page(page), size);
        }
        prop_assert!(pages.entries_on_page(pages.total_pages) >= 1);
    }

    /// PROPERTY: (page, row) and global index map onto each other one to one.
    #[test]
    fn property_index_and_position_are_a_bijection(count in 1usize..300, size in 1usize..40) {
        let pages = PageState::with_page_size(count, size);
        for index in 0..count {
            let (page, row) = pages.locate(index);
            prop_assert!(page <= pages.total_pages);
            prop_assert!(row < pages.entries_on_page(page));
            prop_assert_eq!(pages.index_of(page, row), index);
        }
    }

    /// PROPERTY: A layout either fits at least one row or reports the viewport as too small.
    #[test]
    fn property_layout_page_size_fits_viewport(count in 1usize..200, height in 0u16..80, titled: bool) {
        match PageState::layout(count, height, titled) {
            Ok(pages) => {
                let reserved = if titled { 7 } else { 5 };
                prop_assert_eq!(pages.page_size, usize::from(height) - reserved);
                prop_assert!(pages.page_size >= 1);
            }
            Err(err) => prop_assert!(err.to_string().contains("rows")),
        }
    }
}
