//! Property tests for page rendering.

use proptest::prelude::*;

use nestmenu::domain::MenuEntry;
use nestmenu::ui::{MenuView, Renderer};
use nestmenu::{HeadlessTerminal, PageState};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Drawing the same page twice leaves the same screen.
    #[test]
    fn property_draw_page_is_idempotent(
        names in proptest::collection::vec("[A-Za-z ]{1,20}", 1..40),
        page_pick in 0usize..10,
        row_pick in 0usize..20,
        multi: bool,
        title in proptest::option::of("[A-Za-z]{1,10}"),
    ) {
        let entries: Vec<MenuEntry> = names
            .iter()
            .map(|n| MenuEntry::plain(n.trim_end().to_string() + "x"))
            .collect();
        let mut pages = PageState::layout(entries.len(), 20, title.is_some()).unwrap();
        pages.current_page = page_pick % (pages.total_pages + 1);
        let row = pages.clamp_row(row_pick);

        let view = MenuView {
            title: title.as_deref(),
            entries: &entries,
            pages: &pages,
            selected_row: row,
            multi_select: multi,
        };
        let renderer = Renderer::default();
        let mut term = HeadlessTerminal::new(80, 20);

        renderer.draw_page(&mut term, &view).unwrap();
        let first = (term.screen_text(), term.highlighted_rows());
        renderer.draw_page(&mut term, &view).unwrap();
        let second = (term.screen_text(), term.highlighted_rows());

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.1, vec![view.origin() + row as u16]);
        prop_assert!(first.0.ends_with(&pages.indicator()));
    }
}
