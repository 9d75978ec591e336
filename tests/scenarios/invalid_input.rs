//! Input that must be rejected before anything is drawn.

use nestmenu::{EntrySource, Key, Menu, MenuError, MenuOptions, Terminal};

use crate::common::{run_on, RecordingExecutor};

#[test]
fn empty_sequence_fails_without_drawing() {
    let mut exec = RecordingExecutor::default();
    let (result, term) = run_on(
        24,
        EntrySource::Sequence(Vec::new()),
        &MenuOptions::default(),
        &[Key::Enter],
        &mut exec,
    );

    assert!(matches!(result.unwrap_err(), MenuError::EmptyEntries));
    assert_eq!(term.screen_text(), "");
    assert_eq!(term.pending_keys(), 1);
    assert!(term.cursor_visible());
}

#[test]
fn empty_display_name_reports_position() {
    let err = Menu::new(
        EntrySource::sequence(["ok", "", "fine"]),
        MenuOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MenuError::EmptyDisplayName { position: 1 }));
}

#[test]
fn scalar_document_is_unsupported() {
    let err = EntrySource::from_value(serde_json::json!(42)).unwrap_err();
    assert!(matches!(err, MenuError::UnsupportedInputKind { .. }));
    assert!(err.is_input_error());
}

#[test]
fn short_terminal_is_rejected() {
    let mut exec = RecordingExecutor::default();
    let (result, term) = run_on(
        5,
        EntrySource::sequence(["a"]),
        &MenuOptions::default(),
        &[Key::Enter],
        &mut exec,
    );

    assert!(matches!(
        result.unwrap_err(),
        MenuError::ViewportTooSmall {
            height: 5,
            required: 6
        }
    ));
    assert_eq!(term.screen_text(), "");
}
