//! Multi-select: toggling, bulk selection, degraded nesting.

use nestmenu::{ActionSpec, EntrySource, InvokeMode, Key, MenuOptions, MenuOutcome};

use crate::common::{run_on, RecordingExecutor};

fn multi() -> MenuOptions {
    MenuOptions {
        multi_select: true,
        ..MenuOptions::default()
    }
}

#[test]
fn confirm_returns_toggled_entries_in_entry_order() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::sequence(["Alpha", "Beta", "Gamma", "Delta"]);
    // Toggle row 2 first, then row 0, and confirm with the cursor on row 1.
    let keys = [
        Key::Down,
        Key::Down,
        Key::Space,
        Key::Home,
        Key::Space,
        Key::Down,
        Key::Enter,
    ];
    let (result, _) = run_on(24, source, &multi(), &keys, &mut exec);

    assert_eq!(
        result.unwrap(),
        MenuOutcome::MultiSelected(vec!["Alpha".to_string(), "Gamma".to_string()])
    );
    assert!(exec.calls.is_empty());
}

#[test]
fn checkboxes_follow_toggles() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::sequence(["Alpha", "Beta"]);
    let keys = [Key::Space, Key::Escape];
    let (result, term) = run_on(24, source, &multi(), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Cancelled);
    assert_eq!(term.screen_text(), "[X] Alpha\n[ ] Beta\n\n1/1");
}

#[test]
fn confirm_with_nothing_selected_is_an_empty_result() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::sequence(["Alpha", "Beta"]);
    let (result, _) = run_on(24, source, &multi(), &[Key::Enter], &mut exec);
    assert_eq!(result.unwrap(), MenuOutcome::MultiSelected(Vec::new()));
}

#[test]
fn select_all_spans_every_page() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::sequence((0..12).map(|i| format!("e{i:02}")));
    let keys = [Key::Insert, Key::Enter];
    let (result, _) = run_on(10, source, &multi(), &keys, &mut exec);

    let MenuOutcome::MultiSelected(names) = result.unwrap() else {
        panic!("expected a multi-select result");
    };
    assert_eq!(names.len(), 12);
}

#[test]
fn nested_entries_are_not_opened() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::mapping([
        ("Sub", ActionSpec::Nested(EntrySource::sequence(["x"]))),
        ("Branches", ActionSpec::command("@git branch")),
    ]);
    let keys = [Key::Char('a'), Key::Enter];
    let (result, term) = run_on(24, source, &multi(), &keys, &mut exec);

    assert_eq!(
        result.unwrap(),
        MenuOutcome::MultiSelected(vec!["Sub".to_string()])
    );
    assert_eq!(exec.calls, [("git branch".to_string(), InvokeMode::Inline)]);
    assert!(!term.screen_text().contains('>'));
}
