//! Nested menus: descending, returning, and actions that produce menus.

use nestmenu::{
    ActionSpec, EntrySource, HeadlessTerminal, InvokeMode, Key, MenuError, MenuOptions, MenuOutcome,
    Terminal,
};

use crate::common::{run_on, FailingExecutor, RecordingExecutor};

fn sample() -> EntrySource {
    EntrySource::mapping([
        (
            "A",
            ActionSpec::Nested(EntrySource::mapping([("X", ActionSpec::command("1"))])),
        ),
        ("B", ActionSpec::command("doSomething")),
    ])
}

fn titled(title: &str) -> MenuOptions {
    MenuOptions {
        title: Some(title.to_string()),
        ..MenuOptions::default()
    }
}

#[test]
fn confirm_opens_child_titled_after_entry() {
    let mut exec = RecordingExecutor::default();
    // Second Enter runs X's action inside the child menu.
    let (result, term) = run_on(24, sample(), &titled("Menu"), &[Key::Enter, Key::Enter], &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Executed);
    assert_eq!(exec.calls, [("1".to_string(), InvokeMode::Inline)]);
    assert!(term.screen_text().starts_with("A\n\nX"));
    assert!(term.screen_text().ends_with("1/1"));
}

#[test]
fn cancel_restores_parent_with_its_title() {
    let mut exec = RecordingExecutor::default();
    let keys = [Key::Down, Key::Up, Key::Enter, Key::Escape, Key::Escape];
    let (result, term) = run_on(24, sample(), &titled("Menu"), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Cancelled);
    let screen = term.screen_text();
    let lines: Vec<&str> = screen.lines().collect();
    assert_eq!(lines[0], "Menu");
    assert!(lines[2].starts_with('A') && lines[2].ends_with('>'));
    assert_eq!(lines[3], "B");
    // Cursor back on the first entry
    assert_eq!(term.highlighted_rows(), [2]);
    assert!(exec.calls.is_empty());
}

#[test]
fn cancel_restores_untitled_root_without_title() {
    let mut exec = RecordingExecutor::default();
    let keys = [Key::Enter, Key::Backspace, Key::Escape];
    let (result, term) = run_on(24, sample(), &MenuOptions::default(), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Cancelled);
    assert!(term.screen_text().starts_with('A'));
    assert_eq!(term.highlighted_rows(), [0]);
}

#[test]
fn untitled_root_gets_shell_title_back_after_child() {
    let mut term =
        HeadlessTerminal::new(80, 24).with_keys([Key::Enter, Key::Escape, Key::Escape]);
    term.set_window_title("zsh").unwrap();
    let mut exec = RecordingExecutor::default();

    let outcome =
        nestmenu::run_menu(&mut term, &mut exec, sample(), &MenuOptions::default()).unwrap();

    assert_eq!(outcome, MenuOutcome::Cancelled);
    let titles: Vec<Option<&str>> = term.titles_at_reads().iter().map(Option::as_deref).collect();
    assert_eq!(titles, [Some("zsh"), Some("A"), Some("zsh")]);
    assert_eq!(term.window_title(), Some("zsh"));
    assert_eq!(term.title_stack_depth(), 0);
}

#[test]
fn titled_root_retitles_window_after_child() {
    let mut exec = RecordingExecutor::default();
    let keys = [Key::Enter, Key::Escape, Key::Escape];
    let (result, term) = run_on(24, sample(), &titled("Menu"), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Cancelled);
    let titles: Vec<Option<&str>> = term.titles_at_reads().iter().map(Option::as_deref).collect();
    assert_eq!(titles, [Some("Menu"), Some("A"), Some("Menu")]);
}

fn run_failing(source: EntrySource, keys: &[Key]) -> (MenuError, HeadlessTerminal, FailingExecutor) {
    let mut term = HeadlessTerminal::new(80, 24).with_keys(keys.iter().copied());
    term.set_window_title("zsh").unwrap();
    let mut exec = FailingExecutor::default();
    let err = nestmenu::run_menu(&mut term, &mut exec, source, &titled("Menu")).unwrap_err();
    (err, term, exec)
}

fn assert_terminal_restored(term: &HeadlessTerminal) {
    assert!(term.cursor_visible());
    assert_eq!(term.foreground(), HeadlessTerminal::DEFAULT_FOREGROUND);
    assert_eq!(term.background(), HeadlessTerminal::DEFAULT_BACKGROUND);
    assert_eq!(term.window_title(), Some("zsh"));
    assert_eq!(term.title_stack_depth(), 0);
}

#[test]
fn failing_nested_command_restores_terminal() {
    let source = EntrySource::mapping([("Branches", ActionSpec::command("@git branch"))]);
    let (err, term, exec) = run_failing(source, &[Key::Enter]);

    assert!(matches!(err, MenuError::Action(_)));
    assert_eq!(exec.calls, [("git branch".to_string(), InvokeMode::Nested)]);
    assert_terminal_restored(&term);
}

#[test]
fn failing_inline_command_restores_terminal() {
    // The failing action belongs to an entry of the child menu.
    let keys = [Key::Enter, Key::Enter];
    let (err, term, exec) = run_failing(sample(), &keys);

    assert!(matches!(err, MenuError::Action(_)));
    assert!(err.to_string().contains("exited with status"));
    assert_eq!(exec.calls, [("1".to_string(), InvokeMode::Inline)]);
    assert_terminal_restored(&term);
}

#[test]
fn cursor_resets_when_returning_from_child() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::mapping([
        ("First", ActionSpec::Empty),
        ("Second", ActionSpec::Nested(EntrySource::sequence(["deep"]))),
    ]);
    let keys = [Key::Down, Key::Enter, Key::Escape, Key::Enter];
    let (result, _) = run_on(24, source, &MenuOptions::default(), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Selected("First".to_string()));
}

#[test]
fn command_output_becomes_child_menu() {
    let mut exec = RecordingExecutor {
        nested: vec!["main".to_string(), "feature/x".to_string()],
        ..RecordingExecutor::default()
    };
    let source = EntrySource::mapping([("Branches", ActionSpec::command("@git branch"))]);
    let keys = [Key::Enter, Key::End, Key::Enter];
    let (result, _) = run_on(24, source, &MenuOptions::default(), &keys, &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Selected("feature/x".to_string()));
    assert_eq!(exec.calls, [("git branch".to_string(), InvokeMode::Nested)]);
}

#[test]
fn ignore_nested_runs_prefixed_command_inline() {
    let mut exec = RecordingExecutor::default();
    let options = MenuOptions {
        ignore_nested: true,
        ..MenuOptions::default()
    };
    let source = EntrySource::mapping([("Branches", ActionSpec::command("@git branch"))]);
    let (result, _) = run_on(24, source, &options, &[Key::Enter], &mut exec);

    assert_eq!(result.unwrap(), MenuOutcome::Executed);
    assert_eq!(exec.calls, [("git branch".to_string(), InvokeMode::Inline)]);
}

#[test]
fn empty_command_output_is_an_error() {
    let mut exec = RecordingExecutor::default();
    let source = EntrySource::mapping([("Nothing", ActionSpec::command("@true"))]);
    let (result, _) = run_on(24, source, &MenuOptions::default(), &[Key::Enter], &mut exec);

    let err = result.unwrap_err();
    assert!(matches!(err, MenuError::InvalidNestedResult { .. }));
    assert!(err.to_string().contains("Nothing"));
}

#[test]
fn interrupt_in_child_cancels_everything() {
    let mut exec = RecordingExecutor::default();
    let keys = [Key::Enter, Key::Interrupt];
    let (result, _) = run_on(24, sample(), &MenuOptions::default(), &keys, &mut exec);
    assert_eq!(result.unwrap(), MenuOutcome::Cancelled);
}
