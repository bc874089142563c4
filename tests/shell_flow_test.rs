//! Shell state and app flows driven through actions and key events

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use hrdash::app::{App, InputMode, StatusLevel};
use hrdash::core::Action;
use hrdash::domain::{Datasets, ViewError, ViewId, WidgetId};
use hrdash::input::handle_key;
use hrdash::registry::{descriptor_for, ViewRegistry};
use hrdash::shell::{DashboardShell, Transition};

fn shell() -> DashboardShell {
    DashboardShell::new(ViewRegistry::standard(), Datasets::from_seed(8)).unwrap()
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_command(app: &mut App, text: &str) {
    handle_key(app, press(KeyCode::Char(':')));
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
    handle_key(app, press(KeyCode::Enter));
}

#[test]
fn shell_opens_on_dashboard() {
    let shell = shell();
    assert_eq!(shell.active_view(), ViewId::Dashboard);
    assert_eq!(shell.mounted().view, ViewId::Dashboard);
    assert!(shell.mounted().widget(WidgetId::SnapshotKpis).is_some());

    let nav = shell.navigation();
    assert_eq!(nav.entries.len(), 6);
    assert_eq!(nav.active_index(), Some(0));
    assert_eq!(nav.entries.iter().filter(|e| e.active).count(), 1);
}

#[test]
fn selecting_the_active_view_is_a_no_op() {
    let mut shell = shell();
    let before = shell.mounted().clone();
    assert_eq!(shell.select_view(ViewId::Dashboard), Ok(None));
    assert_eq!(shell.mounted(), &before);
}

#[test]
fn switching_back_restores_the_same_tree() {
    let mut shell = shell();
    shell.select_view(ViewId::Workforce).unwrap();
    let workforce = shell.mounted().clone();
    assert_eq!(
        shell.select_view(ViewId::Diversity),
        Ok(Some(Transition {
            from: ViewId::Workforce,
            to: ViewId::Diversity
        }))
    );
    assert!(shell.mounted().widget(WidgetId::GenderStructure).is_none());
    shell.select_view(ViewId::Workforce).unwrap();
    assert_eq!(shell.mounted(), &workforce);
}

#[test]
fn rejected_selection_keeps_state() {
    let registry = ViewRegistry::from_descriptors(vec![
        descriptor_for(ViewId::Dashboard),
        descriptor_for(ViewId::Attendance),
    ])
    .unwrap();
    let mut shell = DashboardShell::new(registry, Datasets::from_seed(8)).unwrap();
    let err = shell.select_view(ViewId::Diversity).unwrap_err();
    assert_eq!(err, ViewError::UnknownView("diversity".to_string()));
    assert_eq!(shell.active_view(), ViewId::Dashboard);
    assert_eq!(shell.mounted().view, ViewId::Dashboard);
}

#[test]
fn next_and_previous_wrap() {
    let mut shell = shell();
    shell.select_previous().unwrap();
    assert_eq!(shell.active_view(), ViewId::Diversity);
    shell.select_next().unwrap();
    assert_eq!(shell.active_view(), ViewId::Dashboard);
}

#[test]
fn idempotent_select_does_not_count_as_transition() {
    let mut app = App::new(shell());
    app.apply(Action::Select(ViewId::Attendance));
    app.apply(Action::Select(ViewId::Attendance));
    assert_eq!(app.transitions(), 1);
    assert_eq!(app.active_view(), ViewId::Attendance);
}

#[test]
fn keyboard_walkthrough() {
    let mut app = App::new(shell());
    handle_key(&mut app, press(KeyCode::Char('2')));
    assert_eq!(app.active_view(), ViewId::Recruitment);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.active_view(), ViewId::Workforce);
    handle_key(&mut app, press(KeyCode::BackTab));
    handle_key(&mut app, press(KeyCode::BackTab));
    assert_eq!(app.active_view(), ViewId::Dashboard);
    assert_eq!(app.transitions(), 4);

    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn command_line_navigation() {
    let mut app = App::new(shell());
    type_command(&mut app, "view productivity");
    assert_eq!(app.active_view(), ViewId::Productivity);
    assert_eq!(app.input_mode, InputMode::Normal);

    type_command(&mut app, "diversity");
    assert_eq!(app.active_view(), ViewId::Diversity);

    type_command(&mut app, "goto payroll");
    assert_eq!(app.active_view(), ViewId::Diversity);
    assert_eq!(
        app.status_text(),
        Some(("unknown view: payroll", StatusLevel::Error))
    );

    type_command(&mut app, "dance");
    assert_eq!(
        app.status_text(),
        Some(("Unknown command: dance", StatusLevel::Warn))
    );
}

#[test]
fn escape_cancels_command_entry() {
    let mut app = App::new(shell());
    handle_key(&mut app, press(KeyCode::Char(':')));
    handle_key(&mut app, press(KeyCode::Char('4')));
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.active_view(), ViewId::Dashboard);
}
