//! Keyboard and mouse handling
//!
//! Handlers translate crossterm events into [`Action`]s and hand them to
//! [`App::apply`]. Nothing here touches the shell directly.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::core::Action;
use crate::ui::{layout, tabs};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.apply(Action::Quit);
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.apply(Action::CloseOverlay);
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => {
            let action = normal_mode_action(app, key);
            app.apply(action);
        }
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn normal_mode_action(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char(':') => Action::OpenCommand,
        KeyCode::Esc => Action::CloseOverlay,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::Next,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::Previous,
        KeyCode::Char(ch) => match app.shell.registry().by_shortcut(ch) {
            Some(id) => Action::Select(id),
            None => Action::None,
        },
        _ => Action::None,
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Up => {
            if let Some(last) = app.command.last.as_ref() {
                app.command.input = last.clone();
            }
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn into
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if !app.mouse_enabled || app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let areas = layout::areas(size);
        let nav = app.shell.navigation();
        let hit = tabs::nav_hitboxes(areas.nav, &nav)
            .into_iter()
            .find(|(rect, _)| layout::rect_contains(*rect, mouse.column, mouse.row))
            .map(|(_, id)| id);
        if let Some(id) = hit {
            app.apply(Action::Select(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Datasets, ViewId};
    use crate::registry::ViewRegistry;
    use crate::shell::DashboardShell;

    fn app() -> App {
        let shell = DashboardShell::new(ViewRegistry::standard(), Datasets::from_seed(2)).unwrap();
        App::new(shell)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_shortcuts_select_views() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_view(), ViewId::Productivity);
        handle_key(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.active_view(), ViewId::Productivity);
    }

    #[test]
    fn test_up_recalls_last_command() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(':')));
        for ch in "workforce".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.active_view(), ViewId::Workforce);

        handle_key(&mut app, press(KeyCode::Char('1')));
        handle_key(&mut app, press(KeyCode::Char(':')));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.command.input, "workforce");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.active_view(), ViewId::Workforce);
    }

    #[test]
    fn test_up_without_history_keeps_input() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(':')));
        handle_key(&mut app, press(KeyCode::Char('n')));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.command.input, "n");
    }

    #[test]
    fn test_help_swallows_navigation() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.help_open);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.active_view(), ViewId::Dashboard);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.help_open);
    }

    #[test]
    fn test_ctrl_c_quits_from_command_mode() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(':')));
        assert_eq!(app.input_mode, InputMode::Command);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_on_nav_entry() {
        let mut app = app();
        let size = Rect::new(0, 0, 120, 40);
        let areas = layout::areas(size);
        let boxes = tabs::nav_hitboxes(areas.nav, &app.shell.navigation());
        let (rect, id) = boxes[2];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click, size);
        assert_eq!(id, ViewId::Workforce);
        assert_eq!(app.active_view(), ViewId::Workforce);
    }
}
