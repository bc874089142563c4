//! Full-frame drawing against ratatui's test backend

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use hrdash::app::App;
use hrdash::core::Action;
use hrdash::domain::{Datasets, ViewId};
use hrdash::registry::ViewRegistry;
use hrdash::shell::DashboardShell;
use hrdash::ui;

fn app() -> App {
    let shell = DashboardShell::new(ViewRegistry::standard(), Datasets::from_seed(21)).unwrap();
    App::new(shell)
}

fn screen(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn frame_shows_only_the_active_view() {
    let registry = ViewRegistry::standard();
    let data = Datasets::from_seed(21);
    let mut app = app();

    for active in ViewId::ALL {
        app.apply(Action::Select(active));
        let text = screen(&app, 120, 40);
        assert!(text.contains(ui::TITLE));
        for id in ViewId::ALL {
            let tree = registry.render(id, &data).unwrap();
            for widget in tree.widgets() {
                assert_eq!(
                    text.contains(widget.title()),
                    id == active,
                    "{:?} on {active} screen",
                    widget.id
                );
            }
        }
    }
}

#[test]
fn sidebar_lists_every_view() {
    let text = screen(&app(), 120, 40);
    for id in ViewId::ALL {
        assert!(text.contains(id.title()));
    }
}

#[test]
fn every_view_draws_at_every_terminal_size() {
    let mut app = app();
    for help in [false, true] {
        if app.help_open != help {
            app.apply(Action::ToggleHelp);
        }
        for id in ViewId::ALL {
            app.apply(Action::Select(id));
            for width in (1..=160).step_by(3) {
                for height in (1..=60).step_by(2) {
                    screen(&app, width, height);
                }
            }
        }
    }
}

#[test]
fn workforce_survives_narrow_terminal() {
    let mut app = app();
    app.apply(Action::Select(ViewId::Workforce));
    for width in 25..=40 {
        let text = screen(&app, width, 9);
        assert!(!text.is_empty());
    }
}

#[test]
fn help_overlay_lists_view_keys() {
    let mut app = app();
    app.apply(Action::ToggleHelp);
    let text = screen(&app, 120, 40);
    assert!(text.contains("Help"));
    assert!(text.contains("recruitment"));
}
