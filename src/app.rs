use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::core::{parse_command, Action, Command, NotifyLevel};
use crate::domain::{ViewError, ViewId};
use crate::shell::{DashboardShell, Transition};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct CommandState {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug)]
pub struct App {
    pub shell: DashboardShell,
    pub input_mode: InputMode,
    pub command: CommandState,
    pub help_open: bool,
    pub should_quit: bool,
    pub mouse_enabled: bool,
    status: Option<StatusMessage>,
    transitions: usize,
}

impl App {
    pub fn new(shell: DashboardShell) -> Self {
        Self {
            shell,
            input_mode: InputMode::Normal,
            command: CommandState::default(),
            help_open: false,
            should_quit: false,
            mouse_enabled: true,
            status: None,
            transitions: 0,
        }
    }

    pub fn active_view(&self) -> ViewId {
        self.shell.active_view()
    }

    /// Number of accepted view changes since startup
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL && status.level != StatusLevel::Error {
                self.status = None;
            }
        }
    }

    /// Single entry point for state changes requested by input
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Select(id) => {
                let result = self.shell.select_view(id);
                self.after_select(result);
            }
            Action::Next => {
                let result = self.shell.select_next();
                self.after_select(result);
            }
            Action::Previous => {
                let result = self.shell.select_previous();
                self.after_select(result);
            }
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::OpenCommand => self.enter_command(),
            Action::CloseOverlay => {
                self.help_open = false;
                if self.input_mode == InputMode::Command {
                    self.exit_command();
                }
            }
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::Quit => self.should_quit = true,
        }
    }

    fn after_select(&mut self, result: Result<Option<Transition>, ViewError>) {
        match result {
            Ok(Some(transition)) => {
                self.transitions += 1;
                info!(from = %transition.from, to = %transition.to, "switched view");
                self.set_status(
                    format!("Viewing {}", transition.to.title()),
                    StatusLevel::Info,
                );
            }
            Ok(None) => {}
            Err(err) => {
                error!(%err, "view selection failed");
                self.set_status(err.to_string(), StatusLevel::Error);
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply(action);
    }

    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::View(key) => match key.parse::<ViewId>() {
                Ok(id) => Action::Select(id),
                Err(err) => {
                    warn!(%err, "rejected view command");
                    Action::Notify(err.to_string(), NotifyLevel::Error)
                }
            },
            Command::Next => Action::Next,
            Command::Prev => Action::Previous,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(input) => Action::Notify(
                format!("Unknown command: {input}"),
                NotifyLevel::Warn,
            ),
        }
    }
}
