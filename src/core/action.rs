//! Actions that input handlers return to the app

use crate::domain::ViewId;

/// What an input event asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Mount a specific view
    Select(ViewId),

    /// Mount the next view in navigation order
    Next,

    /// Mount the previous view in navigation order
    Previous,

    /// Show or hide the help popup
    ToggleHelp,

    /// Open the command line
    OpenCommand,

    /// Dismiss the help popup or the command line
    CloseOverlay,

    /// Put a message on the status line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
