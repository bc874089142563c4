//! View identifiers, icons and view errors

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Dashboard sections, in navigation order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    #[default]
    Dashboard,
    Recruitment,
    Workforce,
    Productivity,
    Attendance,
    Diversity,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Dashboard,
        ViewId::Recruitment,
        ViewId::Workforce,
        ViewId::Productivity,
        ViewId::Attendance,
        ViewId::Diversity,
    ];

    /// Stable lowercase key used by commands and logs
    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Recruitment => "recruitment",
            ViewId::Workforce => "workforce",
            ViewId::Productivity => "productivity",
            ViewId::Attendance => "attendance",
            ViewId::Diversity => "diversity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Recruitment => "Recruitment",
            ViewId::Workforce => "Workforce",
            ViewId::Productivity => "Productivity",
            ViewId::Attendance => "Attendance",
            ViewId::Diversity => "Diversity",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ViewId {
    type Err = ViewError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let key = input.trim().to_lowercase();
        ViewId::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| ViewError::UnknownView(input.trim().to_string()))
    }
}

/// Glyphs shown next to navigation entries and KPI tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Activity,
    Users,
    Briefcase,
    Calendar,
    CheckCircle,
    ClipboardList,
    Bell,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Activity => "∿",
            Icon::Users => "☺",
            Icon::Briefcase => "▣",
            Icon::Calendar => "▦",
            Icon::CheckCircle => "✓",
            Icon::ClipboardList => "☰",
            Icon::Bell => "◉",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("view registry is empty")]
    EmptyRegistry,

    #[error("view `{0}` is registered twice")]
    DuplicateView(ViewId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_keys() {
        assert_eq!("dashboard".parse::<ViewId>(), Ok(ViewId::Dashboard));
        assert_eq!(" Workforce ".parse::<ViewId>(), Ok(ViewId::Workforce));
        for id in ViewId::ALL {
            assert_eq!(id.to_string().parse::<ViewId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown_view() {
        assert_eq!(
            "payroll".parse::<ViewId>(),
            Err(ViewError::UnknownView("payroll".to_string()))
        );
        assert!("".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(ViewId::default(), ViewId::Dashboard);
        assert_eq!(ViewId::ALL[0], ViewId::Dashboard);
    }
}
