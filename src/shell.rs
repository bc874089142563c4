//! Dashboard shell: owns the active view and the mounted widget tree
//!
//! The shell is the only writer of [`DashboardState`]. The UI reads it
//! through [`DashboardShell::navigation`] and [`DashboardShell::mounted`]
//! and asks for changes with `Action::Select`, which the app forwards to
//! [`DashboardShell::select_view`].

use tracing::debug;

use crate::domain::{Datasets, Icon, ViewError, ViewId, WidgetTree};
use crate::registry::ViewRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub active_view: ViewId,
}

/// An accepted view change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewId,
    pub to: ViewId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: Icon,
    pub shortcut: char,
    pub active: bool,
}

/// Snapshot of the navigation control, in registry order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub entries: Vec<NavEntry>,
}

impl NavBar {
    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.active)
    }
}

#[derive(Debug)]
pub struct DashboardShell {
    registry: ViewRegistry,
    datasets: Datasets,
    state: DashboardState,
    mounted: WidgetTree,
}

impl DashboardShell {
    /// Opens on the registry's first view and mounts it
    pub fn new(registry: ViewRegistry, datasets: Datasets) -> Result<Self, ViewError> {
        let initial = registry.default_view();
        let mounted = registry.render(initial, &datasets)?;
        debug!(view = %initial, widgets = mounted.widget_ids().len(), "mounted initial view");
        Ok(Self {
            registry,
            datasets,
            state: DashboardState {
                active_view: initial,
            },
            mounted,
        })
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }

    pub fn mounted(&self) -> &WidgetTree {
        &self.mounted
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    /// Switch to `id` and re-render synchronously.
    ///
    /// Returns `Ok(None)` when `id` is already active. On error the current
    /// view stays mounted.
    pub fn select_view(&mut self, id: ViewId) -> Result<Option<Transition>, ViewError> {
        let from = self.state.active_view;
        if id == from {
            return Ok(None);
        }
        let tree = self.registry.render(id, &self.datasets)?;
        self.mounted = tree;
        self.state.active_view = id;
        debug!(from = %from, to = %id, "view transition");
        Ok(Some(Transition { from, to: id }))
    }

    pub fn select_next(&mut self) -> Result<Option<Transition>, ViewError> {
        let target = self.registry.next(self.state.active_view);
        self.select_view(target)
    }

    pub fn select_previous(&mut self) -> Result<Option<Transition>, ViewError> {
        let target = self.registry.previous(self.state.active_view);
        self.select_view(target)
    }

    pub fn navigation(&self) -> NavBar {
        let entries = self
            .registry
            .list_views()
            .iter()
            .map(|view| NavEntry {
                id: view.id,
                label: view.label,
                icon: view.icon,
                shortcut: view.shortcut,
                active: view.id == self.state.active_view,
            })
            .collect();
        NavBar { entries }
    }
}
