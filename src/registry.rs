//! Fixed registry of dashboard views
//!
//! [`ViewRegistry::standard`] binds every [`ViewId`] to its label, icon,
//! shortcut and renderer. The order of [`ViewRegistry::list_views`] is the
//! navigation order; the first entry is the view the shell opens on.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{Datasets, Icon, ViewError, ViewId, WidgetTree};
use crate::modules;

pub type Renderer = fn(&Datasets) -> WidgetTree;

#[derive(Clone, Copy)]
pub struct ViewDescriptor {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: Icon,
    pub shortcut: char,
    pub renderer: Renderer,
}

impl fmt::Debug for ViewDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("shortcut", &self.shortcut)
            .finish_non_exhaustive()
    }
}

/// Standard descriptor for a view
pub fn descriptor_for(id: ViewId) -> ViewDescriptor {
    let (icon, shortcut, renderer): (Icon, char, Renderer) = match id {
        ViewId::Dashboard => (Icon::Home, '1', modules::dashboard::render),
        ViewId::Recruitment => (Icon::Activity, '2', modules::recruitment::render),
        ViewId::Workforce => (Icon::Users, '3', modules::workforce::render),
        ViewId::Productivity => (Icon::Briefcase, '4', modules::productivity::render),
        ViewId::Attendance => (Icon::Calendar, '5', modules::attendance::render),
        ViewId::Diversity => (Icon::CheckCircle, '6', modules::diversity::render),
    };
    ViewDescriptor {
        id,
        label: id.title(),
        icon,
        shortcut,
        renderer,
    }
}

#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<ViewDescriptor>,
}

impl ViewRegistry {
    pub fn standard() -> Self {
        Self {
            views: ViewId::ALL.into_iter().map(descriptor_for).collect(),
        }
    }

    pub fn from_descriptors(views: Vec<ViewDescriptor>) -> Result<Self, ViewError> {
        if views.is_empty() {
            return Err(ViewError::EmptyRegistry);
        }
        let mut seen = BTreeSet::new();
        for view in &views {
            if !seen.insert(view.id) {
                return Err(ViewError::DuplicateView(view.id));
            }
        }
        Ok(Self { views })
    }

    pub fn list_views(&self) -> &[ViewDescriptor] {
        &self.views
    }

    /// First view in navigation order
    pub fn default_view(&self) -> ViewId {
        // from_descriptors rejects empty lists
        self.views[0].id
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: ViewId) -> Option<usize> {
        self.views.iter().position(|v| v.id == id)
    }

    pub fn descriptor(&self, id: ViewId) -> Result<&ViewDescriptor, ViewError> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ViewError::UnknownView(id.key().to_string()))
    }

    pub fn render(&self, id: ViewId, data: &Datasets) -> Result<WidgetTree, ViewError> {
        let descriptor = self.descriptor(id)?;
        Ok((descriptor.renderer)(data))
    }

    pub fn render_key(&self, key: &str, data: &Datasets) -> Result<WidgetTree, ViewError> {
        let id: ViewId = key.parse()?;
        self.render(id, data)
    }

    pub fn by_shortcut(&self, shortcut: char) -> Option<ViewId> {
        self.views
            .iter()
            .find(|v| v.shortcut == shortcut)
            .map(|v| v.id)
    }

    /// View after `id`, wrapping around
    pub fn next(&self, id: ViewId) -> ViewId {
        match self.position(id) {
            Some(idx) => self.views[(idx + 1) % self.views.len()].id,
            None => self.default_view(),
        }
    }

    /// View before `id`, wrapping around
    pub fn previous(&self, id: ViewId) -> ViewId {
        match self.position(id) {
            Some(idx) => {
                let len = self.views.len();
                self.views[(idx + len - 1) % len].id
            }
            None => self.default_view(),
        }
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order_matches_view_ids() {
        let registry = ViewRegistry::standard();
        let ids: Vec<ViewId> = registry.list_views().iter().map(|v| v.id).collect();
        assert_eq!(ids, ViewId::ALL.to_vec());
        assert_eq!(registry.default_view(), ViewId::Dashboard);
    }

    #[test]
    fn test_shortcuts_are_unique_digits() {
        let registry = ViewRegistry::standard();
        for (idx, view) in registry.list_views().iter().enumerate() {
            let expected = char::from_digit(idx as u32 + 1, 10);
            assert_eq!(Some(view.shortcut), expected);
            assert_eq!(registry.by_shortcut(view.shortcut), Some(view.id));
        }
        assert_eq!(registry.by_shortcut('9'), None);
    }

    #[test]
    fn test_next_previous_wrap() {
        let registry = ViewRegistry::standard();
        assert_eq!(registry.next(ViewId::Dashboard), ViewId::Recruitment);
        assert_eq!(registry.next(ViewId::Diversity), ViewId::Dashboard);
        assert_eq!(registry.previous(ViewId::Dashboard), ViewId::Diversity);
        assert_eq!(registry.previous(ViewId::Workforce), ViewId::Recruitment);
    }

    #[test]
    fn test_rejects_empty_and_duplicate_registries() {
        assert_eq!(
            ViewRegistry::from_descriptors(Vec::new()).err(),
            Some(ViewError::EmptyRegistry)
        );
        let dup = vec![
            descriptor_for(ViewId::Workforce),
            descriptor_for(ViewId::Workforce),
        ];
        assert_eq!(
            ViewRegistry::from_descriptors(dup).err(),
            Some(ViewError::DuplicateView(ViewId::Workforce))
        );
    }

    #[test]
    fn test_unregistered_view_is_unknown() {
        let registry = ViewRegistry::from_descriptors(vec![
            descriptor_for(ViewId::Attendance),
            descriptor_for(ViewId::Diversity),
        ])
        .unwrap();
        let data = Datasets::from_seed(0);
        assert_eq!(registry.default_view(), ViewId::Attendance);
        assert_eq!(
            registry.render(ViewId::Recruitment, &data).err(),
            Some(ViewError::UnknownView("recruitment".to_string()))
        );
        assert_eq!(registry.next(ViewId::Recruitment), ViewId::Attendance);
    }
}
