//! Registry and renderer behaviour against the public crate API

use std::collections::BTreeSet;

use hrdash::domain::{Datasets, ViewError, ViewId, WidgetId};
use hrdash::registry::{descriptor_for, ViewRegistry};

#[test]
fn every_registered_view_renders_widgets() {
    let registry = ViewRegistry::standard();
    let data = Datasets::from_seed(11);
    for descriptor in registry.list_views() {
        let tree = registry.render(descriptor.id, &data).unwrap();
        assert_eq!(tree.view, descriptor.id);
        assert!(!tree.is_empty(), "{} rendered nothing", descriptor.id);
        assert!(tree.widgets().all(|w| !w.chart.is_empty()));
    }
}

#[test]
fn registry_lists_views_in_navigation_order() {
    let registry = ViewRegistry::standard();
    let ids: Vec<ViewId> = registry.list_views().iter().map(|d| d.id).collect();
    assert_eq!(ids, ViewId::ALL.to_vec());
    assert_eq!(registry.default_view(), ViewId::Dashboard);
    let shortcuts: Vec<char> = registry.list_views().iter().map(|d| d.shortcut).collect();
    assert_eq!(shortcuts, vec!['1', '2', '3', '4', '5', '6']);
}

#[test]
fn unknown_key_is_rejected() {
    let registry = ViewRegistry::standard();
    let data = Datasets::from_seed(11);
    let err = registry.render_key("payroll", &data).unwrap_err();
    assert_eq!(err, ViewError::UnknownView("payroll".to_string()));
    assert_eq!(err.to_string(), "unknown view: payroll");

    let tree = registry.render_key("Attendance", &data).unwrap();
    assert_eq!(tree.view, ViewId::Attendance);
}

#[test]
fn views_do_not_share_widgets() {
    let registry = ViewRegistry::standard();
    let data = Datasets::from_seed(11);
    let mut seen = BTreeSet::new();
    for id in ViewId::ALL {
        for widget in registry.render(id, &data).unwrap().widget_ids() {
            assert!(seen.insert(widget), "{widget:?} appears on two views");
        }
    }
    assert_eq!(seen.len(), 19);
}

#[test]
fn recruitment_binds_its_three_widgets() {
    let tree = ViewRegistry::standard()
        .render(ViewId::Recruitment, &Datasets::from_seed(11))
        .unwrap();
    assert_eq!(
        tree.widget_ids(),
        vec![
            WidgetId::RecruitmentFunnel,
            WidgetId::MonthlyHiringTrend,
            WidgetId::SourceSplit
        ]
    );
}

#[test]
fn rendering_is_pure() {
    let registry = ViewRegistry::standard();
    let data = Datasets::from_seed(99);
    let first = registry.render(ViewId::Productivity, &data).unwrap();
    let second = registry.render(ViewId::Productivity, &data).unwrap();
    assert_eq!(first, second);
}

#[test]
fn same_seed_same_datasets() {
    assert_eq!(Datasets::from_seed(42), Datasets::from_seed(42));
    assert_ne!(
        Datasets::from_seed(42).avg_team_kpi,
        Datasets::from_seed(43).avg_team_kpi
    );
}

#[test]
fn custom_registry_rejects_duplicates_and_empty() {
    let err = ViewRegistry::from_descriptors(vec![
        descriptor_for(ViewId::Workforce),
        descriptor_for(ViewId::Workforce),
    ])
    .unwrap_err();
    assert_eq!(err, ViewError::DuplicateView(ViewId::Workforce));
    assert_eq!(
        ViewRegistry::from_descriptors(Vec::new()).unwrap_err(),
        ViewError::EmptyRegistry
    );
}

#[test]
fn custom_registry_hides_unregistered_views() {
    let registry = ViewRegistry::from_descriptors(vec![
        descriptor_for(ViewId::Attendance),
        descriptor_for(ViewId::Diversity),
    ])
    .unwrap();
    let data = Datasets::from_seed(1);
    assert_eq!(registry.default_view(), ViewId::Attendance);
    assert!(registry.render(ViewId::Recruitment, &data).is_err());
    assert_eq!(registry.next(ViewId::Diversity), ViewId::Attendance);
}
