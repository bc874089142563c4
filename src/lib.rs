//! Terminal HR analytics dashboard
//!
//! A [`registry::ViewRegistry`] maps each [`domain::ViewId`] to a renderer
//! that turns [`domain::Datasets`] into a [`domain::WidgetTree`]. The
//! [`shell::DashboardShell`] owns the active view and the mounted tree;
//! [`app::App`] routes input actions to it and [`ui`] draws the result.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod logging;
pub mod modules;
pub mod registry;
pub mod shell;
pub mod ui;
