//! Bottom tab navigation
//!
//! Содержит:
//! - `tab_bar` - компонент `TabBar` (путь передаётся через проп)
//! - `routed` - `RoutedTabBar`, берёт путь из `use_location`
//! - `classes` - выбор CSS-классов по флагу активности

pub mod classes;
pub mod routed;
pub mod tab_bar;

pub use routed::RoutedTabBar;
pub use tab_bar::TabBar;
