pub mod tab_bar;

pub use tab_bar::{RoutedTabBar, TabBar};
