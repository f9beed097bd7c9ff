//! Нижняя панель навигации: описание табов и правила активности
//!
//! Содержит:
//! - `tab` - `TabDescriptor`, `MatchRule`, предикаты `is_home`/`is_sick`/`is_cs`
//! - `config` - набор табов, встроенный конфиг по умолчанию

pub mod config;
pub mod tab;

pub use config::{load_config, TabBarConfig};
pub use tab::{is_cs, is_home, is_sick, ActiveTabs, MatchRule, TabDescriptor};
