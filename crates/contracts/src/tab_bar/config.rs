use super::tab::TabDescriptor;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Набор табов нижней панели
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBarConfig {
    #[serde(default)]
    pub tabs: Vec<TabDescriptor>,
}

/// Default tab set embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[[tabs]]
key = "home"
label = "Home"
href = "/"
separator_after = true
rules = [{ exact = "/" }]

[[tabs]]
key = "sick"
label = "Sick"
href = "/sick"
rules = [{ exact = "/sick" }, { prefix = "/sick/sick" }]

[[tabs]]
key = "cs"
label = "CS"
href = "/sick/cs"
rules = [{ prefix = "/sick/cs" }]
"#;

impl TabBarConfig {
    /// Parse and validate a tab set from TOML
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: TabBarConfig =
            toml::from_str(contents).context("failed to parse tab bar config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for (index, tab) in self.tabs.iter().enumerate() {
            ensure!(!tab.key.trim().is_empty(), "tab #{index} has an empty key");
            ensure!(
                !tab.label.trim().is_empty(),
                "tab '{}' has an empty label",
                tab.key
            );
            ensure!(
                tab.href.starts_with('/'),
                "tab '{}' href must start with '/', got '{}'",
                tab.key,
                tab.href
            );
            ensure!(seen.insert(tab.key.as_str()), "duplicate tab key '{}'", tab.key);
        }
        Ok(())
    }

    pub fn tab(&self, key: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    /// Ключи всех активных табов в порядке отображения
    pub fn active_keys(&self, path: &str) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|tab| tab.is_active(path))
            .map(|tab| tab.key.as_str())
            .collect()
    }
}

/// Load the embedded default tab set
pub fn load_config() -> anyhow::Result<TabBarConfig> {
    TabBarConfig::from_toml(DEFAULT_CONFIG).context("embedded default tab bar config is invalid")
}
