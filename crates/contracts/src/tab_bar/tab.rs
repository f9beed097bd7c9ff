use serde::{Deserialize, Serialize};

/// Правило сопоставления пути с табом.
///
/// `Prefix` сравнивает строки, а не сегменты пути: `/sick/cs` совпадает
/// и с `/sick/csharp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    Exact(String),
    Prefix(String),
}

impl MatchRule {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            MatchRule::Exact(literal) => path == literal,
            MatchRule::Prefix(literal) => path.starts_with(literal.as_str()),
        }
    }
}

/// Описание одного таба нижней панели
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub key: String,
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub rules: Vec<MatchRule>,
    /// Вертикальный разделитель после таба (только визуальный)
    #[serde(default)]
    pub separator_after: bool,
}

impl TabDescriptor {
    /// Таб активен, если совпало хотя бы одно правило.
    pub fn is_active(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(path))
    }
}

pub const HOME_PATH: &str = "/";
pub const SICK_PATH: &str = "/sick";
pub const CS_PATH: &str = "/sick/cs";

const SICK_PREFIX: &str = "/sick/sick";

pub fn is_home(path: &str) -> bool {
    path == HOME_PATH
}

pub fn is_sick(path: &str) -> bool {
    path == SICK_PATH || path.starts_with(SICK_PREFIX)
}

pub fn is_cs(path: &str) -> bool {
    path.starts_with(CS_PATH)
}

/// Флаги активности для трёх стандартных табов.
///
/// Флаги независимы друг от друга: для произвольной строки возможны
/// как ноль, так и несколько активных табов.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTabs {
    pub home: bool,
    pub sick: bool,
    pub cs: bool,
}

impl ActiveTabs {
    pub fn for_path(path: &str) -> Self {
        Self {
            home: is_home(path),
            sick: is_sick(path),
            cs: is_cs(path),
        }
    }

    pub fn any(&self) -> bool {
        self.home || self.sick || self.cs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &[
        "",
        "/",
        "//",
        "/sick",
        "/sick/",
        "/sick/sick",
        "/sick/sick/detail",
        "/sick/sickness",
        "/sick/cs",
        "/sick/cs/",
        "/sick/csharp",
        "/sic",
        "/SICK",
        "/unrelated",
        "sick/cs",
    ];

    #[test]
    fn test_predicates_match_definition() {
        for path in PATHS {
            assert_eq!(is_home(path), *path == "/", "home: {path:?}");
            assert_eq!(
                is_sick(path),
                *path == "/sick" || path.starts_with("/sick/sick"),
                "sick: {path:?}"
            );
            assert_eq!(is_cs(path), path.starts_with("/sick/cs"), "cs: {path:?}");
        }
    }

    #[test]
    fn test_scenarios() {
        let cases = [
            ("/", (true, false, false)),
            ("/sick", (false, true, false)),
            ("/sick/cs", (false, false, true)),
            ("/sick/sick/detail", (false, true, false)),
            ("/sick/csharp", (false, false, true)),
            ("/unrelated", (false, false, false)),
        ];
        for (path, (home, sick, cs)) in cases {
            assert_eq!(
                ActiveTabs::for_path(path),
                ActiveTabs { home, sick, cs },
                "path {path:?}"
            );
        }
    }

    #[test]
    fn test_empty_and_trailing_slash_paths_are_inactive() {
        assert!(!ActiveTabs::for_path("").any());
        // "/sick/" не равен "/sick" и не начинается с "/sick/sick"
        assert!(!ActiveTabs::for_path("/sick/").any());
    }

    #[test]
    fn test_for_path_is_idempotent() {
        for path in PATHS {
            assert_eq!(ActiveTabs::for_path(path), ActiveTabs::for_path(path));
        }
    }

    #[test]
    fn test_match_rules() {
        let exact = MatchRule::Exact("/sick".to_string());
        assert!(exact.matches("/sick"));
        assert!(!exact.matches("/sick/sick"));

        let prefix = MatchRule::Prefix("/sick/cs".to_string());
        assert!(prefix.matches("/sick/cs"));
        assert!(prefix.matches("/sick/csharp"));
        assert!(!prefix.matches("/sick/c"));
    }

    #[test]
    fn test_descriptor_without_rules_never_active() {
        let tab = TabDescriptor {
            key: "empty".to_string(),
            label: "Empty".to_string(),
            href: "/".to_string(),
            rules: vec![],
            separator_after: false,
        };
        assert!(!tab.is_active("/"));
        assert!(!tab.is_active(""));
    }
}
