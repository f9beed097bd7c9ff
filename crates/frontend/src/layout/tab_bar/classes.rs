//! CSS-классы состояний таба
//!
//! Активный таб: контрастный текст и видимая полоска-индикатор.
//! Неактивный: приглушённый текст и прозрачный индикатор того же размера,
//! чтобы разметка не прыгала при переключении.

pub fn link_class(active: bool) -> &'static str {
    if active {
        "tab-bar__link tab-bar__link--active"
    } else {
        "tab-bar__link tab-bar__link--muted"
    }
}

pub fn indicator_class(active: bool) -> &'static str {
    if active {
        "tab-bar__indicator tab-bar__indicator--active"
    } else {
        "tab-bar__indicator tab-bar__indicator--hidden"
    }
}

/// Значение `aria-current`; `None` убирает атрибут
pub fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_classes() {
        assert_eq!(link_class(true), "tab-bar__link tab-bar__link--active");
        assert_eq!(
            indicator_class(true),
            "tab-bar__indicator tab-bar__indicator--active"
        );
        assert_eq!(aria_current(true), Some("page"));
    }

    #[test]
    fn test_inactive_classes() {
        assert_eq!(link_class(false), "tab-bar__link tab-bar__link--muted");
        assert_eq!(
            indicator_class(false),
            "tab-bar__indicator tab-bar__indicator--hidden"
        );
        assert_eq!(aria_current(false), None);
    }

    #[test]
    fn test_indicator_is_always_rendered() {
        // индикатор резервирует место в обоих состояниях
        for active in [true, false] {
            assert!(indicator_class(active).starts_with("tab-bar__indicator "));
        }
    }
}
