pub const THEME_KEY: &str = "theme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The control shows the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Durable home of the theme preference. Writes are best-effort.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

pub struct ThemeToggle {
    current: Theme,
}

impl ThemeToggle {
    pub fn restore(store: &impl ThemeStore) -> Self {
        let current = store
            .load()
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or(Theme::Light);

        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self, store: &impl ThemeStore) -> Theme {
        self.current = self.current.toggled();
        store.save(self.current.as_str());
        self.current
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct MemoryStore {
        value: RefCell<Option<String>>,
        pub(crate) read_only: bool,
    }

    impl MemoryStore {
        pub(crate) fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
                read_only: false,
            }
        }

        pub(crate) fn value(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, value: &str) {
            if !self.read_only {
                *self.value.borrow_mut() = Some(value.to_string());
            }
        }
    }

    #[test]
    fn restore_defaults_to_light_when_absent() {
        let store = MemoryStore::default();
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Light);
        assert_eq!(store.value(), None);
    }

    #[test]
    fn restore_ignores_unrecognised_values() {
        let store = MemoryStore::with("solarized");
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Light);

        let store = MemoryStore::with("Dark");
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Light);
    }

    #[test]
    fn restore_reads_saved_dark_preference() {
        let store = MemoryStore::with("dark");
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Dark);
    }

    #[test]
    fn first_toggle_creates_the_preference() {
        let store = MemoryStore::default();
        let mut toggle = ThemeToggle::restore(&store);

        assert_eq!(toggle.toggle(&store), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_returns_to_original_state_and_value() {
        let store = MemoryStore::with("light");
        let mut toggle = ThemeToggle::restore(&store);

        toggle.toggle(&store);
        toggle.toggle(&store);

        assert_eq!(toggle.current(), Theme::Light);
        assert!(!toggle.current().is_dark());
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_still_flips_when_storage_rejects_writes() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let mut toggle = ThemeToggle::restore(&store);

        assert_eq!(toggle.toggle(&store), Theme::Dark);
        assert_eq!(toggle.toggle(&store), Theme::Light);
        assert_eq!(store.value(), None);
    }

    #[test]
    fn icon_offers_the_other_theme() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }
}
