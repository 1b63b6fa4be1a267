// Theme preference, persisted under the `theme` storage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Anything other than a saved `light` means dark.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Class set on the document element while the light theme is active.
    pub const LIGHT_CLASS: &'static str = "light-mode";

    pub fn page_background(self) -> &'static str {
        match self {
            Theme::Dark => "#000000",
            Theme::Light => "#f5f5f5",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}
