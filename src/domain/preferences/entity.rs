use serde::{Deserialize, Serialize};

/// Colour scheme requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Display preferences persisted across sessions.
/// Applying them visually is up to the host; the core only stores them.
/// Fields missing from a stored document take their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub theme: Theme,
    pub reduce_motion: bool,
}

impl Preferences {
    /// CSS `scroll-behavior` value matching the motion preference
    pub fn scroll_behavior(&self) -> &'static str {
        if self.reduce_motion {
            "auto"
        } else {
            "smooth"
        }
    }

    /// Pressed state of the theme toggle button (pressed = light)
    pub fn theme_pressed(&self) -> bool {
        self.theme == Theme::Light
    }
}
