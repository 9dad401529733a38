//! Light palette colors used by the shell.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub default: String,
    pub paper: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: String,
}

/// Palette subset consumed by the app bar, drawer and baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Background,
    pub text: TextColors,
    pub divider: String,
    /// Drawer backdrop tint.
    pub backdrop: String,
    /// Error text, used by the crash fallback.
    pub error: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Background {
                default: "#fff".to_string(),
                paper: "#fff".to_string(),
            },
            text: TextColors {
                primary: "rgba(0, 0, 0, 0.87)".to_string(),
            },
            divider: "rgba(0, 0, 0, 0.12)".to_string(),
            backdrop: "rgba(0, 0, 0, 0.5)".to_string(),
            error: "#d32f2f".to_string(),
        }
    }
}
