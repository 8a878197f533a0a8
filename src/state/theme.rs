//! Theme variants and their color tokens.
//!
//! DESIGN
//! ======
//! The two variants form a closed set; each resolves to an immutable token
//! record so every themed element reads from one mapping. The active variant
//! lives in a context signal owned by `App`, defaults to light, and resets on
//! reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Semantic color roles applied across the login screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Page background behind the login card.
    pub body_background: &'static str,
    /// Login card background.
    pub surface_background: &'static str,
    /// Foreground text color.
    pub text: &'static str,
    /// Submit button background.
    pub button_background: &'static str,
    /// Submit button background while hovered.
    pub button_hover: &'static str,
    /// Input field border color.
    pub input_border: &'static str,
}

const LIGHT: ThemeTokens = ThemeTokens {
    body_background: "#f0f2f5",
    surface_background: "#ffffff",
    text: "#333333",
    button_background: "#007bff",
    button_hover: "#0056b3",
    input_border: "#cccccc",
};

const DARK: ThemeTokens = ThemeTokens {
    body_background: "#121212",
    surface_background: "#1e1e1e",
    text: "#ffffff",
    button_background: "#bb86fc",
    button_hover: "#3700b3",
    input_border: "#444444",
};

/// The closed set of theme variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl ThemeVariant {
    /// Color tokens for this variant.
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button: the mode a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}
