#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Glyph for the toggle button: shows the mode you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub divider: &'static str,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let (background, paper, text, text_secondary, divider) = match mode {
            ThemeMode::Dark => (
                "#121212",
                "#1e1e1e",
                "#ffffff",
                "rgba(255,255,255,0.7)",
                "rgba(255,255,255,0.12)",
            ),
            ThemeMode::Light => (
                "#f5f5f5",
                "#ffffff",
                "rgba(0,0,0,0.87)",
                "rgba(0,0,0,0.6)",
                "rgba(0,0,0,0.12)",
            ),
        };

        Self {
            primary: "#3f51b5",
            primary_light: "#757de8",
            primary_dark: "#002984",
            secondary: "#f50057",
            accent: "#00bcd4",
            background,
            paper,
            text,
            text_secondary,
            divider,
        }
    }

    /// Inline `style` value exposing the palette as CSS custom properties.
    pub fn css_vars(&self) -> String {
        format!(
            "--primary: {}; --primary-light: {}; --primary-dark: {}; --secondary: {}; \
             --accent: {}; --bg: {}; --paper: {}; --text: {}; --text-secondary: {}; --divider: {};",
            self.primary,
            self.primary_light,
            self.primary_dark,
            self.secondary,
            self.accent,
            self.background,
            self.paper,
            self.text,
            self.text_secondary,
            self.divider,
        )
    }
}
