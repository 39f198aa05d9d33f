use serde::Serialize;

pub const COLOR_SCHEME_ENV: &str = "EVERGREEN_COLOR_SCHEME";

/// Answers "does the user prefer a dark color scheme?" once, at startup.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Reads `EVERGREEN_COLOR_SCHEME` (`dark` or `light`); anything else means light.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvColorSchemeProbe;

impl ColorSchemeProbe for EnvColorSchemeProbe {
    fn prefers_dark(&self) -> bool {
        std::env::var(COLOR_SCHEME_ENV)
            .map(|value| value.trim().eq_ignore_ascii_case("dark"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    /// An explicit override wins over the probe.
    pub fn detect(probe: &dyn ColorSchemeProbe, override_dark: Option<bool>) -> Self {
        Self {
            dark_mode: override_dark.unwrap_or_else(|| probe.prefers_dark()),
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Class to put on the document root.
    pub fn document_class(&self) -> Option<&'static str> {
        self.dark_mode.then_some("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sets_initial_mode() {
        assert!(ThemeState::detect(&FixedColorScheme(true), None).dark_mode);
        assert!(!ThemeState::detect(&FixedColorScheme(false), None).dark_mode);
    }

    #[test]
    fn override_beats_probe() {
        let theme = ThemeState::detect(&FixedColorScheme(true), Some(false));
        assert!(!theme.dark_mode);
        assert_eq!(theme.document_class(), None);
    }

    #[test]
    fn toggle_flips_document_class() {
        let mut theme = ThemeState::detect(&FixedColorScheme(false), None);
        assert!(theme.toggle());
        assert_eq!(theme.document_class(), Some("dark"));
        assert!(!theme.toggle());
    }

    // Only test touching the variable; kept in one test so runs never interleave.
    #[test]
    fn env_probe_reads_color_scheme_variable() {
        let cases = [
            ("dark", true),
            ("light", false),
            ("  Dark \n", true),
            (" light ", false),
            ("sepia", false),
        ];
        for (value, expected) in cases {
            std::env::set_var(COLOR_SCHEME_ENV, value);
            assert_eq!(EnvColorSchemeProbe.prefers_dark(), expected, "value {value:?}");
        }

        std::env::remove_var(COLOR_SCHEME_ENV);
        assert!(!EnvColorSchemeProbe.prefers_dark());
    }
}
