use serde::{Deserialize, Serialize};

/// Page color scheme. Stored as the `enabled`/`disabled` dark-mode flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("disabled") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            Theme::Dark => "enabled",
            Theme::Light => "disabled",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_unknown_flag_is_dark() {
        assert_eq!(Theme::from_flag(None), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("enabled")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("garbage")), Theme::Dark);
        assert_eq!(Theme::from_flag(Some("disabled")), Theme::Light);
    }

    #[test]
    fn test_flag_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_flag(Some(theme.as_flag())), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }
}
