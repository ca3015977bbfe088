// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color schemes and their light/dark roots.

use core::fmt;
use core::str::FromStr;

/// A resolved color scheme, as produced by a theme provider.
///
/// Only the light/dark root affects the numeric parameters of palette
/// resolution; sub-schemes may still select distinct curated palettes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    /// Light.
    #[default]
    Light,
    /// Light, high contrast.
    LightHighContrast,
    /// Light, tuned for red-green color blindness.
    LightColorblind,
    /// Light, tuned for tritanopia.
    LightTritanopia,
    /// Dark.
    Dark,
    /// Dark with a dimmed background.
    DarkDimmed,
    /// Dark, high contrast.
    DarkHighContrast,
    /// Dark, tuned for red-green color blindness.
    DarkColorblind,
    /// Dark, tuned for tritanopia.
    DarkTritanopia,
}

impl ColorScheme {
    /// All schemes, light family first.
    pub const ALL: [Self; 9] = [
        Self::Light,
        Self::LightHighContrast,
        Self::LightColorblind,
        Self::LightTritanopia,
        Self::Dark,
        Self::DarkDimmed,
        Self::DarkHighContrast,
        Self::DarkColorblind,
        Self::DarkTritanopia,
    ];

    /// The snake-case name used by theme providers, for example `dark_dimmed`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::LightHighContrast => "light_high_contrast",
            Self::LightColorblind => "light_colorblind",
            Self::LightTritanopia => "light_tritanopia",
            Self::Dark => "dark",
            Self::DarkDimmed => "dark_dimmed",
            Self::DarkHighContrast => "dark_high_contrast",
            Self::DarkColorblind => "dark_colorblind",
            Self::DarkTritanopia => "dark_tritanopia",
        }
    }

    /// Whether this scheme belongs to the dark family.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(
            self,
            Self::Dark
                | Self::DarkDimmed
                | Self::DarkHighContrast
                | Self::DarkColorblind
                | Self::DarkTritanopia
        )
    }

    /// Whether this is a high-contrast scheme.
    #[must_use]
    pub const fn is_high_contrast(self) -> bool {
        matches!(self, Self::LightHighContrast | Self::DarkHighContrast)
    }

    /// The root of this scheme's family: [`Light`](Self::Light) or [`Dark`](Self::Dark).
    #[must_use]
    pub const fn root(self) -> Self {
        if self.is_dark() { Self::Dark } else { Self::Light }
    }

    /// Parses a scheme name, mapping unknown names to the nearest root.
    ///
    /// Names beginning with `dark` resolve to [`Dark`](Self::Dark); anything else
    /// resolves to [`Light`](Self::Light).
    ///
    /// ```
    /// use trellis_palette::ColorScheme;
    ///
    /// assert_eq!(ColorScheme::from_name_lossy("dark_dimmed"), ColorScheme::DarkDimmed);
    /// assert_eq!(ColorScheme::from_name_lossy("dark_sepia"), ColorScheme::Dark);
    /// assert_eq!(ColorScheme::from_name_lossy("solarized"), ColorScheme::Light);
    /// ```
    #[must_use]
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            let root = if name.starts_with("dark") {
                Self::Dark
            } else {
                Self::Light
            };
            tracing::debug!(name, root = root.name(), "unknown color scheme, using root");
            root
        })
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or(ParseColorSchemeError)
    }
}

/// Error returned when parsing an unknown color scheme name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme")]
pub struct ParseColorSchemeError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.name().parse::<ColorScheme>(), Ok(scheme));
        }
        assert_eq!("Dark".parse::<ColorScheme>(), Err(ParseColorSchemeError));
    }

    #[test]
    fn roots_follow_family() {
        for scheme in ColorScheme::ALL {
            let expected = if scheme.name().starts_with("dark") {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            };
            assert_eq!(scheme.root(), expected, "root of {scheme}");
        }
    }

    #[test]
    fn high_contrast_detection() {
        assert!(ColorScheme::DarkHighContrast.is_high_contrast());
        assert!(ColorScheme::LightHighContrast.is_high_contrast());
        assert!(!ColorScheme::DarkDimmed.is_high_contrast());
    }
}
