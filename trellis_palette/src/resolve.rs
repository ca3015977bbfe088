// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palette resolution from a seed color and a color scheme.

use core::fmt;
use core::str::FromStr;

use crate::{
    ColorScheme, Hsluv, Paint, ParseHexError, Rgb, Variant, VariantColors, search_contrast,
};

/// The input color a palette is derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seed {
    /// An arbitrary color; the palette is computed.
    Hex(Rgb),
    /// A named variant; the palette is looked up in the curated tables.
    Variant(Variant),
}

impl Seed {
    /// Parses a seed, falling back to [`Variant::FALLBACK`] when the string is
    /// neither a hex literal nor a variant name.
    ///
    /// ```
    /// use trellis_palette::{Rgb, Seed, Variant};
    ///
    /// assert_eq!(Seed::parse_lossy("#4594E3"), Seed::Hex(Rgb::from_u32(0x4594E3)));
    /// assert_eq!(Seed::parse_lossy("red"), Seed::Variant(Variant::Red));
    /// assert_eq!(Seed::parse_lossy("#zzz"), Seed::Variant(Variant::FALLBACK));
    /// ```
    #[must_use]
    pub fn parse_lossy(seed: &str) -> Self {
        seed.parse().unwrap_or_else(|err| {
            tracing::debug!(seed, %err, "unusable seed color, using fallback variant");
            Self::Variant(Variant::FALLBACK)
        })
    }
}

impl From<Rgb> for Seed {
    fn from(color: Rgb) -> Self {
        Self::Hex(color)
    }
}

impl From<Variant> for Seed {
    fn from(variant: Variant) -> Self {
        Self::Variant(variant)
    }
}

impl FromStr for Seed {
    type Err = ParseSeedError;

    /// Variant names take precedence; anything else must be a hex literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(variant) = s.parse::<Variant>() {
            return Ok(Self::Variant(variant));
        }
        Ok(Self::Hex(Rgb::from_hex(s)?))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(color) => fmt::Display::fmt(color, f),
            Self::Variant(variant) => fmt::Display::fmt(variant, f),
        }
    }
}

/// Error returned when a string is neither a variant name nor a hex literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("seed is not a variant name or a valid hex color: {0}")]
pub struct ParseSeedError(#[from] pub ParseHexError);

/// Numeric parameters of the contrast search for one scheme family.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContrastParams {
    /// Lightness of the generated background.
    pub background_lightness: f64,
    /// Lightness change per search step; negative darkens.
    pub step: f64,
    /// Minimum text-on-background contrast ratio.
    pub min_ratio: f64,
    /// Minimum border-on-background contrast ratio for selected tokens.
    pub border_ratio: f64,
    /// Lightness the text search starts from.
    pub text_start_lightness: f64,
}

impl ContrastParams {
    /// Parameters for light-family schemes: pale background, text darkens.
    pub const LIGHT: Self = Self {
        background_lightness: 96.0,
        step: -1.0,
        min_ratio: 4.5,
        border_ratio: 3.0,
        text_start_lightness: 50.0,
    };

    /// Parameters for dark-family schemes: deep background, text lightens.
    pub const DARK: Self = Self {
        background_lightness: 16.0,
        step: 1.0,
        min_ratio: 5.5,
        border_ratio: 3.0,
        text_start_lightness: 50.0,
    };

    /// Parameters for the root family of `scheme`.
    #[must_use]
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        if scheme.is_dark() {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Lightness of the hovered background. Not clamped to `[0, 100]`.
    #[must_use]
    pub fn hover_lightness(&self) -> f64 {
        self.background_lightness + 2.0 * self.step
    }
}

/// Colors for rendering a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedPalette {
    /// Token background.
    pub background_color: Rgb,
    /// Token text.
    pub text_color: Rgb,
    /// Token border, when the palette defines one.
    pub border_color: Option<Paint>,
    /// Hovered background, when the palette defines one.
    pub background_color_hover: Option<Rgb>,
}

impl From<&VariantColors> for ResolvedPalette {
    fn from(colors: &VariantColors) -> Self {
        Self {
            background_color: colors.background,
            text_color: colors.text,
            border_color: colors.border.map(Paint::Solid),
            background_color_hover: colors.background_hover,
        }
    }
}

/// Resolves the palette of a token.
///
/// Named variants come from the curated tables (see [`Variant::colors`]) and
/// ignore `selected`. Hex seeds keep their hue and saturation and derive:
///
/// - a background at the family's background lightness,
/// - text found by walking lightness from 50 until it meets the family's minimum
///   ratio against the background, or reaches a bound,
/// - when `selected`, a border found by the same walk starting from the
///   background color as rendered (its 8-bit value read back into HSLuv) with a
///   3:1 target; otherwise a transparent border,
/// - a hover background two steps past the background lightness.
///
/// The result is a pure function of the arguments.
///
/// ```
/// use trellis_palette::{ColorScheme, Paint, Rgb, Seed, contrast_ratio, resolve_palette};
///
/// let seed = Seed::Hex(Rgb::from_u32(0x4594E3));
/// let palette = resolve_palette(seed, ColorScheme::Dark, false);
/// assert!(contrast_ratio(palette.text_color, palette.background_color) >= 5.5);
/// assert_eq!(palette.border_color, Some(Paint::Transparent));
/// ```
#[must_use]
pub fn resolve_palette(seed: Seed, scheme: ColorScheme, selected: bool) -> ResolvedPalette {
    match seed {
        Seed::Variant(variant) => variant.colors(scheme).into(),
        Seed::Hex(color) => palette_from_color(color, ContrastParams::for_scheme(scheme), selected),
    }
}

/// Resolves a palette from untyped names, never failing.
///
/// An unusable seed resolves as [`Variant::FALLBACK`] and an unknown scheme as
/// its nearest root (see [`ColorScheme::from_name_lossy`]).
#[must_use]
pub fn resolve_palette_lossy(seed: &str, scheme: &str, selected: bool) -> ResolvedPalette {
    resolve_palette(
        Seed::parse_lossy(seed),
        ColorScheme::from_name_lossy(scheme),
        selected,
    )
}

/// Derives a palette from an arbitrary color with explicit parameters.
#[must_use]
pub fn palette_from_color(color: Rgb, params: ContrastParams, selected: bool) -> ResolvedPalette {
    let hsluv = Hsluv::from_rgb(color);
    let background = hsluv.with_lightness(params.background_lightness);
    let background_color = background.to_rgb();

    let text = search_contrast(
        hsluv.with_lightness(params.text_start_lightness),
        background_color,
        params.min_ratio,
        params.step,
    );

    let border_color = if selected {
        // The walk starts from the rendered background, not from the exact lightness.
        let start = Hsluv::from_rgb(background_color);
        let border = search_contrast(start, background_color, params.border_ratio, params.step);
        Paint::Solid(border.color)
    } else {
        Paint::Transparent
    };

    let background_color_hover = hsluv.with_lightness(params.hover_lightness()).to_rgb();

    tracing::trace!(
        %color,
        background = %background_color,
        text = %text.color,
        text_lightness = text.lightness,
        "resolved palette"
    );

    ResolvedPalette {
        background_color,
        text_color: text.color,
        border_color: Some(border_color),
        background_color_hover: Some(background_color_hover),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast_ratio;

    const SEED: Rgb = Rgb::from_u32(0x4594E3);

    #[test]
    fn dark_scenario_walks_upward_from_fifty() {
        let palette = resolve_palette(Seed::Hex(SEED), ColorScheme::Dark, false);
        let hsluv = Hsluv::from_rgb(SEED);
        assert_eq!(palette.background_color, hsluv.with_lightness(16.0).to_rgb());

        let ratio = contrast_ratio(palette.text_color, palette.background_color);
        assert!(ratio >= 5.5, "text contrast was {ratio}");
        let start = hsluv.with_lightness(50.0).to_rgb();
        assert!(
            contrast_ratio(palette.text_color, Rgb::BLACK)
                >= contrast_ratio(start, Rgb::BLACK),
            "text should be no darker than the starting candidate"
        );
        assert_eq!(
            palette.background_color_hover,
            Some(hsluv.with_lightness(18.0).to_rgb())
        );
    }

    #[test]
    fn light_scenario_meets_its_ratio() {
        let palette = resolve_palette(Seed::Hex(SEED), ColorScheme::LightColorblind, false);
        let hsluv = Hsluv::from_rgb(SEED);
        assert_eq!(palette.background_color, hsluv.with_lightness(96.0).to_rgb());
        assert_eq!(
            palette.background_color_hover,
            Some(hsluv.with_lightness(94.0).to_rgb())
        );
        let ratio = contrast_ratio(palette.text_color, palette.background_color);
        assert!(ratio >= 4.5, "text contrast was {ratio}");
    }

    #[test]
    fn selection_controls_border() {
        let plain = resolve_palette(Seed::Hex(SEED), ColorScheme::Light, false);
        assert_eq!(plain.border_color, Some(Paint::Transparent));

        let selected = resolve_palette(Seed::Hex(SEED), ColorScheme::Light, true);
        let Some(Paint::Solid(border)) = selected.border_color else {
            panic!("selected tokens get a solid border");
        };
        let ratio = contrast_ratio(border, selected.background_color);
        assert!(ratio >= 3.0, "border contrast was {ratio}");
        // Selection does not change the other colors.
        assert_eq!(selected.text_color, plain.text_color);
        assert_eq!(selected.background_color, plain.background_color);
    }

    #[test]
    fn border_walk_starts_from_rendered_background() {
        let seed = Seed::Hex(Rgb::from_u32(0x000011));
        let palette = resolve_palette(seed, ColorScheme::Light, true);
        assert_eq!(
            palette.border_color,
            Some(Paint::Solid(Rgb::from_u32(0x7D7DFF)))
        );

        let params = ContrastParams::for_scheme(ColorScheme::Dark);
        let palette = palette_from_color(SEED, params, true);
        let expected = search_contrast(
            Hsluv::from_rgb(palette.background_color),
            palette.background_color,
            params.border_ratio,
            params.step,
        );
        assert_eq!(palette.border_color, Some(Paint::Solid(expected.color)));
    }

    #[test]
    fn variants_use_curated_tables() {
        let palette = resolve_palette(Seed::Variant(Variant::Blue), ColorScheme::Light, true);
        assert_eq!(palette.background_color, Rgb::from_u32(0xE5F0FB));
        assert_eq!(palette.text_color, Rgb::from_u32(0x005CB6));
        assert_eq!(palette.background_color_hover, Some(Rgb::from_u32(0xDAE9F9)));
        assert_eq!(palette.border_color, None);

        let hc = resolve_palette(Seed::Variant(Variant::Blue), ColorScheme::LightHighContrast, false);
        assert_eq!(hc.border_color, Some(Paint::Solid(Rgb::from_u32(0x4D99E4))));
    }

    #[test]
    fn invalid_seed_matches_fallback_variant() {
        for scheme in ColorScheme::ALL {
            let expected = resolve_palette(Seed::Variant(Variant::FALLBACK), scheme, false);
            assert_eq!(
                resolve_palette_lossy("#zzz", scheme.name(), false),
                expected,
                "fallback under {scheme}"
            );
        }
    }

    #[test]
    fn unknown_scheme_uses_nearest_root() {
        assert_eq!(
            resolve_palette_lossy("#4594E3", "darkish", false),
            resolve_palette(Seed::Hex(SEED), ColorScheme::Dark, false)
        );
        assert_eq!(
            resolve_palette_lossy("green", "sepia", false),
            resolve_palette(Seed::Variant(Variant::Green), ColorScheme::Light, false)
        );
    }

    #[test]
    fn seed_parsing() {
        assert_eq!("gray".parse::<Seed>(), Ok(Seed::Variant(Variant::Gray)));
        assert_eq!("abc".parse::<Seed>(), Ok(Seed::Hex(Rgb::new(0xaa, 0xbb, 0xcc))));
        assert!("#zzz".parse::<Seed>().is_err());
    }

    #[test]
    fn hover_lightness_is_not_clamped() {
        let params = ContrastParams {
            background_lightness: 99.5,
            ..ContrastParams::DARK
        };
        assert_eq!(params.hover_lightness(), 101.5);
        // Out-of-range lightness saturates in the conversion instead of failing.
        let palette = palette_from_color(SEED, params, false);
        assert_eq!(palette.background_color_hover, Some(Rgb::WHITE));
    }
}
