// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named token variants and their curated palettes.

use core::fmt;
use core::str::FromStr;

use crate::{ColorScheme, Rgb};

/// A named semantic token color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Purple.
    Purple,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
    /// Red.
    Red,
    /// Gray.
    Gray,
}

impl Variant {
    /// All variants, in curated-table order.
    pub const ALL: [Self; 7] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Red,
        Self::Gray,
    ];

    /// The variant used when a seed cannot be resolved: the first table entry.
    pub const FALLBACK: Self = Self::ALL[0];

    /// Lowercase name, for example `purple`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    /// Curated palettes for this variant.
    #[must_use]
    pub fn palettes(self) -> &'static VariantPalettes {
        &CURATED[self.table_index()]
    }

    /// Position in [`ALL`](Self::ALL) and in the curated table.
    const fn table_index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Purple => 1,
            Self::Green => 2,
            Self::Yellow => 3,
            Self::Orange => 4,
            Self::Red => 5,
            Self::Gray => 6,
        }
    }

    /// The curated colors for `scheme`, falling back to the nearest root.
    ///
    /// A scheme with its own entry uses it. Otherwise dark-family schemes use
    /// the variant's `dark` entry and everything else uses `light`.
    #[must_use]
    pub fn colors(self, scheme: ColorScheme) -> &'static VariantColors {
        let palettes = self.palettes();
        let own = match scheme {
            ColorScheme::Light => Some(&palettes.light),
            ColorScheme::Dark => Some(&palettes.dark),
            ColorScheme::LightHighContrast => palettes.light_high_contrast.as_ref(),
            ColorScheme::DarkHighContrast => palettes.dark_high_contrast.as_ref(),
            ColorScheme::DarkDimmed => palettes.dark_dimmed.as_ref(),
            ColorScheme::LightColorblind
            | ColorScheme::LightTritanopia
            | ColorScheme::DarkColorblind
            | ColorScheme::DarkTritanopia => None,
        };
        own.unwrap_or(if scheme.is_dark() {
            &palettes.dark
        } else {
            &palettes.light
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or(ParseVariantError)
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token variant")]
pub struct ParseVariantError;

/// A curated color set for one variant under one scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VariantColors {
    /// Token background.
    pub background: Rgb,
    /// Token text.
    pub text: Rgb,
    /// Border, present for high-contrast schemes.
    pub border: Option<Rgb>,
    /// Hovered background, when curated.
    pub background_hover: Option<Rgb>,
}

impl VariantColors {
    const fn new(background: u32, text: u32) -> Self {
        Self {
            background: Rgb::from_u32(background),
            text: Rgb::from_u32(text),
            border: None,
            background_hover: None,
        }
    }

    const fn with_border(self, border: u32) -> Self {
        Self {
            border: Some(Rgb::from_u32(border)),
            ..self
        }
    }

    const fn with_hover(self, hover: u32) -> Self {
        Self {
            background_hover: Some(Rgb::from_u32(hover)),
            ..self
        }
    }
}

/// The curated palettes of one variant. `light` and `dark` are always present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantPalettes {
    /// Light scheme.
    pub light: VariantColors,
    /// Light high-contrast scheme.
    pub light_high_contrast: Option<VariantColors>,
    /// Dark scheme.
    pub dark: VariantColors,
    /// Dark high-contrast scheme.
    pub dark_high_contrast: Option<VariantColors>,
    /// Dark dimmed scheme.
    pub dark_dimmed: Option<VariantColors>,
}

impl VariantPalettes {
    const fn new(light: VariantColors, dark: VariantColors) -> Self {
        Self {
            light,
            light_high_contrast: None,
            dark,
            dark_high_contrast: None,
            dark_dimmed: None,
        }
    }
}

static CURATED: [VariantPalettes; 7] = [
    // blue
    VariantPalettes {
        light: VariantColors::new(0xE5F0FB, 0x005CB6).with_hover(0xDAE9F9),
        light_high_contrast: Some(VariantColors::new(0xE5F0FB, 0x004E9C).with_border(0x4D99E4)),
        dark: VariantColors::new(0x13273D, 0x4594E3),
        dark_high_contrast: Some(VariantColors::new(0x13273D, 0x80B6EC).with_border(0x0265C7)),
        dark_dimmed: Some(VariantColors::new(0x1E3247, 0x4594E3)),
    },
    // purple
    VariantPalettes::new(
        VariantColors::new(0xF0E5FB, 0x6200C3),
        VariantColors::new(0x311E4F, 0xAE73EA),
    ),
    // green
    VariantPalettes::new(
        VariantColors::new(0xE5F7EB, 0x00802B),
        VariantColors::new(0x133226, 0x00B23B),
    ),
    // yellow
    VariantPalettes::new(
        VariantColors::new(0xFFFCEE, 0x8A7300),
        VariantColors::new(0x33352C, 0xEAC404),
    ),
    // orange
    VariantPalettes::new(
        VariantColors::new(0xFFF7F0, 0xB15A01),
        VariantColors::new(0x392A1E, 0xFD8104),
    ),
    // red
    VariantPalettes::new(
        VariantColors::new(0xFBE5E6, 0xD60000),
        VariantColors::new(0x3B1B20, 0xE75E5E),
    ),
    // gray
    VariantPalettes::new(
        VariantColors::new(0xECEDEE, 0x434A52),
        VariantColors::new(0x2C3139, 0xA8B0B8),
    ),
];
