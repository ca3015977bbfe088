// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_palette --heading-base-level=0

//! Trellis Palette: accessible token colors.
//!
//! Tokens (chips, labels, topic tags) are tinted with a seed color chosen by the
//! user or the product. This crate turns a seed plus the active color scheme into
//! a background/text/border/hover set whose text meets a minimum contrast ratio.
//!
//! The core concepts are:
//!
//! - [`Seed`]: either an arbitrary [`Rgb`] color or a named [`Variant`].
//! - [`ColorScheme`]: the theme's scheme; only its light/dark [`root`](ColorScheme::root)
//!   changes the numeric [`ContrastParams`].
//! - [`resolve_palette`]: the pure resolution function, returning a [`ResolvedPalette`].
//! - [`search_contrast`]: the lightness walk on the [`Hsluv`] lightness axis, holding hue
//!   and saturation fixed, against a [`contrast_ratio`] target.
//!
//! Resolution degrades gracefully. An unusable seed falls back to
//! [`Variant::FALLBACK`], an unknown scheme to its nearest root, and a contrast
//! target that cannot be reached yields the color at the lightness bound. Callers
//! must not assume the returned ratio always meets the minimum.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_palette::{ColorScheme, Paint, Seed, contrast_ratio, resolve_palette};
//!
//! let seed: Seed = "#D60000".parse().unwrap();
//! let palette = resolve_palette(seed, ColorScheme::Light, true);
//!
//! assert!(contrast_ratio(palette.text_color, palette.background_color) >= 4.5);
//! assert!(matches!(palette.border_color, Some(Paint::Solid(_))));
//! ```
//!
//! Named variants use curated tables with a scheme fallback:
//!
//! ```rust
//! use trellis_palette::{ColorScheme, Rgb, Seed, Variant, resolve_palette};
//!
//! // No curated colorblind entry: falls back to the dark palette.
//! let palette = resolve_palette(Seed::Variant(Variant::Purple), ColorScheme::DarkColorblind, false);
//! assert_eq!(palette.text_color, Rgb::from_u32(0xAE73EA));
//! ```
//!
//! Hosts that render tokens repeatedly can memoize with [`PaletteCache`], and
//! hosts with CSS design tokens can use [`variant_custom_properties`] instead of
//! curated colors. [`TokenLabelStyle`] and [`TokenInteraction`] cover the label
//! styling and remove-button wiring that tokens share.
//!
//! ## Features
//!
//! - `std` (default): use `std` float functions.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trellis_palette requires either the `std` or `libm` feature");

mod cache;
mod color;
mod contrast;
mod css;
#[cfg(not(feature = "std"))]
mod float;
mod hsluv;
mod resolve;
mod scheme;
mod token;
mod variant;

pub use cache::PaletteCache;
pub use color::{Paint, ParseHexError, Rgb};
pub use contrast::{ContrastSearch, contrast_ratio, relative_luminance, search_contrast};
pub use css::{VariantCustomProperties, variant_custom_properties};
pub use hsluv::Hsluv;
pub use resolve::{
    ContrastParams, ParseSeedError, ResolvedPalette, Seed, palette_from_color, resolve_palette,
    resolve_palette_lossy,
};
pub use scheme::{ColorScheme, ParseColorSchemeError};
pub use token::{TokenHoverStyle, TokenInteraction, TokenLabelStyle};
pub use variant::{ParseVariantError, Variant, VariantColors, VariantPalettes};
