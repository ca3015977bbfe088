// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant palettes expressed as CSS custom-property references.
//!
//! Hosts that ship the presentational design tokens as CSS can reference them
//! instead of baking curated colors into styles; the stylesheet then follows the
//! active theme on its own.

use alloc::format;
use alloc::string::String;

use crate::{ColorScheme, Variant};

/// A variant palette as `var(--…)` references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantCustomProperties {
    /// Token background.
    pub background_color: String,
    /// Hovered background.
    pub background_color_hover: String,
    /// Token text.
    pub text_color: String,
    /// Border; only defined for high-contrast schemes.
    pub border_color: Option<String>,
}

/// Custom-property references for `variant` under `scheme`.
///
/// ```
/// use trellis_palette::{ColorScheme, Variant, variant_custom_properties};
///
/// let props = variant_custom_properties(Variant::Green, ColorScheme::DarkHighContrast);
/// assert_eq!(props.text_color, "var(--presentational-ui-green-text)");
/// assert_eq!(
///     props.border_color.as_deref(),
///     Some("var(--presentational-ui-green-border)")
/// );
/// ```
#[must_use]
pub fn variant_custom_properties(variant: Variant, scheme: ColorScheme) -> VariantCustomProperties {
    let var = |token: &str| format!("var(--presentational-ui-{variant}-{token})");
    VariantCustomProperties {
        background_color: var("background"),
        background_color_hover: var("backgroundHover"),
        text_color: var("text"),
        border_color: scheme.is_high_contrast().then(|| var("border")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_only_for_high_contrast() {
        let light = variant_custom_properties(Variant::Orange, ColorScheme::Light);
        assert_eq!(light.background_color, "var(--presentational-ui-orange-background)");
        assert_eq!(
            light.background_color_hover,
            "var(--presentational-ui-orange-backgroundHover)"
        );
        assert_eq!(light.border_color, None);

        let dimmed = variant_custom_properties(Variant::Orange, ColorScheme::DarkDimmed);
        assert_eq!(dimmed.border_color, None);
    }
}
