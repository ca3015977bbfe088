// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token label styling derived from a resolved palette.

use crate::{Paint, ResolvedPalette, Rgb};

/// How a token can be acted on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenInteraction {
    /// The token renders as a link.
    pub is_link: bool,
    /// The token renders as a button.
    pub is_button: bool,
    /// The token has a click handler.
    pub has_click_handler: bool,
    /// The token has a remove handler.
    pub removable: bool,
    /// The remove button is suppressed even though the token is removable.
    pub hide_remove_button: bool,
}

impl TokenInteraction {
    /// Whether the token itself is interactive.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.is_link || self.is_button || self.has_click_handler
    }

    /// Whether the remove button is rendered.
    #[must_use]
    pub const fn shows_remove_button(&self) -> bool {
        self.removable && !self.hide_remove_button
    }

    /// Whether the token and its remove button are separate action targets.
    ///
    /// In that case the interactive props belong on the text container rather
    /// than on the token, and the remove button is hidden from assistive
    /// technology (removal stays reachable through Backspace/Delete).
    #[must_use]
    pub const fn has_multiple_action_targets(&self) -> bool {
        self.is_interactive() && self.shows_remove_button()
    }

    /// Value of `aria-hidden` on the remove button.
    #[must_use]
    pub const fn remove_button_aria_hidden(&self) -> bool {
        self.has_multiple_action_targets()
    }
}

/// Hover colors of an interactive token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TokenHoverStyle {
    /// Hovered background.
    pub background: Rgb,
    /// Hovered border.
    pub border: Rgb,
}

/// Resolved colors of a token label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TokenLabelStyle {
    /// Background.
    pub background: Rgb,
    /// Text.
    pub text: Rgb,
    /// One-pixel border; the background color when the palette has none.
    pub border: Rgb,
    /// Hover colors, only for interactive tokens.
    pub hover: Option<TokenHoverStyle>,
}

impl TokenLabelStyle {
    /// Builds label colors, filling palette gaps from the background.
    ///
    /// A transparent palette border counts as no border.
    #[must_use]
    pub fn new(palette: &ResolvedPalette, interactive: bool) -> Self {
        let background = palette.background_color;
        let border = palette.border_color.and_then(Paint::solid);
        let hover_background = palette.background_color_hover.unwrap_or(background);
        let hover = interactive.then(|| TokenHoverStyle {
            background: hover_background,
            border: border.unwrap_or(hover_background),
        });
        Self {
            background,
            text: palette.text_color,
            border: border.unwrap_or(background),
            hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorScheme, Seed, Variant, resolve_palette};

    #[test]
    fn gaps_fill_from_background() {
        let palette = resolve_palette(Seed::Variant(Variant::Red), ColorScheme::Dark, false);
        let style = TokenLabelStyle::new(&palette, true);
        assert_eq!(style.border, palette.background_color);
        assert_eq!(
            style.hover,
            Some(TokenHoverStyle {
                background: palette.background_color,
                border: palette.background_color,
            })
        );
        assert_eq!(TokenLabelStyle::new(&palette, false).hover, None);
    }

    #[test]
    fn curated_hover_and_border_are_used() {
        let light = resolve_palette(Seed::Variant(Variant::Blue), ColorScheme::Light, false);
        let style = TokenLabelStyle::new(&light, true);
        let hover = Rgb::from_u32(0xDAE9F9);
        assert_eq!(
            style.hover,
            Some(TokenHoverStyle {
                background: hover,
                border: hover,
            })
        );

        let hc = resolve_palette(Seed::Variant(Variant::Blue), ColorScheme::DarkHighContrast, false);
        let style = TokenLabelStyle::new(&hc, true);
        assert_eq!(style.border, Rgb::from_u32(0x0265C7));
        assert_eq!(style.hover.map(|h| h.border), Some(Rgb::from_u32(0x0265C7)));
    }

    #[test]
    fn transparent_border_counts_as_none() {
        let palette = resolve_palette(Seed::Hex(Rgb::from_u32(0x6200C3)), ColorScheme::Light, false);
        let style = TokenLabelStyle::new(&palette, false);
        assert_eq!(style.border, palette.background_color);
    }

    #[test]
    fn action_targets() {
        let removable_button = TokenInteraction {
            is_button: true,
            removable: true,
            ..TokenInteraction::default()
        };
        assert!(removable_button.has_multiple_action_targets());
        assert!(removable_button.remove_button_aria_hidden());

        let hidden_remove = TokenInteraction {
            hide_remove_button: true,
            ..removable_button
        };
        assert!(!hidden_remove.has_multiple_action_targets());
        assert!(!hidden_remove.shows_remove_button());

        let static_removable = TokenInteraction {
            removable: true,
            ..TokenInteraction::default()
        };
        assert!(!static_removable.is_interactive());
        assert!(static_removable.shows_remove_button());
        assert!(!static_removable.has_multiple_action_targets());
    }
}
