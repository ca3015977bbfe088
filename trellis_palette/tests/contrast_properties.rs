// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for palette resolution over arbitrary seed colors.

use proptest::prelude::*;
use trellis_palette::{
    ColorScheme, ContrastParams, Hsluv, Paint, Rgb, Seed, Variant, contrast_ratio,
    resolve_palette, resolve_palette_lossy, search_contrast,
};

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn any_scheme() -> impl Strategy<Value = ColorScheme> {
    prop::sample::select(ColorScheme::ALL.to_vec())
}

proptest! {
    #[test]
    fn text_meets_ratio_or_hits_bound(color in any_rgb(), dark in any::<bool>()) {
        let scheme = if dark { ColorScheme::Dark } else { ColorScheme::Light };
        let params = ContrastParams::for_scheme(scheme);
        let palette = resolve_palette(Seed::Hex(color), scheme, false);

        let ratio = contrast_ratio(palette.text_color, palette.background_color);
        if ratio < params.min_ratio {
            // Re-run the walk to learn where it stopped.
            let hsluv = Hsluv::from_rgb(color);
            let found = search_contrast(
                hsluv.with_lightness(params.text_start_lightness),
                palette.background_color,
                params.min_ratio,
                params.step,
            );
            prop_assert_eq!(found.color, palette.text_color);
            prop_assert!(found.lightness == 0.0 || found.lightness == 100.0);
        }
    }

    #[test]
    fn resolution_is_deterministic(color in any_rgb(), scheme in any_scheme(), selected in any::<bool>()) {
        let seed = Seed::Hex(color);
        prop_assert_eq!(
            resolve_palette(seed, scheme, selected),
            resolve_palette(seed, scheme, selected)
        );
    }

    #[test]
    fn border_follows_selection(color in any_rgb(), scheme in any_scheme()) {
        let selected = resolve_palette(Seed::Hex(color), scheme, true);
        prop_assert!(matches!(selected.border_color, Some(Paint::Solid(_))));

        let plain = resolve_palette(Seed::Hex(color), scheme, false);
        prop_assert_eq!(plain.border_color, Some(Paint::Transparent));
    }

    #[test]
    fn search_never_leaves_domain(color in any_rgb(), against in any_rgb(), ratio in 1.0..25.0_f64, up in any::<bool>()) {
        let step = if up { 1.0 } else { -1.0 };
        let found = search_contrast(Hsluv::from_rgb(color).with_lightness(50.0), against, ratio, step);
        prop_assert!((0.0..=100.0).contains(&found.lightness));
    }

    #[test]
    fn garbage_seeds_fall_back(seed in "[g-z]{1,8}", scheme in any_scheme()) {
        prop_assume!(seed.parse::<Variant>().is_err());
        prop_assert_eq!(
            resolve_palette_lossy(&seed, scheme.name(), false),
            resolve_palette(Seed::Variant(Variant::FALLBACK), scheme, false)
        );
    }
}
