// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WCAG contrast and the lightness search built on it.

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;
use crate::{Hsluv, Rgb};

/// Lightness bounds of the search domain.
const LIGHTNESS_MIN: f64 = 0.0;
const LIGHTNESS_MAX: f64 = 100.0;

fn channel_luminance(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color, in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_luminance(color.r)
        + 0.7152 * channel_luminance(color.g)
        + 0.0722 * channel_luminance(color.b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// The ratio is symmetric in its arguments.
///
/// ```
/// use trellis_palette::{Rgb, contrast_ratio};
///
/// let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// assert_eq!(contrast_ratio(Rgb::WHITE, Rgb::BLACK), ratio);
/// ```
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Outcome of [`search_contrast`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContrastSearch {
    /// The last color visited by the search.
    pub color: Rgb,
    /// Lightness of [`color`](Self::color).
    pub lightness: f64,
}

impl ContrastSearch {
    /// Whether the search stopped on a lightness bound rather than on the target ratio.
    ///
    /// A search that starts on a bound and already meets its target reports `true`
    /// here too; compare the ratio when the distinction matters.
    #[must_use]
    pub fn hit_bound(&self) -> bool {
        self.lightness <= LIGHTNESS_MIN || self.lightness >= LIGHTNESS_MAX
    }
}

/// Walks the lightness of `start` by `step` until it reaches `ratio` against `against`.
///
/// Hue and saturation of `start` are held fixed. The walk stops as soon as the
/// contrast target is met or the lightness reaches `0` or `100`; in the latter case
/// the boundary color is returned even though it misses the target. With a unit
/// step the walk visits at most 100 colors.
///
/// `step` should be non-zero; a zero step returns `start` unchanged unless it
/// already meets the target.
#[must_use]
pub fn search_contrast(start: Hsluv, against: Rgb, ratio: f64, step: f64) -> ContrastSearch {
    let mut lightness = start.l;
    let mut color = start.to_rgb();
    if step == 0.0 {
        return ContrastSearch { color, lightness };
    }
    while contrast_ratio(color, against) < ratio
        && lightness > LIGHTNESS_MIN
        && lightness < LIGHTNESS_MAX
    {
        lightness += step;
        color = start.with_lightness(lightness).to_rgb();
    }
    ContrastSearch { color, lightness }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_bounds_and_symmetry() {
        let a = Rgb::new(50, 100, 150);
        let b = Rgb::new(200, 220, 240);
        assert!((contrast_ratio(a, a) - 1.0).abs() < 1e-12, "same color is 1:1");
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, b) > 1.0, "distinct colors contrast");
        assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_endpoints() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn search_moves_toward_target() {
        let seed = Hsluv::from_rgb(Rgb::from_u32(0x4594E3));
        let background = seed.with_lightness(16.0).to_rgb();
        let found = search_contrast(seed.with_lightness(50.0), background, 5.5, 1.0);
        assert!(found.lightness >= 50.0, "dark search walks upward");
        assert!(
            contrast_ratio(found.color, background) >= 5.5 || found.hit_bound(),
            "either the target is met or the bound is reached"
        );
        // The previous step must have missed the target, otherwise the walk would
        // have stopped earlier.
        if found.lightness > 50.0 {
            let before = seed.with_lightness(found.lightness - 1.0).to_rgb();
            assert!(contrast_ratio(before, background) < 5.5, "walk overshot");
        }
    }

    #[test]
    fn unreachable_target_stops_on_bound() {
        let start = Hsluv::new(0.0, 0.0, 50.0);
        let found = search_contrast(start, Rgb::new(0x77, 0x77, 0x77), 25.0, -1.0);
        assert_eq!(found.lightness, 0.0);
        assert_eq!(found.color, Rgb::BLACK);
        assert!(found.hit_bound(), "walk should end on the lower bound");
    }

    #[test]
    fn already_met_target_does_not_move() {
        let start = Hsluv::new(0.0, 0.0, 0.0);
        let found = search_contrast(start, Rgb::WHITE, 4.5, 1.0);
        assert_eq!(found.lightness, 0.0);
        assert_eq!(found.color, Rgb::BLACK);
    }
}
