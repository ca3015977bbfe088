// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HSLuv: a human-friendly cylindrical form of CIELUV.
//!
//! Lightness in HSLuv tracks perceived lightness, so walking it while holding
//! hue and saturation fixed changes contrast monotonically without drifting the
//! hue. Saturation is expressed as a percentage of the maximum chroma that stays
//! inside the sRGB gamut for the given lightness and hue.

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use crate::float::FloatFuncs;
use crate::Rgb;

const M: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

const REF_U: f64 = 0.19783000664283;
const REF_V: f64 = 0.46831999493879;
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// A color in HSLuv coordinates.
///
/// - `h`: hue in degrees, `[0, 360)`.
/// - `s`: saturation in percent, `[0, 100]`.
/// - `l`: lightness in percent, `[0, 100]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsluv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsluv {
    /// Creates a color from its coordinates.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts an sRGB color to HSLuv.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let xyz = rgb_to_xyz([r, g, b]);
        let luv = xyz_to_luv(xyz);
        let lch = luv_to_lch(luv);
        lch_to_hsluv(lch)
    }

    /// Converts to sRGB, rounding each channel to the nearest byte.
    ///
    /// Lightness outside `[0, 100]` saturates to black or white.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let lch = hsluv_to_lch([self.h, self.s, self.l]);
        let luv = lch_to_luv(lch);
        let xyz = luv_to_xyz(luv);
        let [r, g, b] = xyz_to_rgb(xyz);
        Rgb::new(channel_to_byte(r), channel_to_byte(g), channel_to_byte(b))
    }

    /// Returns this color with a different lightness.
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the byte range before the cast"
)]
fn channel_to_byte(c: f64) -> u8 {
    let scaled = (c * 255.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 255.0) as u8
}

fn dot(row: [f64; 3], v: [f64; 3]) -> f64 {
    row[0] * v[0] + row[1] * v[1] + row[2] * v[2]
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    [
        from_linear(dot(M[0], xyz)),
        from_linear(dot(M[1], xyz)),
        from_linear(dot(M[2], xyz)),
    ]
}

fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = [to_linear(rgb[0]), to_linear(rgb[1]), to_linear(rgb[2])];
    [
        dot(M_INV[0], linear),
        dot(M_INV[1], linear),
        dot(M_INV[2], linear),
    ]
}

fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        let t = (l + 16.0) / 116.0;
        t * t * t
    }
}

fn xyz_to_luv([x, y, z]: [f64; 3]) -> [f64; 3] {
    let l = y_to_l(y);
    let divider = x + 15.0 * y + 3.0 * z;
    if l == 0.0 || divider == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;
    [l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V)]
}

fn luv_to_xyz([l, u, v]: [f64; 3]) -> [f64; 3] {
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

fn luv_to_lch([l, u, v]: [f64; 3]) -> [f64; 3] {
    let c = (u * u + v * v).sqrt();
    let h = if c < 1e-8 {
        0.0
    } else {
        let degrees = v.atan2(u) * 180.0 / PI;
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    };
    [l, c, h]
}

fn lch_to_luv([l, c, h]: [f64; 3]) -> [f64; 3] {
    let rad = h / 180.0 * PI;
    [l, rad.cos() * c, rad.sin() * c]
}

/// The six gamut boundary lines for a lightness, as `(slope, intercept)`.
fn bounds(l: f64) -> [(f64, f64); 6] {
    let sub1 = (l + 16.0).powf(3.0) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };
    let mut out = [(0.0, 0.0); 6];
    for (channel, [m1, m2, m3]) in M.iter().copied().enumerate() {
        for (i, t) in [0.0, 1.0].into_iter().enumerate() {
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
            out[channel * 2 + i] = (top1 / bottom, top2 / bottom);
        }
    }
    out
}

fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let rad = h / 360.0 * PI * 2.0;
    let mut min = f64::MAX;
    for (slope, intercept) in bounds(l) {
        let length = intercept / (rad.sin() - slope * rad.cos());
        if length >= 0.0 {
            min = min.min(length);
        }
    }
    min
}

fn hsluv_to_lch([h, s, l]: [f64; 3]) -> [f64; 3] {
    if l > 99.999_999_9 {
        return [100.0, 0.0, h];
    }
    if l < 1e-8 {
        return [0.0, 0.0, h];
    }
    let max = max_chroma_for_lh(l, h);
    [l, max / 100.0 * s, h]
}

fn lch_to_hsluv([l, c, h]: [f64; 3]) -> Hsluv {
    if l > 99.999_999_9 {
        return Hsluv::new(h, 0.0, 100.0);
    }
    if l < 1e-8 {
        return Hsluv::new(h, 0.0, 0.0);
    }
    let max = max_chroma_for_lh(l, h);
    Hsluv::new(h, c / max * 100.0, l)
}
