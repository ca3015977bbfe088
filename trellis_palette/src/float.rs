// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that `core` does not provide.
//!
//! Only compiled without the `std` feature. The `libm` feature routes the
//! inherent `f64` method names through `libm` so call sites read identically
//! in both builds.

/// Subset of `f64` methods needed by the color math.
pub(crate) trait FloatFuncs: Sized {
    fn powf(self, n: Self) -> Self;
    fn cbrt(self) -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn round(self) -> Self;
}

impl FloatFuncs for f64 {
    #[inline]
    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    #[inline]
    fn cbrt(self) -> Self {
        libm::cbrt(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[inline]
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    #[inline]
    fn round(self) -> Self {
        libm::round(self)
    }
}
