// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of resolved palettes.

use hashbrown::HashMap;

use crate::{ColorScheme, ResolvedPalette, Seed, resolve_palette};

/// A memo of [`resolve_palette`] results keyed by value equality of the inputs.
///
/// Resolution is pure, so entries never go stale. Hosts that re-render tokens
/// often (for example on every keystroke of a filter) can keep one cache per
/// theme and skip the lightness search for colors they have already seen.
///
/// ```
/// use trellis_palette::{ColorScheme, PaletteCache, Rgb, Seed, resolve_palette};
///
/// let mut cache = PaletteCache::new();
/// let seed = Seed::Hex(Rgb::from_u32(0xD60000));
/// let first = cache.get(seed, ColorScheme::Dark, false);
/// assert_eq!(first, resolve_palette(seed, ColorScheme::Dark, false));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PaletteCache {
    entries: HashMap<(Seed, ColorScheme, bool), ResolvedPalette>,
}

impl PaletteCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the palette for the inputs, resolving it on first use.
    pub fn get(&mut self, seed: Seed, scheme: ColorScheme, selected: bool) -> ResolvedPalette {
        *self
            .entries
            .entry((seed, scheme, selected))
            .or_insert_with(|| resolve_palette(seed, scheme, selected))
    }

    /// Number of memoized palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been memoized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every memoized palette.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
