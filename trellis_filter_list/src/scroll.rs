// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping an item visible inside a scroll container.

use kurbo::{Rect, Vec2};

/// How a scroll change is animated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animated.
    #[default]
    Smooth,
    /// Immediate jump.
    Auto,
}

/// The scroll axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Scroll along y.
    #[default]
    Vertical,
    /// Scroll along x.
    Horizontal,
}

/// Options for scrolling an item into view.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollIntoViewOptions {
    /// Scroll axis.
    pub axis: ScrollAxis,
    /// Space to keep between the viewport start and the item.
    pub start_margin: f64,
    /// Space to keep between the item and the viewport end.
    pub end_margin: f64,
    /// Animation; `None` means the container's default, which is smooth.
    pub behavior: Option<ScrollBehavior>,
}

impl ScrollIntoViewOptions {
    /// Margins used by menus and filtered lists: flush at the start, 8 units at the end.
    pub const MENU: Self = Self {
        axis: ScrollAxis::Vertical,
        start_margin: 0.0,
        end_margin: 8.0,
        behavior: None,
    };

    /// Returns these options with an explicit behavior.
    #[must_use]
    pub const fn with_behavior(self, behavior: ScrollBehavior) -> Self {
        Self {
            behavior: Some(behavior),
            ..self
        }
    }

    /// The behavior that applies, resolving `None` to [`ScrollBehavior::Smooth`].
    #[must_use]
    pub fn effective_behavior(&self) -> ScrollBehavior {
        self.behavior.unwrap_or_default()
    }
}

/// Computes the scroll offset that brings `child` into view, if it is not already.
///
/// `child` and `viewport` are in the same coordinate space (for example window
/// coordinates, as a layout query would report them) and `scroll_offset` is the
/// container's current offset along `options.axis`. Returns `None` when the child
/// already sits inside the viewport with its margins.
///
/// A child cut off at the start is aligned to the start margin; otherwise a child
/// cut off at the end is aligned to the end margin. The result is not clamped to
/// the container's scroll range.
///
/// ```
/// use kurbo::Rect;
/// use trellis_filter_list::{ScrollIntoViewOptions, scroll_offset_into_view};
///
/// let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let below = Rect::new(0.0, 95.0, 100.0, 115.0);
/// let offset = scroll_offset_into_view(below, viewport, 40.0, &ScrollIntoViewOptions::MENU);
/// assert_eq!(offset, Some(40.0 + 15.0 + 8.0));
/// ```
#[must_use]
pub fn scroll_offset_into_view(
    child: Rect,
    viewport: Rect,
    scroll_offset: f64,
    options: &ScrollIntoViewOptions,
) -> Option<f64> {
    let (child_start, child_end, view_start, view_end) = match options.axis {
        ScrollAxis::Vertical => (child.y0, child.y1, viewport.y0, viewport.y1),
        ScrollAxis::Horizontal => (child.x0, child.x1, viewport.x0, viewport.x1),
    };
    if child_start < view_start + options.start_margin {
        Some(scroll_offset + child_start - view_start - options.start_margin)
    } else if child_end > view_end - options.end_margin {
        Some(scroll_offset + child_end - view_end + options.end_margin)
    } else {
        None
    }
}

/// Scrolls an element into view within its scroll container.
///
/// Implemented by the host, which knows where elements are laid out.
pub trait ScrollIntoView<K> {
    /// Scrolls `target` into view using `options`.
    fn scroll_into_view(&mut self, target: K, options: ScrollIntoViewOptions);
}

/// A scrollable container.
pub trait ScrollContainer {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f64;
    /// Largest reachable scroll offset.
    fn max_scroll_offset(&self) -> f64;
    /// Sets the scroll offset immediately.
    fn set_scroll_offset(&mut self, offset: f64);
}

/// Briefly scrolls `container` to its end and back.
///
/// Platforms with overlay scrollbars show them on scroll, which hints that the
/// container has more content than fits.
pub fn flash_scroll<C: ScrollContainer + ?Sized>(container: &mut C) {
    let current = container.scroll_offset();
    container.set_scroll_offset(container.max_scroll_offset());
    container.set_scroll_offset(current);
}

/// A simple scroll container model over one axis.
///
/// Items are described in content coordinates (unscrolled, relative to the
/// content origin); the viewport is where the container sits on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollViewport {
    viewport: Rect,
    content_extent: f64,
    scroll_offset: f64,
    axis: ScrollAxis,
}

impl ScrollViewport {
    /// Creates a viewport at offset zero.
    #[must_use]
    pub fn new(viewport: Rect, content_extent: f64, axis: ScrollAxis) -> Self {
        Self {
            viewport,
            content_extent: content_extent.max(0.0),
            scroll_offset: 0.0,
            axis,
        }
    }

    /// The viewport rectangle.
    #[must_use]
    pub const fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Total content extent along the axis.
    #[must_use]
    pub const fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Updates the content extent, keeping the offset within range.
    pub fn set_content_extent(&mut self, extent: f64) {
        self.content_extent = extent.max(0.0);
        self.set_scroll_offset(self.scroll_offset);
    }

    fn viewport_extent(&self) -> f64 {
        match self.axis {
            ScrollAxis::Vertical => self.viewport.height(),
            ScrollAxis::Horizontal => self.viewport.width(),
        }
    }

    /// Where an item in content coordinates currently appears.
    #[must_use]
    pub fn on_screen(&self, item: Rect) -> Rect {
        let origin = self.viewport.origin().to_vec2();
        let scroll = match self.axis {
            ScrollAxis::Vertical => Vec2::new(0.0, self.scroll_offset),
            ScrollAxis::Horizontal => Vec2::new(self.scroll_offset, 0.0),
        };
        item + origin - scroll
    }

    /// Scrolls so that `item` (in content coordinates) is visible.
    ///
    /// The axis of `options` is ignored in favor of the viewport's own axis.
    /// Returns `true` if the offset changed.
    pub fn scroll_item_into_view(&mut self, item: Rect, options: &ScrollIntoViewOptions) -> bool {
        let options = ScrollIntoViewOptions {
            axis: self.axis,
            ..*options
        };
        let child = self.on_screen(item);
        match scroll_offset_into_view(child, self.viewport, self.scroll_offset, &options) {
            Some(offset) => {
                let before = self.scroll_offset;
                self.set_scroll_offset(offset);
                self.scroll_offset != before
            }
            None => false,
        }
    }
}

impl ScrollContainer for ScrollViewport {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn max_scroll_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent()).max(0.0)
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll_offset());
    }
}
