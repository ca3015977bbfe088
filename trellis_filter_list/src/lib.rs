// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_filter_list --heading-base-level=0

//! Trellis Filter List: a filter input coordinated with the list it filters.
//!
//! The user types into the input, and arrow keys move an *active descendant*
//! through the list while real focus stays in the input. Enter activates the
//! active item. This crate owns that protocol and leaves rendering, layout, and
//! event routing to the host.
//!
//! - [`FilteredList`]: the coordinator. It tracks the active item, scrolls it
//!   into view, forwards Enter to it, owns the filter value, and keeps the focus
//!   zone bound across loading states.
//! - [`FocusZone`], [`ScrollIntoView`], [`ScrollContainer`], [`KeyDispatch`]: the
//!   host-side seams.
//! - [`ActiveDescendantZone`] and [`ScrollViewport`]: self-contained
//!   implementations of the focus zone and scroll container, usable directly by
//!   hosts without their own.
//!
//! ## Example
//!
//! ```rust
//! use trellis_events::{Key, KeyEvent, KeyEventKind};
//! use trellis_filter_list::{
//!     ActiveDescendant, ActiveDescendantZone, FilteredList, FilteredListElements,
//!     KeyDispatch, ScrollIntoView, ScrollIntoViewOptions,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     activated: Vec<u32>,
//! }
//! impl ScrollIntoView<u32> for Host {
//!     fn scroll_into_view(&mut self, _: u32, _: ScrollIntoViewOptions) {}
//! }
//! impl KeyDispatch<u32> for Host {
//!     fn dispatch_key(&mut self, target: u32, _: &KeyEvent) {
//!         self.activated.push(target);
//!     }
//! }
//!
//! let mut host = Host::default();
//! let mut zone = ActiveDescendantZone::new();
//! let mut list = FilteredList::new(FilteredListElements { input: 1, list: 2 }, "labels", "Filter labels");
//! list.sync_focus_zone(&mut zone);
//! zone.set_items([10_u32, 11, 12]);
//!
//! let mut down = KeyEvent::new(Key::ArrowDown, KeyEventKind::Down);
//! if let Some(change) = zone.handle_key(&mut down) {
//!     list.on_active_descendant_changed(change, &mut host);
//! }
//! assert_eq!(list.active(), ActiveDescendant::Active(10));
//!
//! let mut enter = KeyEvent::new(Key::Enter, KeyEventKind::Press);
//! assert!(list.on_input_key_press(&mut enter, &mut host));
//! assert_eq!(host.activated, [10]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: `no_std` float math for `kurbo`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filtered_list;
mod focus_zone;
mod provided_state;
mod scroll;

pub use filtered_list::{
    ActiveDescendant, FilteredList, FilteredListElements, InputAria, KeyDispatch, ListAria,
};
pub use focus_zone::{
    ActiveDescendantChange, ActiveDescendantZone, FocusOutBehavior, FocusZone, FocusZoneConfig,
    ZoneItem,
};
pub use provided_state::ProvidedState;
pub use scroll::{
    ScrollAxis, ScrollBehavior, ScrollContainer, ScrollIntoView, ScrollIntoViewOptions,
    ScrollViewport, flash_scroll, scroll_offset_into_view,
};
