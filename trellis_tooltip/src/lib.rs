// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_tooltip --heading-base-level=0

//! Trellis Tooltip: tooltip state and ARIA wiring.
//!
//! A [`Tooltip`] wraps one focusable trigger. It opens on focus or pointer
//! enter, closes on blur or pointer leave, and closes on Escape without letting
//! the keystroke reach enclosing overlays.
//!
//! A tooltip is either the trigger's name ([`TooltipKind::Label`]) or a
//! description of a trigger that already has one ([`TooltipKind::Description`]).
//! [`Tooltip::trigger_aria`] and [`Tooltip::attributes`] produce the attributes
//! for each case.
//!
//! ```rust
//! use trellis_tooltip::{Tooltip, TooltipProps};
//!
//! let mut tooltip = Tooltip::new(
//!     "save-tooltip",
//!     TooltipProps { text: Some("Save".into()), ..TooltipProps::default() },
//! );
//! tooltip.on_trigger_focus();
//! assert!(tooltip.is_open());
//!
//! let aria = tooltip.trigger_aria(None);
//! assert_eq!(aria.aria_labelledby, Some("save-tooltip"));
//! assert!(tooltip.attributes().aria_hidden);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod props;
mod tooltip;

pub use props::{Align, Direction, TooltipKind, TooltipProps};
pub use tooltip::{Tooltip, TooltipAttributes, TriggerAria, TriggerHandlers};
