// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_form_control --heading-base-level=0

//! Trellis Form Control: auto-wiring of form inputs.
//!
//! A [`FormControl`] groups a label, an input, and optional caption and
//! validation message. Inputs that implement [`AutoWirable`] receive the
//! control's id, required and disabled state, validation status, and an
//! `aria-describedby` that points at the caption and validation message.
//!
//! Support is a capability, not a marker: a child opts in through
//! [`FormChild::as_auto_wirable`], and children that do not are left untouched.
//!
//! ```rust
//! use trellis_form_control::{AutoWirable, FormChild, FormControl, ForwardedProps};
//!
//! #[derive(Default)]
//! struct Input(ForwardedProps);
//! impl AutoWirable for Input {
//!     fn apply_forwarded_props(&mut self, props: &ForwardedProps) {
//!         self.0 = props.clone();
//!     }
//! }
//! impl FormChild for Input {
//!     fn as_auto_wirable(&mut self) -> Option<&mut dyn AutoWirable> {
//!         Some(self)
//!     }
//! }
//!
//! let mut control = FormControl::new("username");
//! control.has_caption = true;
//!
//! let mut input = Input::default();
//! assert!(control.wire(&mut input));
//! assert_eq!(input.0.aria_describedby.as_deref(), Some("username-caption"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod form_control;

pub use form_control::{AutoWirable, FormChild, FormControl, ForwardedProps, ValidationStatus};
