// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_events --heading-base-level=0

//! Trellis Events: keyboard event payloads.
//!
//! Trellis components do not dispatch events themselves; the host toolkit routes
//! events and calls component handlers. Handlers communicate back through flags
//! on the payload, the same way a DOM handler calls `preventDefault()`:
//!
//! - [`KeyEvent::prevent_default`] suppresses the host's default action.
//! - [`KeyEvent::stop_propagation`] stops the event at the current node.
//! - [`KeyEvent::stop_immediate_propagation`] also skips remaining listeners on
//!   the current node.
//!
//! After a handler returns, the host inspects [`KeyEvent::default_prevented`] and
//! [`KeyEvent::propagation`] to decide what happens next.
//!
//! A handler that needs another element to react as if it had received the
//! keystroke uses [`KeyEvent::synthesize`] to get a fresh, untrusted copy with
//! cleared flags.
//!
//! ```rust
//! use trellis_events::{Key, KeyEvent, KeyEventKind, Propagation};
//!
//! let mut event = KeyEvent::new(Key::Enter, KeyEventKind::Press);
//! event.prevent_default();
//! event.stop_immediate_propagation();
//!
//! let forwarded = event.synthesize();
//! assert!(!forwarded.default_prevented());
//! assert_eq!(forwarded.propagation(), Propagation::Continue);
//! assert!(!forwarded.is_trusted());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod key;

pub use key::{Key, KeyEvent, KeyEventKind, Modifiers, Propagation};
