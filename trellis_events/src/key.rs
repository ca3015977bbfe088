// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key identity, modifiers, and the mutable event payload.

/// Logical key, independent of layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A key producing a character.
    Character(char),
}

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// Which phase of a keystroke the event reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    /// The key went down.
    Down,
    /// The key produced input (the legacy `keypress` phase).
    Press,
    /// The key went up.
    Up,
}

/// How far an event may still travel after the current handler.
///
/// Ordered from least to most restrictive, so the strongest request wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Propagation {
    /// Keep going.
    #[default]
    Continue,
    /// Finish the listeners of the current node, then stop.
    Stop,
    /// Stop right away; remaining listeners on the current node are skipped.
    StopImmediate,
}

/// A keyboard event as seen by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// The keystroke phase.
    pub kind: KeyEventKind,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Whether the key is auto-repeating.
    pub repeat: bool,
    default_prevented: bool,
    propagation: Propagation,
    trusted: bool,
}

impl KeyEvent {
    /// Creates a trusted event, as delivered by the host from real input.
    #[must_use]
    pub const fn new(key: Key, kind: KeyEventKind) -> Self {
        Self {
            key,
            kind,
            modifiers: Modifiers::empty(),
            repeat: false,
            default_prevented: false,
            propagation: Propagation::Continue,
            trusted: true,
        }
    }

    /// Returns this event with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppresses the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed the default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stops the event after the current node's listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation = self.propagation.max(Propagation::Stop);
    }

    /// Stops the event immediately, skipping remaining listeners on this node.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation = Propagation::StopImmediate;
    }

    /// How far the event may still travel.
    #[must_use]
    pub const fn propagation(&self) -> Propagation {
        self.propagation
    }

    /// Whether the event came from real input rather than [`synthesize`](Self::synthesize).
    #[must_use]
    pub const fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// A fresh copy for re-dispatch to another target.
    ///
    /// Key, phase, modifiers, and repeat are copied; flags are cleared and the
    /// copy is untrusted.
    #[must_use]
    pub const fn synthesize(&self) -> Self {
        Self {
            key: self.key,
            kind: self.kind,
            modifiers: self.modifiers,
            repeat: self.repeat,
            default_prevented: false,
            propagation: Propagation::Continue,
            trusted: false,
        }
    }
}
