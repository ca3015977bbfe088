// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State that an owner may provide or leave to the component.

/// A value that is either provided by the owner or kept internally.
///
/// While a provided value is present it wins; writes still land in the internal
/// slot so that the component picks up where it left off if the owner stops
/// providing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProvidedState<T> {
    provided: Option<T>,
    internal: T,
}

impl<T> ProvidedState<T> {
    /// Creates the state with an optional provided value and an initial internal one.
    pub const fn new(provided: Option<T>, initial: T) -> Self {
        Self {
            provided,
            internal: initial,
        }
    }

    /// The effective value.
    pub fn get(&self) -> &T {
        self.provided.as_ref().unwrap_or(&self.internal)
    }

    /// Writes the internal value.
    pub fn set(&mut self, value: T) {
        self.internal = value;
    }

    /// Replaces the provided value; `None` returns control to the internal value.
    pub fn set_provided(&mut self, provided: Option<T>) {
        self.provided = provided;
    }

    /// Whether the owner currently provides the value.
    pub const fn is_provided(&self) -> bool {
        self.provided.is_some()
    }
}
