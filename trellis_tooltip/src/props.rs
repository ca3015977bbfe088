// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration.

use alloc::string::String;

/// Where the tooltip sits relative to its trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Above.
    #[default]
    N,
    /// Above, extending right.
    Ne,
    /// Right.
    E,
    /// Below, extending right.
    Se,
    /// Below.
    S,
    /// Below, extending left.
    Sw,
    /// Left.
    W,
    /// Above, extending left.
    Nw,
}

impl Direction {
    /// The `data-direction` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }
}

/// Horizontal alignment of the tooltip against its trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Align left edges.
    Left,
    /// Align right edges.
    Right,
}

impl Align {
    /// The `data-align` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// What the tooltip means to assistive technology.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipKind {
    /// The tooltip is the trigger's accessible name.
    #[default]
    Label,
    /// The tooltip is supplementary description of a trigger with its own name.
    Description,
}

/// Tooltip configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipProps {
    /// Placement.
    pub direction: Direction,
    /// Tooltip text.
    pub text: Option<String>,
    /// Fallback content when `text` is absent or empty.
    pub aria_label: Option<String>,
    /// Alignment, if any.
    pub align: Option<Align>,
    /// Let long text wrap.
    pub wrap: bool,
    /// Show without the open delay.
    pub no_delay: bool,
    /// Label or description.
    pub kind: TooltipKind,
}
