// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-descendant focus zones.
//!
//! In an active-descendant zone, real focus stays on a control element (the
//! filter input) while arrow keys move a virtual "active" marker across the
//! zone's items. Assistive technology follows the marker through
//! `aria-activedescendant` on the control.

use alloc::vec::Vec;

use trellis_events::{Key, KeyEvent, KeyEventKind};

/// What happens when navigation runs past the first or last item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusOutBehavior {
    /// Stay on the edge item.
    Stop,
    /// Wrap to the other end.
    #[default]
    Wrap,
}

/// Binding parameters for a focus zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FocusZoneConfig<K> {
    /// Element whose items make up the zone.
    pub container: K,
    /// Element that keeps real focus and announces the active item.
    pub active_descendant_control: K,
    /// Edge behavior.
    pub focus_out_behavior: FocusOutBehavior,
}

impl<K: Copy + Eq> FocusZoneConfig<K> {
    /// Whether `element` may become active.
    ///
    /// The control element itself is never a candidate.
    #[must_use]
    pub fn accepts(&self, element: K) -> bool {
        element != self.active_descendant_control
    }
}

/// A change of the active item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActiveDescendantChange<K> {
    /// The new active item, or `None` if nothing is active.
    pub current: Option<K>,
    /// The previously active item.
    pub previous: Option<K>,
    /// `true` for keyboard navigation, `false` for pointer hover or list changes.
    pub directly_activated: bool,
}

/// A focus-zone behavior that can be attached to and detached from a container.
///
/// Hosts implement this over their own focus machinery; [`ActiveDescendantZone`]
/// is a self-contained implementation.
pub trait FocusZone<K> {
    /// Attaches the zone. Binding an already-bound zone replaces its config.
    fn bind(&mut self, config: FocusZoneConfig<K>);
    /// Detaches the zone. A detached zone produces no changes.
    fn unbind(&mut self);
}

/// An item as the zone sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneItem<K> {
    /// Element identifier.
    pub id: K,
    /// Disabled items are skipped by navigation and hover.
    pub enabled: bool,
}

impl<K> From<K> for ZoneItem<K> {
    fn from(id: K) -> Self {
        Self { id, enabled: true }
    }
}

#[derive(Copy, Clone, Debug)]
enum Step {
    Forward,
    Backward,
    First,
    Last,
}

/// A self-contained active-descendant zone over an ordered item list.
///
/// Items are kept in document order. Arrow keys, Home, and End move the active
/// marker and report [`directly_activated`](ActiveDescendantChange::directly_activated);
/// pointer hover reports indirect changes.
#[derive(Clone, Debug)]
pub struct ActiveDescendantZone<K> {
    config: Option<FocusZoneConfig<K>>,
    items: Vec<ZoneItem<K>>,
    active: Option<K>,
    bind_count: u64,
}

impl<K> Default for ActiveDescendantZone<K> {
    fn default() -> Self {
        Self {
            config: None,
            items: Vec::new(),
            active: None,
            bind_count: 0,
        }
    }
}

impl<K: Copy + Eq> ActiveDescendantZone<K> {
    /// Creates an unbound, empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the zone is attached.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.config.is_some()
    }

    /// The current binding, if any.
    #[must_use]
    pub const fn config(&self) -> Option<&FocusZoneConfig<K>> {
        self.config.as_ref()
    }

    /// How many times the zone has been bound.
    #[must_use]
    pub const fn bind_count(&self) -> u64 {
        self.bind_count
    }

    /// The active item.
    #[must_use]
    pub const fn active(&self) -> Option<K> {
        self.active
    }

    /// The items in document order.
    #[must_use]
    pub fn items(&self) -> &[ZoneItem<K>] {
        &self.items
    }

    /// Replaces the item list.
    ///
    /// The control element is dropped from the list. If the active item is no
    /// longer present, or is now disabled, the marker is cleared and the change
    /// is returned.
    pub fn set_items<I>(&mut self, items: I) -> Option<ActiveDescendantChange<K>>
    where
        I: IntoIterator,
        I::Item: Into<ZoneItem<K>>,
    {
        let config = self.config;
        self.items = items
            .into_iter()
            .map(Into::into)
            .filter(|item| config.is_none_or(|c| c.accepts(item.id)))
            .collect();
        let active = self.active?;
        if self.is_enabled(active) {
            None
        } else {
            self.activate(None, false)
        }
    }

    /// Handles a key event on the control element.
    ///
    /// Navigation keys on the down phase move the marker and prevent the
    /// event's default action. Returns the change, if any.
    pub fn handle_key(&mut self, event: &mut KeyEvent) -> Option<ActiveDescendantChange<K>> {
        if !self.is_bound() || event.kind != KeyEventKind::Down {
            return None;
        }
        let step = match event.key {
            Key::ArrowDown => Step::Forward,
            Key::ArrowUp => Step::Backward,
            Key::Home => Step::First,
            Key::End => Step::Last,
            _ => return None,
        };
        let target = self.next(step)?;
        event.prevent_default();
        self.activate(Some(target), true)
    }

    /// Marks `item` active because the pointer moved over it.
    pub fn hover(&mut self, item: K) -> Option<ActiveDescendantChange<K>> {
        if !self.is_bound() || !self.is_enabled(item) {
            return None;
        }
        self.activate(Some(item), false)
    }

    /// Clears the marker.
    pub fn clear(&mut self) -> Option<ActiveDescendantChange<K>> {
        if !self.is_bound() {
            return None;
        }
        self.activate(None, false)
    }

    fn is_enabled(&self, id: K) -> bool {
        self.items.iter().any(|item| item.id == id && item.enabled)
    }

    fn activate(&mut self, current: Option<K>, directly_activated: bool) -> Option<ActiveDescendantChange<K>> {
        if current == self.active {
            return None;
        }
        let previous = core::mem::replace(&mut self.active, current);
        Some(ActiveDescendantChange {
            current,
            previous,
            directly_activated,
        })
    }

    fn next(&self, step: Step) -> Option<K> {
        let wrap = self
            .config
            .is_some_and(|c| c.focus_out_behavior == FocusOutBehavior::Wrap);
        let enabled: Vec<K> = self
            .items
            .iter()
            .filter(|item| item.enabled)
            .map(|item| item.id)
            .collect();
        let (&first, &last) = (enabled.first()?, enabled.last()?);
        let origin = self
            .active
            .and_then(|active| enabled.iter().position(|&id| id == active));

        match step {
            Step::First => Some(first),
            Step::Last => Some(last),
            Step::Forward => match origin {
                Some(pos) if pos + 1 < enabled.len() => Some(enabled[pos + 1]),
                Some(_) if wrap => Some(first),
                Some(pos) => Some(enabled[pos]),
                None => Some(first),
            },
            Step::Backward => match origin {
                Some(pos) if pos > 0 => Some(enabled[pos - 1]),
                Some(_) if wrap => Some(last),
                Some(pos) => Some(enabled[pos]),
                None => Some(last),
            },
        }
    }
}

impl<K: Copy + Eq> FocusZone<K> for ActiveDescendantZone<K> {
    fn bind(&mut self, config: FocusZoneConfig<K>) {
        self.config = Some(config);
        self.items.retain(|item| config.accepts(item.id));
        self.bind_count += 1;
        tracing::trace!(bind_count = self.bind_count, "focus zone bound");
    }

    fn unbind(&mut self) {
        self.config = None;
        self.active = None;
        tracing::trace!("focus zone unbound");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: u32 = 1;
    const LIST: u32 = 2;

    fn bound(items: &[u32], focus_out_behavior: FocusOutBehavior) -> ActiveDescendantZone<u32> {
        let mut zone = ActiveDescendantZone::new();
        zone.bind(FocusZoneConfig {
            container: LIST,
            active_descendant_control: INPUT,
            focus_out_behavior,
        });
        zone.set_items(items.iter().copied());
        zone
    }

    fn press(zone: &mut ActiveDescendantZone<u32>, key: Key) -> Option<ActiveDescendantChange<u32>> {
        let mut event = KeyEvent::new(key, KeyEventKind::Down);
        zone.handle_key(&mut event)
    }

    #[test]
    fn arrows_walk_and_wrap() {
        let mut zone = bound(&[10, 11, 12], FocusOutBehavior::Wrap);
        assert_eq!(press(&mut zone, Key::ArrowDown).and_then(|c| c.current), Some(10));
        assert_eq!(press(&mut zone, Key::ArrowDown).and_then(|c| c.current), Some(11));
        assert_eq!(press(&mut zone, Key::End).and_then(|c| c.current), Some(12));
        let wrapped = press(&mut zone, Key::ArrowDown).unwrap();
        assert_eq!(wrapped.current, Some(10));
        assert_eq!(wrapped.previous, Some(12));
        assert!(wrapped.directly_activated);
        assert_eq!(press(&mut zone, Key::ArrowUp).and_then(|c| c.current), Some(12));
    }

    #[test]
    fn stop_holds_at_edges() {
        let mut zone = bound(&[10, 11], FocusOutBehavior::Stop);
        press(&mut zone, Key::End);
        assert_eq!(press(&mut zone, Key::ArrowDown), None);
        assert_eq!(zone.active(), Some(11));
        press(&mut zone, Key::Home);
        assert_eq!(press(&mut zone, Key::ArrowUp), None);
        assert_eq!(zone.active(), Some(10));
    }

    #[test]
    fn navigation_prevents_default_only_when_handled() {
        let mut zone = bound(&[10], FocusOutBehavior::Wrap);
        let mut down = KeyEvent::new(Key::ArrowDown, KeyEventKind::Down);
        zone.handle_key(&mut down);
        assert!(down.default_prevented());

        let mut letter = KeyEvent::new(Key::Character('a'), KeyEventKind::Down);
        assert_eq!(zone.handle_key(&mut letter), None);
        assert!(!letter.default_prevented());
    }

    #[test]
    fn control_and_disabled_items_are_skipped() {
        let mut zone = bound(&[], FocusOutBehavior::Wrap);
        zone.set_items([
            ZoneItem::from(INPUT),
            ZoneItem::from(10),
            ZoneItem { id: 11, enabled: false },
            ZoneItem::from(12),
        ]);
        assert_eq!(zone.items().len(), 3);
        press(&mut zone, Key::ArrowDown);
        assert_eq!(press(&mut zone, Key::ArrowDown).and_then(|c| c.current), Some(12));
        assert_eq!(zone.hover(11), None);
        assert_eq!(zone.hover(INPUT), None);
    }

    #[test]
    fn hover_is_indirect() {
        let mut zone = bound(&[10, 11], FocusOutBehavior::Wrap);
        let change = zone.hover(11).unwrap();
        assert!(!change.directly_activated);
        assert_eq!(zone.hover(11), None);
    }

    #[test]
    fn removing_active_item_clears_marker() {
        let mut zone = bound(&[10, 11], FocusOutBehavior::Wrap);
        zone.hover(11);
        assert_eq!(zone.set_items([10_u32, 11]), None);
        let change = zone.set_items([10_u32]).unwrap();
        assert_eq!(change.current, None);
        assert_eq!(change.previous, Some(11));
        assert!(!change.directly_activated);
    }

    #[test]
    fn unbound_zone_is_silent() {
        let mut zone = bound(&[10, 11], FocusOutBehavior::Wrap);
        zone.hover(10);
        zone.unbind();
        assert_eq!(zone.active(), None);
        assert_eq!(press(&mut zone, Key::ArrowDown), None);
        assert_eq!(zone.hover(11), None);
        assert_eq!(zone.clear(), None);
        assert_eq!(zone.bind_count(), 1);
    }

    #[test]
    fn only_down_phase_navigates() {
        let mut zone = bound(&[10], FocusOutBehavior::Wrap);
        let mut up = KeyEvent::new(Key::ArrowDown, KeyEventKind::Up);
        assert_eq!(zone.handle_key(&mut up), None);
    }
}
