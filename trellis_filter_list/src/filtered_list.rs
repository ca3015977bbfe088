// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The filter-input / listbox coordinator.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use trellis_events::{Key, KeyEvent, KeyEventKind};

use crate::focus_zone::{ActiveDescendantChange, FocusOutBehavior, FocusZone, FocusZoneConfig};
use crate::provided_state::ProvidedState;
use crate::scroll::{ScrollBehavior, ScrollContainer, ScrollIntoView, ScrollIntoViewOptions, flash_scroll};

/// Delivers a synthesized key event to an element.
pub trait KeyDispatch<K> {
    /// Dispatches `event` to `target` as if it had received the keystroke.
    fn dispatch_key(&mut self, target: K, event: &KeyEvent);
}

/// The list's virtual focus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveDescendant<K> {
    /// No item is active.
    #[default]
    Idle,
    /// This item is active.
    Active(K),
}

impl<K: Copy> ActiveDescendant<K> {
    /// The active item, if any.
    #[must_use]
    pub const fn get(&self) -> Option<K> {
        match *self {
            Self::Idle => None,
            Self::Active(item) => Some(item),
        }
    }
}

impl<K> From<Option<K>> for ActiveDescendant<K> {
    fn from(item: Option<K>) -> Self {
        match item {
            Some(item) => Self::Active(item),
            None => Self::Idle,
        }
    }
}

/// The host elements a [`FilteredList`] coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilteredListElements<K> {
    /// The filter text input. It keeps real focus.
    pub input: K,
    /// The list container whose items take part in active-descendant navigation.
    pub list: K,
}

/// Attributes for the filter input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputAria<'a> {
    /// `aria-label`: the placeholder text.
    pub aria_label: &'a str,
    /// `aria-controls`: the list id.
    pub aria_controls: &'a str,
}

/// Attributes for the list container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListAria<'a> {
    /// `role`.
    pub role: &'static str,
    /// `id`.
    pub id: &'a str,
    /// `aria-label`.
    pub aria_label: String,
}

type FilterListener = Box<dyn FnMut(&str)>;
type ActiveListener<K> = Box<dyn FnMut(Option<K>)>;

/// Coordinates a filter input with the list it filters.
///
/// Focus stays in the input while arrow keys move an active item through the
/// list (see [`ActiveDescendantZone`](crate::ActiveDescendantZone)). The
/// coordinator tracks that item, scrolls it into view, forwards Enter to it,
/// and re-binds the focus zone when the list is replaced by a loading state.
///
/// Every handler is a no-op after [`unmount`](Self::unmount).
pub struct FilteredList<K> {
    elements: FilteredListElements<K>,
    list_id: String,
    placeholder_text: String,
    filter_value: ProvidedState<String>,
    on_filter_change: Option<FilterListener>,
    on_active_change: Option<ActiveListener<K>>,
    active: ActiveDescendant<K>,
    loading: bool,
    // The `loading` value the zone binding was last synced for.
    synced_for: Option<bool>,
    zone_bound: bool,
    generation: u64,
    mounted: bool,
}

impl<K: fmt::Debug> fmt::Debug for FilteredList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredList")
            .field("elements", &self.elements)
            .field("list_id", &self.list_id)
            .field("placeholder_text", &self.placeholder_text)
            .field("filter_value", &self.filter_value)
            .field("on_filter_change", &self.on_filter_change.is_some())
            .field("on_active_change", &self.on_active_change.is_some())
            .field("active", &self.active)
            .field("loading", &self.loading)
            .field("synced_for", &self.synced_for)
            .field("zone_bound", &self.zone_bound)
            .field("generation", &self.generation)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<K: Copy + Eq + fmt::Debug> FilteredList<K> {
    /// Creates a coordinator for `elements`.
    ///
    /// `list_id` must be unique among the host's elements; the input refers to it
    /// through `aria-controls`.
    pub fn new(
        elements: FilteredListElements<K>,
        list_id: impl Into<String>,
        placeholder_text: impl Into<String>,
    ) -> Self {
        Self {
            elements,
            list_id: list_id.into(),
            placeholder_text: placeholder_text.into(),
            filter_value: ProvidedState::new(None, String::new()),
            on_filter_change: None,
            on_active_change: None,
            active: ActiveDescendant::Idle,
            loading: false,
            synced_for: None,
            zone_bound: false,
            generation: 0,
            mounted: true,
        }
    }

    /// The coordinated elements.
    pub const fn elements(&self) -> FilteredListElements<K> {
        self.elements
    }

    /// The active item state.
    pub const fn active(&self) -> ActiveDescendant<K> {
        self.active
    }

    /// Whether the list is currently replaced by a loading indicator.
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether [`unmount`](Self::unmount) has not been called yet.
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// How many times the focus zone has been bound.
    pub const fn zone_generation(&self) -> u64 {
        self.generation
    }

    /// The config used when binding the focus zone.
    pub const fn focus_zone_config(&self) -> FocusZoneConfig<K> {
        FocusZoneConfig {
            container: self.elements.list,
            active_descendant_control: self.elements.input,
            focus_out_behavior: FocusOutBehavior::Wrap,
        }
    }

    /// Runs the post-mount effects: flashes `container` once and binds the focus zone.
    pub fn mount<Z, C>(&mut self, zone: &mut Z, container: &mut C)
    where
        Z: FocusZone<K> + ?Sized,
        C: ScrollContainer + ?Sized,
    {
        if !self.mounted {
            return;
        }
        flash_scroll(container);
        self.sync_focus_zone(zone);
    }

    /// The current filter text.
    pub fn filter_value(&self) -> &str {
        self.filter_value.get()
    }

    /// Supplies the filter text from the owner, or `None` to let the list keep its own.
    pub fn set_external_filter_value(&mut self, value: Option<String>) {
        self.filter_value.set_provided(value);
    }

    /// Registers the listener told about every edit to the filter input.
    pub fn set_filter_listener(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_filter_change = Some(Box::new(listener));
    }

    /// Registers a listener for active-item changes.
    pub fn set_active_listener(&mut self, listener: impl FnMut(Option<K>) + 'static) {
        self.on_active_change = Some(Box::new(listener));
    }

    /// Handles an edit of the filter input.
    ///
    /// The listener sees the new text before the internal value is updated.
    pub fn on_filter_change(&mut self, value: &str) {
        if !self.mounted {
            return;
        }
        if let Some(listener) = self.on_filter_change.as_mut() {
            listener(value);
        }
        self.filter_value.set(String::from(value));
    }

    /// Switches between the list and the loading indicator.
    ///
    /// The list's items go away while loading, so the active item is cleared.
    /// Call [`sync_focus_zone`](Self::sync_focus_zone) afterwards.
    pub fn set_loading(&mut self, loading: bool) {
        if !self.mounted || loading == self.loading {
            return;
        }
        self.loading = loading;
        tracing::debug!(loading, "filtered list loading changed");
        if loading {
            self.set_active(None);
        }
    }

    /// Brings the focus-zone binding in line with the loading state.
    ///
    /// The binding is keyed on `loading`: each change tears down the previous
    /// binding, and when the list is present a fresh one is made against the
    /// current list element. Calling this again without a change does nothing.
    pub fn sync_focus_zone<Z: FocusZone<K> + ?Sized>(&mut self, zone: &mut Z) {
        if !self.mounted || self.synced_for == Some(self.loading) {
            return;
        }
        if self.zone_bound {
            zone.unbind();
            self.zone_bound = false;
        }
        self.synced_for = Some(self.loading);
        if !self.loading {
            zone.bind(self.focus_zone_config());
            self.zone_bound = true;
            self.generation += 1;
            tracing::debug!(generation = self.generation, "filtered list focus zone bound");
        }
    }

    /// Handles an active-item change reported by the focus zone.
    ///
    /// Keyboard-driven changes scroll the new item into view with the menu margins.
    pub fn on_active_descendant_changed<S>(&mut self, change: ActiveDescendantChange<K>, scroller: &mut S)
    where
        S: ScrollIntoView<K> + ?Sized,
    {
        if !self.mounted || self.loading {
            return;
        }
        self.set_active(change.current);
        if let (Some(item), true) = (change.current, change.directly_activated) {
            scroller.scroll_into_view(item, ScrollIntoViewOptions::MENU);
        }
    }

    /// Handles a new item set.
    ///
    /// If the active item left the set the list goes idle; otherwise it is
    /// scrolled into view instantly.
    pub fn on_items_changed<S>(&mut self, items: &[K], scroller: &mut S)
    where
        S: ScrollIntoView<K> + ?Sized,
    {
        if !self.mounted {
            return;
        }
        let Some(item) = self.active.get() else {
            return;
        };
        if items.contains(&item) {
            scroller.scroll_into_view(
                item,
                ScrollIntoViewOptions::MENU.with_behavior(ScrollBehavior::Auto),
            );
        } else {
            self.set_active(None);
        }
    }

    /// Handles a key press in the filter input.
    ///
    /// Enter with an active item is consumed here: its default action is
    /// prevented, remaining listeners are skipped, and a synthesized copy is
    /// dispatched to the active item once. Focus stays in the input. Returns
    /// `true` if the event was forwarded.
    pub fn on_input_key_press<D>(&mut self, event: &mut KeyEvent, target: &mut D) -> bool
    where
        D: KeyDispatch<K> + ?Sized,
    {
        if !self.mounted || event.key != Key::Enter || event.kind != KeyEventKind::Press {
            return false;
        }
        let Some(item) = self.active.get() else {
            return false;
        };
        event.prevent_default();
        event.stop_immediate_propagation();
        let forwarded = event.synthesize();
        tracing::trace!(?item, "forwarding Enter to active item");
        target.dispatch_key(item, &forwarded);
        true
    }

    /// Attributes for the filter input.
    pub fn input_aria(&self) -> InputAria<'_> {
        InputAria {
            aria_label: &self.placeholder_text,
            aria_controls: &self.list_id,
        }
    }

    /// Attributes for the list container.
    pub fn list_aria(&self) -> ListAria<'_> {
        ListAria {
            role: "listbox",
            id: &self.list_id,
            aria_label: format!("{} options", self.placeholder_text),
        }
    }

    /// Tears the coordinator down.
    ///
    /// Unbinds the focus zone, drops the listeners, and clears the active item
    /// without notifying anyone.
    pub fn unmount<Z: FocusZone<K> + ?Sized>(&mut self, zone: &mut Z) {
        if !self.mounted {
            return;
        }
        if self.zone_bound {
            zone.unbind();
            self.zone_bound = false;
        }
        self.on_filter_change = None;
        self.on_active_change = None;
        self.active = ActiveDescendant::Idle;
        self.mounted = false;
        tracing::debug!("filtered list unmounted");
    }

    fn set_active(&mut self, item: Option<K>) {
        let next = ActiveDescendant::from(item);
        if next == self.active {
            return;
        }
        tracing::trace!(previous = ?self.active, current = ?next, "active descendant changed");
        self.active = next;
        if let Some(listener) = self.on_active_change.as_mut() {
            listener(item);
        }
    }
}
