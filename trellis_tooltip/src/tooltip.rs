// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip open state, trigger handlers, and ARIA attributes.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use trellis_events::{Key, KeyEvent, KeyEventKind};

use crate::props::{Align, Direction, TooltipKind, TooltipProps};

type Handler = Box<dyn FnMut()>;

/// The trigger's own focus and pointer handlers.
///
/// They run before the tooltip reacts to the same event.
#[derive(Default)]
pub struct TriggerHandlers {
    /// Runs when the trigger gains focus.
    pub on_focus: Option<Handler>,
    /// Runs when the trigger loses focus.
    pub on_blur: Option<Handler>,
    /// Runs when the pointer enters the trigger.
    pub on_mouse_enter: Option<Handler>,
}

impl fmt::Debug for TriggerHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerHandlers")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .finish()
    }
}

fn run(handler: &mut Option<Handler>) {
    if let Some(handler) = handler.as_mut() {
        handler();
    }
}

/// ARIA attributes to set on the trigger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerAria<'a> {
    /// `aria-labelledby`.
    pub aria_labelledby: Option<&'a str>,
    /// `aria-describedby`.
    pub aria_describedby: Option<&'a str>,
    /// `aria-label`; `None` removes it.
    pub aria_label: Option<&'a str>,
}

/// Attributes and content for the tooltip element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TooltipAttributes<'a> {
    /// `id`, referenced from the trigger.
    pub id: &'a str,
    /// `data-direction`.
    pub direction: Direction,
    /// `data-state`: `Some("open")` while open.
    pub state: Option<&'static str>,
    /// `data-align`.
    pub align: Option<Align>,
    /// `data-wrap`.
    pub wrap: bool,
    /// `data-delay`, which carries the `no_delay` flag.
    pub delay: bool,
    /// `role`.
    pub role: Option<&'static str>,
    /// `aria-hidden`.
    pub aria_hidden: bool,
    /// Text content.
    pub content: Option<&'a str>,
}

/// A tooltip attached to one focusable trigger.
///
/// The host wraps the trigger in an element that receives `mouseleave` and
/// `keydown`, forwards the trigger's focus, blur, and `mouseenter` here, and
/// renders the tooltip visually hidden while closed.
#[derive(Debug)]
pub struct Tooltip {
    id: String,
    props: TooltipProps,
    trigger: TriggerHandlers,
    open: bool,
}

impl Tooltip {
    /// Creates a closed tooltip. `id` must be unique among the host's elements.
    pub fn new(id: impl Into<String>, props: TooltipProps) -> Self {
        Self {
            id: id.into(),
            props,
            trigger: TriggerHandlers::default(),
            open: false,
        }
    }

    /// Sets the trigger's own handlers.
    #[must_use]
    pub fn with_trigger_handlers(mut self, handlers: TriggerHandlers) -> Self {
        self.trigger = handlers;
        self
    }

    /// The tooltip's element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The configuration.
    pub const fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// Whether the tooltip is shown.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Checks the trigger on each render. Tooltips need a focusable trigger so
    /// keyboard users can reach them.
    pub fn check_trigger(&self, trigger_is_focusable: bool) {
        debug_assert!(
            trigger_is_focusable,
            "tooltip `{}` expects a single interactive trigger element, such as a button",
            self.id
        );
    }

    /// Handles focus on the trigger.
    pub fn on_trigger_focus(&mut self) {
        run(&mut self.trigger.on_focus);
        self.set_open(true);
    }

    /// Handles blur of the trigger.
    pub fn on_trigger_blur(&mut self) {
        run(&mut self.trigger.on_blur);
        self.set_open(false);
    }

    /// Handles the pointer entering the trigger.
    pub fn on_trigger_mouse_enter(&mut self) {
        run(&mut self.trigger.on_mouse_enter);
        self.set_open(true);
    }

    /// Handles the pointer leaving the wrapper.
    pub fn on_mouse_leave(&mut self) {
        self.set_open(false);
    }

    /// Handles a key event inside the wrapper.
    ///
    /// Escape closes an open tooltip and stops the event so that it does not
    /// also close an enclosing overlay. Returns `true` if the event was consumed.
    pub fn on_key_down(&mut self, event: &mut KeyEvent) -> bool {
        if !self.open || event.key != Key::Escape || event.kind != KeyEventKind::Down {
            return false;
        }
        event.stop_propagation();
        self.set_open(false);
        true
    }

    /// Attributes for the trigger, given the trigger's own `aria-label`.
    pub fn trigger_aria<'a>(&'a self, trigger_aria_label: Option<&'a str>) -> TriggerAria<'a> {
        match self.props.kind {
            TooltipKind::Label => TriggerAria {
                aria_labelledby: Some(&self.id),
                aria_describedby: None,
                aria_label: None,
            },
            TooltipKind::Description => TriggerAria {
                aria_labelledby: None,
                aria_describedby: Some(&self.id),
                aria_label: trigger_aria_label,
            },
        }
    }

    /// Attributes and content for the tooltip element.
    pub fn attributes(&self) -> TooltipAttributes<'_> {
        let content = self
            .props
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.props.aria_label.as_deref());
        TooltipAttributes {
            id: &self.id,
            direction: self.props.direction,
            state: self.open.then_some("open"),
            align: self.props.align,
            wrap: self.props.wrap,
            delay: self.props.no_delay,
            role: (self.props.kind == TooltipKind::Description).then_some("tooltip"),
            aria_hidden: self.props.kind == TooltipKind::Label,
            content,
        }
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            tracing::trace!(id = %self.id, open, "tooltip state changed");
            self.open = open;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use trellis_events::{Key, KeyEvent, KeyEventKind, Propagation};

    use super::*;

    fn label(text: &str) -> Tooltip {
        Tooltip::new(
            "tooltip-1",
            TooltipProps {
                text: Some(String::from(text)),
                ..TooltipProps::default()
            },
        )
    }

    #[test]
    fn focus_and_blur_toggle() {
        let mut tooltip = label("Save");
        tooltip.on_trigger_focus();
        assert!(tooltip.is_open());
        assert_eq!(tooltip.attributes().state, Some("open"));
        tooltip.on_trigger_blur();
        assert!(!tooltip.is_open());
        assert_eq!(tooltip.attributes().state, None);
    }

    #[test]
    fn pointer_opens_on_trigger_and_closes_on_wrapper() {
        let mut tooltip = label("Save");
        tooltip.on_trigger_mouse_enter();
        assert!(tooltip.is_open());
        tooltip.on_mouse_leave();
        assert!(!tooltip.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut tooltip = label("Save");
        let mut event = KeyEvent::new(Key::Escape, KeyEventKind::Down);
        assert!(!tooltip.on_key_down(&mut event));
        assert_eq!(event.propagation(), Propagation::Continue);

        tooltip.on_trigger_focus();
        let mut event = KeyEvent::new(Key::Escape, KeyEventKind::Down);
        assert!(tooltip.on_key_down(&mut event));
        assert_eq!(event.propagation(), Propagation::Stop);
        assert!(!tooltip.is_open());
    }

    #[test]
    fn other_keys_leave_tooltip_open() {
        let mut tooltip = label("Save");
        tooltip.on_trigger_focus();
        let mut event = KeyEvent::new(Key::Enter, KeyEventKind::Down);
        assert!(!tooltip.on_key_down(&mut event));
        assert!(tooltip.is_open());
    }

    #[test]
    fn trigger_handlers_run_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (focus_log, blur_log) = (Rc::clone(&log), Rc::clone(&log));
        let mut tooltip = label("Save").with_trigger_handlers(TriggerHandlers {
            on_focus: Some(Box::new(move || focus_log.borrow_mut().push("focus"))),
            on_blur: Some(Box::new(move || blur_log.borrow_mut().push("blur"))),
            on_mouse_enter: None,
        });

        tooltip.on_trigger_focus();
        tooltip.on_trigger_blur();
        tooltip.on_trigger_mouse_enter();
        assert_eq!(*log.borrow(), ["focus", "blur"]);
        assert!(tooltip.is_open());
    }

    #[test]
    fn label_kind_names_the_trigger() {
        let tooltip = label("Save");
        assert_eq!(
            tooltip.trigger_aria(Some("ignored")),
            TriggerAria {
                aria_labelledby: Some("tooltip-1"),
                aria_describedby: None,
                aria_label: None,
            }
        );
        let attrs = tooltip.attributes();
        assert!(attrs.aria_hidden);
        assert_eq!(attrs.role, None);
        assert_eq!(attrs.content, Some("Save"));
        assert_eq!(attrs.direction.as_str(), "n");
    }

    #[test]
    fn description_kind_keeps_trigger_label() {
        let tooltip = Tooltip::new(
            "tooltip-2",
            TooltipProps {
                kind: TooltipKind::Description,
                aria_label: Some(String::from("Opens settings")),
                direction: Direction::Se,
                align: Some(Align::Left),
                wrap: true,
                no_delay: true,
                ..TooltipProps::default()
            },
        );
        assert_eq!(
            tooltip.trigger_aria(Some("Settings")),
            TriggerAria {
                aria_labelledby: None,
                aria_describedby: Some("tooltip-2"),
                aria_label: Some("Settings"),
            }
        );
        let attrs = tooltip.attributes();
        assert_eq!(attrs.role, Some("tooltip"));
        assert!(!attrs.aria_hidden);
        assert_eq!(attrs.content, Some("Opens settings"));
        assert_eq!(attrs.direction.as_str(), "se");
        assert_eq!(attrs.align.map(Align::as_str), Some("left"));
        assert!(attrs.wrap);
        assert!(attrs.delay);
    }

    #[test]
    fn empty_text_falls_back_to_aria_label() {
        let tooltip = Tooltip::new(
            "tooltip-3",
            TooltipProps {
                text: Some(String::new()),
                aria_label: Some(String::from("Close")),
                ..TooltipProps::default()
            },
        );
        assert_eq!(tooltip.attributes().content, Some("Close"));
    }

    #[test]
    fn focusable_trigger_passes_check() {
        label("Save").check_trigger(true);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "interactive trigger")]
    fn non_focusable_trigger_fails_check() {
        label("Save").check_trigger(false);
    }
}
