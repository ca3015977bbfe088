// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form controls and the props they forward to auto-wirable inputs.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Validation outcome shown next to a control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// The value is invalid.
    Error,
    /// The value was accepted.
    Success,
}

impl ValidationStatus {
    /// The attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

/// Props a form control forwards to its input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForwardedProps {
    /// Input id, which the control's label points at.
    pub id: Option<String>,
    /// Whether a value is required.
    pub required: bool,
    /// Whether the input is disabled.
    pub disabled: bool,
    /// Space-separated ids of the elements that describe the input.
    pub aria_describedby: Option<String>,
    /// Current validation status.
    pub validation_status: Option<ValidationStatus>,
}

/// A component that accepts [`ForwardedProps`] and applies them to its
/// underlying input.
pub trait AutoWirable {
    /// Overrides the component's props with `props`.
    fn apply_forwarded_props(&mut self, props: &ForwardedProps);
}

/// Any child placed inside a [`FormControl`].
///
/// Children that support auto-wiring return themselves from
/// [`as_auto_wirable`](Self::as_auto_wirable); everything else is left alone.
pub trait FormChild {
    /// Returns the auto-wiring capability, if the child has one.
    fn as_auto_wirable(&mut self) -> Option<&mut dyn AutoWirable> {
        None
    }
}

/// A labelled form field: label, input, optional caption, and optional
/// validation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormControl {
    id: String,
    /// Whether the input is required.
    pub required: bool,
    /// Whether the input is disabled.
    pub disabled: bool,
    /// Whether a caption is rendered.
    pub has_caption: bool,
    /// The validation message's status, if one is rendered.
    pub validation: Option<ValidationStatus>,
}

impl FormControl {
    /// Creates a control whose input gets `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: false,
            disabled: false,
            has_caption: false,
            validation: None,
        }
    }

    /// The input id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the caption element.
    pub fn caption_id(&self) -> String {
        format!("{}-caption", self.id)
    }

    /// Id of the validation message element.
    pub fn validation_message_id(&self) -> String {
        format!("{}-validationMessage", self.id)
    }

    /// The props forwarded to an auto-wirable input.
    pub fn forwarded_props(&self) -> ForwardedProps {
        let mut described_by = Vec::new();
        if self.validation.is_some() {
            described_by.push(self.validation_message_id());
        }
        if self.has_caption {
            described_by.push(self.caption_id());
        }
        ForwardedProps {
            id: Some(self.id.clone()),
            required: self.required,
            disabled: self.disabled,
            aria_describedby: (!described_by.is_empty()).then(|| described_by.join(" ")),
            validation_status: self.validation,
        }
    }

    /// Forwards props to `child` if it is auto-wirable. Returns whether it was.
    pub fn wire(&self, child: &mut dyn FormChild) -> bool {
        let Some(input) = child.as_auto_wirable() else {
            tracing::trace!(id = %self.id, "form control child is not auto-wirable");
            return false;
        };
        input.apply_forwarded_props(&self.forwarded_props());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TextInput {
        props: ForwardedProps,
    }

    impl AutoWirable for TextInput {
        fn apply_forwarded_props(&mut self, props: &ForwardedProps) {
            self.props = props.clone();
        }
    }

    impl FormChild for TextInput {
        fn as_auto_wirable(&mut self) -> Option<&mut dyn AutoWirable> {
            Some(self)
        }
    }

    struct CustomWidget;

    impl FormChild for CustomWidget {}

    #[test]
    fn wires_auto_wirable_children() {
        let mut control = FormControl::new("name");
        control.required = true;
        control.has_caption = true;
        control.validation = Some(ValidationStatus::Error);

        let mut input = TextInput::default();
        assert!(control.wire(&mut input));
        assert_eq!(input.props.id.as_deref(), Some("name"));
        assert!(input.props.required);
        assert!(!input.props.disabled);
        assert_eq!(
            input.props.aria_describedby.as_deref(),
            Some("name-validationMessage name-caption")
        );
        assert_eq!(input.props.validation_status, Some(ValidationStatus::Error));
    }

    #[test]
    fn leaves_other_children_alone() {
        let control = FormControl::new("name");
        assert!(!control.wire(&mut CustomWidget));
    }

    #[test]
    fn no_description_without_caption_or_validation() {
        let control = FormControl::new("email");
        assert_eq!(control.forwarded_props().aria_describedby, None);

        let mut captioned = FormControl::new("email");
        captioned.has_caption = true;
        assert_eq!(
            captioned.forwarded_props().aria_describedby.as_deref(),
            Some("email-caption")
        );
    }
}
