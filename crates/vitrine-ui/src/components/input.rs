//! Form field components.
//!
//! Inputs, textarea, and select with inline validation display: when an
//! error is attached the field swaps to its error border and the message
//! renders directly below. Re-rendering with a new error replaces the old
//! message, so validation is idempotent by construction.

use dioxus::prelude::*;

fn field_class(error: Option<&String>) -> &'static str {
    if error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Validation failure to show under the field
    #[props(default)]
    pub error: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input field with inline error display
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         value: email(),
///         input_type: "email".to_string(),
///         required: true,
///         error: error_for(ContactField::Email),
///         oninput: move |s| set_value(ContactField::Email, s),
///         onblur: move |_| validate(ContactField::Email),
///         label: "Email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: field_class(props.error.as_ref()),
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Validation failure to show under the field
    #[props(default)]
    pub error: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Whether the textarea is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input with inline error display
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("textarea-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: field_class(props.error.as_ref()),
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// Currently selected value (empty string = nothing selected)
    pub value: String,
    /// Available options
    pub options: Vec<String>,
    /// Handler called when the selection changes
    pub onchange: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Validation failure to show under the field
    #[props(default)]
    pub error: Option<String>,
    /// Label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder option shown while nothing is selected
    #[props(default = "Choose...".to_string())]
    pub placeholder: String,
    /// Whether a selection is required
    #[props(default = false)]
    pub required: bool,
}

/// Drop-down select with inline error display
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            select {
                class: field_class(props.error.as_ref()),
                value: "{props.value}",
                required: props.required,
                onchange: move |e| props.onchange.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
                option { value: "", disabled: true, selected: props.value.is_empty(),
                    "{props.placeholder}"
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
            if let Some(error) = &props.error {
                div { class: "field-error", "{error}" }
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}
