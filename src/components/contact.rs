//! Contact section: info rows with copy-on-click, and the message form.
//!
//! Validation runs per field on blur (typing in a field clears its error)
//! and for the whole form on submit. A valid submission goes through the
//! simulated transport; the button is disabled and relabelled while the
//! delivery is in flight.

use std::collections::HashMap;
use std::time::Duration;

use dioxus::prelude::*;
use vitrine_core::contact::{
    submit, ContactField, ContactMessage, SimulatedTransport, SubmitOutcome, SUBMIT_TIMEOUT_MS,
};
use vitrine_core::validate::{validate_field, FieldError};
use vitrine_core::ToastKind;
use vitrine_ui::{Input, SubmitButton, TextArea};

use crate::context::{copy_to_clipboard, use_toasts};

const CONTACT_EMAIL: &str = "hello@omarnasser.design";
const CONTACT_PHONE: &str = "+966 50 123 4567";
const CONTACT_LOCATION: &str = "Riyadh, Saudi Arabia";

#[component]
pub fn ContactSection() -> Element {
    let mut toasts = use_toasts();
    let mut form = use_signal(ContactMessage::default);
    let mut errors: Signal<HashMap<ContactField, FieldError>> = use_signal(HashMap::new);
    let mut submitting = use_signal(|| false);

    let error_for = move |field: ContactField| -> Option<String> {
        errors.read().get(&field).map(|e| e.message().to_string())
    };

    // Editing a field clears its error; the next blur re-validates it.
    let mut set_value = move |field: ContactField, value: String| {
        {
            let mut form = form.write();
            match field {
                ContactField::Name => form.name = value,
                ContactField::Email => form.email = value,
                ContactField::Phone => form.phone = value,
                ContactField::Subject => form.subject = value,
                ContactField::Message => form.message = value,
            }
        }
        errors.write().remove(&field);
    };

    let mut validate_one = move |field: ContactField| {
        let value = form.read().field(field).to_string();
        match validate_field(&value, field.required(), field.kind()) {
            Ok(()) => {
                errors.write().remove(&field);
            }
            Err(err) => {
                errors.write().insert(field, err);
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let message = form.read().clone();
        match message.validate() {
            Err(failures) => {
                errors.set(failures.into_iter().collect());
                toasts.notify("Please correct the errors in the form", ToastKind::Error);
            }
            Ok(()) => {
                errors.write().clear();
                submitting.set(true);
                spawn(async move {
                    let transport = SimulatedTransport::default();
                    let outcome = submit(
                        &transport,
                        &message,
                        Duration::from_millis(SUBMIT_TIMEOUT_MS),
                    )
                    .await;
                    submitting.set(false);
                    let mut toasts = toasts;
                    match outcome {
                        SubmitOutcome::Accepted => {
                            form.set(ContactMessage::default());
                            toasts.notify(
                                "Message sent successfully! I will get back to you soon.",
                                ToastKind::Success,
                            );
                        }
                        SubmitOutcome::Rejected(reason) => {
                            tracing::warn!(%reason, "message delivery rejected");
                            toasts.notify(
                                format!("Could not send the message: {reason}"),
                                ToastKind::Error,
                            );
                        }
                        SubmitOutcome::TimedOut => {
                            toasts.notify(
                                "Sending timed out. Please try again.",
                                ToastKind::Error,
                            );
                        }
                    }
                });
            }
        }
    };

    rsx! {
        section { id: "contact", class: "section contact",
            h2 { class: "section-title", "Get In Touch" }

            div { class: "contact-layout",
                div { class: "contact-info",
                    p { class: "contact-pitch",
                        "Have a project in mind? Click a row to copy it, or send "
                        "a message with the form."
                    }
                    button {
                        class: "contact-row",
                        onclick: move |_| copy_to_clipboard(toasts, CONTACT_EMAIL.to_string()),
                        span { class: "contact-row-label", "Email" }
                        span { class: "contact-row-value", "{CONTACT_EMAIL}" }
                    }
                    button {
                        class: "contact-row",
                        onclick: move |_| copy_to_clipboard(toasts, CONTACT_PHONE.to_string()),
                        span { class: "contact-row-label", "Phone" }
                        span { class: "contact-row-value", "{CONTACT_PHONE}" }
                    }
                    div { class: "contact-row static",
                        span { class: "contact-row-label", "Location" }
                        span { class: "contact-row-value", "{CONTACT_LOCATION}" }
                    }
                }

                form { class: "contact-form", onsubmit: on_submit,
                    div { class: "form-grid",
                        Input {
                            value: form.read().name.clone(),
                            label: "Name".to_string(),
                            placeholder: "Your name".to_string(),
                            required: true,
                            error: error_for(ContactField::Name),
                            oninput: move |v| set_value(ContactField::Name, v),
                            onblur: move |_| validate_one(ContactField::Name),
                        }
                        Input {
                            value: form.read().email.clone(),
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "you@example.com".to_string(),
                            required: true,
                            error: error_for(ContactField::Email),
                            oninput: move |v| set_value(ContactField::Email, v),
                            onblur: move |_| validate_one(ContactField::Email),
                        }
                        Input {
                            value: form.read().phone.clone(),
                            label: "Phone (optional)".to_string(),
                            input_type: "tel".to_string(),
                            placeholder: "+1 555 000 0000".to_string(),
                            error: error_for(ContactField::Phone),
                            oninput: move |v| set_value(ContactField::Phone, v),
                            onblur: move |_| validate_one(ContactField::Phone),
                        }
                        Input {
                            value: form.read().subject.clone(),
                            label: "Subject".to_string(),
                            placeholder: "What is this about?".to_string(),
                            required: true,
                            error: error_for(ContactField::Subject),
                            oninput: move |v| set_value(ContactField::Subject, v),
                            onblur: move |_| validate_one(ContactField::Subject),
                        }
                    }
                    TextArea {
                        value: form.read().message.clone(),
                        label: "Message".to_string(),
                        placeholder: "Tell me about your project...".to_string(),
                        required: true,
                        error: error_for(ContactField::Message),
                        oninput: move |v| set_value(ContactField::Message, v),
                        onblur: move |_| validate_one(ContactField::Message),
                    }
                    SubmitButton {
                        label: "Send Message".to_string(),
                        loading: submitting(),
                    }
                }
            }
        }
    }
}
