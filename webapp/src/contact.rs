use dioxus::prelude::*;
use tracing::{debug, info};

use crate::{
    components::{footer::PageFooter, toast::push_toast},
    store::language::use_language,
};
use kuro::{
    config::site,
    contact::{ContactField, ContactForm},
    gallery::images,
};

#[derive(Clone, PartialEq, Props)]
struct ContactInputProps {
    form: Signal<ContactForm>,
    field: ContactField,
    label: &'static str,
}

// a labelled, required control bound to one field of the form
#[component]
fn ContactInput(props: ContactInputProps) -> Element {
    let mut form = props.form;
    let field = props.field;
    let key = field.key();
    let value = form.read().get(field).to_owned();
    let input_type = if field == ContactField::Email { "email" } else { "text" };

    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: key, "{props.label}" }
            {match field {
                ContactField::Message => rsx! {
                    textarea {
                        class: "form-input",
                        id: key,
                        name: key,
                        rows: "8",
                        required: true,
                        value: "{value}",
                        oninput: move |event| form.write().set(field, event.value()),
                    }
                },
                ContactField::Name | ContactField::Email => rsx! {
                    input {
                        class: "form-input",
                        id: key,
                        name: key,
                        r#type: input_type,
                        required: true,
                        value: "{value}",
                        oninput: move |event| form.write().set(field, event.value()),
                    }
                },
            }}
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let t = use_language().t();
    let site = site();

    let mut form = use_signal(ContactForm::default);

    // the browser blocks submission while a required field is empty, so this
    // only runs for a complete form; nothing is sent anywhere
    let submit = move |event: FormEvent| {
        event.prevent_default();

        let Some(submission) = form.write().submit() else {
            debug!("ignoring incomplete contact form");
            return;
        };

        info!(
            name_len = submission.name.len(),
            email_len = submission.email.len(),
            message_len = submission.message.len(),
            "contact inquiry acknowledged"
        );
        push_toast(t.contact.sent_title, t.contact.sent_body);
    };

    rsx! {
        div { class: "page",
            div { class: "backdrop",
                img { class: "cover", src: images::INCENSE_SMOKE, alt: "Background" }
            }

            div { class: "page-body",
                div { class: "page-column width-text enter-rise",
                    h1 { class: "page-title", "{t.contact.title}" }
                    p { class: "page-lead", style: "margin-bottom: var(--space-16);", "{t.contact.intro}" }

                    form {
                        class: "stack enter-fade",
                        style: "max-width: var(--width-narrow); animation-delay: 0.3s;",
                        onsubmit: submit,
                        ContactInput { form, field: ContactField::Name, label: t.contact.name }
                        ContactInput { form, field: ContactField::Email, label: t.contact.email }
                        ContactInput { form, field: ContactField::Message, label: t.contact.message }
                        button { class: "btn-solid", r#type: "submit", "{t.contact.submit}" }
                    }

                    div {
                        class: "centered enter-fade",
                        style: "margin-top: var(--space-24); animation-delay: 0.6s;",
                        div { class: "stack opacity-60",
                            p { class: "caption", style: "opacity: 1;", "{t.contact.alternative}" }
                            p { style: "font-size: 1.125rem;", "{site.contact_email}" }
                        }
                        div { class: "stack opacity-50", style: "padding-top: var(--space-12);",
                            p { class: "caption", style: "opacity: 1;", "{t.contact.response_title}" }
                            p { style: "font-size: 0.875rem;", "{t.contact.response_body}" }
                        }
                    }

                    div { class: "rule-top centered enter-fade", style: "animation-delay: 0.9s;",
                        h2 { class: "section-title", style: "margin-bottom: var(--space-8);",
                            "{t.contact.visit_title}"
                        }
                        div { class: "prose",
                            for line in site.address.iter() {
                                p { "{line}" }
                            }
                        }
                    }
                }
            }

            PageFooter { tagline: t.footer.contact_tagline, width: "width-text" }
        }
    }
}
