// templates/pages/contact.rs

use crate::forms::{ContactForm, FieldErrors};
use crate::templates::components::{field_error, text_input};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn contact_page(form: &ContactForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Contact Us",
        false,
        html! {
            section class="narrow" {
                h1 { "Contact Us" }
                p class="muted" {
                    "Questions about a listing or looking for something specific? Send us a message."
                }
                form method="post" action="/contact" novalidate {
                    (text_input("Name", "name", "text", &form.name, errors))
                    (text_input("Email", "email", "email", &form.email, errors))
                    (text_input("Phone (optional)", "phone", "tel", form.phone.as_deref().unwrap_or(""), errors))
                    div class="field" {
                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" { (form.message) }
                        (field_error(errors, "message"))
                    }
                    button type="submit" class="btn" { "Send Message" }
                }
            }
        },
    )
}

pub fn contact_sent_page() -> Markup {
    desktop_layout(
        "Contact Us",
        false,
        html! {
            section class="narrow" {
                div class="notice notice-success" {
                    h1 { "Thank you for contacting us!" }
                    p { "We've received your message and will get back to you as soon as possible." }
                }
                a href="/contact" class="btn" { "Send another message" }
            }
        },
    )
}
