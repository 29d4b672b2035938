use crate::domain::listing::{format_price, Listing};
use crate::forms::FieldErrors;
use crate::storage::{ImageOptions, ImageProxy};
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Inline message under a form input, nothing when the field is valid.
pub fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error" { (msg) }
        }
    }
}

/// Text input with label and error slot.
pub fn text_input(
    label: &str,
    name: &str,
    kind: &str,
    value: &str,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type=(kind) id=(name) name=(name) value=(value)
                class=[errors.get(name).map(|_| "invalid")];
            (field_error(errors, name))
        }
    }
}

pub fn listing_card(listing: &Listing, proxy: &ImageProxy) -> Markup {
    html! {
        a class="listing-card" href={ "/listings/" (listing.id) } {
            div class="listing-image" {
                @if let Some(cover) = listing.cover_image() {
                    img src=(proxy.display_url(&cover.url, &ImageOptions::default()))
                        alt=(cover.alt) loading="lazy";
                }
                span class={ "badge badge-" (listing.status.as_str()) } { (listing.status.to_string()) }
            }
            div class="listing-body" {
                h3 { (listing.title) }
                p class="muted" { (listing.neighborhood) ", " (listing.borough) }
                p class="price" { (format_price(listing.price)) span class="muted" { "/month" } }
                ul class="facts" {
                    li { (listing.bedroom_label()) }
                    li { (listing.bathroom_label()) }
                    li { (listing.square_feet) " sq ft" }
                }
            }
        }
    }
}
