// templates/pages/listing_detail.rs

use crate::domain::listing::{format_price, Listing};
use crate::forms::{FieldErrors, InquiryForm};
use crate::storage::{ImageOptions, ImageProxy};
use crate::templates::components::{field_error, text_input};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// What the inquiry panel shows.
pub enum InquiryPanel<'a> {
    Form {
        form: &'a InquiryForm,
        errors: &'a FieldErrors,
    },
    Submitted,
}

fn gallery(listing: &Listing, selected: usize, proxy: &ImageProxy) -> Markup {
    let selected = listing.images.get(selected).map_or(0, |_| selected);
    let large = ImageOptions {
        width: 1200,
        height: 800,
        ..ImageOptions::default()
    };
    let thumb = ImageOptions::thumbnail();

    html! {
        div class="gallery" {
            @if let Some(image) = listing.images.get(selected) {
                img class="gallery-main" src=(proxy.display_url(&image.url, &large)) alt=(image.alt);
            }
            @if listing.images.len() > 1 {
                div class="gallery-thumbs" {
                    @for (i, image) in listing.images.iter().enumerate() {
                        a href={ "/listings/" (listing.id) "?image=" (i) }
                            class=[(i == selected).then_some("active")] {
                            img src=(proxy.display_url(&image.url, &thumb)) alt=(image.alt) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn inquiry_panel(listing: &Listing, panel: &InquiryPanel<'_>) -> Markup {
    html! {
        div class="card inquiry" {
            h2 { "Request Information" }
            @match panel {
                InquiryPanel::Submitted => {
                    div class="notice notice-success" {
                        p { "Thank you for your inquiry! A broker will be in touch shortly." }
                    }
                    a href={ "/listings/" (listing.id) } class="btn btn-light" { "Send another inquiry" }
                }
                InquiryPanel::Form { form, errors } => {
                    form method="post" action={ "/listings/" (listing.id) "/inquiries" } novalidate {
                        (text_input("Name", "name", "text", &form.name, errors))
                        (text_input("Email", "email", "email", &form.email, errors))
                        (text_input("Phone (optional)", "phone", "tel", form.phone.as_deref().unwrap_or(""), errors))
                        div class="field" {
                            label for="message" { "Message" }
                            textarea id="message" name="message" rows="4" { (form.message) }
                            (field_error(errors, "message"))
                        }
                        button type="submit" class="btn" { "Send Inquiry" }
                    }
                }
            }
        }
    }
}

pub fn listing_detail_page(
    listing: &Listing,
    selected_image: usize,
    proxy: &ImageProxy,
    panel: InquiryPanel<'_>,
) -> Markup {
    desktop_layout(
        &listing.title,
        false,
        html! {
            p class="breadcrumbs" { a href="/listings" { "← Back to listings" } }

            div class="detail-layout" {
                div class="detail-main" {
                    (gallery(listing, selected_image, proxy))

                    div class="detail-header" {
                        h1 { (listing.title) }
                        span class={ "badge badge-" (listing.status.as_str()) } { (listing.status.to_string()) }
                    }
                    p class="muted" { (listing.full_address()) " " (listing.zip) }
                    p class="price" { (format_price(listing.price)) span class="muted" { "/month" } }

                    ul class="facts" {
                        li { (listing.bedroom_label()) }
                        li { (listing.bathroom_label()) }
                        li { (listing.square_feet) " sq ft" }
                        li { (listing.property_type) }
                    }

                    h2 { "Description" }
                    p { (listing.description) }

                    h2 { "Lease Details" }
                    dl class="details" {
                        dt { "Security deposit" } dd { (format_price(listing.deposit)) }
                        dt { "Lease length" } dd { (listing.lease_months) " months" }
                        dt { "Available from" } dd { (listing.available_from.format("%B %-d, %Y").to_string()) }
                    }

                    @if !listing.amenities.is_empty() {
                        h2 { "Amenities" }
                        ul class="amenities" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }
                    }
                }

                aside class="detail-side" {
                    div class="card broker" {
                        h2 { "Listed by" }
                        p { strong { (listing.broker.name) } }
                        p { a href={ "tel:" (listing.broker.phone) } { (listing.broker.phone) } }
                        p { a href={ "mailto:" (listing.broker.email) } { (listing.broker.email) } }
                    }
                    (inquiry_panel(listing, &panel))
                }
            }
        },
    )
}
