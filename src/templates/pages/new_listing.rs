// templates/pages/new_listing.rs

use crate::domain::catalog::{AMENITIES, BOROUGHS, NEIGHBORHOODS, PROPERTY_TYPES};
use crate::domain::listing::ListingStatus;
use crate::forms::{FieldErrors, ListingForm};
use crate::storage::{progress_percent, ImageOptions, ImageProxy, ImageUploader};
use crate::templates::admin_layout;
use crate::templates::components::{field_error, text_input};
use maud::{html, Markup};

/// State of the image uploader block.
pub struct UploaderVm<'a> {
    pub uploader: &'a ImageUploader,
    pub error: Option<String>,
    /// (uploaded, attempted) for the last batch.
    pub last_batch: Option<(usize, usize)>,
}

/// The uploader block alone; htmx swaps it in place after each upload or
/// removal.
pub fn image_uploader(vm: &UploaderVm<'_>, proxy: &ImageProxy) -> Markup {
    let thumb = ImageOptions::thumbnail();
    let images = vm.uploader.images();

    html! {
        div id="image-uploader" class="uploader" {
            h2 { "Property Images" }
            p class="muted" { (images.len()) " / " (vm.uploader.max_images()) " images" }

            @if let Some(error) = &vm.error {
                div class="notice notice-error" { p { (error) } }
            }

            @if let Some((done, total)) = vm.last_batch {
                @let pct = progress_percent(done, total);
                div class="progress" {
                    div class="progress-bar" style={ "width: " (pct) "%" } {}
                }
                p class="muted" { "Uploaded " (done) " of " (total) }
            }

            @if !vm.uploader.is_full() {
                form method="post" action="/admin/listings/images" enctype="multipart/form-data"
                    hx-post="/admin/listings/images" hx-encoding="multipart/form-data"
                    hx-target="#image-uploader" hx-swap="outerHTML" {
                    input type="file" name="images" accept="image/*" multiple;
                    button type="submit" class="btn btn-light" { "Upload Images" }
                }
            }

            @if !images.is_empty() {
                ul class="thumbs" {
                    @for image in images {
                        li {
                            img src=(proxy.display_url(&image.url, &thumb)) alt="Property image";
                            form method="post" action="/admin/listings/images/delete"
                                hx-post="/admin/listings/images/delete"
                                hx-target="#image-uploader" hx-swap="outerHTML" {
                                input type="hidden" name="path" value=(image.path);
                                button type="submit" class="btn-remove" aria-label="Remove image" { "×" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn select(
    label: &str,
    name: &str,
    options: &[&str],
    value: &str,
    errors: &FieldErrors,
) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                option value="" { "Select…" }
                @for opt in options {
                    option value=(opt) selected[*opt == value] { (opt) }
                }
            }
            (field_error(errors, name))
        }
    }
}

pub fn new_listing_page(
    form: &ListingForm,
    errors: &FieldErrors,
    uploader: &UploaderVm<'_>,
    proxy: &ImageProxy,
    email: Option<&str>,
) -> Markup {
    let neighborhoods: Vec<&str> = NEIGHBORHOODS.iter().map(|n| n.name).collect();
    let statuses: Vec<&str> = ListingStatus::ALL.iter().map(|s| s.as_str()).collect();

    admin_layout(
        "Create New Listing",
        email,
        html! {
            div class="admin-title" {
                h1 { "Create New Listing" }
                a href="/admin/dashboard?tab=listings" class="btn btn-light" { "Cancel" }
            }

            (image_uploader(uploader, proxy))

            form method="post" action="/admin/listings" class="listing-form" novalidate {
                section {
                    h2 { "Basic Information" }
                    (text_input("Title", "title", "text", &form.title, errors))
                    div class="field" {
                        label for="description" { "Description" }
                        textarea id="description" name="description" rows="5" { (form.description) }
                        (field_error(errors, "description"))
                    }
                    (select("Property Type", "propertyType", PROPERTY_TYPES, &form.property_type, errors))
                    (select("Status", "status", &statuses, &form.status, errors))
                    div class="field checkbox" {
                        label {
                            input type="checkbox" name="isFeatured" value="true" checked[form.is_featured];
                            " Featured listing"
                        }
                    }
                }

                section {
                    h2 { "Location" }
                    (select("Borough", "borough", BOROUGHS, &form.borough, errors))
                    (select("Neighborhood", "neighborhood", &neighborhoods, &form.neighborhood, errors))
                    (text_input("Address", "address", "text", &form.address, errors))
                    (text_input("Unit Number", "unitNumber", "text", form.unit_number.as_deref().unwrap_or(""), errors))
                    (text_input("ZIP Code", "zipCode", "text", &form.zip_code, errors))
                }

                section {
                    h2 { "Details" }
                    (text_input("Bedrooms", "bedrooms", "number", &form.bedrooms, errors))
                    (text_input("Bathrooms", "bathrooms", "number", &form.bathrooms, errors))
                    (text_input("Square Feet", "squareFeet", "number", &form.square_feet, errors))
                }

                section {
                    h2 { "Pricing & Availability" }
                    (text_input("Monthly Rent", "price", "number", &form.price, errors))
                    (text_input("Security Deposit", "depositAmount", "number", form.deposit_amount.as_deref().unwrap_or(""), errors))
                    (text_input("Lease Length (months)", "leaseLength", "number", &form.lease_length, errors))
                    (text_input("Available From", "availableFrom", "date", &form.available_from, errors))
                }

                section {
                    h2 { "Amenities" }
                    div class="amenity-grid" {
                        @for amenity in AMENITIES {
                            label class="checkbox" {
                                input type="checkbox" name="amenities" value=(amenity)
                                    checked[form.amenities.iter().any(|a| a == amenity)];
                                " " (amenity)
                            }
                        }
                    }
                }

                @if !errors.is_empty() {
                    div class="notice notice-error" {
                        p { "Please fix the " (errors.len()) " highlighted field(s)." }
                    }
                }

                button type="submit" class="btn" { "Create Listing" }
            }
        },
    )
}
