// templates/pages/listings.rs

use crate::domain::catalog::{neighborhoods_in, BOROUGHS};
use crate::domain::filter::{BedroomFilter, ListingFilter};
use crate::domain::listing::Listing;
use crate::storage::ImageProxy;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

const BEDROOM_OPTIONS: &[(&str, &str)] = &[
    ("studio", "Studio"),
    ("1", "1 Bed"),
    ("2", "2 Beds"),
    ("3", "3+ Beds"),
];

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 listing found".to_string()
    } else {
        format!("{n} listings found")
    }
}

pub fn listings_page(filter: &ListingFilter, results: &[&Listing], proxy: &ImageProxy) -> Markup {
    let location = filter.location.as_deref().unwrap_or("");
    let bedrooms = filter.bedrooms.as_ref().map(BedroomFilter::as_param).unwrap_or_default();
    let min_price = filter.min_price.map(|p| p.to_string()).unwrap_or_default();
    let max_price = filter.max_price.map(|p| p.to_string()).unwrap_or_default();

    desktop_layout(
        "Listings",
        false,
        html! {
            div class="listings-layout" {
                aside class="filters" {
                    h2 { "Filters" }
                    form method="get" action="/listings" {
                        div class="field" {
                            label for="location" { "Location" }
                            select id="location" name="location" {
                                option value="" { "All locations" }
                                @for borough in BOROUGHS {
                                    optgroup label=(borough) {
                                        option value=(borough) selected[location.eq_ignore_ascii_case(borough)] {
                                            "All of " (borough)
                                        }
                                        @for n in neighborhoods_in(borough) {
                                            option value=(n.name) selected[location.eq_ignore_ascii_case(n.name)] {
                                                (n.name)
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div class="field" {
                            label for="bedrooms" { "Bedrooms" }
                            select id="bedrooms" name="bedrooms" {
                                option value="" { "Any" }
                                @for (value, label) in BEDROOM_OPTIONS {
                                    option value=(value) selected[bedrooms == *value] { (label) }
                                }
                            }
                        }
                        div class="field" {
                            label for="minPrice" { "Min price" }
                            input type="number" id="minPrice" name="minPrice" min="0" value=(min_price);
                        }
                        div class="field" {
                            label for="maxPrice" { "Max price" }
                            input type="number" id="maxPrice" name="maxPrice" min="0" value=(max_price);
                        }
                        button type="submit" class="btn" { "Apply filters" }
                        @if !filter.is_empty() {
                            a href="/listings" class="btn btn-light" { "Clear" }
                        }
                    }
                }

                section class="results" {
                    h1 { "Available Rentals" }
                    p class="muted" { (count_label(results.len())) }
                    @if results.is_empty() {
                        div class="empty" {
                            p { "No listings match your filters." }
                        }
                    } @else {
                        div class="listing-grid" {
                            @for listing in results {
                                (listing_card(listing, proxy))
                            }
                        }
                    }
                }
            }
        },
    )
}
