// templates/pages/home.rs

use crate::domain::catalog::{Catalog, NEIGHBORHOODS, POPULAR_NEIGHBORHOODS};
use crate::storage::ImageProxy;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(catalog: &Catalog, proxy: &ImageProxy) -> Markup {
    let popular = NEIGHBORHOODS
        .iter()
        .filter(|n| POPULAR_NEIGHBORHOODS.contains(&n.name));

    desktop_layout(
        "Find your next NYC apartment",
        false,
        html! {
            section class="hero" {
                h1 { "Find Your Perfect NYC Apartment" }
                p { "Browse available rentals across Manhattan, Brooklyn, Queens and beyond." }

                form class="search" method="get" action="/listings" {
                    input type="text" name="location" placeholder="Borough or neighborhood";
                    select name="bedrooms" {
                        option value="" { "Any beds" }
                        option value="studio" { "Studio" }
                        option value="1" { "1 Bed" }
                        option value="2" { "2 Beds" }
                        option value="3" { "3+ Beds" }
                    }
                    input type="number" name="maxPrice" min="0" placeholder="Max price";
                    button type="submit" class="btn" { "Search" }
                }
            }

            section class="featured" {
                h2 { "Featured Listings" }
                div class="listing-grid" {
                    @for listing in catalog.featured() {
                        (listing_card(listing, proxy))
                    }
                }
                p { a href="/listings" class="btn btn-light" { "View all listings" } }
            }

            section class="neighborhoods" {
                h2 { "Popular Neighborhoods" }
                div class="neighborhood-grid" {
                    @for n in popular {
                        a class="neighborhood" href={ "/listings?location=" (n.name) } {
                            img src=(n.image_url) alt=(n.name) loading="lazy";
                            span { (n.name) }
                            span class="muted" { (n.borough) }
                        }
                    }
                }
            }
        },
    )
}
