// templates/pages/dashboard.rs

use crate::domain::dashboard::{format_date, Change, Dashboard, DashboardTab};
use crate::domain::listing::format_price;
use crate::templates::components::card;
use crate::templates::admin_layout;
use maud::{html, Markup};

/// Values for the settings tab.
pub struct SettingsVm<'a> {
    pub email: Option<&'a str>,
    pub bucket: &'a str,
    pub max_images: usize,
}

fn tabs(active: DashboardTab) -> Markup {
    html! {
        nav class="tabs" {
            @for tab in DashboardTab::ALL {
                a href={ "/admin/dashboard?tab=" (tab.as_str()) }
                    class=[(tab == active).then_some("active")] {
                    (tab.label())
                }
            }
        }
    }
}

fn stats(dashboard: &Dashboard) -> Markup {
    html! {
        div class="stats" {
            @for stat in &dashboard.stats {
                div class="stat" {
                    p class="muted" { (stat.name) }
                    p class="stat-value" { (stat.value) }
                    @let class = match stat.change_type {
                        Change::Increase => "change up",
                        Change::Decrease => "change down",
                    };
                    p class=(class) { (stat.change) }
                }
            }
        }
    }
}

fn listings_table(dashboard: &Dashboard) -> Markup {
    html! {
        table class="table" {
            thead {
                tr { th { "Title" } th { "Price" } th { "Status" } th { "Inquiries" } th { "Created" } }
            }
            tbody {
                @for row in &dashboard.recent_listings {
                    tr {
                        td { a href={ "/listings/" (row.id) } { (row.title) } }
                        td { (format_price(row.price)) }
                        td { span class={ "badge badge-" (row.status.as_str()) } { (row.status.to_string()) } }
                        td { (row.inquiries) }
                        td { (format_date(&row.created_at)) }
                    }
                }
            }
        }
    }
}

fn inquiries_table(dashboard: &Dashboard) -> Markup {
    html! {
        table class="table" {
            thead {
                tr { th { "Name" } th { "Listing" } th { "Message" } th { "Status" } th { "Received" } }
            }
            tbody {
                @for inquiry in &dashboard.recent_inquiries {
                    tr id={ "inquiry-" (inquiry.id) } {
                        td {
                            (inquiry.name)
                            br;
                            span class="muted" { (inquiry.email) }
                            @if let Some(phone) = &inquiry.phone {
                                br;
                                span class="muted" { (phone) }
                            }
                        }
                        td { a href={ "/listings/" (inquiry.listing_id) } { (inquiry.listing_title) } }
                        td class="message" { (inquiry.message) }
                        td { span class=(inquiry.status.badge_class()) { (inquiry.status.to_string()) } }
                        td { (format_date(&inquiry.created_at)) }
                    }
                }
            }
        }
    }
}

fn settings(vm: &SettingsVm<'_>) -> Markup {
    html! {
        dl class="details" {
            dt { "Signed in as" } dd { (vm.email.unwrap_or("unknown")) }
            dt { "Image bucket" } dd { code { (vm.bucket) } }
            dt { "Images per listing" } dd { (vm.max_images) }
        }
    }
}

pub fn dashboard_page(dashboard: &Dashboard, tab: DashboardTab, vm: &SettingsVm<'_>) -> Markup {
    admin_layout(
        "Dashboard",
        vm.email,
        html! {
            div class="admin-title" {
                h1 { "Dashboard" }
                a href="/admin/listings/new" class="btn" { "Add New Listing" }
            }

            (tabs(tab))

            @match tab {
                DashboardTab::Overview => {
                    (stats(dashboard))
                    section {
                        h2 { "Recent Listings" }
                        (listings_table(dashboard))
                    }
                    section {
                        h2 { "Recent Inquiries" }
                        (inquiries_table(dashboard))
                    }
                }
                DashboardTab::Listings => {
                    h2 { "All Listings" }
                    (listings_table(dashboard))
                }
                DashboardTab::Inquiries => {
                    h2 { "All Inquiries" }
                    (inquiries_table(dashboard))
                }
                DashboardTab::Settings => {
                    (card("Settings", settings(vm)))
                }
            }
        },
    )
}
