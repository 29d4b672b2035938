// src/domain/dashboard.rs
// Mock numbers for the admin dashboard.
use crate::domain::inquiry::{Inquiry, InquiryStatus};
use crate::domain::listing::ListingStatus;
use chrono::{DateTime, TimeZone, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Increase,
    Decrease,
}

#[derive(Debug, Clone)]
pub struct DashboardStat {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_type: Change,
}

#[derive(Debug, Clone)]
pub struct ListingRow {
    pub id: &'static str,
    pub title: &'static str,
    pub price: u32,
    pub status: ListingStatus,
    pub inquiries: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Overview,
    Listings,
    Inquiries,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Listings,
        DashboardTab::Inquiries,
        DashboardTab::Settings,
    ];

    /// Unknown or missing tabs fall back to the overview.
    pub fn parse(raw: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| Some(t.as_str()) == raw)
            .unwrap_or(DashboardTab::Overview)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Listings => "listings",
            DashboardTab::Inquiries => "inquiries",
            DashboardTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Listings => "Listings",
            DashboardTab::Inquiries => "Inquiries",
            DashboardTab::Settings => "Settings",
        }
    }
}

pub struct Dashboard {
    pub stats: Vec<DashboardStat>,
    pub recent_listings: Vec<ListingRow>,
    pub recent_inquiries: Vec<Inquiry>,
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn inquiry(
    id: &str,
    name: &str,
    email: &str,
    listing: (&str, &str),
    status: InquiryStatus,
    created_at: DateTime<Utc>,
) -> Inquiry {
    Inquiry {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        phone: None,
        message: format!("Hi, I'm interested in {}.", listing.1),
        status,
        listing_id: listing.0.into(),
        listing_title: listing.1.into(),
        created_at,
    }
}

impl Dashboard {
    pub fn mock() -> Self {
        let chelsea = ("1", "Modern 2BR in Chelsea");
        let balcony = ("2", "Spacious 3BR with Balcony");
        let astoria = ("3", "Cozy 1BR in Astoria");

        Self {
            stats: vec![
                DashboardStat { name: "Total Listings", value: "24", change: "+3", change_type: Change::Increase },
                DashboardStat { name: "Active Listings", value: "18", change: "+2", change_type: Change::Increase },
                DashboardStat { name: "New Inquiries", value: "12", change: "+5", change_type: Change::Increase },
                DashboardStat { name: "Pending Inquiries", value: "8", change: "-2", change_type: Change::Decrease },
            ],
            recent_listings: vec![
                ListingRow { id: "1", title: chelsea.1, price: 3500, status: ListingStatus::Available, inquiries: 4, created_at: at(2025, 3, 15, 10, 30) },
                ListingRow { id: "2", title: balcony.1, price: 4200, status: ListingStatus::Available, inquiries: 2, created_at: at(2025, 3, 14, 14, 45) },
                ListingRow { id: "3", title: astoria.1, price: 2200, status: ListingStatus::Pending, inquiries: 6, created_at: at(2025, 3, 13, 9, 15) },
                ListingRow { id: "4", title: "Luxury Studio in Financial District", price: 2800, status: ListingStatus::Available, inquiries: 1, created_at: at(2025, 3, 12, 16, 20) },
            ],
            recent_inquiries: vec![
                Inquiry {
                    phone: Some("(212) 555-0147".into()),
                    ..inquiry("1", "John Smith", "john.smith@example.com", chelsea, InquiryStatus::New, at(2025, 3, 17, 9, 30))
                },
                inquiry("2", "Emily Johnson", "emily.j@example.com", chelsea, InquiryStatus::Contacted, at(2025, 3, 16, 14, 45)),
                inquiry("3", "Michael Brown", "michael.b@example.com", balcony, InquiryStatus::New, at(2025, 3, 16, 11, 15)),
                inquiry("4", "Sarah Davis", "sarah.d@example.com", astoria, InquiryStatus::Scheduled, at(2025, 3, 15, 16, 20)),
            ],
        }
    }
}

/// "Mar 15, 2025"
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}
