use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Available,
    Pending,
    Rented,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 3] = [
        ListingStatus::Available,
        ListingStatus::Pending,
        ListingStatus::Rented,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Pending => "pending",
            ListingStatus::Rented => "rented",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ListingImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct Broker {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub neighborhood: String,
    pub borough: String,
    pub address: String,
    pub unit: Option<String>,
    pub zip: String,
    pub property_type: String,

    // 0 bedrooms is a studio
    pub bedrooms: u8,
    pub bathrooms: f32,
    pub square_feet: u32,

    pub price: u32,
    pub deposit: u32,
    pub lease_months: u8,
    pub available_from: NaiveDate,

    pub amenities: BTreeSet<String>,
    pub images: Vec<ListingImage>,
    pub status: ListingStatus,
    pub broker: Broker,
}

impl Listing {
    pub fn cover_image(&self) -> Option<&ListingImage> {
        self.images.first()
    }

    /// "Studio", "1 Bed", "3 Beds".
    pub fn bedroom_label(&self) -> String {
        match self.bedrooms {
            0 => "Studio".to_string(),
            1 => "1 Bed".to_string(),
            n => format!("{n} Beds"),
        }
    }

    pub fn bathroom_label(&self) -> String {
        if self.bathrooms == 1.0 {
            "1 Bath".to_string()
        } else {
            format!("{} Baths", self.bathrooms)
        }
    }

    pub fn full_address(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{}, {}, {}, {}", self.address, unit, self.neighborhood, self.borough),
            None => format!("{}, {}, {}", self.address, self.neighborhood, self.borough),
        }
    }

    pub fn default_inquiry_message(&self) -> String {
        format!(
            "Hi, I'm interested in this {} bedroom apartment in {}. Please contact me with more information.",
            self.bedrooms, self.neighborhood
        )
    }
}

/// "$3,500"
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}
