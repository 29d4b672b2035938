use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryStatus {
    New,
    Contacted,
    Scheduled,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Scheduled => "scheduled",
        }
    }

    /// Badge colors used by the admin tables.
    pub fn badge_class(&self) -> &'static str {
        match self {
            InquiryStatus::New => "badge badge-blue",
            InquiryStatus::Contacted => "badge badge-yellow",
            InquiryStatus::Scheduled => "badge badge-green",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub listing_id: String,
    pub listing_title: String,
    pub created_at: DateTime<Utc>,
}
