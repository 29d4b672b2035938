use crate::domain::listing::Listing;
use crate::forms::{FieldErrors, FormFields};

/// "Request information" form on a listing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl InquiryForm {
    /// Blank form with the message pre-filled for `listing`.
    pub fn for_listing(listing: &Listing) -> Self {
        Self {
            message: listing.default_inquiry_message(),
            ..Self::default()
        }
    }

    pub fn from_fields(f: &FormFields) -> Self {
        Self {
            name: f.text("name"),
            email: f.text("email"),
            phone: f.optional("phone"),
            message: f.text("message"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require("name", &self.name, "Name is required");
        errors.email("email", &self.email);
        errors.require("message", &self.message, "Message is required");
        errors.into_result()
    }
}
