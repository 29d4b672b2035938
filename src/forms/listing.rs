// src/forms/listing.rs
use crate::domain::listing::ListingStatus;
use crate::forms::{FieldErrors, FormFields};
use chrono::NaiveDate;

/// Admin "Create New Listing" form, values kept as typed so the page can
/// re-render them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub neighborhood: String,
    pub borough: String,
    pub address: String,
    pub unit_number: Option<String>,
    pub zip_code: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub price: String,
    pub deposit_amount: Option<String>,
    pub lease_length: String,
    pub available_from: String,
    pub is_featured: bool,
    pub status: String,
    pub amenities: Vec<String>,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            neighborhood: String::new(),
            borough: String::new(),
            address: String::new(),
            unit_number: None,
            zip_code: String::new(),
            property_type: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_feet: String::new(),
            price: String::new(),
            deposit_amount: None,
            lease_length: "12".to_string(),
            available_from: String::new(),
            is_featured: false,
            status: ListingStatus::Available.as_str().to_string(),
            amenities: Vec::new(),
        }
    }
}

impl ListingForm {
    pub fn from_fields(f: &FormFields) -> Self {
        Self {
            title: f.text("title"),
            description: f.text("description"),
            neighborhood: f.text("neighborhood"),
            borough: f.text("borough"),
            address: f.text("address"),
            unit_number: f.optional("unitNumber"),
            zip_code: f.text("zipCode"),
            property_type: f.text("propertyType"),
            bedrooms: f.text("bedrooms"),
            bathrooms: f.text("bathrooms"),
            square_feet: f.text("squareFeet"),
            price: f.text("price"),
            deposit_amount: f.optional("depositAmount"),
            lease_length: f.text("leaseLength"),
            available_from: f.text("availableFrom"),
            is_featured: f.get("isFeatured").is_some(),
            status: f.text("status"),
            amenities: f.all("amenities"),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut e = FieldErrors::default();

        e.min_len("title", &self.title, 5, "Title must be at least 5 characters");
        e.min_len("description", &self.description, 20, "Description must be at least 20 characters");
        e.require("neighborhood", &self.neighborhood, "Neighborhood is required");
        e.require("borough", &self.borough, "Borough is required");
        e.min_len("address", &self.address, 5, "Address is required");
        e.min_len("zipCode", &self.zip_code, 5, "ZIP code is required");
        e.require("propertyType", &self.property_type, "Property type is required");
        e.require("bedrooms", &self.bedrooms, "Number of bedrooms is required");
        e.require("bathrooms", &self.bathrooms, "Number of bathrooms is required");
        e.require("squareFeet", &self.square_feet, "Square footage is required");
        e.require("price", &self.price, "Price is required");
        e.require("leaseLength", &self.lease_length, "Lease length is required");
        e.require("availableFrom", &self.available_from, "Availability date is required");
        e.require("status", &self.status, "Status is required");

        // Shape checks only run on fields that passed the presence checks.
        number(&mut e, "bedrooms", &self.bedrooms);
        number(&mut e, "bathrooms", &self.bathrooms);
        number(&mut e, "squareFeet", &self.square_feet);
        number(&mut e, "price", &self.price);
        number(&mut e, "leaseLength", &self.lease_length);
        if let Some(deposit) = &self.deposit_amount {
            number(&mut e, "depositAmount", deposit);
        }

        if !self.available_from.is_empty()
            && NaiveDate::parse_from_str(&self.available_from, "%Y-%m-%d").is_err()
        {
            e.add("availableFrom", "Availability date must be a valid date");
        }

        if !self.status.is_empty() && ListingStatus::parse(&self.status).is_none() {
            e.add("status", "Status must be available, pending or rented");
        }

        e.into_result()
    }
}

fn number(e: &mut FieldErrors, field: &'static str, value: &str) {
    if !value.is_empty() && value.parse::<f64>().map(|n| n < 0.0 || n.is_nan()).unwrap_or(true) {
        e.add(field, "Must be a non-negative number");
    }
}
