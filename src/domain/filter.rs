// src/domain/filter.rs
use crate::domain::listing::Listing;
use std::collections::HashMap;

/// Bedroom bucket picked in the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomFilter {
    Studio,
    Exactly(u8),
    /// The top bucket ("3+").
    AtLeast(u8),
}

pub const TOP_BEDROOM_BUCKET: u8 = 3;

impl BedroomFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("studio") {
            return Some(BedroomFilter::Studio);
        }
        let n: u8 = raw.parse().ok()?;
        if n == TOP_BEDROOM_BUCKET {
            Some(BedroomFilter::AtLeast(n))
        } else {
            Some(BedroomFilter::Exactly(n))
        }
    }

    pub fn matches(&self, bedrooms: u8) -> bool {
        match *self {
            BedroomFilter::Studio => bedrooms == 0,
            BedroomFilter::Exactly(n) => bedrooms == n,
            BedroomFilter::AtLeast(n) => bedrooms >= n,
        }
    }

    /// Value used by the `<select>` option.
    pub fn as_param(&self) -> String {
        match self {
            BedroomFilter::Studio => "studio".to_string(),
            BedroomFilter::Exactly(n) | BedroomFilter::AtLeast(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub location: Option<String>,
    pub bedrooms: Option<BedroomFilter>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter {
    pub field: &'static str,
    pub value: String,
}

impl ListingFilter {
    /// Build from query parameters (`location`, `bedrooms`, `minPrice`, `maxPrice`).
    /// Empty values impose no constraint.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, InvalidFilter> {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let bedrooms = match get("bedrooms") {
            Some(raw) => Some(BedroomFilter::parse(&raw).ok_or(InvalidFilter {
                field: "bedrooms",
                value: raw,
            })?),
            None => None,
        };

        Ok(Self {
            location: get("location"),
            bedrooms,
            min_price: parse_price("minPrice", get("minPrice"))?,
            max_price: parse_price("maxPrice", get("maxPrice"))?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self == &ListingFilter::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(location) = &self.location {
            let matches_location = listing.borough.eq_ignore_ascii_case(location)
                || listing.neighborhood.eq_ignore_ascii_case(location);
            if !matches_location {
                return false;
            }
        }

        if let Some(bedrooms) = &self.bedrooms {
            if !bedrooms.matches(listing.bedrooms) {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }

        true
    }

    /// AND of every provided predicate, catalog order preserved.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

fn parse_price(field: &'static str, raw: Option<String>) -> Result<Option<u32>, InvalidFilter> {
    match raw {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| InvalidFilter { field, value }),
        None => Ok(None),
    }
}
