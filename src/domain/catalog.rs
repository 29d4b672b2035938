// src/domain/catalog.rs
use crate::domain::listing::{Broker, Listing, ListingImage, ListingStatus};
use chrono::NaiveDate;

pub struct Neighborhood {
    pub name: &'static str,
    pub borough: &'static str,
    pub image_url: &'static str,
}

pub const BOROUGHS: &[&str] = &["Manhattan", "Brooklyn", "Queens", "Bronx", "Staten Island"];

pub const NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood { name: "Chelsea", borough: "Manhattan", image_url: "https://images.unsplash.com/photo-1519501025264-65ba15a82390?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "West Village", borough: "Manhattan", image_url: "https://images.unsplash.com/photo-1554995207-c18c203602cb?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Upper East Side", borough: "Manhattan", image_url: "https://images.unsplash.com/photo-1496588152823-86ff7695e68f?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Upper West Side", borough: "Manhattan", image_url: "https://images.unsplash.com/photo-1496588152823-86ff7695e68f?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Financial District", borough: "Manhattan", image_url: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Williamsburg", borough: "Brooklyn", image_url: "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Park Slope", borough: "Brooklyn", image_url: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "DUMBO", borough: "Brooklyn", image_url: "https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Astoria", borough: "Queens", image_url: "https://images.unsplash.com/photo-1624944556545-f0d6a7a7c7c0?auto=format&fit=crop&w=2340&q=80" },
    Neighborhood { name: "Long Island City", borough: "Queens", image_url: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&w=2340&q=80" },
];

/// Shown on the home page.
pub const POPULAR_NEIGHBORHOODS: &[&str] = &["Chelsea", "Williamsburg", "Astoria"];

pub const PROPERTY_TYPES: &[&str] = &["Apartment", "Condo", "Townhouse", "Loft", "Duplex", "Studio"];

pub const AMENITIES: &[&str] = &[
    "Dishwasher",
    "Washer/Dryer",
    "Hardwood Floors",
    "Stainless Steel Appliances",
    "Central Air",
    "Elevator",
    "Doorman",
    "Gym",
    "Roof Deck",
    "Balcony",
    "Terrace",
    "Pets Allowed",
    "Laundry in Building",
    "Storage Available",
    "Parking Available",
];

pub fn neighborhoods_in(borough: &str) -> impl Iterator<Item = &'static Neighborhood> + '_ {
    NEIGHBORHOODS
        .iter()
        .filter(move |n| n.borough.eq_ignore_ascii_case(borough))
}

/// The fixed listing collection every page reads from.
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn featured(&self) -> &[Listing] {
        &self.listings[..self.listings.len().min(3)]
    }
}

fn image(id: &str, alt: &str) -> ListingImage {
    ListingImage {
        url: format!("https://images.unsplash.com/photo-{id}?auto=format&fit=crop&w=2340&q=80"),
        alt: alt.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn jane() -> Broker {
    Broker {
        name: "Jane Smith".into(),
        phone: "(212) 555-1234".into(),
        email: "jane.smith@nycrentals.com".into(),
    }
}

fn marcus() -> Broker {
    Broker {
        name: "Marcus Lee".into(),
        phone: "(718) 555-9876".into(),
        email: "marcus.lee@nycrentals.com".into(),
    }
}

fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".into(),
            title: "Modern 2BR in Chelsea".into(),
            description: "This beautiful 2-bedroom apartment in the heart of Chelsea features hardwood floors, stainless steel appliances, and abundant natural light. Recently renovated with modern finishes throughout. The building offers a doorman, elevator, and laundry facilities. Located just steps from the High Line, Chelsea Market, and multiple subway lines.".into(),
            neighborhood: "Chelsea".into(),
            borough: "Manhattan".into(),
            address: "123 W 23rd St".into(),
            unit: Some("4B".into()),
            zip: "10011".into(),
            property_type: "Apartment".into(),
            bedrooms: 2,
            bathrooms: 1.0,
            square_feet: 850,
            price: 3500,
            deposit: 7000,
            lease_months: 12,
            available_from: date(2025, 4, 1),
            amenities: [
                "Dishwasher",
                "Hardwood Floors",
                "Stainless Steel Appliances",
                "Central Air",
                "Elevator",
                "Doorman",
                "Laundry in Building",
                "Pets Allowed",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            images: vec![
                image("1522708323590-d24dbb6b0267", "Living room with large windows"),
                image("1484154218962-a197022b5858", "Modern kitchen with island"),
                image("1501127122-f385ca6ddd9d", "Master bedroom"),
                image("1584622650111-993a426fbf0a", "Modern bathroom"),
            ],
            status: ListingStatus::Available,
            broker: jane(),
        },
        Listing {
            id: "2".into(),
            title: "Spacious 3BR with Balcony".into(),
            description: "Sun-filled three bedroom with a private balcony overlooking a quiet Williamsburg block. Open kitchen, in-unit washer/dryer and a shared roof deck with Manhattan views. Two blocks from the L train.".into(),
            neighborhood: "Williamsburg".into(),
            borough: "Brooklyn".into(),
            address: "88 N 6th St".into(),
            unit: Some("3".into()),
            zip: "11249".into(),
            property_type: "Condo".into(),
            bedrooms: 3,
            bathrooms: 2.0,
            square_feet: 1100,
            price: 4200,
            deposit: 4200,
            lease_months: 12,
            available_from: date(2025, 5, 1),
            amenities: ["Balcony", "Washer/Dryer", "Roof Deck", "Dishwasher", "Pets Allowed"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![image("1493809842364-78817add7ffb", "Living room opening onto the balcony")],
            status: ListingStatus::Available,
            broker: marcus(),
        },
        Listing {
            id: "3".into(),
            title: "Cozy 1BR in Astoria".into(),
            description: "Quiet one bedroom on a tree-lined Astoria street. Renovated kitchen, plenty of closet space and laundry in the building. Close to the N/W trains and Astoria Park.".into(),
            neighborhood: "Astoria".into(),
            borough: "Queens".into(),
            address: "31-14 30th Ave".into(),
            unit: Some("2F".into()),
            zip: "11102".into(),
            property_type: "Apartment".into(),
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: 650,
            price: 2200,
            deposit: 2200,
            lease_months: 12,
            available_from: date(2025, 4, 15),
            amenities: ["Hardwood Floors", "Laundry in Building", "Storage Available"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![image("1502672260266-1c1ef2d93688", "Bright living room")],
            status: ListingStatus::Pending,
            broker: marcus(),
        },
        Listing {
            id: "4".into(),
            title: "Luxury Studio in Financial District".into(),
            description: "High-floor studio in a full-service FiDi tower with a gym, doorman and roof deck. Floor-to-ceiling windows and a chef's kitchen. Steps from every downtown subway line.".into(),
            neighborhood: "Financial District".into(),
            borough: "Manhattan".into(),
            address: "70 Pine St".into(),
            unit: Some("3105".into()),
            zip: "10005".into(),
            property_type: "Studio".into(),
            bedrooms: 0,
            bathrooms: 1.0,
            square_feet: 550,
            price: 2800,
            deposit: 2800,
            lease_months: 12,
            available_from: date(2025, 4, 1),
            amenities: ["Doorman", "Gym", "Elevator", "Roof Deck", "Central Air"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![image("1560448204-e02f11c3d0e2", "Studio with city views")],
            status: ListingStatus::Available,
            broker: jane(),
        },
        Listing {
            id: "5".into(),
            title: "Renovated 2BR in Park Slope".into(),
            description: "Classic brownstone floor-through with a renovated kitchen and bath, original details and a shared backyard. One block from Prospect Park.".into(),
            neighborhood: "Park Slope".into(),
            borough: "Brooklyn".into(),
            address: "412 5th St".into(),
            unit: None,
            zip: "11215".into(),
            property_type: "Townhouse".into(),
            bedrooms: 2,
            bathrooms: 1.5,
            square_feet: 900,
            price: 3800,
            deposit: 3800,
            lease_months: 24,
            available_from: date(2025, 6, 1),
            amenities: ["Hardwood Floors", "Dishwasher", "Washer/Dryer", "Pets Allowed"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![image("1512917774080-9991f1c4c750", "Brownstone living room")],
            status: ListingStatus::Available,
            broker: marcus(),
        },
        Listing {
            id: "6".into(),
            title: "Charming 1BR in West Village".into(),
            description: "Prewar one bedroom with exposed brick and a decorative fireplace on one of the prettiest blocks in the West Village. Walk-up building with laundry next door.".into(),
            neighborhood: "West Village".into(),
            borough: "Manhattan".into(),
            address: "55 Bank St".into(),
            unit: Some("5A".into()),
            zip: "10014".into(),
            property_type: "Apartment".into(),
            bedrooms: 1,
            bathrooms: 1.0,
            square_feet: 600,
            price: 3200,
            deposit: 3200,
            lease_months: 12,
            available_from: date(2025, 5, 15),
            amenities: ["Hardwood Floors", "Pets Allowed"]
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![image("1554995207-c18c203602cb", "Living room with exposed brick")],
            status: ListingStatus::Rented,
            broker: jane(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_unique_ids() {
        let catalog = Catalog::seeded();
        let mut ids: Vec<_> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.listings().len());
    }

    #[test]
    fn featured_is_the_first_three() {
        let catalog = Catalog::seeded();
        let featured: Vec<_> = catalog.featured().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2", "3"]);
    }

    #[test]
    fn neighborhoods_follow_borough() {
        let names: Vec<_> = neighborhoods_in("brooklyn").map(|n| n.name).collect();
        assert_eq!(names, vec!["Williamsburg", "Park Slope", "DUMBO"]);
        assert_eq!(neighborhoods_in("Bronx").count(), 0);
    }
}
