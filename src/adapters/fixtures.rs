use crate::domain::model::{
    Billing, Contact, Listing, ListingKind, Page, ProductCategory, ProductDetails, PropertyDetails,
    PropertyType, RestaurantDetails, RideOption, ServiceCategory, ServiceDetails,
};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 房地產頁的地區選單（不含 "All Locations"）
pub const PROPERTY_LOCATIONS: [&str; 6] = [
    "Nairobi CBD",
    "Westlands",
    "Karen",
    "Kilimani",
    "Lavington",
    "Runda",
];

/// 靜態 fixture 目錄
#[derive(Debug, Clone, Copy)]
pub struct FixtureSource {
    page: Page,
}

impl FixtureSource {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

#[async_trait]
impl CatalogSource for FixtureSource {
    fn page(&self) -> Page {
        self.page
    }

    fn describe(&self) -> String {
        format!("{} fixtures", self.page)
    }

    async fn load(&self) -> Result<Vec<Listing>> {
        Ok(listings(self.page))
    }
}

pub fn listings(page: Page) -> Vec<Listing> {
    match page {
        Page::Marketplace => products(),
        Page::Properties => properties(),
        Page::Food => restaurants(),
        Page::Errands => errands(),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: i64,
    title: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f32,
    reviews: u32,
    seller: &str,
    category: ProductCategory,
    featured: bool,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        price,
        location: seller.to_string(),
        features: Vec::new(),
        featured,
        kind: ListingKind::Product(ProductDetails {
            category,
            rating: Some(rating),
            reviews: Some(reviews),
            original_price,
            stock: None,
            description: None,
            image_url: None,
        }),
    }
}

fn products() -> Vec<Listing> {
    vec![
        product(
            1,
            "Wireless Bluetooth Headphones",
            2500.0,
            Some(3000.0),
            4.5,
            128,
            "TechStore Kenya",
            ProductCategory::Electronics,
            true,
        ),
        product(
            2,
            "Premium Cotton T-Shirt",
            800.0,
            None,
            4.3,
            67,
            "Fashion Hub",
            ProductCategory::Clothing,
            false,
        ),
        product(
            3,
            "Smart Home Security Camera",
            4500.0,
            None,
            4.7,
            89,
            "SecureHome Ltd",
            ProductCategory::Electronics,
            true,
        ),
    ]
}

fn contact(phone: &str, email: &str, whatsapp: &str) -> Contact {
    Contact {
        phone: phone.to_string(),
        email: email.to_string(),
        whatsapp: whatsapp.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn property(
    id: i64,
    title: &str,
    property_type: PropertyType,
    location: &str,
    price: f64,
    billing: Billing,
    rooms: (u32, u32),
    area: &str,
    features: &[&str],
    contact: Contact,
    description: &str,
    featured: bool,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        price,
        location: location.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        featured,
        kind: ListingKind::Property(PropertyDetails {
            property_type,
            bedrooms: rooms.0,
            bathrooms: rooms.1,
            area: area.to_string(),
            billing,
            description: description.to_string(),
            contact,
        }),
    }
}

fn properties() -> Vec<Listing> {
    vec![
        property(
            1,
            "Modern 3-Bedroom Apartment in Kilimani",
            PropertyType::Apartment,
            "Kilimani, Nairobi",
            85_000.0,
            Billing::Monthly,
            (3, 2),
            "120 sqm",
            &["Parking", "Security", "Gym", "Swimming Pool"],
            contact("+254 700 123 456", "agent@example.com", "+254700123456"),
            "Beautiful modern apartment with stunning city views, located in the heart of Kilimani.",
            true,
        ),
        property(
            2,
            "4-Bedroom House in Karen",
            PropertyType::House,
            "Karen, Nairobi",
            150_000.0,
            Billing::Monthly,
            (4, 3),
            "300 sqm",
            &["Garden", "Parking", "Security", "Servant Quarter"],
            contact("+254 700 987 654", "karen@properties.com", "+254700987654"),
            "Spacious family home in exclusive Karen neighborhood with large garden.",
            false,
        ),
        property(
            3,
            "Commercial Office Space - Westlands",
            PropertyType::Office,
            "Westlands, Nairobi",
            120_000.0,
            Billing::Monthly,
            (0, 2),
            "200 sqm",
            &["Elevator", "Parking", "Security", "Air Conditioning"],
            contact("+254 700 555 123", "westlands@commercial.com", "+254700555123"),
            "Prime office space in Westlands commercial district, perfect for businesses.",
            false,
        ),
        property(
            4,
            "1-Acre Plot in Kiambu",
            PropertyType::Land,
            "Kiambu County",
            8_500_000.0,
            Billing::OneOff,
            (0, 0),
            "1 acre",
            &["Title Deed", "Water", "Electricity", "Access Road"],
            contact("+254 700 777 888", "land@plots.com", "+254700777888"),
            "Prime residential plot with all amenities, ready for development.",
            true,
        ),
    ]
}

fn restaurant(
    id: i64,
    name: &str,
    cuisine: &str,
    rating: f32,
    delivery_time: &str,
    delivery_fee: f64,
    featured: bool,
) -> Listing {
    Listing {
        id,
        title: name.to_string(),
        price: delivery_fee,
        location: String::new(),
        features: Vec::new(),
        featured,
        kind: ListingKind::Restaurant(RestaurantDetails {
            cuisine: cuisine.to_string(),
            rating,
            delivery_time: delivery_time.to_string(),
        }),
    }
}

fn restaurants() -> Vec<Listing> {
    vec![
        restaurant(1, "Mama's Kitchen", "Kenyan", 4.8, "25-35 min", 100.0, true),
        restaurant(2, "Pizza Palace", "Italian", 4.6, "30-40 min", 150.0, false),
        restaurant(3, "Spice Garden", "Indian", 4.7, "20-30 min", 120.0, true),
    ]
}

fn errand(
    id: i64,
    title: &str,
    description: &str,
    category: ServiceCategory,
    price: f64,
    turnaround: &str,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        price,
        location: String::new(),
        features: Vec::new(),
        featured: false,
        kind: ListingKind::Service(ServiceDetails {
            category,
            description: Some(description.to_string()),
            turnaround: Some(turnaround.to_string()),
            image_url: None,
        }),
    }
}

fn errands() -> Vec<Listing> {
    vec![
        errand(
            1,
            "Document Delivery",
            "Fast and secure document pickup and delivery",
            ServiceCategory::Delivery,
            200.0,
            "Same day",
        ),
        errand(
            2,
            "Shopping Assistance",
            "Personal shopping for groceries and essentials",
            ServiceCategory::Other,
            300.0,
            "1-2 hours",
        ),
        errand(
            3,
            "Package Pickup",
            "Collect and deliver packages from any location",
            ServiceCategory::Delivery,
            250.0,
            "Within 3 hours",
        ),
    ]
}

fn ride(
    id: i64,
    name: &str,
    description: &str,
    capacity: &str,
    fare: (f64, f64),
    eta: &str,
    features: &[&str],
) -> RideOption {
    RideOption {
        id,
        name: name.to_string(),
        description: description.to_string(),
        capacity: capacity.to_string(),
        fare_min: fare.0,
        fare_max: fare.1,
        eta: eta.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

/// 叫車頁的車型
pub fn ride_options() -> Vec<RideOption> {
    vec![
        ride(
            1,
            "Economy",
            "Affordable rides for everyday travel",
            "1-4 passengers",
            (150.0, 300.0),
            "3-5 min",
            &["Standard car", "AC available", "Safe & reliable"],
        ),
        ride(
            2,
            "Comfort",
            "More space and premium vehicles",
            "1-4 passengers",
            (250.0, 450.0),
            "3-7 min",
            &["Premium vehicles", "Extra legroom", "Professional drivers"],
        ),
        ride(
            3,
            "SUV",
            "Larger vehicles for groups",
            "1-6 passengers",
            (350.0, 600.0),
            "5-10 min",
            &["Spacious interior", "Group travel", "Luggage space"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique_per_page() {
        for page in Page::ALL {
            let catalog = listings(page);
            let ids: HashSet<i64> = catalog.iter().map(|l| l.id).collect();
            assert_eq!(ids.len(), catalog.len(), "duplicate id on {}", page);
        }
    }

    #[test]
    fn test_fixture_categories_are_page_options() {
        for page in Page::ALL {
            let options = page.category_options();
            for listing in listings(page) {
                assert!(
                    options.contains(&listing.category_label()),
                    "{} is not a {} category",
                    listing.category_label(),
                    page
                );
            }
        }
    }

    #[test]
    fn test_ride_fare_label() {
        let rides = ride_options();
        assert_eq!(rides[0].fare_label(), "KES 150-300");
    }

    #[tokio::test]
    async fn test_fixture_source_loads_page() {
        let source = FixtureSource::new(Page::Food);
        let restaurants = source.load().await.unwrap();
        assert_eq!(restaurants.len(), 3);
        assert_eq!(source.describe(), "food fixtures");
    }
}
