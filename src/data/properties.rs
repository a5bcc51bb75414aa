use crate::domain::RecordId;
use crate::models::property::{ListingStatus, Property, PropertyType};

#[allow(clippy::too_many_arguments)]
fn property(
    id: u32,
    title: &str,
    location: &str,
    price: u64,
    (beds, baths, sqft): (u32, f32, u32),
    property_type: PropertyType,
    features: &[&str],
    description: &str,
    image: &str,
    featured: bool,
) -> Property {
    Property {
        id: RecordId::new(id),
        title: title.to_string(),
        location: location.to_string(),
        price,
        beds,
        baths,
        sqft,
        property_type,
        status: ListingStatus::ForSale,
        features: features.iter().map(|f| (*f).to_string()).collect(),
        description: description.to_string(),
        image: image.to_string(),
        featured,
    }
}

/// The agency's current listings, in the order the listings page declares them.
#[must_use]
pub fn properties() -> Vec<Property> {
    vec![
        property(
            1,
            "Modern Villa Estate",
            "Beverly Hills, CA",
            1_250_000,
            (4, 3.0, 3_200),
            PropertyType::Villa,
            &["Pool", "Garden", "Garage"],
            "Stunning modern villa with panoramic city views, designer finishes, and resort-style amenities.",
            "property-1.jpg",
            true,
        ),
        property(
            2,
            "Waterfront Luxury Home",
            "Malibu, CA",
            2_100_000,
            (5, 4.0, 4_500),
            PropertyType::House,
            &["Waterfront", "Pool", "Private Beach"],
            "Exquisite waterfront property with private beach access and breathtaking ocean views.",
            "property-2.jpg",
            true,
        ),
        property(
            3,
            "Downtown Penthouse",
            "Manhattan, NY",
            3_500_000,
            (3, 3.0, 2_800),
            PropertyType::Penthouse,
            &["City Views", "Luxury Finishes", "Rooftop"],
            "Spectacular penthouse with floor-to-ceiling windows and panoramic city skyline views.",
            "property-3.jpg",
            true,
        ),
        property(
            4,
            "Contemporary Family Home",
            "Pasadena, CA",
            1_850_000,
            (4, 3.5, 3_800),
            PropertyType::House,
            &["Garden", "Office", "Wine Cellar"],
            "Beautiful family home in prestigious neighborhood with modern amenities and classic charm.",
            "property-1.jpg",
            false,
        ),
        property(
            5,
            "Luxury Townhouse",
            "San Francisco, CA",
            1_750_000,
            (3, 2.5, 2_400),
            PropertyType::Townhouse,
            &["Garage", "Balcony", "Smart Home"],
            "Sophisticated townhouse featuring smart home technology and designer interiors.",
            "property-2.jpg",
            false,
        ),
        property(
            6,
            "Hillside Modern Estate",
            "Hollywood Hills, CA",
            2_850_000,
            (5, 4.5, 5_200),
            PropertyType::Estate,
            &["Pool", "View", "Guest House"],
            "Architectural masterpiece with infinity pool and guest house overlooking the city.",
            "property-3.jpg",
            false,
        ),
    ]
}
