use serde::{Deserialize, Serialize};

use crate::catalog::{Bucket, NumericKey, Record};
use crate::domain::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Villa,
    Penthouse,
    Townhouse,
    Estate,
}

impl PropertyType {
    pub const ALL: [Self; 5] = [
        Self::House,
        Self::Villa,
        Self::Penthouse,
        Self::Townhouse,
        Self::Estate,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Villa => "Villa",
            Self::Penthouse => "Penthouse",
            Self::Townhouse => "Townhouse",
            Self::Estate => "Estate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Pending,
    Sold,
}

impl ListingStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::Pending => "Pending",
            Self::Sold => "Sold",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,
    pub title: String,
    pub location: String,
    /// Asking price in whole US dollars.
    pub price: u64,
    pub beds: u32,
    pub baths: f32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub features: Vec<String>,
    pub description: String,
    /// Opaque image reference, resolved by whoever renders the listing.
    pub image: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyMetric {
    Price,
    Size,
    Beds,
    Baths,
}

impl NumericKey for PropertyMetric {
    const ALL: &'static [Self] = &[Self::Price, Self::Size, Self::Beds, Self::Baths];

    fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Size => "size",
            Self::Beds => "beds",
            Self::Baths => "baths",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Size => &["sqft"],
            Self::Beds => &["bedrooms"],
            Self::Baths => &["bathrooms"],
            Self::Price => &[],
        }
    }
}

/// Price buckets offered by the listings page.
pub const PRICE_BUCKETS: &[Bucket<PropertyMetric>] = &[
    Bucket {
        name: "under-1m",
        label: "Under $1M",
        key: PropertyMetric::Price,
        min: 0.0,
        max: 1_000_000.0,
    },
    Bucket {
        name: "1m-2m",
        label: "$1M - $2M",
        key: PropertyMetric::Price,
        min: 1_000_000.0,
        max: 2_000_000.0,
    },
    Bucket {
        name: "2m-3m",
        label: "$2M - $3M",
        key: PropertyMetric::Price,
        min: 2_000_000.0,
        max: 3_000_000.0,
    },
    Bucket {
        name: "over-3m",
        label: "Over $3M",
        key: PropertyMetric::Price,
        min: 3_000_000.0,
        max: f64::INFINITY,
    },
];

pub const FACET_TYPE: &str = "type";
pub const FACET_STATUS: &str = "status";

impl Record for Property {
    type Key = PropertyMetric;

    const FACETS: &'static [&'static str] = &[FACET_TYPE, FACET_STATUS];
    const BUCKETS: &'static [Bucket<PropertyMetric>] = PRICE_BUCKETS;

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    /// Listings are searched by name and location.
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        if facet.eq_ignore_ascii_case(FACET_TYPE) {
            Some(self.property_type.as_str())
        } else if facet.eq_ignore_ascii_case(FACET_STATUS) {
            Some(self.status.as_str())
        } else {
            None
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn numeric(&self, key: PropertyMetric) -> f64 {
        match key {
            PropertyMetric::Price => self.price as f64,
            PropertyMetric::Size => f64::from(self.sqft),
            PropertyMetric::Beds => f64::from(self.beds),
            PropertyMetric::Baths => f64::from(self.baths),
        }
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}
