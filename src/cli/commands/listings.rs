//! Listing command handlers

use crate::domain::RecordId;
use crate::models::Property;
use crate::models::format::{format_usd, group_thousands};
use crate::services::ListingQuery;
use crate::state::SharedState;

fn print_summary(property: &Property) {
    let marker = if property.featured { "★" } else { "•" };
    println!(
        "{} {} - {} [{}]",
        marker,
        property.title,
        format_usd(property.price),
        property.status.as_str()
    );
    println!(
        "  ID: {} | {} | {} | {} bd / {} ba / {} sqft",
        property.id,
        property.location,
        property.property_type.as_str(),
        property.beds,
        property.baths,
        group_thousands(u64::from(property.sqft))
    );
}

pub fn cmd_listings(state: &SharedState, query: &ListingQuery) -> anyhow::Result<()> {
    let results = state.listings.search(query);

    if results.properties.is_empty() {
        println!("No properties found matching your criteria.");
        println!("Try adjusting your search filters.");
        return Ok(());
    }

    let sort = results
        .sort
        .map_or_else(|| "store order".to_string(), |s| s.to_string());
    println!("Properties ({} found, sorted by {})", results.total, sort);
    println!("{:-<70}", "");

    for property in &results.properties {
        print_summary(property);
    }

    Ok(())
}

pub fn cmd_listing(state: &SharedState, id: u32) -> anyhow::Result<()> {
    let property = state.listings.get(RecordId::new(id))?;

    print_summary(&property);
    println!();
    println!("{}", property.description);
    if !property.features.is_empty() {
        println!();
        println!("Features: {}", property.features.join(", "));
    }
    println!("Image: {}", property.image);

    Ok(())
}
