use lionhomes::catalog::{Query, Record, SortKey, search};
use lionhomes::domain::RecordId;
use lionhomes::models::{ListingStatus, Property, PropertyMetric, PropertyType};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn catalog() -> impl Strategy<Value = Vec<Property>> {
    prop::collection::vec(
        (
            0_u64..8,
            500_u32..6_000,
            1_u32..7,
            any::<bool>(),
            "[a-c ]{0,8}",
            prop::sample::select(PropertyType::ALL.to_vec()),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price_step, sqft, beds, featured, title, property_type))| Property {
                id: RecordId::new(u32::try_from(i).unwrap() + 1),
                title,
                location: "Somewhere, CA".to_string(),
                // Coarse steps so equal prices are common.
                price: price_step * 500_000,
                beds,
                baths: 2.0,
                sqft,
                property_type,
                status: ListingStatus::ForSale,
                features: vec![],
                description: String::new(),
                image: String::new(),
                featured,
            })
            .collect()
    })
}

fn any_sort() -> impl Strategy<Value = Option<SortKey<PropertyMetric>>> {
    prop::sample::select(vec![
        None,
        SortKey::parse("price-asc"),
        SortKey::parse("price-desc"),
        SortKey::parse("size-asc"),
        SortKey::parse("size-desc"),
        SortKey::parse("beds-desc"),
    ])
}

fn ids(records: &[Property]) -> Vec<u32> {
    records.iter().map(|p| p.id.value()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn search_is_idempotent(records in catalog(), text in "[a-c]{0,2}", sort in any_sort()) {
        let query = Query::new().text(&text).sort(sort);
        prop_assert_eq!(ids(&search(&records, &query)), ids(&search(&records, &query)));
    }

    #[test]
    fn results_are_a_subset(records in catalog(), text in "[a-c]{0,2}", bucket in "(under-1m|1m-2m|2m-3m|over-3m|all)") {
        let query = Query::new()
            .text(&text)
            .range(Property::bucket(&bucket));
        let results = search(&records, &query);

        prop_assert!(results.len() <= records.len());
        let input = ids(&records);
        for id in ids(&results) {
            prop_assert!(input.contains(&id));
        }
    }

    #[test]
    fn empty_query_is_identity(records in catalog()) {
        prop_assert_eq!(ids(&search(&records, &Query::new())), ids(&records));
    }

    #[test]
    fn empty_query_with_sort_is_a_permutation(records in catalog(), sort in any_sort()) {
        let mut sorted = ids(&search(&records, &Query::new().sort(sort)));
        sorted.sort_unstable();
        prop_assert_eq!(sorted, ids(&records));
    }

    #[test]
    fn price_desc_is_non_increasing(records in catalog()) {
        let results = search(&records, &Query::new().sort(SortKey::parse("price-desc")));
        for pair in results.windows(2) {
            prop_assert!(pair[0].price >= pair[1].price);
        }
    }

    #[test]
    fn sort_is_stable(records in catalog()) {
        // Ids follow input order, so ties must keep ascending ids.
        let results = search(&records, &Query::new().sort(SortKey::parse("price-asc")));
        for pair in results.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id.value() < pair[1].id.value());
            }
        }
    }

    #[test]
    fn range_bounds_are_half_open(records in catalog(), bucket in "(under-1m|1m-2m|2m-3m|over-3m)") {
        let range = Property::bucket(&bucket).unwrap();
        let results = search(&records, &Query::new().range(Some(range)));

        for property in &results {
            #[allow(clippy::cast_precision_loss)]
            let price = property.price as f64;
            prop_assert!(range.min <= price && price < range.max);
        }

        let expected = records
            .iter()
            .filter(|p| range.contains(p.numeric(PropertyMetric::Price)))
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn text_match_ignores_case(records in catalog(), text in "[a-c]{1,2}") {
        let lower = search(&records, &Query::new().text(&text));
        let upper = search(&records, &Query::new().text(&text.to_uppercase()));
        prop_assert_eq!(ids(&lower), ids(&upper));
    }

    #[test]
    fn unknown_type_matches_nothing(records in catalog()) {
        let query = Query::<PropertyMetric>::new().facet("type", "castle");
        prop_assert!(search(&records, &query).is_empty());
    }
}
