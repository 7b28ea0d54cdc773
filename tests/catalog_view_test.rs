use quicklink_catalog::adapters::fixtures;
use quicklink_catalog::core::contact::ContactChannel;
use quicklink_catalog::core::filter::{Choice, PriceBracket, SortBy};
use quicklink_catalog::core::routes::Route;
use quicklink_catalog::domain::model::Page;
use quicklink_catalog::{CatalogEngine, CatalogStore, FilterState, FixtureSource, SelectionState};

fn two_property_catalog() -> CatalogStore {
    let listings = fixtures::listings(Page::Properties)
        .into_iter()
        .filter(|p| p.title.contains("Kilimani") || p.title.contains("Karen"))
        .collect();
    CatalogStore::new(Page::Properties, listings)
}

#[test]
fn test_house_filter_returns_karen_house_only() {
    let store = two_property_catalog();
    let filters = FilterState {
        search: String::new(),
        category: Choice::parse("House"),
        location: Choice::parse("All Locations"),
        ..FilterState::default()
    };

    let view = store.project(&filters);

    assert_eq!(view.len(), 1);
    assert_eq!(view.results[0].title, "4-Bedroom House in Karen");
    assert_eq!(view.heading, "House");
}

#[test]
fn test_lowercase_search_finds_kilimani_apartment() {
    let store = two_property_catalog();
    let filters = FilterState::new().with_search("kilimani");

    let view = store.project(&filters);

    assert_eq!(view.len(), 1);
    assert_eq!(view.results[0].title, "Modern 3-Bedroom Apartment in Kilimani");
}

#[test]
fn test_every_search_substring_of_title_keeps_listing() {
    let store = CatalogStore::new(Page::Properties, fixtures::listings(Page::Properties));

    for listing in store.listings() {
        let title = listing.title.to_uppercase();
        // 取標題中間的一段，轉成大寫後仍應命中
        let needle: String = title.chars().skip(2).take(6).collect();
        let view = store.project(&FilterState::new().with_search(needle.clone()));
        assert!(
            view.ids().contains(&listing.id),
            "'{}' should match '{}'",
            needle,
            listing.title
        );
    }
}

#[test]
fn test_view_is_ordered_subset_of_catalog() {
    let store = CatalogStore::new(Page::Properties, fixtures::listings(Page::Properties));
    let catalog_ids: Vec<i64> = store.listings().iter().map(|l| l.id).collect();

    let filters = FilterState::new().with_search("nairobi");
    let view = store.project(&filters);
    let ids = view.ids();

    assert_eq!(ids, vec![1, 2, 3]);
    let mut positions = ids
        .iter()
        .map(|id| catalog_ids.iter().position(|c| c == id).unwrap());
    let mut last = positions.next().unwrap();
    for pos in positions {
        assert!(pos > last);
        last = pos;
    }
}

#[test]
fn test_no_results_then_clear_filters() {
    let store = CatalogStore::new(Page::Marketplace, fixtures::listings(Page::Marketplace));
    let mut filters = FilterState::new()
        .with_search("camera")
        .with_category("clothing")
        .with_price(PriceBracket::From50KTo100K)
        .with_sort(SortBy::Rating);

    let view = store.project(&filters);
    assert!(view.is_empty());
    assert_eq!(view.total, 3);

    filters.clear();
    let view = store.project(&filters);
    assert_eq!(view.ids(), vec![1, 2, 3]);
    assert_eq!(view.heading, "All Products");
}

#[test]
fn test_favorites_survive_filter_changes() {
    let store = CatalogStore::new(Page::Properties, fixtures::listings(Page::Properties));
    let mut favorites = SelectionState::new();
    favorites.toggle(4);

    // 收藏狀態與篩選結果無關
    let view = store.project(&FilterState::new().with_category("House"));
    assert!(!view.ids().contains(&4));
    assert!(favorites.contains(4));

    let view = store.project(&FilterState::default());
    assert!(view.ids().contains(&4));
}

#[test]
fn test_property_contact_links() {
    let store = CatalogStore::new(Page::Properties, fixtures::listings(Page::Properties));
    let karen = store.get(2).unwrap();
    let contact = karen.contact().unwrap();

    assert_eq!(contact.link(ContactChannel::Phone), "tel:+254 700 987 654");
    assert_eq!(
        contact.link(ContactChannel::WhatsApp),
        "https://wa.me/254700987654"
    );
}

#[tokio::test]
async fn test_route_to_catalog_page() {
    let page = Route::from_path("/food").page().unwrap();
    let engine = CatalogEngine::new(FixtureSource::new(page));

    let store = engine.load().await;
    let view = store.project(&FilterState::new().with_category("Italian"));

    assert_eq!(view.len(), 1);
    assert_eq!(view.results[0].title, "Pizza Palace");
    assert_eq!(view.heading, "Italian");
}
