// SPDX-License-Identifier: PMPL-1.0-or-later

//! Integration tests for locale path switching against the built-in table

use bilingual_routes::routing::{alternates, switch_locale_path_builtin as switch};
use bilingual_routes::slugs::{to_target_slug, SlugMap};
use bilingual_routes::types::Partition;
use bilingual_routes::Locale;

#[test]
fn test_category_route_translation() {
    assert_eq!(
        switch("/en/category/shops-retail", "en", "he"),
        "/he/category/חנויות-וקמעונאות"
    );
}

#[test]
fn test_subcategory_route_translation() {
    assert_eq!(
        switch("/en/category/food-drink/restaurants", "en", "he"),
        "/he/category/אוכל-ושתייה/מסעדות"
    );
}

#[test]
fn test_query_and_fragment_preserved() {
    assert_eq!(
        switch("/en/category/shops-retail?sort=rating#top", "en", "he"),
        "/he/category/חנויות-וקמעונאות?sort=rating#top"
    );
}

#[test]
fn test_business_id_passthrough() {
    assert_eq!(switch("/en/business/abc123", "en", "he"), "/he/business/abc123");
}

#[test]
fn test_named_route_translation() {
    assert_eq!(switch("/en/add-business", "en", "he"), "/he/הוסף-עסק");
}

#[test]
fn test_no_locale_prefix_fallback() {
    assert_eq!(switch("/random/path", "en", "he"), "/he/random/path");
}

#[test]
fn test_toggle_back_and_forth_restores_path() {
    let paths = [
        "/en/category/food-drink/restaurants?page=2",
        "/en/category/kids-family",
        "/en/business/pizza-napoli#reviews",
        "/en/business/17",
        "/en/unknown/route",
        "/en",
    ];
    for path in paths {
        let hebrew = switch(path, "en", "he");
        assert_eq!(switch(&hebrew, "he", "en"), path, "via {}", hebrew);
    }
}

#[test]
fn test_query_is_never_translated() {
    // Slug-like query values and fragments stay English.
    assert_eq!(
        switch("/en/explore?category=food-drink#shops-retail", "en", "he"),
        "/he/עיון?category=food-drink#shops-retail"
    );
}

#[test]
fn test_custom_table_is_used() {
    let map = SlugMap::new()
        .with_partition(Partition::Categories, [("food-drink", "מזון")])
        .with_partition(Partition::Routes, [("deals", "הנחות")]);
    assert_eq!(
        bilingual_routes::switch_locale_path(&map, "/en/category/food-drink", "en", "he"),
        "/he/category/מזון"
    );
    assert_eq!(
        bilingual_routes::switch_locale_path(&map, "/en/deals", "en", "he"),
        "/he/הנחות"
    );
    // Built-in entries are not consulted.
    assert_eq!(
        bilingual_routes::switch_locale_path(&map, "/en/explore", "en", "he"),
        "/he/explore"
    );
}

#[test]
fn test_every_builtin_category_and_subcategory_switches() {
    let map = SlugMap::builtin();
    for (category, hebrew_category) in map.partition(Partition::Categories).iter() {
        for (sub, hebrew_sub) in map.partition(Partition::Subcategories).iter() {
            let path = format!("/en/category/{}/{}", category, sub);
            assert_eq!(
                switch(&path, "en", "he"),
                format!("/he/category/{}/{}", hebrew_category, hebrew_sub)
            );
        }
    }
}

#[test]
fn test_resolver_matches_switcher_for_routes() {
    let map = SlugMap::builtin();
    for (route, _) in map.partition(Partition::Routes).iter() {
        let expected = format!("/he/{}", to_target_slug(map, Partition::Routes, route, "en", "he"));
        assert_eq!(switch(&format!("/en/{}", route), "en", "he"), expected);
    }
}

#[test]
fn test_alternates_for_hebrew_page() {
    let links = alternates(SlugMap::builtin(), "/he/category/רכב/מוסכים", Locale::He);
    assert_eq!(links.len(), 2);
    // The current-locale entry is the resolved URL path, so Hebrew is percent-encoded.
    assert_eq!(
        links[0],
        (
            Locale::He,
            "/he/category/%D7%A8%D7%9B%D7%91/%D7%9E%D7%95%D7%A1%D7%9B%D7%99%D7%9D".to_string()
        )
    );
    assert_eq!(links[1], (Locale::En, "/en/category/automotive/garages".to_string()));
}

#[test]
fn test_path_resolved_with_url_rules() {
    assert_eq!(switch("/en/./add-business", "en", "he"), "/he/הוסף-עסק");
    assert_eq!(
        switch("/en/category/../business/cafe-hagefen", "en", "he"),
        "/he/business/קפה-הגפן"
    );
    assert_eq!(switch("\\en\\add-business", "en", "he"), "/he/הוסף-עסק");
    assert_eq!(switch(" /en/add-business", "en", "he"), "/he/הוסף-עסק");
}

#[test]
fn test_hebrew_query_kept_byte_for_byte() {
    let switched = switch("/he/category/אוכל-ושתייה?q=פיצה טעימה#מפה", "he", "en");
    assert_eq!(switched, "/en/category/food-drink?q=פיצה טעימה#מפה");
}
