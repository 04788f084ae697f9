//! Tests for route registration and request-time match lookup

use http::Method;
use switchyard::{HandlerCategory, RouteEntry, RouteError, RouteTable};

use tracing_util::TestTracing;

#[test]
fn empty_table_has_no_entries() {
    let table: RouteTable<&str> = RouteTable::new();
    assert!(!table.has_any_entries());
    assert_eq!(table.entry_count(), 0);
    for category in HandlerCategory::ALL {
        assert!(table.find_matches(category, "/anything").is_empty());
    }
}

#[test]
fn registration_flips_has_any_entries() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/ping", "ping").unwrap();
    assert!(table.has_any_entries());
    assert_eq!(table.entry_count(), 1);
}

#[test]
fn duplicate_verb_registration_is_rejected() {
    let _tracing = TestTracing::init();
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/ping", "first").unwrap();

    let err = table
        .add(HandlerCategory::Get, "/ping", "second")
        .unwrap_err();
    assert_eq!(
        err,
        RouteError::DuplicateRoute {
            category: HandlerCategory::Get,
            raw_path: "/ping".to_string(),
        }
    );

    // the failed call left the table untouched
    assert_eq!(table.entry_count(), 1);
    let matches = table.find_matches(HandlerCategory::Get, "/ping");
    assert_eq!(*matches[0].handler(), "first");
}

#[test]
fn same_template_coexists_across_verbs() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/users", "list").unwrap();
    table.add(HandlerCategory::Post, "/users", "create").unwrap();
    assert_eq!(table.find_matches(HandlerCategory::Get, "/users").len(), 1);
    assert_eq!(table.find_matches(HandlerCategory::Post, "/users").len(), 1);
}

#[test]
fn filters_repeat_and_return_in_registration_order() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Before, "/ping", "one").unwrap();
    table.add(HandlerCategory::Before, "/ping", "two").unwrap();

    let matches = table.find_matches(HandlerCategory::Before, "/ping");
    assert_eq!(matches.len(), 2);
    assert_eq!(*matches[0].handler(), "one");
    assert_eq!(*matches[1].handler(), "two");
}

#[test]
fn overlapping_filters_all_match_in_order() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Before, "*", "global").unwrap();
    table
        .add(HandlerCategory::Before, "/users/*", "users_scope")
        .unwrap();
    table
        .add(HandlerCategory::Before, "/users/:id", "user_detail")
        .unwrap();

    let matches = table.find_matches(HandlerCategory::Before, "/users/42");
    let handlers: Vec<&str> = matches.iter().map(|m| *m.handler()).collect();
    assert_eq!(handlers, ["global", "users_scope", "user_detail"]);
}

#[test]
fn wildcard_all_matches_every_path() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "*", "catch_all").unwrap();
    assert_eq!(table.find_matches(HandlerCategory::Get, "").len(), 1);
    assert_eq!(table.find_matches(HandlerCategory::Get, "/").len(), 1);
    assert_eq!(table.find_matches(HandlerCategory::Get, "/a/b/c/d").len(), 1);
}

#[test]
fn static_route_fast_path_agrees_with_pattern() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/a/", "slash").unwrap();
    // literal equality misses here; the compiled pattern still matches
    assert_eq!(table.find_matches(HandlerCategory::Get, "/a").len(), 1);
    assert_eq!(table.find_matches(HandlerCategory::Get, "/a/").len(), 1);
}

#[test]
fn method_category_drives_lookup() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/users", "list").unwrap();

    let category = HandlerCategory::from_method(&Method::GET).expect("verb category");
    assert_eq!(table.find_matches(category, "/users").len(), 1);
    assert!(table.find_matches(HandlerCategory::Post, "/users").is_empty());
}

#[test]
fn entry_extracts_decoded_params() {
    let entry = RouteEntry::new(
        HandlerCategory::Get,
        "/users/:name/posts/:post",
        "show_post",
    );
    assert!(entry.matches("/users/John%20Doe/posts/42"));

    let params = entry.extract_params_map("/users/John%20Doe/posts/42");
    assert_eq!(params["name"], "John Doe");
    assert_eq!(params["post"], "42");
}

#[test]
fn sealed_table_serves_concurrent_readers() {
    let mut table = RouteTable::new();
    table.add(HandlerCategory::Get, "/users/:id", "show").unwrap();
    let table = table;

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..100 {
                    let path = format!("/users/{i}");
                    let matches = table.find_matches(HandlerCategory::Get, &path);
                    assert_eq!(matches.len(), 1);
                    assert_eq!(matches[0].extract_params_map(&path)["id"], i.to_string());
                }
            });
        }
    });
}
