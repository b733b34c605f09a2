//! Fallback tier tests for the address resolver.
//!
//! Every expectation carries an exact call count, so these tests also verify
//! which tiers were attempted and how often each was retried.

mod helpers;

use httptest::{all_of, cycle, matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use helpers::{street_candidate, test_resolver, US};
use real_address::error_handling::AttemptFailure;
use real_address::{AddressQuery, CountryNormalizer, ResolveError, Tier};

#[tokio::test]
async fn test_chinese_country_name_with_city() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "New York")))),
            request::query(url_decoded(contains(("countrycodes", "us")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "1",
            "Broadway",
            "New York",
            "New York",
            "10004",
            "美国"
        )]))),
    );

    let country = CountryNormalizer::new().normalize("美国").unwrap();
    assert_eq!(country.code, "US");
    assert_eq!(country.name, "United States");

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("美国").with_city("New York");
    let resolution = resolver.resolve(&query, &country).await.unwrap();

    assert_eq!(resolution.tier, Tier::FullPrecision);
    assert_eq!(resolution.address.country_display_name, "United States");
    assert_eq!(resolution.address.city.as_deref(), Some("New York"));
    assert_eq!(stats.tier_hits(Tier::FullPrecision), 1);
}

#[tokio::test]
async fn test_wrong_zipcode_falls_back_to_city() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("postalcode", "00000")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Springfield")))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "300",
            "S 2nd Street",
            "Springfield",
            "Illinois",
            "62701",
            "United States"
        )]))),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US")
        .with_city("Springfield")
        .with_zipcode("00000");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::DropZipcode);
    assert_eq!(resolution.address.zipcode.as_deref(), Some("62701"));
    assert_eq!(stats.attempt_failures(AttemptFailure::NotFound), 1);
}

#[tokio::test]
async fn test_third_tier_data_is_returned_verbatim() {
    let server = Server::run();
    // Tier 1: every hint
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("postalcode")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    // Tier 2: city + state
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("state")))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    // Tier 3: city only
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Springfield")))),
            request::query(url_decoded(not(contains(key("state"))))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "36",
            "Court Street",
            "Springfield",
            "Massachusetts",
            "01103",
            "United States"
        )]))),
    );

    let (resolver, _) = test_resolver(&server);
    let query = AddressQuery::new("US")
        .with_city("Springfield")
        .with_zipcode("99999")
        .with_state("Illinois");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::DropState);
    let address = resolution.address;
    assert_eq!(address.street_address, "36 Court Street");
    assert_eq!(address.state_or_region.as_deref(), Some("Massachusetts"));
    assert_eq!(address.zipcode.as_deref(), Some("01103"));
}

#[tokio::test]
async fn test_wrong_city_falls_back_to_zipcode() {
    let server = Server::run();
    // Tier 1: city + zipcode
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Springfeld")))),
            request::query(url_decoded(contains(("postalcode", "62701")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    // Tier 2: city only (tier 3 would repeat it and is skipped)
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Springfeld")))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    // Tier 4: zipcode only
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("postalcode", "62701")))),
            request::query(url_decoded(not(contains(key("city"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "300",
            "S 2nd Street",
            "Springfield",
            "Illinois",
            "62701",
            "United States"
        )]))),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US")
        .with_city("Springfeld")
        .with_zipcode("62701");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::DropCity);
    let address = resolution.address;
    assert_eq!(address.city.as_deref(), Some("Springfield"));
    assert_eq!(address.street_address, "300 S 2nd Street");
    assert_eq!(stats.tier_hits(Tier::DropCity), 1);
    assert_eq!(stats.attempt_failures(AttemptFailure::NotFound), 2);
}

#[tokio::test]
async fn test_fatal_failure_is_not_retried_and_advances() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("postalcode")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([]))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("state")))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(status_code(400)),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("city")))),
            request::query(url_decoded(not(contains(key("state"))))),
            request::query(url_decoded(not(contains(key("postalcode"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "1",
            "Main Street",
            "Portland",
            "Oregon",
            "97201",
            "United States"
        )]))),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US")
        .with_city("Portland")
        .with_zipcode("04101")
        .with_state("Maine");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::DropState);
    assert_eq!(stats.attempt_failures(AttemptFailure::Fatal), 1);
    assert_eq!(stats.attempt_failures(AttemptFailure::Transient), 0);
}

#[tokio::test]
async fn test_all_tiers_not_found() {
    let server = Server::run();
    // FullPrecision (state only) and CountryOnly
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .times(2)
            .respond_with(json_encoded(json!([]))),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US").with_state("Atlantis");
    let result = resolver.resolve(&query, &US).await;

    assert_eq!(
        result,
        Err(ResolveError::NoAddressFound {
            country: "US".into()
        })
    );
    assert_eq!(stats.attempt_failures(AttemptFailure::NotFound), 2);
}

#[tokio::test]
async fn test_transient_failure_is_retried_within_tier() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Chicago")))),
        ])
        .times(2)
        .respond_with(cycle![
            status_code(503),
            json_encoded(json!([street_candidate(
                "233",
                "S Wacker Drive",
                "Chicago",
                "Illinois",
                "60606",
                "United States"
            )])),
        ]),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US").with_city("Chicago");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::FullPrecision);
    assert_eq!(resolution.address.street_address, "233 S Wacker Drive");
    assert_eq!(stats.attempt_failures(AttemptFailure::Transient), 1);
}

#[tokio::test]
async fn test_exhausted_retries_advance_to_next_tier() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("city", "Denver")))),
        ])
        .times(3)
        .respond_with(status_code(429)),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(key("q")))),
            request::query(url_decoded(contains(("limit", "10")))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "1",
            "Market Street",
            "San Francisco",
            "California",
            "94103",
            "United States"
        )]))),
    );

    let (resolver, stats) = test_resolver(&server);
    let query = AddressQuery::new("US").with_city("Denver");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::CountryOnly);
    assert_eq!(stats.attempt_failures(AttemptFailure::Transient), 3);
    assert_eq!(stats.tier_hits(Tier::CountryOnly), 1);
}

#[tokio::test]
async fn test_country_only_query() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("countrycodes", "jp")))),
            request::query(url_decoded(contains(key("q")))),
            request::query(url_decoded(not(contains(key("amenity"))))),
        ])
        .times(1)
        .respond_with(json_encoded(json!([street_candidate(
            "1",
            "Chuo-dori",
            "Tokyo",
            "Tokyo",
            "104-0061",
            "Japan"
        )]))),
    );

    let japan = CountryNormalizer::new().normalize("日本").unwrap();
    let (resolver, _) = test_resolver(&server);
    let resolution = resolver
        .resolve(&AddressQuery::new("日本"), &japan)
        .await
        .unwrap();

    assert_eq!(resolution.tier, Tier::CountryOnly);
    assert_eq!(resolution.address.country_display_name, "Japan");
}

#[tokio::test]
async fn test_poi_only_record_is_refined_by_reverse_lookup() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .times(1)
            .respond_with(json_encoded(json!([{
                "lat": "41.8789",
                "lon": "-87.6359",
                "name": "Willis Tower",
                "display_name": "Willis Tower, Chicago, Illinois, United States",
                "address": {
                    "tourism": "Willis Tower",
                    "city": "Chicago",
                    "state": "Illinois"
                }
            }]))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/reverse"))
            .times(1)
            .respond_with(json_encoded(street_candidate(
                "233",
                "S Wacker Drive",
                "Chicago",
                "Illinois",
                "60606",
                "United States"
            ))),
    );

    let (resolver, _) = test_resolver(&server);
    let query = AddressQuery::new("US").with_city("Chicago");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.address.street_address, "233 S Wacker Drive");
    assert_eq!(resolution.address.zipcode.as_deref(), Some("60606"));
}

#[tokio::test]
async fn test_failed_refinement_keeps_original_record() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .times(1)
            .respond_with(json_encoded(json!([{
                "lat": "41.8789",
                "lon": "-87.6359",
                "name": "Willis Tower",
                "display_name": "Willis Tower, Chicago, Illinois, United States",
                "address": {
                    "tourism": "Willis Tower",
                    "city": "Chicago",
                    "state": "Illinois"
                }
            }]))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/reverse"))
            .times(1)
            .respond_with(status_code(500)),
    );

    let (resolver, _) = test_resolver(&server);
    let query = AddressQuery::new("US").with_city("Chicago");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::FullPrecision);
    assert_eq!(resolution.address.street_address, "Willis Tower");
}

#[tokio::test]
async fn test_refinement_across_the_border_keeps_original_record() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/search"))
            .times(1)
            .respond_with(json_encoded(json!([{
                "lat": "49.0024",
                "lon": "-122.7566",
                "name": "Peace Arch",
                "display_name": "Peace Arch, Blaine, Washington, United States",
                "address": {
                    "tourism": "Peace Arch",
                    "town": "Blaine",
                    "state": "Washington",
                    "country_code": "us"
                }
            }]))),
    );
    let mut across = street_candidate(
        "16010",
        "Highway 99",
        "Surrey",
        "British Columbia",
        "V3Z 9R6",
        "Canada",
    );
    across["address"]["country_code"] = json!("ca");
    server.expect(
        Expectation::matching(request::method_path("GET", "/reverse"))
            .times(1)
            .respond_with(json_encoded(across)),
    );

    let (resolver, _) = test_resolver(&server);
    let query = AddressQuery::new("US").with_city("Blaine");
    let resolution = resolver.resolve(&query, &US).await.unwrap();

    assert_eq!(resolution.tier, Tier::FullPrecision);
    let address = resolution.address;
    assert_eq!(address.street_address, "Peace Arch");
    assert_eq!(address.city.as_deref(), Some("Blaine"));
    assert_eq!(address.country_display_name, "United States");
}
