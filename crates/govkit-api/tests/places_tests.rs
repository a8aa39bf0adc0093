//! Integration tests for the places client using HTTP stubbing.

use govkit_api::error::ApiError;
use govkit_api::places::PlacesClient;
use govkit_test_doubles::places::{PlaceFixture, PlacesApiStubs};
use govkit_test_doubles::MockHttpServer;

const LATITUDE: f64 = 52.132_758_435_208_9;
const LONGITUDE: f64 = -0.470_281_307_467_414_7;

fn town_hall() -> PlaceFixture {
    PlaceFixture::new("Town Hall")
        .with_address1("Cauldwell Street")
        .with_address2("Bedford")
        .with_postcode("MK42 9AP")
        .with_url("http://www.example.test/registration.aspx")
}

#[tokio::test]
async fn searches_for_places() {
    let server = MockHttpServer::start().await;
    PlacesApiStubs::new(&server)
        .has_places(
            "register-office",
            52.0,
            0.0,
            vec![town_hall().with_location(LATITUDE, LONGITUDE).build()],
        )
        .await;

    let client = PlacesClient::new(server.url());
    let places = client
        .places("register-office", 52.0, 0.0)
        .await
        .expect("should succeed");

    assert_eq!(places.len(), 1);
    let place = &places[0];
    assert_eq!(place.name.as_deref(), Some("Town Hall"));
    assert_eq!(place.address, "Cauldwell Street, Bedford");
    assert_eq!(place.postcode.as_deref(), Some("MK42 9AP"));
    assert_eq!(place.latitude, Some(LATITUDE));
    assert_eq!(place.longitude, Some(LONGITUDE));
}

#[tokio::test]
async fn missing_second_address_line_is_dropped() {
    let server = MockHttpServer::start().await;
    PlacesApiStubs::new(&server)
        .has_places(
            "register-office",
            52.0,
            0.0,
            vec![PlaceFixture::new("Town Hall")
                .with_address1("Cauldwell Street")
                .with_location(LATITUDE, LONGITUDE)
                .build()],
        )
        .await;

    let client = PlacesClient::new(server.url());
    let places = client
        .places("register-office", 52.0, 0.0)
        .await
        .expect("should succeed");

    assert_eq!(places[0].address, "Cauldwell Street");
}

#[tokio::test]
async fn tolerates_every_location_shape() {
    let server = MockHttpServer::start().await;
    PlacesApiStubs::new(&server)
        .has_places(
            "register-office",
            52.0,
            0.0,
            vec![
                town_hall().with_location(LATITUDE, LONGITUDE).build(),
                town_hall().with_named_location(LATITUDE, LONGITUDE).build(),
                town_hall().with_empty_location().build(),
                town_hall().build(),
            ],
        )
        .await;

    let client = PlacesClient::new(server.url());
    let places = client
        .places("register-office", 52.0, 0.0)
        .await
        .expect("should succeed");

    assert_eq!(places.len(), 4);
    assert_eq!(places[0].latitude, Some(LATITUDE));
    assert_eq!(places[1].latitude, Some(LATITUDE));
    assert_eq!(places[1].longitude, Some(LONGITUDE));
    assert_eq!(places[2].latitude, None);
    assert_eq!(places[3].latitude, None);
    assert_eq!(places[3].longitude, None);
}

#[tokio::test]
async fn no_places_yields_an_empty_list() {
    let server = MockHttpServer::start().await;
    PlacesApiStubs::new(&server)
        .has_no_places("register-office")
        .await;

    let client = PlacesClient::new(server.url());
    let places = client
        .places("register-office", 52.0, 0.0)
        .await
        .expect("should succeed");

    assert!(places.is_empty());
}

#[tokio::test]
async fn server_errors_are_reported() {
    let server = MockHttpServer::start().await;
    PlacesApiStubs::new(&server)
        .returns_error("register-office", 500)
        .await;

    let client = PlacesClient::new(server.url());
    let result = client.places("register-office", 52.0, 0.0).await;

    assert!(matches!(
        result,
        Err(ApiError::ApiError { status: 500, .. })
    ));
}
