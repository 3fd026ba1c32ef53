//! HTTP-level tests for IP-based device location.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_core::locate::IpLocator;
use skycast_core::{Locator, WeatherError};

#[tokio::test]
async fn successful_lookup_yields_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "lat": -33.93,
            "lon": 18.42
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri());
    let (lat, lon) = locator
        .current_position()
        .await
        .expect("lookup must succeed");

    assert_eq!(lat, -33.93);
    assert_eq!(lon, 18.42);
}

#[tokio::test]
async fn failed_lookup_maps_to_location_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    let locator = IpLocator::with_base_url(server.uri());
    let err = locator.current_position().await.unwrap_err();

    assert_eq!(err, WeatherError::LocationDenied);
}

#[tokio::test]
async fn transport_failure_maps_to_location_denied() {
    let server = MockServer::start().await;
    let uri = server.uri();
    // Shut the server down so the request has nowhere to go.
    drop(server);

    let locator = IpLocator::with_base_url(uri);
    let err = locator.current_position().await.unwrap_err();

    assert_eq!(err, WeatherError::LocationDenied);
}
