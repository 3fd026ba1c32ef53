//! HTTP-level tests for the paired current+forecast fetch, against a mock
//! OpenWeather server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skycast_core::model::Place;
use skycast_core::{OpenWeatherClient, Units, WeatherError};

fn current_body() -> serde_json::Value {
    json!({
        "name": "Cape Town",
        "coord": { "lat": -33.93, "lon": 18.42 },
        "main": { "temp": 17.5, "humidity": 72 },
        "wind": { "speed": 4.1 },
        "weather": [ { "description": "scattered clouds", "icon": "03d" } ]
    })
}

fn forecast_body() -> serde_json::Value {
    json!({
        "list": [
            {
                "dt": 1_700_010_000i64,
                "main": { "temp": 15.0 },
                "weather": [ { "description": "light rain", "icon": "10d" } ]
            },
            {
                "dt": 1_700_020_800i64,
                "main": { "temp": 16.5 },
                "weather": [ { "description": "overcast clouds", "icon": "04d" } ]
            }
        ]
    })
}

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::with_base_url("TEST_KEY".into(), server.uri()).expect("client builds")
}

#[tokio::test]
async fn city_fetch_returns_both_payloads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Cape Town"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Cape Town"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pair = client
        .fetch_pair(&Place::City("Cape Town".into()), Units::Metric)
        .await
        .expect("paired fetch must succeed");

    assert_eq!(pair.current.name, "Cape Town");
    assert_eq!(pair.current.main.humidity, 72);
    assert_eq!(pair.forecast.list.len(), 2);
    assert_eq!(pair.forecast.list[0].dt, 1_700_010_000);
}

#[tokio::test]
async fn coords_fetch_uses_lat_lon_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "-33.93"))
        .and(query_param("lon", "18.42"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "-33.93"))
        .and(query_param("lon", "18.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pair = client
        .fetch_pair(&Place::Coords { lat: -33.93, lon: 18.42 }, Units::Imperial)
        .await
        .expect("paired fetch must succeed");

    assert_eq!(pair.current.coord.lat, -33.93);
}

#[tokio::test]
async fn forecast_failure_fails_the_whole_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;

    // City exists for /weather but /forecast 404s: the pair is atomic, so
    // the successful half must not leak out.
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_pair(&Place::City("Nowhere".into()), Units::Metric)
        .await
        .unwrap_err();

    assert_eq!(err, WeatherError::NetworkOrNotFound);
}

#[tokio::test]
async fn malformed_body_fails_the_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_pair(&Place::City("Cape Town".into()), Units::Metric)
        .await
        .unwrap_err();

    assert_eq!(err, WeatherError::NetworkOrNotFound);
}
