use actix_web::http::StatusCode;
use chrono::NaiveDate;
use quote_bot::backend::errors::SubmitError;
use quote_bot::backend::{BackendClient, QuoteSubmitter};
use quote_bot::domain::query::StructuredQuery;
use quote_bot::domain::types::{CityName, PassengerCount, SizeDirection, TripHours, ZipCode};
use serde_json::{Value, json};

mod common;

fn austin_query() -> StructuredQuery {
    StructuredQuery {
        city: CityName::new("Austin").unwrap(),
        zip: None,
        passengers: PassengerCount::new(20).unwrap(),
        hours: TripHours::new(5.0).unwrap(),
        event_date: None,
        is_prom_or_dance: false,
        size_direction: None,
    }
}

fn client(url: String) -> BackendClient {
    BackendClient::new(url, None).unwrap()
}

#[actix_web::test]
async fn flat_response_is_decoded() {
    let url = common::spawn_backend(
        StatusCode::OK,
        r#"{"options": [
            {"name": "Party Bus 20", "capacity": 20, "hours_billed": 5, "hourly_rate": 150,
             "total_all_in": 750, "prom_applied": false, "zip_codes": "78701"},
            {"name": "Party Bus 30", "capacity": 30, "hours_billed": 5, "hourly_rate": null,
             "total_all_in": null, "prom_applied": false}
        ], "note": ""}"#,
    );

    let results = client(url).submit(&austin_query()).await.unwrap();

    assert!(!results.is_grouped());
    assert_eq!(results.total(), 2);
    assert_eq!(results.pivot()[0].total_all_in, Some(750.0));
    assert_eq!(results.pivot()[1].hourly_rate, None);
}

#[actix_web::test]
async fn grouped_response_is_decoded() {
    let url = common::spawn_backend(
        StatusCode::OK,
        r#"{"party_buses": [
                {"name": "Party Bus 24", "capacity": 24, "hours_billed": 4, "prom_applied": true}
            ],
            "limousines": [],
            "shuttle_buses": [],
            "note": "Smallest available vehicle shown"}"#,
    );

    let results = client(url).submit(&austin_query()).await.unwrap();

    assert!(results.is_grouped());
    assert_eq!(results.pivot().len(), 1);
    assert_eq!(results.note, "Smallest available vehicle shown");
}

#[actix_web::test]
async fn non_success_status_is_an_error() {
    let url = common::spawn_backend(StatusCode::SERVICE_UNAVAILABLE, r#"{"detail": "down"}"#);

    let result = client(url).submit(&austin_query()).await;

    assert!(matches!(result, Err(SubmitError::Status(503))));
}

#[actix_web::test]
async fn unparseable_body_is_a_decode_error() {
    let url = common::spawn_backend(StatusCode::OK, "<html>oops</html>");

    let result = client(url).submit(&austin_query()).await;

    assert!(matches!(result, Err(SubmitError::Decode(_))));
}

#[actix_web::test]
async fn in_band_error_is_a_backend_error() {
    let url = common::spawn_backend(StatusCode::OK, r#"{"error": "vehicles.csv missing"}"#);

    let result = client(url).submit(&austin_query()).await;

    match result {
        Err(SubmitError::Backend(message)) => assert_eq!(message, "vehicles.csv missing"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let result = client(common::unreachable_backend())
        .submit(&austin_query())
        .await;

    assert!(matches!(result, Err(SubmitError::Transport(_))));
}

#[actix_web::test]
async fn request_body_omits_absent_fields() {
    let url = common::spawn_echo_backend();

    let results = client(url.clone()).submit(&austin_query()).await.unwrap();
    let sent: Value = serde_json::from_str(&results.note).unwrap();
    assert_eq!(
        sent,
        json!({"city": "Austin", "passengers": 20, "hours": 5.0, "is_prom_or_dance": false})
    );

    let query = StructuredQuery {
        zip: Some(ZipCode::new("78701").unwrap()),
        event_date: NaiveDate::from_ymd_opt(2025, 4, 12),
        is_prom_or_dance: true,
        size_direction: Some(SizeDirection::Larger),
        ..austin_query()
    };
    let results = client(url).submit(&query).await.unwrap();
    let sent: Value = serde_json::from_str(&results.note).unwrap();
    assert_eq!(sent["zip"], "78701");
    assert_eq!(sent["event_date"], "2025-04-12");
    assert_eq!(sent["is_prom_or_dance"], true);
    assert_eq!(sent["size_direction"], "larger");
}
