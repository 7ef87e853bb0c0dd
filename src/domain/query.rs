//! The structured trip request understood by the pricing backend.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::types::{CityName, PassengerCount, SizeDirection, TripHours, ZipCode};

/// Fully validated quote request.
///
/// Absent optional fields are left out of the JSON body entirely; the backend
/// treats a missing key and an explicit `null` the same way.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StructuredQuery {
    pub city: CityName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<ZipCode>,
    pub passengers: PassengerCount,
    pub hours: TripHours,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    pub is_prom_or_dance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_direction: Option<SizeDirection>,
}
