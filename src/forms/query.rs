//! Validation stage between answer collection and submission.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::domain::query::StructuredQuery;
use crate::domain::types::{CityName, PassengerCount, SizeDirection, TripHours, ZipCode};
use crate::forms::FormError;

/// Format accepted for `event_date`.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Coerced but unvalidated trip request.
///
/// Produced by the conversational collector and by the single quote form.
/// Numeric fields may hold `NaN` and `city` may be empty; converting into a
/// [`StructuredQuery`] reports every such problem at once.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct QueryDraft {
    #[validate(length(min = 1, message = "City is required."))]
    pub city: String,
    pub zip: Option<String>,
    #[validate(custom(function = "validate_passengers"))]
    pub passengers: f64,
    #[validate(custom(function = "validate_hours"))]
    pub hours: f64,
    #[validate(custom(function = "validate_event_date"))]
    pub event_date: Option<String>,
    pub is_prom_or_dance: bool,
    #[validate(custom(function = "validate_size_direction"))]
    pub size_direction: Option<String>,
}

impl Default for QueryDraft {
    fn default() -> Self {
        Self {
            city: String::new(),
            zip: None,
            passengers: f64::NAN,
            hours: f64::NAN,
            event_date: None,
            is_prom_or_dance: false,
            size_direction: None,
        }
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_passengers(value: f64) -> Result<(), ValidationError> {
    PassengerCount::from_f64(value)
        .map(|_| ())
        .map_err(|_| invalid("passengers", "Passengers must be a whole number above zero."))
}

fn validate_hours(value: f64) -> Result<(), ValidationError> {
    TripHours::new(value)
        .map(|_| ())
        .map_err(|_| invalid("hours", "Hours must be a number of zero or more."))
}

fn validate_event_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| invalid("event_date", "Date must look like YYYY-MM-DD."))
}

fn validate_size_direction(value: &str) -> Result<(), ValidationError> {
    SizeDirection::parse_preference(value)
        .map(|_| ())
        .map_err(|_| invalid("size_direction", "Size preference must be larger or smaller."))
}

impl TryFrom<QueryDraft> for StructuredQuery {
    type Error = FormError;

    fn try_from(draft: QueryDraft) -> Result<Self, Self::Error> {
        draft.validate()?;

        let event_date = draft
            .event_date
            .as_deref()
            .map(|value| NaiveDate::parse_from_str(value, EVENT_DATE_FORMAT))
            .transpose()
            .map_err(|_| FormError::InvalidEventDate)?;

        let size_direction = match draft.size_direction.as_deref() {
            Some(value) => SizeDirection::parse_preference(value)?,
            None => None,
        };

        Ok(Self {
            city: CityName::new(draft.city)?,
            zip: draft.zip.map(ZipCode::new).transpose()?,
            passengers: PassengerCount::from_f64(draft.passengers)?,
            hours: TripHours::new(draft.hours)?,
            event_date,
            is_prom_or_dance: draft.is_prom_or_dance,
            size_direction,
        })
    }
}
