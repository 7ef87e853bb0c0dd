//! Form definitions and the coercion/validation helpers shared by the quote
//! form and the conversational wizard.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod bot;
pub mod coerce;
pub mod query;
pub mod quote;

#[derive(Debug, Error)]
/// Errors that can occur when turning collected answers into a query.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("invalid event date")]
    InvalidEventDate,
}

impl FormError {
    /// Human readable `field: message` lines, sorted by field name.
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => {
                let mut messages = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |error| {
                            let message = error
                                .message
                                .as_ref()
                                .map(|message| message.to_string())
                                .unwrap_or_else(|| error.code.to_string());
                            format!("{field}: {message}")
                        })
                    })
                    .collect::<Vec<_>>();
                messages.sort();
                messages
            }
            other => vec![other.to_string()],
        }
    }
}
