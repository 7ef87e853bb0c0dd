use serde::{Deserialize, Serialize};

use crate::forms::coerce;
use crate::forms::query::QueryDraft;

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Form data posted by the single-page quote form.
pub struct QuoteForm {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub event_date: String,
    /// Checkbox; browsers omit the key when unchecked.
    #[serde(default)]
    pub is_prom_or_dance: Option<String>,
    #[serde(default)]
    pub size_direction: String,
    /// Optional head count used for the per-person figure.
    #[serde(default)]
    pub split_count: String,
}

impl Default for QuoteForm {
    fn default() -> Self {
        Self {
            city: "San Diego".to_string(),
            zip: String::new(),
            passengers: "18".to_string(),
            hours: "4".to_string(),
            event_date: String::new(),
            is_prom_or_dance: None,
            size_direction: String::new(),
            split_count: String::new(),
        }
    }
}

impl QuoteForm {
    pub fn is_prom(&self) -> bool {
        self.is_prom_or_dance.is_some()
    }

    pub fn split_count(&self) -> Option<f64> {
        coerce::optional_number(&self.split_count)
    }
}

impl From<&QuoteForm> for QueryDraft {
    fn from(form: &QuoteForm) -> Self {
        Self {
            city: coerce::text(&form.city),
            zip: coerce::optional_text(&form.zip),
            passengers: coerce::number(&form.passengers),
            hours: coerce::number(&form.hours),
            event_date: coerce::optional_text(&form.event_date),
            is_prom_or_dance: form.is_prom(),
            size_direction: coerce::optional_text(&form.size_direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optionals_are_absent_in_the_draft() {
        let form = QuoteForm {
            city: " Austin ".to_string(),
            zip: "  ".to_string(),
            passengers: "20".to_string(),
            hours: "5".to_string(),
            ..QuoteForm::default()
        };

        let draft = QueryDraft::from(&form);

        assert_eq!(draft.city, "Austin");
        assert_eq!(draft.zip, None);
        assert_eq!(draft.event_date, None);
        assert_eq!(draft.size_direction, None);
        assert_eq!(draft.passengers, 20.0);
        assert!(!draft.is_prom_or_dance);
    }

    #[test]
    fn checked_checkbox_sets_prom_flag() {
        let form = QuoteForm {
            is_prom_or_dance: Some("on".to_string()),
            ..QuoteForm::default()
        };

        assert!(QueryDraft::from(&form).is_prom_or_dance);
    }

    #[test]
    fn split_count_is_optional() {
        let mut form = QuoteForm::default();
        assert_eq!(form.split_count(), None);

        form.split_count = "9".to_string();
        assert_eq!(form.split_count(), Some(9.0));
    }
}
