//! Priced vehicle options returned by the pricing backend.

use serde::{Deserialize, Serialize};

/// One priced vehicle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuoteOption {
    pub name: String,
    pub capacity: u32,
    pub hours_billed: f64,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub total_all_in: Option<f64>,
    #[serde(default)]
    pub prom_applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_codes: Option<String>,
}

/// Options split by vehicle category.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupedOptions {
    pub party_buses: Vec<QuoteOption>,
    pub limousines: Vec<QuoteOption>,
    pub shuttle_buses: Vec<QuoteOption>,
}

/// How the backend arranged the options.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultLayout {
    /// One capacity-ordered list.
    Flat(Vec<QuoteOption>),
    /// Three independent lists; party buses act as the paging pivot.
    Grouped(GroupedOptions),
}

/// Options plus the backend's advisory note. Replaced wholesale on every
/// submission.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSet {
    pub layout: ResultLayout,
    pub note: String,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::flat(Vec::new(), "")
    }
}

impl ResultSet {
    pub fn flat(options: Vec<QuoteOption>, note: impl Into<String>) -> Self {
        Self {
            layout: ResultLayout::Flat(options),
            note: note.into(),
        }
    }

    pub fn grouped(groups: GroupedOptions, note: impl Into<String>) -> Self {
        Self {
            layout: ResultLayout::Grouped(groups),
            note: note.into(),
        }
    }

    /// The sequence directional paging walks through.
    pub fn pivot(&self) -> &[QuoteOption] {
        match &self.layout {
            ResultLayout::Flat(options) => options,
            ResultLayout::Grouped(groups) => &groups.party_buses,
        }
    }

    /// Number of options across every sequence.
    pub fn total(&self) -> usize {
        match &self.layout {
            ResultLayout::Flat(options) => options.len(),
            ResultLayout::Grouped(groups) => {
                groups.party_buses.len() + groups.limousines.len() + groups.shuttle_buses.len()
            }
        }
    }

    /// Every option, categories in display order.
    pub fn all_options(&self) -> impl Iterator<Item = &QuoteOption> {
        let empty: &[QuoteOption] = &[];
        let (first, second, third) = match &self.layout {
            ResultLayout::Flat(options) => (options.as_slice(), empty, empty),
            ResultLayout::Grouped(groups) => (
                groups.party_buses.as_slice(),
                groups.limousines.as_slice(),
                groups.shuttle_buses.as_slice(),
            ),
        };
        first.iter().chain(second).chain(third)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self.layout, ResultLayout::Grouped(_))
    }
}

/// Raw response body as sent by the backend.
///
/// The backend answers with either the flat or the grouped shape, and on an
/// internal failure with `{"error": "..."}` and a success status.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub options: Option<Vec<QuoteOption>>,
    #[serde(default)]
    pub party_buses: Option<Vec<QuoteOption>>,
    #[serde(default)]
    pub limousines: Option<Vec<QuoteOption>>,
    #[serde(default)]
    pub shuttle_buses: Option<Vec<QuoteOption>>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl QuoteResponse {
    /// Converts the wire body into a [`ResultSet`], surfacing the backend's
    /// in-band error message as `Err`.
    pub fn into_result_set(self) -> Result<ResultSet, String> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let note = self.note.unwrap_or_default();
        let grouped =
            self.party_buses.is_some() || self.limousines.is_some() || self.shuttle_buses.is_some();

        if grouped {
            let groups = GroupedOptions {
                party_buses: self.party_buses.unwrap_or_default(),
                limousines: self.limousines.unwrap_or_default(),
                shuttle_buses: self.shuttle_buses.unwrap_or_default(),
            };
            Ok(ResultSet::grouped(groups, note))
        } else {
            Ok(ResultSet::flat(self.options.unwrap_or_default(), note))
        }
    }
}
