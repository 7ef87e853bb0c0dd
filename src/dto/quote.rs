//! DTOs shaped for the quote form page.

use serde::Serialize;

use crate::domain::quote::{QuoteOption, ResultLayout};
use crate::forms::quote::QuoteForm;
use crate::pager::PagePosition;
use crate::state::{QuoteSearch, SearchPhase};

/// Renders a number the way the quote copy expects: whole values without a
/// decimal part, everything else as is.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn format_money(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "?".to_string())
}

/// Cost per rider, e.g. `$50.00/person`.
///
/// Splits by `split_count` when it is positive and by the passenger count
/// otherwise. Yields an empty string when there is nobody to split between or
/// no total to split.
pub fn per_person(total_all_in: Option<f64>, split_count: Option<f64>, passengers: u32) -> String {
    let split = match split_count {
        Some(count) if count > 0.0 => count,
        _ => f64::from(passengers),
    };

    match total_all_in {
        Some(total) if split > 0.0 => format!("${:.2}/person", total / split),
        _ => String::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSalience {
    /// Shown as a prominent alert above the results.
    Alert,
    /// Shown as a regular informational line.
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoteDisplay {
    pub text: String,
    pub salience: NoteSalience,
}

/// Notes mentioning the largest or smallest vehicle are alerts.
pub fn classify_note(note: &str) -> Option<NoteDisplay> {
    if note.is_empty() {
        return None;
    }
    let lowered = note.to_lowercase();
    let salience = if lowered.contains("largest") || lowered.contains("smallest") {
        NoteSalience::Alert
    } else {
        NoteSalience::Info
    };
    Some(NoteDisplay {
        text: note.to_string(),
        salience,
    })
}

/// One vehicle card.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionCard {
    pub name: String,
    pub capacity: u32,
    pub pricing: &'static str,
    pub hourly_rate: String,
    pub hours_billed: String,
    pub total: String,
    pub per_person: String,
    pub image_url: Option<String>,
    /// Plain-text quote for pasting into a message.
    pub copy_text: String,
}

impl OptionCard {
    pub fn new(option: &QuoteOption, split_count: Option<f64>, passengers: u32) -> Self {
        let mut card = Self {
            name: option.name.clone(),
            capacity: option.capacity,
            pricing: if option.prom_applied {
                "Prom pricing"
            } else {
                "Standard pricing"
            },
            hourly_rate: format_money(option.hourly_rate),
            hours_billed: format_number(option.hours_billed),
            total: format_money(option.total_all_in),
            per_person: per_person(option.total_all_in, split_count, passengers),
            image_url: option.image_url.clone(),
            copy_text: String::new(),
        };
        card.copy_text = card.summary_lines().join("\n");
        card
    }

    fn summary_lines(&self) -> Vec<String> {
        let mut total = format!("Total ${}", self.total);
        if !self.per_person.is_empty() {
            total.push_str(&format!(" · {}", self.per_person));
        }
        vec![
            format!("{} ({} pax)", self.name, self.capacity),
            self.pricing.to_string(),
            format!("Hourly ${} · Billed {}h", self.hourly_rate, self.hours_billed),
            total,
        ]
    }

    /// Prefixes the copy text with the trip the quote was made for.
    pub fn with_trip_header(mut self, header: &str) -> Self {
        self.copy_text = format!("{header}\n{}", self.copy_text);
        self
    }
}

/// First line of a copied quote, e.g. `Quote - Austin · 20 ppl · 5h`.
pub fn trip_header(form: &QuoteForm) -> String {
    let mut header = format!(
        "Quote - {} · {} ppl · {}h",
        form.city.trim(),
        form.passengers.trim(),
        form.hours.trim()
    );
    let event_date = form.event_date.trim();
    if !event_date.is_empty() {
        header.push_str(&format!(" · {event_date}"));
    }
    header
}

/// Data required to render the quote form page.
#[derive(Debug, Serialize)]
pub struct QuotePageData {
    pub form: QuoteForm,
    pub phase: SearchPhase,
    pub grouped: bool,
    pub note: Option<NoteDisplay>,
    /// Current window of the pivot sequence (party buses when grouped).
    pub window: Vec<OptionCard>,
    /// Unpaged categories, only filled for grouped results.
    pub limousines: Vec<OptionCard>,
    pub shuttle_buses: Vec<OptionCard>,
    pub position: PagePosition,
    pub no_results: bool,
}

impl From<&QuoteSearch> for QuotePageData {
    fn from(search: &QuoteSearch) -> Self {
        let form = search.form().clone();
        let split_count = form.split_count();
        let passengers = search.passengers();
        let pager = search.pager();
        let results = pager.result_set();
        let header = trip_header(&form);
        let cards = |options: &[QuoteOption]| {
            options
                .iter()
                .map(|option| OptionCard::new(option, split_count, passengers).with_trip_header(&header))
                .collect::<Vec<_>>()
        };

        let (limousines, shuttle_buses) = match &results.layout {
            ResultLayout::Grouped(groups) => (cards(&groups.limousines), cards(&groups.shuttle_buses)),
            ResultLayout::Flat(_) => (Vec::new(), Vec::new()),
        };

        Self {
            phase: search.phase(),
            grouped: results.is_grouped(),
            note: classify_note(&results.note),
            window: cards(pager.current_window()),
            limousines,
            shuttle_buses,
            position: pager.position(),
            no_results: search.phase() == SearchPhase::Displaying && results.is_empty(),
            form,
        }
    }
}
