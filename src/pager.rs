//! Directional paging through a capacity-ordered result set.

use serde::Serialize;

use crate::domain::quote::{QuoteOption, ResultSet};

/// Options shown per page.
pub const WINDOW_SIZE: usize = 3;

/// Holds the active [`ResultSet`] and the page index into its pivot sequence.
///
/// The index only ever changes through [`ResultPager::page_larger`] and
/// [`ResultPager::page_smaller`], and goes back to zero whenever a result set
/// is loaded, so it never points past the end of the data it windows.
#[derive(Clone, Debug, Default)]
pub struct ResultPager {
    result_set: ResultSet,
    page: usize,
}

impl ResultPager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held result set and rewinds to the first page.
    pub fn load_result_set(&mut self, result_set: ResultSet) {
        self.result_set = result_set;
        self.page = 0;
    }

    /// Drops the current results, e.g. when a new submission starts.
    pub fn clear(&mut self) {
        self.load_result_set(ResultSet::default());
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn can_page_larger(&self) -> bool {
        self.result_set.pivot().len() > (self.page + 1) * WINDOW_SIZE
    }

    pub fn can_page_smaller(&self) -> bool {
        self.page > 0
    }

    /// Moves to the next window of larger vehicles. Returns `false` and stays
    /// put when nothing lies beyond the current window.
    pub fn page_larger(&mut self) -> bool {
        if !self.can_page_larger() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves back one window; a no-op on the first page.
    pub fn page_smaller(&mut self) -> bool {
        if !self.can_page_smaller() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// The options on the current page, in pivot order.
    pub fn current_window(&self) -> &[QuoteOption] {
        let pivot = self.result_set.pivot();
        let start = (self.page * WINDOW_SIZE).min(pivot.len());
        let end = (start + WINDOW_SIZE).min(pivot.len());
        &pivot[start..end]
    }

    pub fn position(&self) -> PagePosition {
        let total = self.result_set.pivot().len();
        let window = self.current_window().len();
        let first = if window == 0 {
            0
        } else {
            self.page * WINDOW_SIZE + 1
        };
        PagePosition {
            page: self.page,
            first,
            last: if window == 0 { 0 } else { first + window - 1 },
            total,
            can_page_larger: self.can_page_larger(),
            can_page_smaller: self.can_page_smaller(),
        }
    }
}

/// Where the current window sits, 1-based for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PagePosition {
    pub page: usize,
    pub first: usize,
    pub last: usize,
    pub total: usize,
    pub can_page_larger: bool,
    pub can_page_smaller: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::GroupedOptions;

    fn option(name: &str, capacity: u32) -> QuoteOption {
        QuoteOption {
            name: name.to_string(),
            capacity,
            hours_billed: 4.0,
            hourly_rate: Some(100.0),
            total_all_in: Some(400.0),
            prom_applied: false,
            image_url: None,
            zip_codes: None,
        }
    }

    fn options(count: usize) -> Vec<QuoteOption> {
        (0..count)
            .map(|i| option(&format!("Bus {i}"), 10 + i as u32))
            .collect()
    }

    fn names(window: &[QuoteOption]) -> Vec<&str> {
        window.iter().map(|o| o.name.as_str()).collect()
    }

    #[test]
    fn seven_options_page_in_threes() {
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::flat(options(7), ""));

        assert_eq!(names(pager.current_window()), ["Bus 0", "Bus 1", "Bus 2"]);
        assert!(pager.page_larger());
        assert_eq!(names(pager.current_window()), ["Bus 3", "Bus 4", "Bus 5"]);
        assert!(pager.page_larger());
        assert_eq!(names(pager.current_window()), ["Bus 6"]);
        assert!(!pager.page_larger());
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn larger_is_a_no_op_on_the_last_window() {
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::flat(options(6), ""));

        assert!(pager.page_larger());
        assert!(!pager.page_larger());
        assert_eq!(pager.page_index(), 1);
    }

    #[test]
    fn smaller_is_a_no_op_on_the_first_window() {
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::flat(options(5), ""));

        assert!(!pager.page_smaller());
        assert_eq!(pager.page_index(), 0);

        pager.page_larger();
        assert!(pager.page_smaller());
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn loading_always_rewinds() {
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::flat(options(7), ""));
        pager.page_larger();

        pager.load_result_set(ResultSet::flat(options(7), ""));
        assert_eq!(pager.page_index(), 0);

        pager.page_larger();
        pager.page_larger();
        pager.load_result_set(ResultSet::flat(Vec::new(), "nothing"));
        assert_eq!(pager.page_index(), 0);
        assert!(pager.current_window().is_empty());
    }

    #[test]
    fn empty_set_cannot_page() {
        let mut pager = ResultPager::new();

        assert!(!pager.page_larger());
        assert!(!pager.page_smaller());
        assert!(pager.current_window().is_empty());
        assert_eq!(pager.position().first, 0);
        assert_eq!(pager.position().last, 0);
    }

    #[test]
    fn grouped_sets_page_party_buses_only() {
        let groups = GroupedOptions {
            party_buses: options(4),
            limousines: options(5),
            shuttle_buses: Vec::new(),
        };
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::grouped(groups, ""));

        assert_eq!(pager.current_window().len(), 3);
        assert!(pager.page_larger());
        assert_eq!(names(pager.current_window()), ["Bus 3"]);
        assert!(!pager.page_larger());
    }

    #[test]
    fn position_is_one_based() {
        let mut pager = ResultPager::new();
        pager.load_result_set(ResultSet::flat(options(5), ""));
        pager.page_larger();

        let position = pager.position();

        assert_eq!(position.first, 4);
        assert_eq!(position.last, 5);
        assert_eq!(position.total, 5);
        assert!(position.can_page_smaller);
        assert!(!position.can_page_larger);
    }
}
