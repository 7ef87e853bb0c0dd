//! Per-visitor search and conversation state.
//!
//! Each search or conversation moves through [`SearchPhase`]. While a
//! submission is in flight the phase is `Submitting` and every further
//! submission or paging request is refused. Responses carry the
//! [`SubmissionTicket`] they were issued for; a response whose ticket is no
//! longer current (the visitor restarted in the meantime) is dropped.

use serde::Serialize;

use crate::dialogue::{DialogueCollector, DialogueReply};
use crate::domain::quote::ResultSet;
use crate::forms::query::QueryDraft;
use crate::forms::quote::QuoteForm;
use crate::pager::ResultPager;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    AwaitingAnswer,
    Submitting,
    Displaying,
}

/// Identifies one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Returned when a request arrives while a submission is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Busy;

/// Phase bookkeeping shared by the form search and the conversation.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    phase: SearchPhase,
    ticket: u64,
}

impl SubmissionGate {
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SearchPhase::Submitting
    }

    /// Enters `Submitting`, refusing if a submission is already pending.
    pub fn begin(&mut self) -> Result<SubmissionTicket, Busy> {
        if self.is_submitting() {
            return Err(Busy);
        }
        self.ticket += 1;
        self.phase = SearchPhase::Submitting;
        Ok(SubmissionTicket(self.ticket))
    }

    /// Leaves `Submitting` for `next` if `ticket` is still the pending one.
    pub fn settle(&mut self, ticket: SubmissionTicket, next: SearchPhase) -> bool {
        if !self.is_submitting() || ticket.0 != self.ticket {
            return false;
        }
        self.phase = next;
        true
    }

    /// Forces `phase`, invalidating any outstanding ticket.
    pub fn reset(&mut self, phase: SearchPhase) {
        self.ticket += 1;
        self.phase = phase;
    }
}

/// State behind the single quote form.
#[derive(Debug, Default)]
pub struct QuoteSearch {
    gate: SubmissionGate,
    pager: ResultPager,
    form: QuoteForm,
    passengers: u32,
}

impl QuoteSearch {
    pub fn phase(&self) -> SearchPhase {
        self.gate.phase()
    }

    pub fn pager(&self) -> &ResultPager {
        &self.pager
    }

    /// Last submitted form values, echoed back into the page.
    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    /// Passenger count of the last successful query.
    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    /// Starts a submission: remembers the form and clears old results.
    pub fn begin(&mut self, form: QuoteForm) -> Result<SubmissionTicket, Busy> {
        let ticket = self.gate.begin()?;
        self.form = form;
        self.pager.clear();
        Ok(ticket)
    }

    /// Loads the results for `ticket`; stale tickets are ignored.
    pub fn finish(&mut self, ticket: SubmissionTicket, passengers: u32, results: ResultSet) -> bool {
        if !self.gate.settle(ticket, SearchPhase::Displaying) {
            return false;
        }
        self.passengers = passengers;
        self.pager.load_result_set(results);
        true
    }

    /// Ends a failed submission, leaving the cleared results in place.
    pub fn fail(&mut self, ticket: SubmissionTicket) -> bool {
        self.gate.settle(ticket, SearchPhase::Idle)
    }

    pub fn page_larger(&mut self) -> Result<bool, Busy> {
        if self.gate.is_submitting() {
            return Err(Busy);
        }
        Ok(self.pager.page_larger())
    }

    pub fn page_smaller(&mut self) -> Result<bool, Busy> {
        if self.gate.is_submitting() {
            return Err(Busy);
        }
        Ok(self.pager.page_smaller())
    }
}

/// State behind the conversational wizard.
#[derive(Debug, Default)]
pub struct QuoteConversation {
    gate: SubmissionGate,
    collector: DialogueCollector,
}

impl QuoteConversation {
    pub fn phase(&self) -> SearchPhase {
        self.gate.phase()
    }

    pub fn collector(&self) -> &DialogueCollector {
        &self.collector
    }

    /// Begins a fresh conversation, abandoning any pending submission.
    pub fn restart(&mut self) {
        self.gate.reset(SearchPhase::AwaitingAnswer);
        self.collector.start();
    }

    /// Opens the conversation on first visit.
    pub fn ensure_started(&mut self) {
        if self.gate.phase() == SearchPhase::Idle {
            self.restart();
        }
    }

    /// Feeds one answer. Returns the finished draft together with the ticket
    /// of the submission it opens once the last step is answered.
    pub fn answer(&mut self, raw: &str) -> Result<Option<(SubmissionTicket, QueryDraft)>, Busy> {
        if self.gate.is_submitting() {
            return Err(Busy);
        }
        self.ensure_started();

        match self.collector.submit_answer(raw) {
            DialogueReply::Complete(draft) => Ok(Some((self.gate.begin()?, draft))),
            DialogueReply::Prompt(_) | DialogueReply::Closed => Ok(None),
        }
    }

    /// Posts the outcome of `ticket` to the transcript; stale tickets are
    /// ignored.
    pub fn conclude(&mut self, ticket: SubmissionTicket, message: impl Into<String>) -> bool {
        if !self.gate.settle(ticket, SearchPhase::Displaying) {
            return false;
        }
        self.collector.say(message);
        true
    }
}
