//! Request-level operations shared by the HTML routes.

use thiserror::Error;
use uuid::Uuid;

use crate::backend::errors::SubmitError;
use crate::state::{Busy, SubmissionTicket};
use crate::store::VisitorStore;

pub mod bot;
pub mod quote;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("A quote request is already in progress.")]
    Busy,

    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Submission(#[from] SubmitError),
}

impl From<Busy> for ServiceError {
    fn from(_: Busy) -> Self {
        ServiceError::Busy
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// A submission that has entered `Submitting` for one visitor.
///
/// If the request future is dropped before [`PendingSubmission::settle`]
/// runs, the ticket is settled through the `abandon` callback instead, so the
/// visitor is never left waiting on a response that will not arrive.
struct PendingSubmission<'a, T> {
    store: &'a VisitorStore<T>,
    visitor: Uuid,
    ticket: SubmissionTicket,
    abandon: Option<fn(&mut T, SubmissionTicket)>,
}

impl<'a, T> PendingSubmission<'a, T> {
    fn new(
        store: &'a VisitorStore<T>,
        visitor: Uuid,
        ticket: SubmissionTicket,
        abandon: fn(&mut T, SubmissionTicket),
    ) -> Self {
        Self {
            store,
            visitor,
            ticket,
            abandon: Some(abandon),
        }
    }

    /// Settles the ticket through `f`. `None` means the visitor's entry
    /// expired while the request was pending.
    fn settle<R>(mut self, f: impl FnOnce(&mut T, SubmissionTicket) -> R) -> Option<R> {
        self.abandon = None;
        let ticket = self.ticket;
        self.store.with_existing(self.visitor, |entry| f(entry, ticket))
    }
}

impl<T> Drop for PendingSubmission<'_, T> {
    fn drop(&mut self) {
        if let Some(abandon) = self.abandon.take() {
            log::warn!("Quote request for {} was dropped before it settled", self.visitor);
            let ticket = self.ticket;
            self.store
                .with_existing(self.visitor, |entry| abandon(entry, ticket));
        }
    }
}
