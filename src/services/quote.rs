use uuid::Uuid;

use crate::backend::QuoteSubmitter;
use crate::domain::query::StructuredQuery;
use crate::dto::quote::QuotePageData;
use crate::forms::query::QueryDraft;
use crate::forms::quote::QuoteForm;
use crate::services::{PendingSubmission, ServiceError, ServiceResult};
use crate::state::QuoteSearch;
use crate::store::VisitorStore;

/// Loads the form, results window and paging controls for a visitor.
///
/// A visitor without stored state sees the blank form; nothing is stored for
/// them until they submit.
pub fn load_quote_page(store: &VisitorStore<QuoteSearch>, visitor: Uuid) -> QuotePageData {
    store
        .with_existing(visitor, |search| QuotePageData::from(&*search))
        .unwrap_or_else(|| QuotePageData::from(&QuoteSearch::default()))
}

/// Validates the posted form, sends it to the pricing backend and stores the
/// results for the visitor.
///
/// The previous results are cleared as soon as the submission starts, so a
/// failed submission leaves nothing on screen. A second submission while one
/// is pending is refused with [`ServiceError::Busy`]. If the returned future
/// is dropped early the search falls back to `Idle`.
pub async fn submit_quote<S>(
    submitter: &S,
    store: &VisitorStore<QuoteSearch>,
    visitor: Uuid,
    form: QuoteForm,
) -> ServiceResult<()>
where
    S: QuoteSubmitter + ?Sized,
{
    let draft = QueryDraft::from(&form);
    let ticket = store.with(visitor, |search| search.begin(form))?;
    let pending = PendingSubmission::new(
        store,
        visitor,
        ticket,
        |search: &mut QuoteSearch, ticket| {
            search.fail(ticket);
        },
    );

    let query = match StructuredQuery::try_from(draft) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Rejected quote form for {visitor}: {err}");
            pending.settle(QuoteSearch::fail);
            return Err(ServiceError::Form(format!(
                "Please check the form. {}",
                err.field_messages().join("; ")
            )));
        }
    };

    match submitter.submit(&query).await {
        Ok(results) => {
            log::info!(
                "Received {} options for {} ({} passengers)",
                results.total(),
                query.city,
                query.passengers.get()
            );
            let passengers = query.passengers.get();
            let loaded = pending.settle(|search, ticket| search.finish(ticket, passengers, results));
            if loaded != Some(true) {
                log::info!("Discarding superseded quote response for {visitor}");
            }
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to fetch quote for {}: {err}", query.city);
            pending.settle(QuoteSearch::fail);
            Err(err.into())
        }
    }
}

/// Shows the next window of larger vehicles. `Ok(false)` means there was
/// nothing further to show.
pub fn page_larger(store: &VisitorStore<QuoteSearch>, visitor: Uuid) -> ServiceResult<bool> {
    let paged = store.with_existing(visitor, QuoteSearch::page_larger);
    Ok(paged.transpose()?.unwrap_or(false))
}

pub fn page_smaller(store: &VisitorStore<QuoteSearch>, visitor: Uuid) -> ServiceResult<bool> {
    let paged = store.with_existing(visitor, QuoteSearch::page_smaller);
    Ok(paged.transpose()?.unwrap_or(false))
}
