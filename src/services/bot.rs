use uuid::Uuid;

use crate::backend::QuoteSubmitter;
use crate::domain::query::StructuredQuery;
use crate::domain::quote::{QuoteOption, ResultSet};
use crate::dto::bot::BotPageData;
use crate::dto::quote::format_number;
use crate::forms::bot::AnswerForm;
use crate::services::{PendingSubmission, ServiceResult};
use crate::state::QuoteConversation;
use crate::store::VisitorStore;

pub const NO_OPTIONS: &str = "No options found.";
pub const QUOTE_FAILED: &str = "Sorry, there was an error getting your quote.";
const ZIP_PREVIEW_CHARS: usize = 20;

/// Loads the transcript, opening the conversation on first visit.
///
/// A visitor without stored state is shown the opening prompt; the
/// conversation is only stored once they answer.
pub fn load_bot_page(store: &VisitorStore<QuoteConversation>, visitor: Uuid) -> BotPageData {
    let open = |conversation: &mut QuoteConversation| {
        conversation.ensure_started();
        BotPageData::from(&*conversation)
    };
    store
        .with_existing(visitor, open)
        .unwrap_or_else(|| open(&mut QuoteConversation::default()))
}

/// Throws away the transcript and any pending submission.
pub fn restart(store: &VisitorStore<QuoteConversation>, visitor: Uuid) {
    store.with(visitor, QuoteConversation::restart);
}

/// Records one answer. When it completes the conversation the collected
/// answers are validated and submitted, and the outcome is appended to the
/// transcript. A submission whose future is dropped is reported as failed.
pub async fn answer<S>(
    submitter: &S,
    store: &VisitorStore<QuoteConversation>,
    visitor: Uuid,
    form: AnswerForm,
) -> ServiceResult<()>
where
    S: QuoteSubmitter + ?Sized,
{
    let completed = store.with(visitor, |conversation| conversation.answer(&form.answer))?;
    let Some((ticket, draft)) = completed else {
        return Ok(());
    };
    let pending = PendingSubmission::new(
        store,
        visitor,
        ticket,
        |conversation: &mut QuoteConversation, ticket| {
            conversation.conclude(ticket, QUOTE_FAILED);
        },
    );

    let message = match StructuredQuery::try_from(draft) {
        Ok(query) => match submitter.submit(&query).await {
            Ok(results) => describe_results(&results),
            Err(err) => {
                log::error!("Failed to fetch quote for {}: {err}", query.city);
                QUOTE_FAILED.to_string()
            }
        },
        Err(err) => {
            log::warn!("Rejected wizard answers for {visitor}: {err}");
            format!(
                "Some answers need another look: {}. Start over to try again.",
                err.field_messages().join("; ")
            )
        }
    };

    let concluded = pending.settle(|conversation, ticket| conversation.conclude(ticket, message));
    if concluded != Some(true) {
        log::info!("Discarding quote response for restarted conversation {visitor}");
    }
    Ok(())
}

/// Summarises a result set as one transcript message.
pub fn describe_results(results: &ResultSet) -> String {
    let lines = results
        .all_options()
        .enumerate()
        .map(|(index, option)| describe_option(index + 1, option))
        .collect::<Vec<_>>();

    if !lines.is_empty() {
        format!("Here are your options:\n{}", lines.join("\n"))
    } else if !results.note.is_empty() {
        results.note.clone()
    } else {
        NO_OPTIONS.to_string()
    }
}

fn describe_option(position: usize, option: &QuoteOption) -> String {
    let zips = match option.zip_codes.as_deref() {
        Some(zips) if !zips.is_empty() => {
            let preview: String = zips.chars().take(ZIP_PREVIEW_CHARS).collect();
            format!("{preview}...")
        }
        _ => "?".to_string(),
    };
    let total = option
        .total_all_in
        .map(format_number)
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{position}. {} ({} passengers, zips: {zips}) : ${total} for {} hours",
        option.name,
        option.capacity,
        format_number(option.hours_billed)
    )
}
