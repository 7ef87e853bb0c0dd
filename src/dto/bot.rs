//! DTOs used by the conversational quote page.

use serde::Serialize;

use crate::dialogue::TranscriptEntry;
use crate::state::{QuoteConversation, SearchPhase};

/// Data required to render the wizard transcript and answer box.
#[derive(Debug, Serialize)]
pub struct BotPageData {
    pub transcript: Vec<TranscriptEntry>,
    pub phase: SearchPhase,
    /// Prompt of the step awaiting an answer, used as the input placeholder.
    pub placeholder: Option<&'static str>,
    pub accepting_answers: bool,
}

impl From<&QuoteConversation> for BotPageData {
    fn from(conversation: &QuoteConversation) -> Self {
        let state = conversation.collector().state();
        let placeholder = state.current_step().map(|step| step.prompt());
        Self {
            transcript: state.transcript().to_vec(),
            phase: conversation.phase(),
            placeholder,
            accepting_answers: conversation.phase() == SearchPhase::AwaitingAnswer
                && placeholder.is_some(),
        }
    }
}
