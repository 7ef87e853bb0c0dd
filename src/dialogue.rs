//! Conversational collection of quote parameters.
//!
//! A [`DialogueCollector`] walks a fixed list of [`Step`]s, takes one
//! free-text answer per turn and coerces it into the matching [`QueryDraft`]
//! field. It never rejects an answer; validation happens when the finished
//! draft is converted into a [`crate::domain::query::StructuredQuery`].

use serde::Serialize;

use crate::forms::coerce;
use crate::forms::query::QueryDraft;

/// Opening line shown before the first prompt.
pub const GREETING: &str = "Hi! I can help you get a party bus quote.";

/// One question of the wizard, in the order they are asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    City,
    Zip,
    Passengers,
    Hours,
    EventDate,
    PromOrDance,
    SizeDirection,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::City,
        Step::Zip,
        Step::Passengers,
        Step::Hours,
        Step::EventDate,
        Step::PromOrDance,
        Step::SizeDirection,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            Step::City => "What city are you interested in?",
            Step::Zip => "What zip code? (optional, press Enter to skip)",
            Step::Passengers => "How many passengers?",
            Step::Hours => "How many hours?",
            Step::EventDate => "What date? (YYYY-MM-DD, optional)",
            Step::PromOrDance => "Is this for a prom or dance? (yes/no, optional)",
            Step::SizeDirection => {
                "Do you want a larger or smaller vehicle, or no preference? (optional)"
            }
        }
    }

    fn apply(self, raw: &str, fields: &mut QueryDraft) {
        match self {
            Step::City => fields.city = coerce::text(raw),
            Step::Zip => fields.zip = coerce::optional_text(raw),
            Step::Passengers => fields.passengers = coerce::number(raw),
            Step::Hours => fields.hours = coerce::number(raw),
            Step::EventDate => fields.event_date = coerce::optional_text(raw),
            Step::PromOrDance => fields.is_prom_or_dance = coerce::yes_no(raw),
            Step::SizeDirection => fields.size_direction = coerce::optional_text(raw),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Result of feeding one answer to the collector.
#[derive(Clone, Debug)]
pub enum DialogueReply {
    /// Next question to ask.
    Prompt(String),
    /// Every step answered; the coerced answers, exactly once.
    Complete(QueryDraft),
    /// The conversation already completed; the answer was ignored.
    Closed,
}

/// Mutable state of one conversation.
#[derive(Clone, Debug, Default)]
pub struct DialogueState {
    transcript: Vec<TranscriptEntry>,
    step_index: usize,
    fields: QueryDraft,
}

impl DialogueState {
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn fields(&self) -> &QueryDraft {
        &self.fields
    }

    pub fn is_complete(&self) -> bool {
        self.step_index == Step::ALL.len()
    }

    /// The step waiting for an answer, `None` once complete.
    pub fn current_step(&self) -> Option<Step> {
        Step::ALL.get(self.step_index).copied()
    }

    fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            text: text.into(),
        });
    }
}

/// Drives one quote conversation.
#[derive(Clone, Debug, Default)]
pub struct DialogueCollector {
    state: DialogueState,
}

impl DialogueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any previous conversation and returns the opening prompt.
    pub fn start(&mut self) -> String {
        self.state = DialogueState::default();
        let opening = format!("{GREETING} {}", Step::City.prompt());
        self.state.push(Speaker::System, opening.clone());
        opening
    }

    /// Records `raw` as the answer to the current step.
    pub fn submit_answer(&mut self, raw: &str) -> DialogueReply {
        let Some(step) = self.state.current_step() else {
            return DialogueReply::Closed;
        };

        self.state.push(Speaker::User, raw);
        step.apply(raw, &mut self.state.fields);
        self.state.step_index += 1;

        match self.state.current_step() {
            Some(next) => {
                let prompt = next.prompt().to_string();
                self.state.push(Speaker::System, prompt.clone());
                DialogueReply::Prompt(prompt)
            }
            None => DialogueReply::Complete(self.state.fields.clone()),
        }
    }

    /// Appends a system message, e.g. the outcome of the submission.
    pub fn say(&mut self, text: impl Into<String>) {
        self.state.push(Speaker::System, text);
    }

    pub fn state(&self) -> &DialogueState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(collector: &mut DialogueCollector, answers: [&str; 7]) -> DialogueReply {
        let mut last = DialogueReply::Closed;
        for answer in answers {
            last = collector.submit_answer(answer);
        }
        last
    }

    #[test]
    fn start_returns_first_prompt() {
        let mut collector = DialogueCollector::new();

        let opening = collector.start();

        assert!(opening.ends_with(Step::City.prompt()));
        assert_eq!(collector.state().step_index(), 0);
        assert_eq!(collector.state().transcript().len(), 1);
        assert_eq!(collector.state().transcript()[0].speaker, Speaker::System);
    }

    #[test]
    fn each_answer_yields_the_next_prompt() {
        let mut collector = DialogueCollector::new();
        collector.start();

        match collector.submit_answer("Austin") {
            DialogueReply::Prompt(text) => assert_eq!(text, Step::Zip.prompt()),
            other => panic!("unexpected reply: {other:?}"),
        }
        assert_eq!(collector.state().step_index(), 1);
        assert_eq!(collector.state().fields().city, "Austin");
    }

    #[test]
    fn seven_answers_complete_the_draft_in_step_order() {
        let mut collector = DialogueCollector::new();
        collector.start();

        let reply = answer_all(
            &mut collector,
            ["Austin", "78701", "20", "5", "2025-04-12", "Yes", "larger"],
        );

        let DialogueReply::Complete(draft) = reply else {
            panic!("expected completion, got {reply:?}");
        };
        assert_eq!(draft.city, "Austin");
        assert_eq!(draft.zip.as_deref(), Some("78701"));
        assert_eq!(draft.passengers, 20.0);
        assert_eq!(draft.hours, 5.0);
        assert_eq!(draft.event_date.as_deref(), Some("2025-04-12"));
        assert!(draft.is_prom_or_dance);
        assert_eq!(draft.size_direction.as_deref(), Some("larger"));
        assert_eq!(collector.state().step_index(), Step::ALL.len());
        assert!(collector.state().is_complete());
    }

    #[test]
    fn blank_optional_answers_are_absent() {
        let mut collector = DialogueCollector::new();
        collector.start();

        let reply = answer_all(&mut collector, ["Austin", "", "20", "5", "  ", "no", ""]);

        let DialogueReply::Complete(draft) = reply else {
            panic!("expected completion, got {reply:?}");
        };
        assert_eq!(draft.zip, None);
        assert_eq!(draft.event_date, None);
        assert_eq!(draft.size_direction, None);
        assert!(!draft.is_prom_or_dance);
    }

    #[test]
    fn prom_answers_are_coerced_to_booleans() {
        for (answer, expected) in [
            ("y", true),
            ("Yes", true),
            ("YES ", true),
            ("no", false),
            ("", false),
            ("maybe", false),
        ] {
            let mut collector = DialogueCollector::new();
            collector.start();
            let reply = answer_all(&mut collector, ["Austin", "", "20", "5", "", answer, ""]);
            let DialogueReply::Complete(draft) = reply else {
                panic!("expected completion, got {reply:?}");
            };
            assert_eq!(draft.is_prom_or_dance, expected, "answer {answer:?}");
        }
    }

    #[test]
    fn malformed_numbers_pass_through_as_nan() {
        let mut collector = DialogueCollector::new();
        collector.start();

        let reply = answer_all(&mut collector, ["", "", "lots", "a few", "", "", ""]);

        let DialogueReply::Complete(draft) = reply else {
            panic!("expected completion, got {reply:?}");
        };
        assert_eq!(draft.city, "");
        assert!(draft.passengers.is_nan());
        assert!(draft.hours.is_nan());
    }

    #[test]
    fn transcript_records_answers_and_prompts() {
        let mut collector = DialogueCollector::new();
        collector.start();

        answer_all(&mut collector, ["Austin", "", "20", "5", "", "no", ""]);

        let transcript = collector.state().transcript();
        // opening + 7 answers + 6 follow-up prompts
        assert_eq!(transcript.len(), 14);
        assert_eq!(transcript[1].speaker, Speaker::User);
        assert_eq!(transcript[1].text, "Austin");
        assert_eq!(transcript[2].text, Step::Zip.prompt());
        assert_eq!(transcript.last().unwrap().speaker, Speaker::User);
    }

    #[test]
    fn answers_after_completion_are_ignored() {
        let mut collector = DialogueCollector::new();
        collector.start();
        answer_all(&mut collector, ["Austin", "", "20", "5", "", "no", ""]);
        let before = collector.state().transcript().len();

        assert!(matches!(
            collector.submit_answer("again"),
            DialogueReply::Closed
        ));
        assert_eq!(collector.state().transcript().len(), before);
    }

    #[test]
    fn start_resets_a_finished_conversation() {
        let mut collector = DialogueCollector::new();
        collector.start();
        answer_all(&mut collector, ["Austin", "", "20", "5", "", "no", ""]);

        collector.start();

        assert_eq!(collector.state().step_index(), 0);
        assert_eq!(collector.state().transcript().len(), 1);
        assert_eq!(collector.state().fields().city, "");
    }
}
