use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
/// One free-text answer typed into the quote wizard.
pub struct AnswerForm {
    #[serde(default)]
    pub answer: String,
}
